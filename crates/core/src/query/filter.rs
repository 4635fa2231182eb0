//! Attribute filters

use smallvec::SmallVec;

use crate::{categories::slugify, products::Product, query::QueryError};

/// Inclusive bounds on the pre-discount unit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    /// Create a new range covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvertedPriceRange`] when `min` exceeds `max`.
    pub fn new(min: u64, max: u64) -> Result<Self, QueryError> {
        if min > max {
            return Err(QueryError::InvertedPriceRange { min, max });
        }

        Ok(Self { min, max })
    }

    /// Range with only a lower bound.
    pub fn at_least(min: u64) -> Self {
        Self { min, max: u64::MAX }
    }

    /// Range with only an upper bound.
    pub fn at_most(max: u64) -> Self {
        Self { min: 0, max }
    }

    /// Whether `price` lies within the range.
    pub fn contains(&self, price: u64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

/// Filter criteria, AND-ed together.
///
/// Criteria that are not set pass every product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilter {
    category: Option<String>,
    subcategories: SmallVec<[String; 4]>,
    price_range: Option<PriceRange>,
    in_stock_only: bool,
    deals_only: bool,
}

impl ProductFilter {
    /// Filter that passes everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category, given as a slug (`power-tools`) or display name.
    ///
    /// Matching compares slugs exactly, never as a substring.
    #[must_use]
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(slugify(category));
        self
    }

    /// Add a subcategory display name to the accepted set.
    #[must_use]
    pub fn subcategory(mut self, subcategory: impl Into<String>) -> Self {
        let subcategory = subcategory.into();

        if !self.subcategories.contains(&subcategory) {
            self.subcategories.push(subcategory);
        }

        self
    }

    /// Restrict the pre-discount price.
    #[must_use]
    pub fn price_range(mut self, range: PriceRange) -> Self {
        self.price_range = Some(range);
        self
    }

    /// Only products flagged as in stock.
    #[must_use]
    pub fn in_stock_only(mut self, enabled: bool) -> Self {
        self.in_stock_only = enabled;
        self
    }

    /// Only products flagged as deals.
    #[must_use]
    pub fn deals_only(mut self, enabled: bool) -> Self {
        self.deals_only = enabled;
        self
    }

    /// Whether any criterion is set.
    pub fn is_active(&self) -> bool {
        self.category.is_some()
            || !self.subcategories.is_empty()
            || self.price_range.is_some()
            || self.in_stock_only
            || self.deals_only
    }

    /// Whether `product` satisfies every active criterion.
    pub fn matches(&self, product: &Product) -> bool {
        let details = &product.details;

        let category = self
            .category
            .as_ref()
            .is_none_or(|slug| details.category_slug() == *slug);

        let subcategory =
            self.subcategories.is_empty() || self.subcategories.contains(&details.subcategory);

        let price = self
            .price_range
            .is_none_or(|range| range.contains(details.price));

        let stock = !self.in_stock_only || details.in_stock;
        let deal = !self.deals_only || details.is_deal;

        category && subcategory && price && stock && deal
    }

    /// Apply the filter, keeping input order.
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|product| self.matches(product))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::products::test_support::product;

    fn catalog() -> Vec<Product> {
        let mut breaker = product("breaker", "Demolition Breaker", "Power Tools", 11_500);
        breaker.details.subcategory = "Drills".to_string();

        let mut saw = product("saw", "Circular Saw", "Power Tools", 5_250);
        saw.details.subcategory = "Saws".to_string();
        saw.details.is_deal = true;

        let mut ice = product("ice", "Snow Ice Machine", "Commercial Equipment", 92_000);
        ice.details.subcategory = "Ice Machines".to_string();
        ice.details.in_stock = false;

        vec![breaker, saw, ice]
    }

    fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|product| product.id.as_str()).collect()
    }

    #[test]
    fn empty_filter_passes_everything() {
        let products = catalog();
        let filter = ProductFilter::new();

        assert!(!filter.is_active());
        assert_eq!(filter.apply(&products).len(), 3);
    }

    #[test]
    fn category_matches_exact_slug() {
        let products = catalog();

        let power = ProductFilter::new().category("power-tools").apply(&products);
        let partial = ProductFilter::new().category("power").apply(&products);

        assert_eq!(ids(&power), ["breaker", "saw"]);
        assert!(partial.is_empty());
    }

    #[test]
    fn category_accepts_display_names() {
        let products = catalog();

        let filtered = ProductFilter::new()
            .category("Commercial Equipment")
            .apply(&products);

        assert_eq!(ids(&filtered), ["ice"]);
    }

    #[test]
    fn subcategory_set_restricts_within_category() {
        let products = catalog();

        let filtered = ProductFilter::new()
            .category("power-tools")
            .subcategory("Saws")
            .subcategory("Saws")
            .apply(&products);

        assert_eq!(ids(&filtered), ["saw"]);
    }

    #[test]
    fn price_range_is_inclusive() -> TestResult {
        let products = catalog();

        let cheap = ProductFilter::new()
            .price_range(PriceRange::new(0, 6_000)?)
            .apply(&products);

        let exact = ProductFilter::new()
            .price_range(PriceRange::new(5_250, 11_500)?)
            .apply(&products);

        assert_eq!(ids(&cheap), ["saw"]);
        assert_eq!(ids(&exact), ["breaker", "saw"]);

        Ok(())
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        assert_eq!(
            PriceRange::new(10, 5),
            Err(QueryError::InvertedPriceRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn stock_and_deal_flags_compose() {
        let products = catalog();

        let in_stock = ProductFilter::new().in_stock_only(true).apply(&products);
        let deals = ProductFilter::new()
            .in_stock_only(true)
            .deals_only(true)
            .apply(&products);

        assert_eq!(ids(&in_stock), ["breaker", "saw"]);
        assert_eq!(ids(&deals), ["saw"]);
    }
}
