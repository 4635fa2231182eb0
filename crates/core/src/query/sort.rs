//! Sort orders

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use crate::{products::Product, query::QueryError};

/// Result ordering.
///
/// Every order is stable: ties keep their prior relative order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Collection order, untouched.
    #[default]
    Relevance,

    /// Name ascending, ignoring case.
    Name,

    /// Pre-discount price, lowest first.
    PriceAscending,

    /// Pre-discount price, highest first.
    PriceDescending,

    /// Discount percentage, highest first. Compares the percentage, not the discounted price.
    DiscountDescending,
}

impl SortOrder {
    /// Every order, in menu order.
    pub const ALL: [SortOrder; 5] = [
        SortOrder::Relevance,
        SortOrder::Name,
        SortOrder::PriceAscending,
        SortOrder::PriceDescending,
        SortOrder::DiscountDescending,
    ];

    /// Short key used on the command line and in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::Name => "name",
            SortOrder::PriceAscending => "price-low",
            SortOrder::PriceDescending => "price-high",
            SortOrder::DiscountDescending => "discount",
        }
    }

    /// Sort `products` in place.
    pub fn sort(self, products: &mut [&Product]) {
        match self {
            SortOrder::Relevance => {}
            SortOrder::Name => products.sort_by(|a, b| {
                a.name()
                    .to_lowercase()
                    .cmp(&b.name().to_lowercase())
                    .then_with(|| a.name().cmp(b.name()))
            }),
            SortOrder::PriceAscending => products.sort_by_key(|product| product.price()),
            SortOrder::PriceDescending => {
                products.sort_by(|a, b| b.price().cmp(&a.price()));
            }
            SortOrder::DiscountDescending => {
                products.sort_by(|a, b| b.discount_percentage().cmp(&a.discount_percentage()));
            }
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|order| order.as_str() == s.trim())
            .ok_or_else(|| QueryError::UnknownSortOrder(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::products::test_support::product;

    fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
        products.iter().map(|product| product.id.as_str()).collect()
    }

    fn with_discount(id: &str, price: u64, discount: u8) -> Product {
        let mut product = product(id, id, "Power Tools", price);
        product.details.discount_percentage = discount;
        product
    }

    #[test]
    fn relevance_keeps_order() {
        let products = [
            product("b", "Bravo", "Power Tools", 2),
            product("a", "Alpha", "Power Tools", 1),
        ];
        let mut refs: Vec<&Product> = products.iter().collect();

        SortOrder::Relevance.sort(&mut refs);

        assert_eq!(ids(&refs), ["b", "a"]);
    }

    #[test]
    fn name_sorts_ascending() {
        let products = [
            product("b", "Bravo", "Power Tools", 2),
            product("a", "Alpha", "Power Tools", 1),
        ];
        let mut refs: Vec<&Product> = products.iter().collect();

        SortOrder::Name.sort(&mut refs);

        assert_eq!(ids(&refs), ["a", "b"]);
    }

    #[test]
    fn name_sort_ignores_case() {
        let products = [
            product("b", "Bench Grinder", "Power Tools", 1),
            product("a", "angle grinder", "Power Tools", 1),
            product("c", "circular saw", "Power Tools", 1),
        ];
        let mut refs: Vec<&Product> = products.iter().collect();

        SortOrder::Name.sort(&mut refs);

        assert_eq!(ids(&refs), ["a", "b", "c"]);
    }

    #[test]
    fn price_sorts_both_directions_stably() {
        let products = [
            product("x", "X", "Power Tools", 5_650),
            product("y", "Y", "Power Tools", 4_500),
            product("z", "Z", "Power Tools", 5_650),
        ];
        let mut refs: Vec<&Product> = products.iter().collect();

        SortOrder::PriceAscending.sort(&mut refs);
        assert_eq!(ids(&refs), ["y", "x", "z"]);

        let mut refs: Vec<&Product> = products.iter().collect();

        SortOrder::PriceDescending.sort(&mut refs);
        assert_eq!(ids(&refs), ["x", "z", "y"]);
    }

    #[test]
    fn discount_sort_puts_discounted_first_and_keeps_ties() {
        let products = [
            with_discount("first", 100, 0),
            with_discount("second", 100, 0),
            with_discount("third", 100, 10),
        ];
        let mut refs: Vec<&Product> = products.iter().collect();

        SortOrder::DiscountDescending.sort(&mut refs);

        assert_eq!(ids(&refs), ["third", "first", "second"]);
    }

    #[test]
    fn discount_sort_ignores_discounted_price() {
        let products = [
            with_discount("cheap-big-discount", 1_000, 50),
            with_discount("pricey-small-discount", 100_000, 5),
        ];
        let mut refs: Vec<&Product> = products.iter().collect();

        SortOrder::DiscountDescending.sort(&mut refs);

        assert_eq!(ids(&refs), ["cheap-big-discount", "pricey-small-discount"]);
    }

    #[test]
    fn parses_keys() -> TestResult {
        assert_eq!("price-low".parse::<SortOrder>()?, SortOrder::PriceAscending);
        assert_eq!("discount".parse::<SortOrder>()?, SortOrder::DiscountDescending);
        assert!("cheapest".parse::<SortOrder>().is_err());

        Ok(())
    }
}
