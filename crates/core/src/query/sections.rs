//! Storefront sections

use crate::products::Product;

/// Maximum number of related products shown beside a product.
pub const RELATED_LIMIT: usize = 4;

/// Products tagged as featured.
pub fn featured(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.details.is_featured)
        .collect()
}

/// Products tagged as deals.
pub fn deals(products: &[Product]) -> Vec<&Product> {
    products
        .iter()
        .filter(|product| product.details.is_deal)
        .collect()
}

/// Products whose category display name equals `category` exactly.
pub fn in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| product.category() == category)
        .collect()
}

/// Up to [`RELATED_LIMIT`] other products from the same category.
pub fn related<'a>(products: &'a [Product], product: &Product) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|other| other.category() == product.category() && other.id != product.id)
        .take(RELATED_LIMIT)
        .collect()
}
