//! Free-text search

use crate::products::Product;

/// Maximum number of entries offered by [`suggestions`].
pub const SUGGESTION_LIMIT: usize = 6;

/// Products whose name, description, category or subcategory contains `query`.
///
/// Matching is a case-insensitive substring test, OR-ed across the four fields, and
/// results keep collection order. A blank query matches nothing.
pub fn search<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let Some(needle) = normalize(query) else {
        return Vec::new();
    };

    products
        .iter()
        .filter(|product| matches(product, &needle))
        .collect()
}

/// The first [`SUGGESTION_LIMIT`] search hits, for the search box dropdown.
pub fn suggestions<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let Some(needle) = normalize(query) else {
        return Vec::new();
    };

    products
        .iter()
        .filter(|product| matches(product, &needle))
        .take(SUGGESTION_LIMIT)
        .collect()
}

fn normalize(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn matches(product: &Product, needle: &str) -> bool {
    let details = &product.details;

    [
        &details.name,
        &details.description,
        &details.category,
        &details.subcategory,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}
