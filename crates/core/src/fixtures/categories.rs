//! Category Fixtures

use serde::Deserialize;

use crate::categories::Category;

/// Wrapper for the category schema in YAML
#[derive(Debug, Deserialize)]
pub struct CategoriesFixture {
    /// Categories in navigation order
    pub categories: Vec<Category>,
}
