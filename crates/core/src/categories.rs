//! Categories

use serde::Deserialize;

use crate::products::ProductDetails;

/// Convert a display name into a slug.
///
/// Lowercases the text and joins whitespace-separated words with single hyphens,
/// so `"Power Tools"` becomes `"power-tools"`.
pub fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Top-level catalog category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Slug identifier, e.g. `power-tools`
    pub id: String,

    /// Display name, e.g. "Power Tools"
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,

    /// Subcategories in display order
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Subcategory display names in order.
    pub fn subcategory_names(&self) -> impl Iterator<Item = &str> {
        self.subcategories.iter().map(|sub| sub.name.as_str())
    }
}

/// Subcategory within a category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subcategory {
    /// Slug identifier, e.g. `drills`
    pub id: String,

    /// Display name, e.g. "Drills"
    pub name: String,

    /// Short description
    #[serde(default)]
    pub description: Option<String>,
}

/// Find a category by slug, ignoring case.
pub fn find_category<'a>(categories: &'a [Category], slug: &str) -> Option<&'a Category> {
    let slug = slugify(slug);

    categories.iter().find(|category| category.id == slug)
}

/// Find a subcategory of `category` by slug, ignoring case.
pub fn find_subcategory<'a>(category: &'a Category, slug: &str) -> Option<&'a Subcategory> {
    let slug = slugify(slug);

    category.subcategories.iter().find(|sub| sub.id == slug)
}

/// Schema entry for a product's subcategory, matched by category and subcategory slug.
pub fn subcategory_of<'a>(
    categories: &'a [Category],
    details: &ProductDetails,
) -> Option<&'a Subcategory> {
    find_category(categories, &details.category_slug())
        .and_then(|category| find_subcategory(category, &details.subcategory_slug()))
}

/// Every subcategory across all categories, in schema order.
pub fn all_subcategories(categories: &[Category]) -> impl Iterator<Item = &Subcategory> {
    categories
        .iter()
        .flat_map(|category| category.subcategories.iter())
}
