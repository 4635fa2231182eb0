//! Fixtures
//!
//! The seed catalog and category schema ship inside the binary as YAML. A fixture file
//! on disk with the same layout can replace the seed products.

use std::{fs, path::Path};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    categories::Category,
    fixtures::{categories::CategoriesFixture, products::ProductsFixture},
    products::Product,
    validation::ValidationError,
};

pub mod categories;
pub mod products;

const SEED_PRODUCTS: &str = include_str!("../../fixtures/products.yml");
const CATEGORY_SCHEMA: &str = include_str!("../../fixtures/categories.yml");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid `added` date
    #[error("Invalid date: {0}")]
    Date(#[from] jiff::Error),

    /// Two products share an identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product fails validation
    #[error("Invalid product {id}: {source}")]
    InvalidProduct {
        /// Product identifier from the fixture
        id: String,

        /// Failed check
        #[source]
        source: ValidationError,
    },
}

/// Fixture
#[derive(Debug, Clone)]
pub struct Fixture {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Fixture {
    /// Load the compiled-in seed products and category schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded YAML is malformed or a seed product is invalid.
    pub fn embedded() -> Result<Self, FixtureError> {
        Self::from_yaml(SEED_PRODUCTS)
    }

    /// Load seed products from a YAML file, keeping the compiled-in category schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or a product is invalid.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }

    /// Load seed products from YAML text, keeping the compiled-in category schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, an identifier repeats, or a
    /// product is invalid.
    pub fn from_yaml(products: &str) -> Result<Self, FixtureError> {
        Ok(Self {
            products: parse_products(products)?,
            categories: categories()?,
        })
    }

    /// Seed products in catalog order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Take ownership of the seed products.
    pub fn into_products(self) -> Vec<Product> {
        self.products
    }

    /// Category schema
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

/// Parse the compiled-in seed products.
///
/// # Errors
///
/// Returns an error if the embedded YAML is malformed or a seed product is invalid.
pub fn seed_products() -> Result<Vec<Product>, FixtureError> {
    parse_products(SEED_PRODUCTS)
}

/// Parse the compiled-in category schema.
///
/// # Errors
///
/// Returns an error if the embedded YAML is malformed.
pub fn categories() -> Result<Vec<Category>, FixtureError> {
    let fixture: CategoriesFixture = serde_norway::from_str(CATEGORY_SCHEMA)?;

    Ok(fixture.categories)
}

/// Parse a products fixture, rejecting repeated identifiers.
///
/// # Errors
///
/// Returns an error if the YAML cannot be parsed, an identifier repeats, or a product
/// is invalid.
pub fn parse_products(yaml: &str) -> Result<Vec<Product>, FixtureError> {
    let fixture: ProductsFixture = serde_norway::from_str(yaml)?;

    let mut seen = FxHashSet::default();
    let mut products = Vec::with_capacity(fixture.products.len());

    for product_fixture in fixture.products {
        if !seen.insert(product_fixture.id.clone()) {
            return Err(FixtureError::DuplicateProduct(product_fixture.id));
        }

        products.push(Product::try_from(product_fixture)?);
    }

    Ok(products)
}
