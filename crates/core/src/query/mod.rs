//! Query/Filter Engine
//!
//! Pure functions deriving display-ready subsets from the full product collection.
//! Nothing here mutates the collection; results borrow from it.

use thiserror::Error;

use crate::products::Product;

pub mod filter;
pub mod search;
pub mod sections;
pub mod sort;

pub use filter::{PriceRange, ProductFilter};
pub use search::{search, suggestions};
pub use sections::{deals, featured, in_category, related};
pub use sort::SortOrder;

/// Query construction errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Price range lower bound exceeds the upper bound.
    #[error("price range minimum {min} exceeds maximum {max}")]
    InvertedPriceRange {
        /// Lower bound
        min: u64,
        /// Upper bound
        max: u64,
    },

    /// Unrecognised sort key.
    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),
}

/// Full search/filter/sort pipeline.
///
/// With search text set, candidates are the search hits (so blank text yields nothing);
/// otherwise every product is a candidate. Candidates are then filtered and sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    text: Option<String>,
    filter: ProductFilter,
    sort: SortOrder,
}

impl CatalogQuery {
    /// Query matching the whole collection in collection order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Search text
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Filter criteria
    #[must_use]
    pub fn filter(mut self, filter: ProductFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Sort order
    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Run the query.
    pub fn run<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let candidates = match &self.text {
            Some(text) => search(products, text),
            None => products.iter().collect(),
        };

        let mut results = self.filter.apply(candidates);

        self.sort.sort(&mut results);

        results
    }
}
