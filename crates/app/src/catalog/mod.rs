//! Catalog

pub mod errors;
pub mod service;
pub mod snapshot;

pub use errors::CatalogServiceError;
pub use service::*;
