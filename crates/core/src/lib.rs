//! Buildforce
//!
//! Catalog domain for the Buildforce tools and machinery storefront: product records,
//! selling-price arithmetic, the category schema, the query/filter engine, the cart
//! accumulator and the compiled-in seed catalog.

pub mod cart;
pub mod categories;
pub mod fixtures;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod query;
pub mod validation;
