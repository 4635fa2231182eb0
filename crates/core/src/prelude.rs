//! Buildforce prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine, PricedCart, PricedLine},
    categories::{Category, Subcategory, slugify},
    fixtures::{Fixture, FixtureError},
    prices::{selling_price, to_money},
    products::{Dimensions, Faq, Product, ProductDetails, ProductId},
    query::{CatalogQuery, PriceRange, ProductFilter, QueryError, SortOrder},
    validation::{ValidationError, validate},
};
