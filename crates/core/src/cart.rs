//! Cart
//!
//! A cart only remembers which products were added and how many. Prices are resolved
//! against the current product list every time the cart is priced, so later edits to a
//! product's price or discount show up in carts that already contain it.

use std::num::NonZeroU32;

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    prices::{PriceError, to_money},
    products::{Product, ProductId},
};

/// Errors related to cart changes or totals.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Adding zero units is not a change.
    #[error("cannot add zero units of {0}")]
    ZeroQuantity(ProductId),

    /// A line or cart total overflowed.
    #[error("cart total overflowed")]
    Overflow,

    /// Wrapped money conversion error.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// Cart line: a product reference and a quantity, with no frozen price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    product_id: ProductId,
    quantity: NonZeroU32,
}

impl CartLine {
    /// Referenced product
    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// Units
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` units of a product, accumulating onto an existing line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] when `quantity` is zero and
    /// [`CartError::Overflow`] if the accumulated quantity would overflow.
    pub fn add(&mut self, product_id: ProductId, quantity: u32) -> Result<(), CartError> {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            return Err(CartError::ZeroQuantity(product_id));
        };

        match self.line_mut(&product_id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity.get())
                    .ok_or(CartError::Overflow)?;
            }
            None => self.lines.push(CartLine {
                product_id,
                quantity,
            }),
        }

        Ok(())
    }

    /// Set the quantity of an existing line; zero removes it.
    ///
    /// Returns `false` when the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        let Some(quantity) = NonZeroU32::new(quantity) else {
            return self.remove(product_id);
        };

        match self.line_mut(product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove a line. Returns `false` when the product is not in the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.product_id != *product_id);

        self.lines.len() != before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Price the cart against the current products.
    ///
    /// Lines whose product no longer exists are left out of the totals and reported in
    /// [`PricedCart::missing`].
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Overflow`] if a line or the grand total overflows.
    pub fn price<'a>(&self, products: &'a [Product]) -> Result<PricedCart<'a>, CartError> {
        let index: FxHashMap<&str, &'a Product> = products
            .iter()
            .map(|product| (product.id.as_str(), product))
            .collect();

        let mut priced = PricedCart::default();

        for line in &self.lines {
            let Some(product) = index.get(line.product_id.as_str()).copied() else {
                priced.missing.push(line.product_id.clone());
                continue;
            };

            let unit_price = product.selling_price();

            let line_total = unit_price
                .checked_mul(u64::from(line.quantity.get()))
                .ok_or(CartError::Overflow)?;

            priced.total = priced
                .total
                .checked_add(line_total)
                .ok_or(CartError::Overflow)?;

            priced.lines.push(PricedLine {
                product,
                quantity: line.quantity.get(),
                unit_price,
                line_total,
            });
        }

        Ok(priced)
    }

    fn line_mut(&mut self, product_id: &ProductId) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == *product_id)
    }
}

/// Cart line joined with the live product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricedLine<'a> {
    /// Current product record
    pub product: &'a Product,

    /// Units
    pub quantity: u32,

    /// Current selling price per unit
    pub unit_price: u64,

    /// `unit_price × quantity`
    pub line_total: u64,
}

/// Cart priced at read time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PricedCart<'a> {
    lines: Vec<PricedLine<'a>>,
    missing: Vec<ProductId>,
    total: u64,
}

impl<'a> PricedCart<'a> {
    /// Priced lines, in cart order.
    pub fn lines(&self) -> &[PricedLine<'a>] {
        &self.lines
    }

    /// Products in the cart that no longer exist.
    pub fn missing(&self) -> &[ProductId] {
        &self.missing
    }

    /// Grand total in whole shillings.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Grand total as money.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Price`] when the total cannot be represented.
    pub fn total_money(&self) -> Result<Money<'static, Currency>, CartError> {
        to_money(self.total).map_err(CartError::from)
    }
}
