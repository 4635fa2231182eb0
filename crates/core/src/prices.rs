//! Prices
//!
//! Catalog prices are whole Kenyan shillings. Selling prices are derived from the
//! pre-discount price and the discount percentage at read time and never stored.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use thiserror::Error;

/// Currency every catalog price is quoted in.
pub fn currency() -> &'static Currency {
    iso::KES
}

/// Errors converting catalog amounts into money values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// The amount does not fit in the minor-unit representation.
    #[error("amount {0} is too large to represent in minor units")]
    Overflow(u64),
}

/// Calculates the selling price for a pre-discount `price`.
///
/// The result is `round(price × (1 − discount / 100))`, rounding half away from zero.
/// A zero discount returns `price` untouched; discounts above 100 are treated as 100.
pub fn selling_price(price: u64, discount_percentage: u8) -> u64 {
    if discount_percentage == 0 {
        return price;
    }

    let remaining = Decimal::from(100 - discount_percentage.min(100));

    let applied = Decimal::from(price) * remaining / Decimal::ONE_HUNDRED;

    // Never exceeds `price`, so the conversion back always succeeds.
    applied
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(price)
}

/// Converts a whole-shilling amount into a money value.
///
/// # Errors
///
/// Returns [`PriceError::Overflow`] when the amount cannot be expressed in minor units.
pub fn to_money(amount: u64) -> Result<Money<'static, Currency>, PriceError> {
    let minor = i64::try_from(amount)
        .ok()
        .and_then(|major| major.checked_mul(100))
        .ok_or(PriceError::Overflow(amount))?;

    Ok(Money::from_minor(minor, currency()))
}
