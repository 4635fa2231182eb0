//! Validation
//!
//! Checks applied at the store's mutation boundary, plus parsers for the free-text
//! numeric fields an editor submits. Non-numeric input is rejected, never coerced to 0.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use thiserror::Error;

use crate::products::ProductDetails;

/// Validation failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The product has no images.
    #[error("at least one image is required")]
    NoImages,

    /// An image entry is empty.
    #[error("image {0} is empty")]
    BlankImage(usize),

    /// Discount is outside 0..=100.
    #[error("discount {0}% is outside 0-100")]
    DiscountOutOfRange(u8),

    /// Price text could not be parsed as a non-negative amount.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Discount text could not be parsed as a percentage.
    #[error("invalid discount: {0}")]
    InvalidDiscount(String),

    /// Quantity text could not be parsed as a whole number.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

/// Validate submitted product fields.
///
/// # Errors
///
/// Returns the first failing check: blank name, category, subcategory or description,
/// an empty or blank image list, or a discount above 100.
pub fn validate(details: &ProductDetails) -> Result<(), ValidationError> {
    let required = [
        ("name", &details.name),
        ("category", &details.category),
        ("subcategory", &details.subcategory),
        ("description", &details.description),
    ];

    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ValidationError::MissingField(*field));
    }

    if details.images.is_empty() {
        return Err(ValidationError::NoImages);
    }

    if let Some(index) = details.images.iter().position(|url| url.trim().is_empty()) {
        return Err(ValidationError::BlankImage(index));
    }

    if details.discount_percentage > 100 {
        return Err(ValidationError::DiscountOutOfRange(
            details.discount_percentage,
        ));
    }

    Ok(())
}

/// Parse a price entered as text (e.g. "4500" or "4500.50").
///
/// Decimals are rounded half away from zero to whole shillings.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPrice`] for empty, non-numeric or negative input.
pub fn parse_price(s: &str) -> Result<u64, ValidationError> {
    let trimmed = s.trim();

    let amount = trimmed
        .parse::<Decimal>()
        .map_err(|_err| ValidationError::InvalidPrice(s.to_string()))?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::InvalidPrice(s.to_string()));
    }

    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .ok_or_else(|| ValidationError::InvalidPrice(s.to_string()))
}

/// Parse a discount entered as text, either "15" or "15%".
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDiscount`] for non-numeric input and
/// [`ValidationError::DiscountOutOfRange`] above 100.
pub fn parse_discount(s: &str) -> Result<u8, ValidationError> {
    let trimmed = s.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let value = number
        .parse::<u8>()
        .map_err(|_err| ValidationError::InvalidDiscount(s.to_string()))?;

    if value > 100 {
        return Err(ValidationError::DiscountOutOfRange(value));
    }

    Ok(value)
}

/// Parse a whole quantity (stock, cart quantity) entered as text.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidQuantity`] for non-numeric or negative input.
pub fn parse_quantity(s: &str) -> Result<u32, ValidationError> {
    s.trim()
        .parse::<u32>()
        .map_err(|_err| ValidationError::InvalidQuantity(s.to_string()))
}

/// Split multi-line editor input into one entry per non-blank line.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
