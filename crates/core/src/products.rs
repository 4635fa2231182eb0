//! Products

use std::{
    borrow::Borrow,
    fmt::{Display, Formatter, Result as FmtResult},
};

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{categories::slugify, prices::selling_price};

/// Product identifier.
///
/// Opaque and stable for the lifetime of the record. Seed products carry readable
/// slugs, products created at runtime carry generated identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Wrap an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Physical dimensions, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length
    pub length: Decimal,

    /// Width
    pub width: Decimal,

    /// Height
    pub height: Decimal,
}

/// Frequently asked question attached to a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    /// Question
    pub question: String,

    /// Answer
    pub answer: String,
}

/// Authorable product fields.
///
/// Everything about a product except its identity and timestamps. This is what an
/// editor submits when creating a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    /// Display name
    pub name: String,

    /// Category display name, e.g. "Power Tools"
    pub category: String,

    /// Subcategory display name, e.g. "Drills"
    pub subcategory: String,

    /// Long-form description
    pub description: String,

    /// Pre-discount unit price in whole shillings
    pub price: u64,

    /// Discount in percent, 0 meaning no discount
    #[serde(default)]
    pub discount_percentage: u8,

    /// Authored final price, kept as-is and never recomputed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_price: Option<u64>,

    /// Image URLs; the first one is the canonical display image
    pub images: Vec<String>,

    /// Specification lines
    #[serde(default)]
    pub specifications: Vec<String>,

    /// Feature lines
    #[serde(default)]
    pub features: Vec<String>,

    /// Units on hand
    #[serde(default)]
    pub stock: u32,

    /// Availability flag, authoritative on its own
    #[serde(default)]
    pub in_stock: bool,

    /// Shown in the featured section
    #[serde(default)]
    pub is_featured: bool,

    /// Shown in the deals section
    #[serde(default)]
    pub is_deal: bool,

    /// Stock keeping unit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    /// Brand name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Decimal>,

    /// Physical dimensions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,

    /// Typical applications
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub applications: Vec<String>,

    /// Maintenance advice
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintenance_tips: Vec<String>,

    /// Usage steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub usage_guide: Vec<String>,

    /// Questions and answers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub faqs: Vec<Faq>,

    /// Marketing hashtags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hashtags: Vec<String>,
}

impl ProductDetails {
    /// Selling price after discount.
    pub fn selling_price(&self) -> u64 {
        selling_price(self.price, self.discount_percentage)
    }

    /// Whether a discount applies.
    pub fn has_discount(&self) -> bool {
        self.discount_percentage > 0
    }

    /// Canonical display image.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Slug of the category name.
    pub fn category_slug(&self) -> String {
        slugify(&self.category)
    }

    /// Slug of the subcategory name.
    pub fn subcategory_slug(&self) -> String {
        slugify(&self.subcategory)
    }
}

/// Product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Authorable fields
    #[serde(flatten)]
    pub details: ProductDetails,

    /// Creation time
    pub created_at: Timestamp,

    /// Last successful mutation time
    pub updated_at: Timestamp,
}

impl Product {
    /// Build a record from submitted details, stamping both timestamps with `now`.
    pub fn new(id: ProductId, details: ProductDetails, now: Timestamp) -> Self {
        Self {
            id,
            details,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.details.name
    }

    /// Category display name
    pub fn category(&self) -> &str {
        &self.details.category
    }

    /// Subcategory display name
    pub fn subcategory(&self) -> &str {
        &self.details.subcategory
    }

    /// Pre-discount unit price
    pub fn price(&self) -> u64 {
        self.details.price
    }

    /// Discount in percent
    pub fn discount_percentage(&self) -> u8 {
        self.details.discount_percentage
    }

    /// Selling price after discount.
    pub fn selling_price(&self) -> u64 {
        self.details.selling_price()
    }
}
