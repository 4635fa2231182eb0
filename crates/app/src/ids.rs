//! Generated identifiers

use buildforce::products::ProductId;
use uuid::Uuid;

const PRODUCT_PREFIX: &str = "prod_";

/// Fresh product identifier: `prod_` followed by a v7 UUID.
///
/// v7 UUIDs lead with a millisecond timestamp and carry random bits after it, so ids
/// sort by creation time and do not collide within a process.
pub(crate) fn product_id() -> ProductId {
    ProductId::new(format!("{PRODUCT_PREFIX}{}", Uuid::now_v7().simple()))
}
