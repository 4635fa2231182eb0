//! Product Fixtures

use jiff::{civil::Date, tz::TimeZone};
use serde::Deserialize;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductDetails, ProductId},
    validation::validate,
};

/// Wrapper for products in YAML
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products in catalog order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Readable product slug
    pub id: String,

    /// Authorable fields, in the same camelCase layout the store persists
    #[serde(flatten)]
    pub details: ProductDetails,

    /// Date the product was added to the catalog (e.g., "2024-01-15")
    pub added: Date,
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        validate(&fixture.details).map_err(|source| FixtureError::InvalidProduct {
            id: fixture.id.clone(),
            source,
        })?;

        let added = fixture.added.to_zoned(TimeZone::UTC)?.timestamp();

        Ok(Product::new(
            ProductId::new(fixture.id),
            fixture.details,
            added,
        ))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;
    use crate::validation::ValidationError;

    const PLANER: &str = r#"
id: planer
name: Electric Planer
category: Power Tools
subcategory: Planers
price: 4500
discountPercentage: 10
images: [/assets/planer.png]
description: Planes wood.
weight: "3.2"
inStock: true
added: "2024-01-15"
"#;

    #[test]
    fn converts_fixture_to_product() -> TestResult {
        let fixture: ProductFixture = serde_norway::from_str(PLANER)?;
        let product = Product::try_from(fixture)?;

        assert_eq!(product.id.as_str(), "planer");
        assert_eq!(product.selling_price(), 4_050);
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.created_at.to_string(), "2024-01-15T00:00:00Z");
        assert_eq!(product.details.weight, Some(Decimal::new(32, 1)));

        Ok(())
    }

    #[test]
    fn invalid_fixture_names_the_product() -> TestResult {
        let fixture: ProductFixture =
            serde_norway::from_str(&PLANER.replace("images: [/assets/planer.png]", "images: []"))?;

        let result = Product::try_from(fixture);

        assert!(
            matches!(
                result,
                Err(FixtureError::InvalidProduct { ref id, source: ValidationError::NoImages })
                    if id == "planer"
            ),
            "expected invalid product error, got {result:?}"
        );

        Ok(())
    }
}
