//! Integration tests for the storefront pipeline over the seed catalog.

use testresult::TestResult;

use buildforce::{
    cart::Cart,
    fixtures::{Fixture, seed_products},
    products::{Product, ProductId},
    query::{
        CatalogQuery, PriceRange, ProductFilter, SortOrder, deals, featured, related,
        suggestions,
    },
};

fn ids<'a>(products: &[&'a Product]) -> Vec<&'a str> {
    products.iter().map(|product| product.id.as_str()).collect()
}

#[test]
fn price_filter_within_power_tools() -> TestResult {
    let products = seed_products()?;

    let query = CatalogQuery::new()
        .filter(
            ProductFilter::new()
                .category("power-tools")
                .price_range(PriceRange::new(0, 6_000)?),
        )
        .sort(SortOrder::PriceAscending);

    let results = query.run(&products);

    assert_eq!(
        ids(&results),
        [
            "maxmech-planer-500w",
            "maxmech-bench-grinder-450w-6inch",
            "maxmech-circular-saw-185mm-1400w",
            "maxmech-rotary-hammer-rh800-26",
            "maxmech-bench-grinder-650w-8inch",
        ]
    );
    assert!(results.iter().all(|product| product.price() <= 6_000));

    Ok(())
}

#[test]
fn power_tools_excludes_commercial_equipment() -> TestResult {
    let products = seed_products()?;

    let results = ProductFilter::new()
        .category("power-tools")
        .apply(&products);

    assert_eq!(results.len(), 9);
    assert!(
        results
            .iter()
            .all(|product| product.category() == "Power Tools")
    );

    Ok(())
}

#[test]
fn search_matches_subcategory() -> TestResult {
    let products = seed_products()?;

    let results = CatalogQuery::new().text("DRILL").run(&products);

    assert_eq!(
        ids(&results),
        [
            "maxmech-rotary-hammer-rh800-26",
            "maxmech-rotary-hammer-28mm-1000w",
            "maxmech-rotary-hammer-rh800-26d",
            "maxmech-demolition-breaker-db1450-30",
        ]
    );
    assert_eq!(suggestions(&products, "maxmech").len(), 6);

    Ok(())
}

#[test]
fn sections_split_seed_catalog() -> TestResult {
    let products = seed_products()?;

    assert_eq!(featured(&products).len(), 6);
    assert_eq!(deals(&products).len(), 4);

    let saw = products
        .iter()
        .find(|product| product.id.as_str() == "maxmech-circular-saw-185mm-1400w")
        .ok_or("saw missing")?;

    let related = related(&products, saw);

    assert_eq!(related.len(), 4);
    assert!(related.iter().all(|other| other.id != saw.id));

    Ok(())
}

#[test]
fn most_expensive_first() -> TestResult {
    let products = seed_products()?;

    let results = CatalogQuery::new()
        .sort(SortOrder::PriceDescending)
        .run(&products);

    assert_eq!(
        results.first().map(|product| product.id.as_str()),
        Some("premier-snow-ice-machine-zx-xbj60")
    );

    Ok(())
}

#[test]
fn cart_totals_seed_prices() -> TestResult {
    let fixture = Fixture::embedded()?;
    let mut cart = Cart::new();

    cart.add(ProductId::new("maxmech-planer-500w"), 2)?;
    cart.add(ProductId::new("maxmech-circular-saw-185mm-1400w"), 1)?;

    let priced = cart.price(fixture.products())?;

    assert_eq!(priced.total(), 14_250);
    assert_eq!(cart.item_count(), 3);
    assert!(priced.missing().is_empty());

    Ok(())
}
