use std::{
    error::Error,
    io::{self, Write},
};

use buildforce_app::{config::AppConfig, context::AppContext};
use clap::{Parser, Subcommand};

mod browse;
mod cart;
mod edit;
mod render;

pub(crate) use browse::ProductArgs;

#[derive(Debug, Parser)]
#[command(name = "buildforce", about = "Buildforce catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List products, optionally filtered and sorted
    List(browse::FilterArgs),

    /// Search product names, descriptions and categories
    Search(browse::SearchArgs),

    /// Show one product in full
    Show(ProductArgs),

    /// Other products from the same category
    Related(ProductArgs),

    /// Featured products
    Featured,

    /// Products on deal
    Deals,

    /// Category schema with product counts
    Categories,

    /// Edit a product's price, discount, stock, name or flags
    Update(edit::UpdateArgs),

    /// Create products from a YAML file
    Import(edit::ImportArgs),

    /// Delete a product
    Delete(ProductArgs),

    /// Discard every edit and restore the seed catalog
    Reset,

    /// Price `id=quantity` lines against the current catalog
    Cart(cart::CartArgs),
}

impl Cli {
    /// Parse flags and environment, loading `.env` first if present.
    pub(crate) fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    pub(crate) async fn run(self, ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
        match self.command {
            Commands::List(args) => browse::list(ctx, args, out).await,
            Commands::Search(args) => browse::search(ctx, args, out).await,
            Commands::Show(args) => browse::show(ctx, args, out).await,
            Commands::Related(args) => browse::related_to(ctx, args, out).await,
            Commands::Featured => browse::featured_products(ctx, out).await,
            Commands::Deals => browse::deal_products(ctx, out).await,
            Commands::Categories => browse::categories(ctx, out).await,
            Commands::Update(args) => edit::update(ctx, args, out).await,
            Commands::Import(args) => edit::import(ctx, args, out).await,
            Commands::Delete(args) => edit::delete(ctx, args, out).await,
            Commands::Reset => edit::reset(ctx, out).await,
            Commands::Cart(args) => cart::price(ctx, args, out).await,
        }
    }
}

/// `context: error: source: ...` for the whole error chain.
pub(crate) fn report(context: &str, error: &dyn Error) -> String {
    let mut message = format!("{context}: {error}");
    let mut source = error.source();

    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}

pub(crate) fn write_failed(error: io::Error) -> String {
    report("failed to write output", &error)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use buildforce::{
        fixtures::{categories, seed_products},
        products::ProductId,
    };
    use buildforce_app::{
        catalog::{CatalogSettings, KvCatalogService, MockCatalogService},
        storage::MemoryStore,
    };
    use testresult::TestResult;

    use super::*;

    fn context() -> TestResult<AppContext> {
        let catalog = KvCatalogService::new(
            Arc::new(MemoryStore::new()),
            seed_products()?,
            CatalogSettings::default(),
        );

        Ok(AppContext::new(Arc::new(catalog), categories()?.into()))
    }

    async fn run(ctx: &AppContext, args: &[&str]) -> TestResult<Result<String, String>> {
        let cli = Cli::try_parse_from(std::iter::once("buildforce").chain(args.iter().copied()))?;
        let mut out = Vec::new();

        let result = cli.run(ctx, &mut out).await;

        Ok(result.map(|()| String::from_utf8_lossy(&out).into_owned()))
    }

    #[tokio::test]
    async fn list_filters_by_category_and_price() -> TestResult {
        let ctx = context()?;

        let out = run(
            &ctx,
            &["list", "--category", "power-tools", "--max-price", "6000"],
        )
        .await??;

        assert!(out.contains("maxmech-circular-saw-185mm-1400w"));
        assert!(out.contains("maxmech-planer-500w"));
        assert!(!out.contains("maxmech-demolition-breaker-db1450-30"));
        assert!(!out.contains("premier-snow-ice-machine-zx-xbj60"));

        Ok(())
    }

    #[tokio::test]
    async fn list_rejects_inverted_price_range() -> TestResult {
        let ctx = context()?;

        let result = run(&ctx, &["list", "--min-price", "9000", "--max-price", "10"]).await?;

        assert!(result.is_err(), "expected error, got {result:?}");

        Ok(())
    }

    #[tokio::test]
    async fn blank_search_finds_nothing() -> TestResult {
        let ctx = context()?;

        let out = run(&ctx, &["search", "  "]).await??;

        assert_eq!(out.trim(), "no products found");

        Ok(())
    }

    #[tokio::test]
    async fn search_suggestions_are_capped() -> TestResult {
        let ctx = context()?;

        let full = run(&ctx, &["search", "maxmech"]).await??;
        let suggested = run(&ctx, &["search", "maxmech", "--suggest"]).await??;

        let rows = |out: &str| out.lines().filter(|line| line.contains("maxmech-")).count();

        assert_eq!(rows(&full), 9);
        assert_eq!(rows(&suggested), 6);

        Ok(())
    }

    #[tokio::test]
    async fn update_parses_text_fields() -> TestResult {
        let ctx = context()?;

        run(
            &ctx,
            &[
                "update",
                "maxmech-planer-500w",
                "--price",
                "5000.4",
                "--discount",
                "15%",
                "--deal",
                "true",
                "--features",
                "Carbide blades\n\n  Dust bag included ",
            ],
        )
        .await??;

        let planer = ctx
            .catalog
            .get_product(&ProductId::new("maxmech-planer-500w"))
            .await
            .ok_or("planer missing")?;

        assert_eq!(planer.price(), 5_000);
        assert_eq!(planer.discount_percentage(), 15);
        assert_eq!(planer.selling_price(), 4_250);
        assert!(planer.details.is_deal);
        assert_eq!(
            planer.details.features,
            ["Carbide blades", "Dust bag included"]
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_rejects_non_numeric_price() -> TestResult {
        let ctx = context()?;

        let result = run(&ctx, &["update", "maxmech-planer-500w", "--price", "cheap"]).await?;

        assert!(result.is_err(), "expected error, got {result:?}");
        assert_eq!(ctx.catalog.list_products().await, seed_products()?);

        Ok(())
    }

    #[tokio::test]
    async fn cart_prices_lines_live() -> TestResult {
        let ctx = context()?;

        run(
            &ctx,
            &["update", "maxmech-planer-500w", "--discount", "10"],
        )
        .await??;

        let out = run(
            &ctx,
            &[
                "cart",
                "maxmech-planer-500w=1",
                "maxmech-planer-500w=1",
                "gone=1",
            ],
        )
        .await??;

        assert!(out.contains("not in catalog: gone"));
        assert!(out.contains("8,100"), "unexpected output: {out}");

        Ok(())
    }

    #[tokio::test]
    async fn delete_then_reset() -> TestResult {
        let ctx = context()?;

        let out = run(&ctx, &["delete", "maxmech-planer-500w"]).await??;

        assert_eq!(out.trim(), "deleted maxmech-planer-500w");

        let again = run(&ctx, &["delete", "maxmech-planer-500w"]).await?;

        assert!(again.is_err(), "expected error, got {again:?}");

        let out = run(&ctx, &["reset"]).await??;

        assert_eq!(out.trim(), "restored 10 seed products");

        Ok(())
    }

    #[tokio::test]
    async fn import_creates_products() -> TestResult {
        let ctx = context()?;
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("import.yml");

        std::fs::write(
            &path,
            "products:\n  - name: Detail Sander\n    category: Power Tools\n    \
             subcategory: Sanders\n    description: Small sander\n    price: 2900\n    \
             images: [/assets/sander.png]\n    inStock: true\n",
        )?;

        let path_arg = path.to_string_lossy().into_owned();
        let out = run(&ctx, &["import", &path_arg]).await??;

        assert!(out.contains("Detail Sander"));
        assert_eq!(ctx.catalog.list_products().await.len(), 11);

        Ok(())
    }

    #[tokio::test]
    async fn show_unknown_product_is_an_error() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog.expect_get_product().returning(|_| None);

        let ctx = AppContext::new(Arc::new(catalog), categories()?.into());

        let result = run(&ctx, &["show", "prod_missing"]).await?;

        assert_eq!(result, Err("product not found: prod_missing".to_string()));

        Ok(())
    }

    #[tokio::test]
    async fn categories_count_products() -> TestResult {
        let mut catalog = MockCatalogService::new();

        catalog
            .expect_list_products()
            .times(1)
            .returning(|| seed_products().unwrap_or_default());

        let ctx = AppContext::new(Arc::new(catalog), categories()?.into());

        let out = run(&ctx, &["categories"]).await??;

        assert!(out.contains("power-tools"));
        assert!(out.contains("commercial-equipment"));

        Ok(())
    }

    #[test]
    fn report_includes_sources() {
        let error = io::Error::other("disk full");

        assert_eq!(report("failed", &error), "failed: disk full");
    }
}
