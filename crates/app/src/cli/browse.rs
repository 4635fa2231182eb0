//! Read-only catalog commands.

use std::io::Write;

use buildforce::{
    categories::{find_category, slugify},
    products::ProductId,
    query::{
        CatalogQuery, PriceRange, ProductFilter, QueryError, SortOrder, deals, featured, related,
        suggestions,
    },
};
use buildforce_app::context::AppContext;
use clap::Args;
use tracing::warn;

use crate::cli::{render, write_failed};

#[derive(Debug, Args)]
pub(crate) struct FilterArgs {
    /// Category slug or name, e.g. `power-tools`
    #[arg(long)]
    category: Option<String>,

    /// Subcategory name; repeat to accept several
    #[arg(long = "subcategory", value_name = "NAME")]
    subcategories: Vec<String>,

    /// Lowest pre-discount price, inclusive
    #[arg(long)]
    min_price: Option<u64>,

    /// Highest pre-discount price, inclusive
    #[arg(long)]
    max_price: Option<u64>,

    /// Only products flagged as in stock
    #[arg(long)]
    in_stock: bool,

    /// Only products flagged as deals
    #[arg(long)]
    deals: bool,

    /// Sort order: relevance, name, price-low, price-high, discount
    #[arg(long, default_value_t = SortOrder::Relevance)]
    sort: SortOrder,
}

impl FilterArgs {
    fn query(&self) -> Result<CatalogQuery, QueryError> {
        let mut filter = ProductFilter::new()
            .in_stock_only(self.in_stock)
            .deals_only(self.deals);

        if let Some(category) = &self.category {
            filter = filter.category(category);
        }

        for subcategory in &self.subcategories {
            filter = filter.subcategory(subcategory.as_str());
        }

        let range = match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => Some(PriceRange::new(min, max)?),
            (Some(min), None) => Some(PriceRange::at_least(min)),
            (None, Some(max)) => Some(PriceRange::at_most(max)),
            (None, None) => None,
        };

        if let Some(range) = range {
            filter = filter.price_range(range);
        }

        Ok(CatalogQuery::new().filter(filter).sort(self.sort))
    }
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Text matched against name, description, category and subcategory
    query: String,

    /// Only show the short suggestion list offered while typing
    #[arg(long, conflicts_with_all = ["category", "subcategories", "min_price", "max_price", "in_stock", "deals"])]
    suggest: bool,

    #[command(flatten)]
    filters: FilterArgs,
}

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product id
    pub(crate) id: String,
}

pub(crate) async fn list(
    ctx: &AppContext,
    args: FilterArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    if let Some(category) = &args.category
        && find_category(&ctx.categories, &slugify(category)).is_none()
    {
        warn!(category, "category is not part of the storefront schema");
    }

    let query = args.query().map_err(|error| error.to_string())?;
    let products = ctx.catalog.list_products().await;

    render::products(out, &query.run(&products)).map_err(write_failed)
}

pub(crate) async fn search(
    ctx: &AppContext,
    args: SearchArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let products = ctx.catalog.list_products().await;

    if args.suggest {
        return render::products(out, &suggestions(&products, &args.query)).map_err(write_failed);
    }

    let query = args
        .filters
        .query()
        .map_err(|error| error.to_string())?
        .text(args.query);

    render::products(out, &query.run(&products)).map_err(write_failed)
}

pub(crate) async fn show(
    ctx: &AppContext,
    args: ProductArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let id = ProductId::new(args.id);

    let product = ctx
        .catalog
        .get_product(&id)
        .await
        .ok_or_else(|| format!("product not found: {id}"))?;

    render::product(out, &product, &ctx.categories).map_err(write_failed)
}

pub(crate) async fn related_to(
    ctx: &AppContext,
    args: ProductArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let id = ProductId::new(args.id);
    let products = ctx.catalog.list_products().await;

    let product = products
        .iter()
        .find(|product| product.id == id)
        .ok_or_else(|| format!("product not found: {id}"))?;

    render::products(out, &related(&products, product)).map_err(write_failed)
}

pub(crate) async fn featured_products(
    ctx: &AppContext,
    out: &mut impl Write,
) -> Result<(), String> {
    let products = ctx.catalog.list_products().await;

    render::products(out, &featured(&products)).map_err(write_failed)
}

pub(crate) async fn deal_products(ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let products = ctx.catalog.list_products().await;

    render::products(out, &deals(&products)).map_err(write_failed)
}

pub(crate) async fn categories(ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let products = ctx.catalog.list_products().await;

    render::categories(out, &ctx.categories, &products).map_err(write_failed)
}
