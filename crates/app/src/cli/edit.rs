//! Catalog editing commands.

use std::{io::Write, path::PathBuf};

use buildforce::{
    products::{ProductDetails, ProductId},
    validation::{parse_discount, parse_lines, parse_price, parse_quantity},
};
use buildforce_app::context::AppContext;
use clap::Args;
use serde::Deserialize;

use crate::cli::{ProductArgs, render, report, write_failed};

#[derive(Debug, Args)]
pub(crate) struct UpdateArgs {
    /// Product id
    id: String,

    /// New pre-discount price, e.g. 4500 or 4500.50
    #[arg(long)]
    price: Option<String>,

    /// New discount, e.g. 15 or 15%
    #[arg(long)]
    discount: Option<String>,

    /// Units on hand
    #[arg(long)]
    stock: Option<String>,

    /// Availability flag
    #[arg(long)]
    in_stock: Option<bool>,

    /// Featured section membership
    #[arg(long)]
    featured: Option<bool>,

    /// Deals section membership
    #[arg(long)]
    deal: Option<bool>,

    /// New display name
    #[arg(long)]
    name: Option<String>,

    /// Specification lines, one per line of text
    #[arg(long)]
    specifications: Option<String>,

    /// Feature lines, one per line of text
    #[arg(long)]
    features: Option<String>,
}

impl UpdateArgs {
    fn apply(&self, details: &mut ProductDetails) -> Result<(), String> {
        if let Some(price) = &self.price {
            details.price = parse_price(price).map_err(|error| error.to_string())?;
        }

        if let Some(discount) = &self.discount {
            details.discount_percentage =
                parse_discount(discount).map_err(|error| error.to_string())?;
        }

        if let Some(stock) = &self.stock {
            details.stock = parse_quantity(stock).map_err(|error| error.to_string())?;
        }

        if let Some(name) = &self.name {
            details.name.clone_from(name);
        }

        if let Some(specifications) = &self.specifications {
            details.specifications = parse_lines(specifications);
        }

        if let Some(features) = &self.features {
            details.features = parse_lines(features);
        }

        if let Some(in_stock) = self.in_stock {
            details.in_stock = in_stock;
        }

        if let Some(featured) = self.featured {
            details.is_featured = featured;
        }

        if let Some(deal) = self.deal {
            details.is_deal = deal;
        }

        Ok(())
    }
}

#[derive(Debug, Args)]
pub(crate) struct ImportArgs {
    /// YAML file with a top-level `products` list
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct ImportFile {
    products: Vec<ProductDetails>,
}

pub(crate) async fn update(
    ctx: &AppContext,
    args: UpdateArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let id = ProductId::new(args.id.as_str());

    let product = ctx
        .catalog
        .get_product(&id)
        .await
        .ok_or_else(|| format!("product not found: {id}"))?;

    let mut details = product.details;

    args.apply(&mut details)?;

    let updated = ctx
        .catalog
        .update_product(&id, details)
        .await
        .map_err(|error| report("failed to update product", &error))?;

    render::product(out, &updated, &ctx.categories).map_err(write_failed)
}

pub(crate) async fn import(
    ctx: &AppContext,
    args: ImportArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let contents = tokio::fs::read_to_string(&args.path)
        .await
        .map_err(|error| report("failed to read import file", &error))?;

    let file: ImportFile = serde_norway::from_str(&contents)
        .map_err(|error| report("failed to parse import file", &error))?;

    let mut created = Vec::with_capacity(file.products.len());

    for details in file.products {
        let name = details.name.clone();

        match ctx.catalog.create_product(details).await {
            Ok(product) => created.push(product),
            Err(error) => {
                let refs: Vec<_> = created.iter().collect();

                render::products(out, &refs).map_err(write_failed)?;

                return Err(report(
                    &format!(
                        "imported {} product(s), then failed on {name:?}",
                        created.len()
                    ),
                    &error,
                ));
            }
        }
    }

    let refs: Vec<_> = created.iter().collect();

    render::products(out, &refs).map_err(write_failed)
}

pub(crate) async fn delete(
    ctx: &AppContext,
    args: ProductArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let id = ProductId::new(args.id);

    ctx.catalog
        .delete_product(&id)
        .await
        .map_err(|error| report(&format!("failed to delete {id}"), &error))?;

    writeln!(out, "deleted {id}").map_err(write_failed)
}

pub(crate) async fn reset(ctx: &AppContext, out: &mut impl Write) -> Result<(), String> {
    let result = ctx.catalog.reset_to_seed().await;
    let count = ctx.catalog.list_products().await.len();

    writeln!(out, "restored {count} seed products").map_err(write_failed)?;

    result.map_err(|error| report("seed restored, but the cache could not be cleared", &error))
}
