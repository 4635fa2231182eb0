//! Table rendering

use std::{
    io::{self, Write},
    ops::Range,
};

use buildforce::{
    cart::PricedCart,
    categories::{Category, subcategory_of},
    prices::to_money,
    products::Product,
    query::ProductFilter,
};
use tabled::{
    Table,
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Whole-shilling amount as money, e.g. `KSh5,250.00`.
pub(crate) fn price(amount: u64) -> String {
    to_money(amount).map_or_else(|_err| format!("KES {amount}"), |money| money.to_string())
}

fn finish(mut table: Table, numeric: Columns<Range<usize>>) -> String {
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(numeric, Alignment::right());

    table.to_string()
}

fn flags(product: &Product) -> String {
    let details = &product.details;

    let mut flags = Vec::new();

    if details.is_featured {
        flags.push("featured");
    }

    if details.is_deal {
        flags.push("deal");
    }

    if !details.in_stock {
        flags.push("out of stock");
    }

    flags.join(", ")
}

pub(crate) fn products(out: &mut impl Write, products: &[&Product]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "no products found");
    }

    let mut builder = Builder::default();

    builder.push_record([
        "ID",
        "Name",
        "Category",
        "Subcategory",
        "Price",
        "Discount",
        "Selling Price",
        "Stock",
        "Flags",
    ]);

    for product in products {
        builder.push_record([
            product.id.to_string(),
            product.name().to_string(),
            product.category().to_string(),
            product.subcategory().to_string(),
            price(product.price()),
            format!("{}%", product.discount_percentage()),
            price(product.selling_price()),
            product.details.stock.to_string(),
            flags(product),
        ]);
    }

    writeln!(out, "{}", finish(builder.build(), Columns::new(4..8)))
}

pub(crate) fn product(
    out: &mut impl Write,
    product: &Product,
    categories: &[Category],
) -> io::Result<()> {
    let details = &product.details;

    let mut builder = Builder::default();

    builder.push_record(["Field", "Value"]);
    builder.push_record(["ID", product.id.as_str()]);
    builder.push_record(["Name", details.name.as_str()]);
    builder.push_record(["Category", details.category.as_str()]);
    builder.push_record(["Subcategory", details.subcategory.as_str()]);

    if let Some(about) =
        subcategory_of(categories, details).and_then(|sub| sub.description.as_deref())
    {
        builder.push_record(["About", about]);
    }

    builder.push_record(["Price".to_string(), price(details.price)]);
    builder.push_record([
        "Discount".to_string(),
        format!("{}%", details.discount_percentage),
    ]);
    builder.push_record(["Selling Price".to_string(), price(details.selling_price())]);

    if let Some(final_price) = details.final_price {
        builder.push_record(["Listed Final Price".to_string(), price(final_price)]);
    }

    builder.push_record(["Stock".to_string(), details.stock.to_string()]);
    builder.push_record(["Flags".to_string(), flags(product)]);

    if let Some(brand) = &details.brand {
        builder.push_record(["Brand", brand.as_str()]);
    }

    if let Some(sku) = &details.sku {
        builder.push_record(["SKU", sku.as_str()]);
    }

    if let Some(weight) = details.weight {
        builder.push_record(["Weight".to_string(), format!("{weight} kg")]);
    }

    if let Some(dimensions) = details.dimensions {
        builder.push_record([
            "Dimensions".to_string(),
            format!(
                "{} × {} × {} cm",
                dimensions.length, dimensions.width, dimensions.height
            ),
        ]);
    }

    builder.push_record(["Image", details.primary_image().unwrap_or_default()]);
    builder.push_record(["Created".to_string(), product.created_at.to_string()]);
    builder.push_record(["Updated".to_string(), product.updated_at.to_string()]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);

    writeln!(out, "{table}")?;
    writeln!(out, "\n{}", details.description)?;

    let sections = [
        ("Specifications", &details.specifications),
        ("Features", &details.features),
        ("Applications", &details.applications),
        ("Maintenance", &details.maintenance_tips),
        ("Usage", &details.usage_guide),
    ];

    for (title, lines) in sections {
        if lines.is_empty() {
            continue;
        }

        writeln!(out, "\n{title}:")?;

        for line in lines {
            writeln!(out, "  - {line}")?;
        }
    }

    if !details.faqs.is_empty() {
        writeln!(out, "\nFAQ:")?;

        for faq in &details.faqs {
            writeln!(out, "  Q: {}\n  A: {}", faq.question, faq.answer)?;
        }
    }

    if !details.hashtags.is_empty() {
        writeln!(out, "\n{}", details.hashtags.join(" "))?;
    }

    Ok(())
}

pub(crate) fn categories(
    out: &mut impl Write,
    categories: &[Category],
    products: &[Product],
) -> io::Result<()> {
    let mut builder = Builder::default();

    builder.push_record(["Slug", "Category", "Subcategories", "Products"]);

    for category in categories {
        let count = ProductFilter::new()
            .category(&category.id)
            .apply(products)
            .len();

        builder.push_record([
            category.id.clone(),
            category.name.clone(),
            category.subcategory_names().collect::<Vec<_>>().join(", "),
            count.to_string(),
        ]);
    }

    writeln!(out, "{}", finish(builder.build(), Columns::new(3..4)))
}

pub(crate) fn cart(out: &mut impl Write, priced: &PricedCart<'_>, total: &str) -> io::Result<()> {
    if priced.lines().is_empty() {
        writeln!(out, "cart is empty")?;
    } else {
        let mut builder = Builder::default();

        builder.push_record(["ID", "Product", "Qty", "Unit Price", "Line Total"]);

        for line in priced.lines() {
            builder.push_record([
                line.product.id.to_string(),
                line.product.name().to_string(),
                line.quantity.to_string(),
                price(line.unit_price),
                price(line.line_total),
            ]);
        }

        writeln!(out, "{}", finish(builder.build(), Columns::new(2..5)))?;
    }

    for id in priced.missing() {
        writeln!(out, "not in catalog: {id}")?;
    }

    writeln!(out, "Total: {total}")
}
