//! Cart pricing command.

use std::io::Write;

use buildforce::{cart::Cart, products::ProductId, validation::parse_quantity};
use buildforce_app::context::AppContext;
use clap::Args;

use crate::cli::{render, write_failed};

#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    /// Cart lines as `product-id=quantity`; repeated ids accumulate
    #[arg(required = true, value_name = "ID=QTY")]
    lines: Vec<String>,
}

fn parse_line(line: &str) -> Result<(ProductId, u32), String> {
    let (id, quantity) = line
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got {line:?}"))?;

    let quantity = parse_quantity(quantity).map_err(|error| error.to_string())?;

    Ok((ProductId::new(id.trim()), quantity))
}

pub(crate) async fn price(
    ctx: &AppContext,
    args: CartArgs,
    out: &mut impl Write,
) -> Result<(), String> {
    let mut cart = Cart::new();

    for line in &args.lines {
        let (id, quantity) = parse_line(line)?;

        cart.add(id, quantity).map_err(|error| error.to_string())?;
    }

    let products = ctx.catalog.list_products().await;

    let priced = cart.price(&products).map_err(|error| error.to_string())?;
    let total = priced.total_money().map_err(|error| error.to_string())?;

    render::cart(out, &priced, &total.to_string()).map_err(write_failed)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parses_id_and_quantity() -> TestResult {
        assert_eq!(
            parse_line("maxmech-planer-500w=2")?,
            (ProductId::new("maxmech-planer-500w"), 2)
        );
        assert_eq!(parse_line(" saw = 3 ")?, (ProductId::new("saw"), 3));

        Ok(())
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("maxmech-planer-500w").is_err());
        assert!(parse_line("saw=two").is_err());
        assert!(parse_line("saw=-1").is_err());
    }
}
