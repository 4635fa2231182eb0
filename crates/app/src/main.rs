//! Buildforce catalog CLI

use std::{io, process};

use buildforce_app::context::AppContext;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, report};

mod cli;

#[tokio::main]
pub async fn main() {
    let cli = Cli::load().unwrap_or_else(|error| error.exit());

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&cli.config.log_level)),
        )
        .init();

    let ctx = match AppContext::from_config(&cli.config).await {
        Ok(ctx) => ctx,
        Err(init_error) => {
            error!(error = %init_error, "failed to initialise catalog");

            fail(&report("failed to initialise catalog", &init_error));
        }
    };

    let mut stdout = io::stdout().lock();

    if let Err(message) = cli.run(&ctx, &mut stdout).await {
        fail(&message);
    }
}

fn fail(message: &str) -> ! {
    #[expect(
        clippy::print_stderr,
        reason = "command failures are reported to the terminal, not the log"
    )]
    {
        eprintln!("{message}");
    }

    #[expect(clippy::exit, reason = "non-zero exit status for failed commands")]
    process::exit(1);
}
