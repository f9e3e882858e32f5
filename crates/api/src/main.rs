//! `shiftcal` binary entry point

use clap::Parser;
use shiftcal_lib::cli::{self, Cli};
use shiftcal_lib::utils::logging::init_tracing;
use shiftcal_lib::AppContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is normal; it only supplies SHIFTCAL_* defaults.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli::resolve_config(&cli)?;
    init_tracing(&config.logging);

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    let ctx = AppContext::new_with_config(config).await?;
    let output = cli::run(&ctx, cli.command).await?;
    println!("{output}");

    Ok(())
}
