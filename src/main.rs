use clap::Parser;
use geofind::{Cli, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup logging
    geofind::setup_logging()?;

    // Parse CLI arguments
    let cli = Cli::parse();

    tracing::info!("Starting geofind domain geolocation lookup");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Execute CLI command (each command loads its own config)
    cli.execute().await?;

    Ok(())
}
