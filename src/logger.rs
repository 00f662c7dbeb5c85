use tracing_subscriber::EnvFilter;
use crate::Result;

/// Setup logging to stderr, keeping stdout free for result lines
pub fn setup_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
