mod cli;
mod config;
mod domains;
mod geoip;
mod locator;
mod logger;
mod resolver;

pub use cli::Cli;
pub use config::Config;
pub use domains::DomainList;
pub use geoip::{GeoDatabase, GeoError};
pub use locator::Locator;
pub use logger::setup_logging;

pub type Result<T> = std::result::Result<T, anyhow::Error>;
