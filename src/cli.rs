use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::Path;
use crate::{Config, DomainList, GeoDatabase, Locator, Result};

#[derive(Parser)]
#[command(name = "geofind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "geofind.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process the domain list and print each domain's country
    Run,

    /// Resolve and geolocate a single domain
    Lookup { domain: String },

    /// Open the GeoIP database and print its metadata
    Check,

    /// Write the default configuration file
    Init,
}

impl Cli {
    pub async fn execute(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Lookup { domain }) => lookup(&self.load_config()?, domain).await,
            Some(Commands::Check) => check(&self.load_config()?),
            Some(Commands::Init) => self.init(),
            Some(Commands::Run) | None => run(&self.load_config()?).await,
        }
    }

    /// Load the configuration file, falling back to built-in defaults when
    /// it does not exist.
    fn load_config(&self) -> Result<Config> {
        if Path::new(&self.config).exists() {
            Config::load(&self.config)
        } else {
            Ok(Config::default())
        }
    }

    fn init(&self) -> Result<()> {
        Config::default().save(&self.config)?;
        tracing::info!("Wrote default configuration to {}", self.config);
        Ok(())
    }
}

/// The full pipeline: open the database, stream the domain list, report.
async fn run(config: &Config) -> Result<()> {
    let geoip = GeoDatabase::open(&config.geoip.database)?;
    let mut domains = DomainList::open(&config.input.domains_file).await?;

    let mut locator = Locator::new(geoip);
    locator.run(&mut domains).await
}

/// One-shot lookup for a domain given on the command line.
async fn lookup(config: &Config, domain: &str) -> Result<()> {
    let geoip = GeoDatabase::open(&config.geoip.database)?;
    let mut locator = Locator::new(geoip);

    if let Some((ip, country)) = locator.process_domain(domain).await {
        println!("{}", crate::locator::result_line(domain, ip, &country));
    }

    Ok(())
}

fn check(config: &Config) -> Result<()> {
    let geoip = GeoDatabase::open(&config.geoip.database)?;
    let meta = geoip.metadata();

    println!("{}", "GeoIP database OK".green().bold());
    println!("  path:        {}", config.geoip.database);
    println!("  type:        {}", meta.database_type);
    println!(
        "  format:      {}.{}",
        meta.binary_format_major_version, meta.binary_format_minor_version
    );
    println!("  build epoch: {}", meta.build_epoch);
    println!("  node count:  {}", meta.node_count);
    println!("  ip version:  {}", meta.ip_version);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_run() {
        let cli = Cli::parse_from(["geofind"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.config, "geofind.toml");
    }

    #[test]
    fn test_lookup_takes_a_domain() {
        let cli = Cli::parse_from(["geofind", "lookup", "example.com"]);
        match cli.command {
            Some(Commands::Lookup { domain }) => assert_eq!(domain, "example.com"),
            _ => panic!("expected lookup command"),
        }
    }
}
