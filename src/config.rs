use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::Result;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub input: InputConfig,
    pub geoip: GeoipConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputConfig {
    /// Path to the domain list file (one domain per line)
    #[serde(default = "default_domains_file")]
    pub domains_file: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeoipConfig {
    /// Path to the MaxMind country database
    #[serde(default = "default_database")]
    pub database: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_domains_file() -> String {
    "domains.txt".to_string()
}

fn default_database() -> String {
    "Country.mmdb".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: InputConfig {
                domains_file: default_domains_file(),
            },
            geoip: GeoipConfig {
                database: default_database(),
            },
            logging: LoggingConfig {
                log_level: default_log_level(),
            },
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.input.domains_file, "domains.txt");
        assert_eq!(config.geoip.database, "Country.mmdb");
        assert_eq!(config.logging.log_level, "info");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("geofind.toml");

        let mut config = Config::default();
        config.input.domains_file = "lists/targets.txt".to_string();
        config.geoip.database = "/var/lib/geoip/Country.mmdb".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded.input.domains_file, "lists/targets.txt");
        assert_eq!(loaded.geoip.database, "/var/lib/geoip/Country.mmdb");
        assert_eq!(loaded.logging.log_level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load("/nonexistent/geofind.toml").is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "[input]\ndomains_file = \"mine.txt\"\n\n[geoip]\n\n[logging]\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.input.domains_file, "mine.txt");
        assert_eq!(config.geoip.database, "Country.mmdb");
    }
}
