//! Configuration management

use std::net::SocketAddr;

use folio_core::content::PROFILE;
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Site server configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Address to bind to
    pub addr: String,

    /// Directory served under `/static` (portrait and page images)
    pub static_dir: String,

    /// Directory served under `/assets` (client bundle)
    pub assets_dir: String,

    /// Document title
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
            static_dir: "server/static".to_string(),
            assets_dir: "dist/assets".to_string(),
            title: format!("{} – Portfolio", PROFILE.name),
        }
    }
}

impl Config {
    /// Load configuration from file or environment
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config = if let Some(p) = path {
            Self::load_from_file(p)?
        } else {
            Self::load_from_env()
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from configuration file
    fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        Self::from_toml(&content)
    }

    fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {}", e)))
    }

    /// Load from environment variables, falling back to defaults
    fn load_from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, fallback: String| std::env::var(name).unwrap_or(fallback);

        Config {
            addr: var("FOLIO_ADDR", defaults.addr),
            static_dir: var("FOLIO_STATIC_DIR", defaults.static_dir),
            assets_dir: var("FOLIO_ASSETS_DIR", defaults.assets_dir),
            title: var("FOLIO_TITLE", defaults.title),
        }
    }

    /// Parsed bind address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.addr
            .parse()
            .map_err(|e| Error::ConfigError(format!("Invalid address {:?}: {}", self.addr, e)))
    }

    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if self.title.trim().is_empty() {
            return Err(Error::ConfigError("Title must not be empty".to_string()));
        }
        Ok(())
    }
}
