//! Configuration file support
//!
//! Precedence, highest first: command-line flag, environment variable (via
//! clap `env`), `enrollctl.toml`, built-in default.
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:8000"
//! cors_permissive = false
//!
//! [database]
//! url = "sqlite://enrollctl.db"
//! max_connections = 5
//! ```

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use enrollctl_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use enrollctl_server::ServerConfig;
use serde::Deserialize;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "enrollctl.toml";

pub const DEFAULT_DATABASE_URL: &str = "sqlite://enrollctl.db";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnrollctlConfig {
    pub server: ServerSection,
    pub database: DatabaseSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: Option<SocketAddr>,
    pub cors_permissive: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseSection {
    pub url: Option<String>,
    pub max_connections: Option<u32>,
}

impl EnrollctlConfig {
    /// Load from an explicit path, or from `./enrollctl.toml` if it exists.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_path(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file (invalid TOML): {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }

    pub fn database_url(&self, flag: Option<String>) -> String {
        flag.or_else(|| self.database.url.clone())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned())
    }

    pub fn max_connections(&self, flag: Option<u32>) -> u32 {
        flag.or(self.database.max_connections)
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Server settings; `cors_permissive` on the command line can only turn it on.
    pub fn server_config(&self, bind: Option<SocketAddr>, cors_permissive: bool) -> ServerConfig {
        let defaults = ServerConfig::default();
        ServerConfig {
            bind_addr: bind.or(self.server.bind).unwrap_or(defaults.bind_addr),
            cors_permissive: cors_permissive
                || self.server.cors_permissive.unwrap_or(defaults.cors_permissive),
        }
    }
}
