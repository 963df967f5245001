use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::catalog::BggConfig;
use crate::local_index::LocalIndexConfig;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: BggConfig,
    pub local_index: LocalIndexConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    "0.0.0.0".parse().expect("valid literal")
}

fn default_port() -> u16 {
    8080
}

/// Sanitized config for API responses
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    pub local_index: SanitizedLocalIndexConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub base_url_overridden: bool,
    pub timeout_secs: u64,
    pub cache_capacity: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedLocalIndexConfig {
    pub csv_path: PathBuf,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                base_url_overridden: config.catalog.base_url.is_some(),
                timeout_secs: config.catalog.timeout_secs,
                cache_capacity: config.catalog.cache_capacity,
            },
            local_index: SanitizedLocalIndexConfig {
                csv_path: config.local_index.csv_path.clone(),
            },
        }
    }
}
