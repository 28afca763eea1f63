use crate::error::{DashboardError, Result};
use serde::Deserialize;
use std::env;
use std::fs;

pub const DOCSTORE_URL_VAR: &str = "YT_DOCSTORE_URL";
pub const DOCSTORE_TOKEN_VAR: &str = "YT_DOCSTORE_TOKEN";

/// Dashboard tunables, loaded from `config.toml`. Every field has a default
/// so the file is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collection holding the crawled video documents
    pub collection: String,
    /// Seconds a fetched record set stays valid; 0 disables caching
    pub cache_ttl_secs: u64,
    /// Entries in the top-videos-by-views ranking
    pub top_videos: usize,
    /// Entries in each channel ranking
    pub top_channels: usize,
    /// Entries in the title keyword table
    pub top_keywords: usize,
    /// Drop records with a missing or blank channel from channel rankings
    pub exclude_blank_channels: bool,
    /// Web dashboard bind port
    pub port: u16,
    /// Prometheus exporter port; unset disables the exporter
    pub metrics_port: Option<u16>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection: "crawled_videos".to_string(),
            cache_ttl_secs: 600,
            top_videos: 5,
            top_channels: 10,
            top_keywords: 15,
            exclude_blank_channels: true,
            port: 3000,
            metrics_port: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    pub fn load_from(path: &str) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(DashboardError::Config(format!(
                "Failed to read config file '{path}': {e}"
            ))),
        }
    }
}

/// Connection settings for the document store, taken from the environment.
#[derive(Debug, Clone)]
pub struct DocStoreConfig {
    pub base_url: String,
    pub auth_token: Option<String>,
}

impl DocStoreConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(DOCSTORE_URL_VAR).map_err(|_| {
            DashboardError::Config(format!("{DOCSTORE_URL_VAR} environment variable not set"))
        })?;
        let auth_token = env::var(DOCSTORE_TOKEN_VAR).ok();
        Ok(Self {
            base_url,
            auth_token,
        })
    }
}
