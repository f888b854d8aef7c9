//! Global evman configuration.

use std::path::PathBuf;

use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;

static DEFAULT_API_URL: &str = "http://localhost:5000/api";

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

/// Global configuration at ~/.config/evman/config.toml
///
/// Sources, last wins: built-in default, the config file (optional),
/// `EVMAN_API_URL`, and the `--api-url` flag.
#[derive(Deserialize, Clone)]
pub struct GlobalConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl GlobalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("evman");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load(api_url_flag: Option<String>) -> Result<Self> {
        let mut config: GlobalConfig = Config::builder()
            .add_source(File::from(Self::config_path()?).required(false))
            .add_source(Environment::with_prefix("EVMAN"))
            .build()?
            .try_deserialize()?;

        if let Some(url) = api_url_flag {
            config.api_url = url;
        }

        Ok(config)
    }
}
