use std::path::PathBuf;

use eyre::Result;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::summarize::DEFAULT_MODEL;

pub const DEFAULT_LANG: &str = "en";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub default_lang: Option<String>,
    pub default_format: Option<String>,
    pub default_model: Option<String>,
}

impl Config {
    /// Load config from ~/.config/ytnotes/config.toml if it exists
    pub fn load() -> Result<Self> {
        let path = config_path();
        if path.exists() {
            debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            debug!("No config file found at {}", path.display());
            Ok(Config::default())
        }
    }

    /// CLI value, then config value, then the built-in default
    pub fn lang(&self, cli: Option<&str>) -> String {
        pick(cli, self.default_lang.as_deref(), DEFAULT_LANG)
    }

    pub fn model(&self, cli: Option<&str>) -> String {
        pick(cli, self.default_model.as_deref(), DEFAULT_MODEL)
    }
}

fn pick(cli: Option<&str>, config: Option<&str>, default: &str) -> String {
    cli.or(config).unwrap_or(default).to_string()
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("ytnotes")
        .join("config.toml")
}
