// src/config/app.rs
use super::defaults::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH, NO_CLEAR_ENV_VAR};
use crate::enums::{CipherKind, Operation};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_screen")]
    pub screen: Screen,
    #[serde(default = "default_logging")]
    pub logging: Logging,
    #[serde(default = "default_keyword")]
    pub keyword: KeywordSettings,
    #[serde(default = "default_menu")]
    pub menu: MenuDefaults,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Screen {
    /// Clear the terminal before each prompt screen
    pub clear_screen: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logging {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSettings {
    /// Keyword used when the user enters an empty one
    pub default: String,
}

/// Answers used when the user just presses enter
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_operation: Option<Operation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cipher: Option<CipherKind>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            screen: default_screen(),
            logging: default_logging(),
            keyword: default_keyword(),
            menu: default_menu(),
        }
    }
}

impl Config {
    /// Parse a TOML file. Missing sections fall back to defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment overrides on top of file values
    pub fn with_env_overrides(mut self) -> Self {
        if std::env::var_os(NO_CLEAR_ENV_VAR).is_some() {
            self.screen.clear_screen = false;
        }
        self
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config at first use: falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let conf = if Path::new(&config_path).exists() {
            Config::from_path(&config_path).unwrap_or_else(|err| {
                // Logging is configured from this file, so report on stderr directly.
                eprintln!("Warning: {config_path} is unusable ({err}); using built-in defaults");
                Config::default()
            })
        } else {
            Config::default()
        };

        conf.with_env_overrides()
    })
}
