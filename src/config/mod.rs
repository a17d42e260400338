// src/config/mod.rs
//! Configuration system for classic-ciphers
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config, KeywordSettings, Logging, MenuDefaults, Screen};
pub use defaults::DEFAULT_LOG_FILTER;

mod app;
mod defaults;
