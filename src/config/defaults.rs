// src/config/defaults.rs
use crate::config::app::{KeywordSettings, Logging, MenuDefaults, Screen};

pub const DEFAULT_LOG_FILTER: &str = "warn";

pub fn default_screen() -> Screen {
    Screen { clear_screen: true }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}

pub fn default_keyword() -> KeywordSettings {
    KeywordSettings {
        default: String::new(),
    }
}

pub fn default_menu() -> MenuDefaults {
    MenuDefaults::default()
}
