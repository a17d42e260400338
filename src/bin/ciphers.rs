// src/bin/ciphers.rs
//! Interactive cipher menu: encrypt or decrypt one message and print it

use anyhow::{Context, Result};
use classic_ciphers::config::DEFAULT_LOG_FILTER;
use classic_ciphers::{load_config, run_session, Menu};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = load_config();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    debug!(?config, "loaded config");

    let stdin = io::stdin();
    let mut menu = Menu::with_config(stdin.lock(), io::stdout(), config);

    match run_session(&mut menu).context("cipher session failed")? {
        Some(_) => info!("session complete"),
        None => info!("session ended without a message"),
    }

    Ok(())
}
