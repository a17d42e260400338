// tests/common.rs
//! Logging for integration tests

#[cfg(feature = "logging")]
use classic_ciphers::config::DEFAULT_LOG_FILTER;
#[cfg(feature = "logging")]
use tracing_subscriber::EnvFilter;

/// Route cipher logs through the test writer, filtered like the binary:
/// `RUST_LOG` when set, otherwise the default config filter.
/// Only the first call in a test binary installs the subscriber.
pub fn setup() {
    #[cfg(feature = "logging")]
    {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}
