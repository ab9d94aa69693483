use std::env;

use tracing::warn;

pub const BUFFER_SIZE_VAR: &str = "STOREFRONT_BUFFER_SIZE";
pub const LOG_FILTER_VAR: &str = "STOREFRONT_LOG";

/// Start-up settings for [`StorefrontSystem`](super::StorefrontSystem).
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of each actor's request channel.
    pub buffer_size: usize,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl SystemConfig {
    /// Defaults overlaid with `STOREFRONT_BUFFER_SIZE` and `STOREFRONT_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(BUFFER_SIZE_VAR) {
            match raw.trim().parse::<usize>() {
                Ok(size) if size > 0 => config.buffer_size = size,
                _ => warn!(value = %raw, "Ignoring invalid {}", BUFFER_SIZE_VAR),
            }
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR) {
            if !filter.trim().is_empty() {
                config.log_filter = filter;
            }
        }
        config
    }
}
