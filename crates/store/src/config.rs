//! Store configuration loaded from environment variables.

use crate::error::{StoreError, StoreResult};

/// Environment variable naming the store's base URL,
/// e.g. `https://project-ref.supabase.co/rest/v1`.
pub const ENV_STORE_URL: &str = "ARCHIVE_STORE_URL";

/// Environment variable holding the store access key.
pub const ENV_STORE_KEY: &str = "ARCHIVE_STORE_KEY";

/// Connection settings for the hosted store.
///
/// Both values are required; a missing one is a startup failure the
/// process should not try to recover from.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Base URL of the store's REST interface.
    pub base_url: String,
    /// Access key, sent with every request.
    pub api_key: String,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Load configuration from [`ENV_STORE_URL`] and [`ENV_STORE_KEY`].
    pub fn from_env() -> StoreResult<Self> {
        let base_url = require(ENV_STORE_URL)?;
        let api_key = require(ENV_STORE_KEY)?;
        Ok(Self { base_url, api_key })
    }
}

fn require(name: &'static str) -> StoreResult<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(StoreError::Config(format!("{name} must be set"))),
    }
}
