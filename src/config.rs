//! Client configuration.
//!
//! A single immutable base address covers every backend endpoint. It is
//! injected into the clients at construction rather than read ad hoc from
//! call sites.

use anyhow::{Context, Result};
use url::Url;

/// Environment variable consulted by [`ApiConfig::from_env`].
pub const ENV_API_URL: &str = "TRAINER_API_URL";

const DEFAULT_API_URL: &str =
    "https://customer-rest-service-frontend-personaltrainer.2.rahtiapp.fi/api";

/// Immutable base address for the trainer backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a config from an explicit base address. The address is
    /// validated up front; this is the only place a malformed base can
    /// surface as an error, before any request has been attempted.
    pub fn new(base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        let trimmed = base.trim().trim_end_matches('/').to_string();
        Url::parse(&trimmed).with_context(|| format!("invalid API base address: {base}"))?;
        Ok(Self { base_url: trimmed })
    }

    /// Read the base address from `TRAINER_API_URL`, falling back to the
    /// public demo backend.
    pub fn from_env() -> Result<Self> {
        let base =
            std::env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute address of a collection endpoint, e.g. `customers`.
    pub fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }
}
