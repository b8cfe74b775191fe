//! Resolver configuration
//!
//! Environment variables:
//! - `CONCEPT_SEARCH_URL` (required): full URL of the search endpoint, e.g.
//!   `http://concept-search-api:8080/concepts`
//! - `CONCEPT_SEARCH_TIMEOUT_SECS` (optional, default 30)

use anyhow::{anyhow, Context, Result};
use std::time::Duration;

pub const CONCEPT_SEARCH_URL_ENV: &str = "CONCEPT_SEARCH_URL";
pub const CONCEPT_SEARCH_TIMEOUT_ENV: &str = "CONCEPT_SEARCH_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl ResolverConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load from process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(CONCEPT_SEARCH_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .with_context(|| format!("{} environment variable not set", CONCEPT_SEARCH_URL_ENV))?;

        let mut config = Self::new(base_url);

        if let Some(raw) = lookup(CONCEPT_SEARCH_TIMEOUT_ENV) {
            let secs: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}: '{}'", CONCEPT_SEARCH_TIMEOUT_ENV, raw))?;
            if secs == 0 {
                return Err(anyhow!("{} must be greater than zero", CONCEPT_SEARCH_TIMEOUT_ENV));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
