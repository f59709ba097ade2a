//! Client configuration.

use crate::error::{Error, Result};

/// Configuration for [`OpenAIClient`](crate::OpenAIClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the proxy backend, without a trailing slash.
    pub base_url: String,
    /// Request timeout in seconds. `None` keeps the transport default.
    pub timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// Default proxy backend.
    pub const DEFAULT_BASE_URL: &'static str = "https://synapticabase-production.up.railway.app";

    /// Environment variable overriding the base URL.
    pub const BASE_URL_ENV: &'static str = "WEBUI_OPENAI_BASE_URL";

    /// Environment variable setting the request timeout in seconds.
    pub const TIMEOUT_ENV: &'static str = "WEBUI_OPENAI_TIMEOUT_SECS";

    /// Creates a configuration pointing at the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            timeout_secs: None,
        }
    }

    /// Creates configuration from environment variables.
    ///
    /// Reads from:
    /// - `WEBUI_OPENAI_BASE_URL` - Optional base URL
    /// - `WEBUI_OPENAI_TIMEOUT_SECS` - Optional timeout in seconds
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the timeout is not a valid integer.
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var(Self::BASE_URL_ENV).unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_owned());

        let timeout_secs = match std::env::var(Self::TIMEOUT_ENV) {
            Ok(raw) => Some(raw.trim().parse::<u64>().map_err(|e| {
                Error::config(format!("{} must be a number of seconds: {e}", Self::TIMEOUT_ENV))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            base_url: normalize_base_url(base_url),
            timeout_secs,
        })
    }

    /// Sets the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(url.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Joins an endpoint path onto the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BASE_URL)
    }
}

fn normalize_base_url(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
