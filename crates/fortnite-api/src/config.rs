//! Client configuration
//!
//! # Environment Variables
//!
//! ```bash
//! export FORTNITE_API_KEY="..."           # required for stats endpoints
//! export FORTNITE_API_LANGUAGE="en"       # default response language
//! export FORTNITE_API_TIMEOUT="30"        # request timeout in seconds
//! export FORTNITE_API_BASE_URL="https://fortnite-api.com"
//! ```

use std::time::Duration;

use crate::error::{Error, Result};
use crate::language::Language;

/// Fixed host of the service
pub const BASE_URL: &str = "https://fortnite-api.com";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Service base URL
    pub base_url: String,

    /// Language used when a call does not choose one
    pub language: Option<Language>,

    /// API key sent in the `Authorization` header
    pub api_key: Option<String>,

    /// Request timeout applied by the transport
    pub timeout: Duration,

    /// Connection timeout applied by the transport
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            language: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let language = std::env::var("FORTNITE_API_LANGUAGE")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<Language>())
            .transpose()?;

        let timeout = std::env::var("FORTNITE_API_TIMEOUT")
            .ok()
            .filter(|s| !s.is_empty())
            .map(|s| parse_timeout(&s))
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT);

        Ok(Self {
            base_url: std::env::var("FORTNITE_API_BASE_URL")
                .unwrap_or_else(|_| BASE_URL.to_string()),
            language,
            api_key: std::env::var("FORTNITE_API_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
            timeout,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    /// Set the default language
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Set the API key; an empty key leaves the client unauthenticated
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        self.api_key = (!api_key.is_empty()).then_some(api_key);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the connection timeout
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Point the client at another host, e.g. a local mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Parse a timeout given in whole seconds
fn parse_timeout(value: &str) -> Result<Duration> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::InvalidTimeout(value.to_string()))
}
