//! Client configuration following 12-factor app principles
//!
//! All configuration is loaded from environment variables (optionally via a
//! `.env` file) to keep deployment settings out of the code.

use std::env;
use std::time::Duration;

use crate::error::{ClientError, Result};

const DEFAULT_PROVIDER: &str = "http";
const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Back-office API client configuration
#[derive(Clone)]
pub struct ClientConfig {
    /// Transport provider (http, mock)
    pub provider: String,
    /// Base URL every resource path is appended to
    pub base_url: String,
    /// Bearer token attached to every request
    pub access_token: Option<String>,
    /// Per-request timeout; the transport default applies when unset
    pub timeout: Option<Duration>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            access_token: None,
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Config for the given base URL with all other settings defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let provider =
            env::var("TOURDESK_TRANSPORT").unwrap_or_else(|_| DEFAULT_PROVIDER.to_string());

        let base_url =
            env::var("TOURDESK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        if base_url.trim().is_empty() {
            return Err(ClientError::Configuration(
                "TOURDESK_API_BASE_URL must not be empty".to_string(),
            ));
        }

        let access_token = env::var("TOURDESK_ACCESS_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());

        let timeout = match env::var("TOURDESK_TIMEOUT_SECS") {
            Ok(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    ClientError::Configuration(format!(
                        "TOURDESK_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                        raw
                    ))
                })?;
                Some(Duration::from_secs(secs))
            }
            Err(_) => None,
        };

        let config = Self {
            provider,
            base_url,
            access_token,
            timeout,
        };
        tracing::debug!(?config, "Client configuration loaded");
        Ok(config)
    }

    /// Absolute URL for a resource path such as `/open/region/list`
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
