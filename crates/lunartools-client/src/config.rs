//! Client configuration.

use std::fmt;
use std::time::Duration;

use crate::error::ClientError;

/// Production base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.lunartools.co";

/// Timeout applied to every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Identity and endpoint for the Lunartools API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Client identifier, sent as `X-Client-ID` and `clientId`.
    pub client_id: String,
    /// Access token, sent as `X-Access-Token` and `accessToken`.
    pub access_token: String,
    /// API base URL (default: [`DEFAULT_BASE_URL`]).
    pub base_url: Option<String>,
}

impl Config {
    /// Create a configuration for the production API.
    #[must_use]
    pub fn new(client_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            access_token: access_token.into(),
            base_url: None,
        }
    }

    /// Set the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `LUNARTOOLS_CLIENT_ID`, `LUNARTOOLS_ACCESS_TOKEN` and the optional
    /// `LUNARTOOLS_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Configuration`] if the client ID or access token is
    /// unset or blank. A blank base URL is treated as unset.
    pub fn from_env() -> Result<Self, ClientError> {
        let client_id = required_var("LUNARTOOLS_CLIENT_ID")?;
        let access_token = required_var("LUNARTOOLS_ACCESS_TOKEN")?;

        Ok(Self {
            client_id,
            access_token,
            base_url: std::env::var("LUNARTOOLS_BASE_URL")
                .ok()
                .filter(|url| !url.trim().is_empty()),
        })
    }

    /// The base URL requests are sent to, with any trailing `/` removed.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when unset or blank.
    #[must_use]
    pub fn resolved_base_url(&self) -> String {
        match self.base_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url.trim_end_matches('/').to_string(),
            _ => DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

fn required_var(name: &str) -> Result<String, ClientError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ClientError::Configuration(format!("{name} is blank"))),
        Err(_) => Err(ClientError::Configuration(format!("{name} is not set"))),
    }
}

/// Client options for customization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Request timeout (default: 30 seconds).
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientOptions {
    /// Create options with a custom timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}
