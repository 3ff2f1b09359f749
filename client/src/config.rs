//! Connection settings for the item collection resource.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL: {0} (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("timeout must be greater than zero: {0}")]
    ZeroTimeout(&'static str),
}

/// Where the collection lives and how long to wait for it.
///
/// Timeouts are unset by default, so a hung request waits indefinitely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout_secs: Option<u64>,
    pub connect_timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), request_timeout_secs: None, connect_timeout_secs: None }
    }
}

impl ClientConfig {
    /// Build a config for `base_url` with no timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] unless the URL is http(s).
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self { base_url: normalize_base_url(base_url)?, ..Self::default() })
    }

    /// Set the whole-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero value.
    pub fn with_request_timeout(mut self, secs: Option<u64>) -> Result<Self, ConfigError> {
        self.request_timeout_secs = non_zero(secs, "request")?;
        Ok(self)
    }

    /// Set the TCP connect timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroTimeout`] for a zero value.
    pub fn with_connect_timeout(mut self, secs: Option<u64>) -> Result<Self, ConfigError> {
        self.connect_timeout_secs = non_zero(secs, "connect")?;
        Ok(self)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

fn non_zero(secs: Option<u64>, which: &'static str) -> Result<Option<u64>, ConfigError> {
    match secs {
        Some(0) => Err(ConfigError::ZeroTimeout(which)),
        other => Ok(other),
    }
}
