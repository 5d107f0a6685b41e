//! Lookup configuration
//!
//! The remote endpoint and credential are supplied once at process
//! start and treated as immutable for the process lifetime. Components
//! receive this value at construction instead of reading ambient state.

use thiserror::Error;

/// Configuration errors — raised before any remote call is attempted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("OpenCTI endpoint URL is not set")]
    MissingUrl,

    #[error("OpenCTI API token is not set")]
    MissingToken,
}

/// Immutable connection settings for the remote store.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Base URL of the OpenCTI instance (e.g. `https://octi.example.org`)
    pub url: String,
    /// API token sent as a bearer credential
    pub token: String,
    /// Whether to verify the TLS certificate of the endpoint
    pub ssl_verify: bool,
}

impl LookupConfig {
    pub fn new(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            token: token.into(),
            ssl_verify: true,
        }
    }

    pub fn with_ssl_verify(mut self, ssl_verify: bool) -> Self {
        self.ssl_verify = ssl_verify;
        self
    }

    /// Check that a lookup can be attempted at all. Every dispatch path
    /// calls this before building a client, so a missing endpoint
    /// short-circuits without touching the network.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if self.token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_config() {
        let config = LookupConfig::new("https://octi.example.org", "token-123");
        assert!(config.validate().is_ok());
        assert!(config.ssl_verify);
    }

    #[test]
    fn test_missing_url_fails_first() {
        let config = LookupConfig::new("", "");
        assert_eq!(config.validate().unwrap_err(), ConfigError::MissingUrl);
    }

    #[test]
    fn test_missing_token() {
        let config = LookupConfig::new("https://octi.example.org", "  ");
        assert_eq!(config.validate().unwrap_err(), ConfigError::MissingToken);
    }
}
