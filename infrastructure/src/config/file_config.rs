//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file
//! and are deserialized directly.

use octi_application::LookupConfig;
use serde::{Deserialize, Serialize};

/// Raw OpenCTI connection settings from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenCtiConfig {
    /// Base URL of the OpenCTI instance
    pub url: String,
    /// API token
    pub token: String,
    /// Verify the endpoint's TLS certificate
    pub ssl_verify: bool,
}

impl Default for FileOpenCtiConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            ssl_verify: true,
        }
    }
}

/// Top-level raw configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// OpenCTI connection settings
    pub opencti: FileOpenCtiConfig,
}

impl FileConfig {
    /// Convert into the immutable application-layer configuration.
    pub fn to_lookup_config(&self) -> LookupConfig {
        LookupConfig::new(&self.opencti.url, &self.opencti.token)
            .with_ssl_verify(self.opencti.ssl_verify)
    }
}
