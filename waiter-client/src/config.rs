//! Client configuration

use std::path::PathBuf;
use std::sync::Arc;

use crate::credential::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use crate::http::NetworkHttpClient;
use crate::{ClientResult, WaiterApi};

/// Client configuration for connecting to the ordering API
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WAITER_API_URL | http://localhost:3000 | API base URL |
/// | WAITER_TIMEOUT_SECS | 30 | Request timeout (seconds) |
/// | WAITER_CREDENTIAL_FILE | (unset) | Persist the staff token to this JSON file |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g., "http://localhost:3000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Credential file; `None` keeps the token in memory only
    pub credential_file: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            credential_file: None,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::new(
            std::env::var("WAITER_API_URL").unwrap_or_else(|_| "http://localhost:3000".into()),
        );
        config.timeout = std::env::var("WAITER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        config.credential_file = std::env::var("WAITER_CREDENTIAL_FILE").ok().map(PathBuf::from);
        config
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist credentials to a JSON file
    pub fn with_credential_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.credential_file = Some(path.into());
        self
    }

    /// Build the credential store this configuration asks for
    pub fn build_credential_store(&self) -> Arc<dyn CredentialStore> {
        match &self.credential_file {
            Some(path) => Arc::new(FileCredentialStore::new(path.clone())),
            None => Arc::new(MemoryCredentialStore::new()),
        }
    }

    /// Create an API client from this configuration
    pub fn build_api(&self) -> ClientResult<WaiterApi<NetworkHttpClient>> {
        let credentials = self.build_credential_store();
        let http = NetworkHttpClient::new(self, credentials.clone())?;
        Ok(WaiterApi::new(http, credentials))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3000")
    }
}
