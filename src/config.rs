//! Configuration file management.
//!
//! Loads client settings from a TOML file, with environment-variable
//! overrides applied on top.
//!
//! # Configuration format
//!
//! ```toml
//! [server]
//! url = "http://localhost:8080/api/v1"  # Gateway base URL
//! timeout = 10                          # Request timeout in seconds
//! health_url = "http://localhost:8080/health"  # Optional; derived from url when absent
//!
//! [auth]
//! credentials_path = "/home/user/.config/oto-link/credentials.toml"
//! ```
//!
//! Environment overrides: `OTO_LINK_URL`, `OTO_LINK_TIMEOUT`,
//! `OTO_LINK_HEALTH_URL`, `OTO_LINK_CREDENTIALS_PATH`.

use crate::client::{OtoLinkClient, OtoLinkClientBuilder};
use crate::credentials::FileCredentialStore;
use crate::error::{OtoLinkError, Result};
use crate::timeouts::OtoLinkTimeouts;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// Client configuration loaded from a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Server connection settings
    pub server: Option<ServerConfig>,

    /// Credential storage settings
    pub auth: Option<AuthConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Gateway base URL (e.g. http://localhost:8080/api/v1)
    pub url: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Liveness endpoint URL; derived from the base URL's origin when absent
    pub health_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Path of the on-disk token file
    pub credentials_path: Option<PathBuf>,
}

fn default_timeout() -> u64 {
    10
}

/// Default configuration file location:
/// `<config dir>/oto-link/config.toml`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("oto-link")
        .join("config.toml")
}

impl ClientConfig {
    /// Load configuration from a file, then apply environment overrides.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                OtoLinkError::ConfigurationError(format!("Failed to read config file: {}", e))
            })?;
            toml::from_str(&contents)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from the default location with environment overrides.
    pub fn load_default() -> Result<Self> {
        Self::load(&default_config_path())
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                OtoLinkError::ConfigurationError(format!("Failed to create config dir: {}", e))
            })?;
        }
        let contents = toml::to_string_pretty(self)
            .map_err(|e| OtoLinkError::ConfigurationError(format!("Failed to serialize: {}", e)))?;
        std::fs::write(path, contents).map_err(|e| {
            OtoLinkError::ConfigurationError(format!("Failed to write config file: {}", e))
        })?;
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        let server = self.server.get_or_insert_with(|| ServerConfig {
            url: None,
            timeout: default_timeout(),
            health_url: None,
        });
        if let Ok(url) = std::env::var("OTO_LINK_URL") {
            server.url = Some(url);
        }
        if let Ok(timeout) = std::env::var("OTO_LINK_TIMEOUT") {
            if let Ok(seconds) = timeout.parse() {
                server.timeout = seconds;
            }
        }
        if let Ok(health_url) = std::env::var("OTO_LINK_HEALTH_URL") {
            server.health_url = Some(health_url);
        }
        if let Ok(path) = std::env::var("OTO_LINK_CREDENTIALS_PATH") {
            self.auth.get_or_insert_with(AuthConfig::default).credentials_path =
                Some(PathBuf::from(path));
        }
    }

    /// The resolved server section, with defaults filled in.
    pub fn resolved_server(&self) -> ServerConfig {
        self.server.clone().unwrap_or(ServerConfig {
            url: None,
            timeout: default_timeout(),
            health_url: None,
        })
    }

    /// Turn the configuration into a client builder.
    ///
    /// Fails when no base URL is configured. The credential store is
    /// file-backed at the configured (or default) path.
    pub fn into_builder(self) -> Result<OtoLinkClientBuilder> {
        let server = self.resolved_server();
        let url = server.url.ok_or_else(|| {
            OtoLinkError::ConfigurationError("No server URL configured".to_string())
        })?;

        let store = match self.auth.and_then(|auth| auth.credentials_path) {
            Some(path) => FileCredentialStore::with_path(path),
            None => FileCredentialStore::new(),
        };

        let mut builder = OtoLinkClient::builder()
            .base_url(url)
            .timeouts(
                OtoLinkTimeouts::default().with_request_timeout(Duration::from_secs(server.timeout)),
            )
            .credential_store(Arc::new(store));
        if let Some(health_url) = server.health_url {
            builder = builder.health_url(health_url);
        }
        Ok(builder)
    }

    /// Build a ready client from the configuration.
    pub fn build_client(self) -> Result<OtoLinkClient> {
        self.into_builder()?.build()
    }
}
