//! Credential storage abstraction for OtoPOS clients.
//!
//! The bearer token must survive process restarts: a returning user should
//! not have to log in again while the token is valid. [`CredentialStore`]
//! abstracts the durable side; the client keeps a working copy in memory
//! and writes through on every change.
//!
//! Two implementations ship with the crate: [`MemoryCredentialStore`]
//! (tests, ephemeral sessions) and [`FileCredentialStore`] (TOML file with
//! 0600 permissions on Unix).

use crate::error::{OtoLinkError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Trait for credential storage backends.
///
/// Implementations store a single opaque bearer token; absence means
/// unauthenticated at startup. All methods are callable from multiple
/// threads, so implementations use interior mutability.
///
/// # Security Note
///
/// Implementations MUST ensure the token is stored securely: files should
/// use restrictive permissions (0600 on Unix) and the token must never be
/// logged.
pub trait CredentialStore: Send + Sync {
    /// Read the stored token, if any. `Ok(None)` means no credential.
    fn load(&self) -> Result<Option<String>>;

    /// Persist the token, overwriting any previous one.
    fn store(&self, token: &str) -> Result<()>;

    /// Remove the stored token. Idempotent: clearing an empty store is a
    /// no-op.
    fn clear(&self) -> Result<()>;
}

/// In-memory credential store for testing and ephemeral sessions.
///
/// Does NOT persist the token across restarts.
///
/// # Example
///
/// ```rust
/// use oto_link::credentials::{CredentialStore, MemoryCredentialStore};
///
/// let store = MemoryCredentialStore::new();
/// store.store("abc").unwrap();
/// assert_eq!(store.load().unwrap(), Some("abc".to_string()));
/// store.clear().unwrap();
/// assert_eq!(store.load().unwrap(), None);
/// ```
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    /// Create a new empty in-memory credential store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a token (test convenience).
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self
            .token
            .lock()
            .map_err(|_| OtoLinkError::StorageError("credential lock poisoned".into()))?
            .clone())
    }

    fn store(&self, token: &str) -> Result<()> {
        *self
            .token
            .lock()
            .map_err(|_| OtoLinkError::StorageError("credential lock poisoned".into()))? =
            Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self
            .token
            .lock()
            .map_err(|_| OtoLinkError::StorageError("credential lock poisoned".into()))? = None;
        Ok(())
    }
}

/// On-disk TOML layout of the credentials file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CredentialsFile {
    /// Bearer token
    token: Option<String>,
}

/// File-based credential storage.
///
/// Persists the bearer token to `~/.config/oto-link/credentials.toml`
/// (overridable via [`FileCredentialStore::with_path`]) with 0600
/// permissions on Unix.
#[derive(Debug)]
pub struct FileCredentialStore {
    file_path: PathBuf,
}

impl FileCredentialStore {
    /// Default credentials file path:
    /// `<config dir>/oto-link/credentials.toml`.
    pub fn default_path() -> PathBuf {
        if let Some(config_dir) = dirs::config_dir() {
            config_dir.join("oto-link").join("credentials.toml")
        } else if let Some(home_dir) = dirs::home_dir() {
            home_dir
                .join(".config")
                .join("oto-link")
                .join("credentials.toml")
        } else {
            PathBuf::from(".oto-link").join("credentials.toml")
        }
    }

    /// Create a store at the default location.
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Create a store at a custom location.
    pub fn with_path(file_path: PathBuf) -> Self {
        Self { file_path }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &PathBuf {
        &self.file_path
    }

    fn write_file(&self, contents: &CredentialsFile) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| OtoLinkError::StorageError(e.to_string()))?;
        }
        let toml_text = toml::to_string_pretty(contents)
            .map_err(|e| OtoLinkError::StorageError(e.to_string()))?;
        fs::write(&self.file_path, toml_text)
            .map_err(|e| OtoLinkError::StorageError(e.to_string()))?;

        // Owner read/write only; the file holds a live session token.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&self.file_path, perms)
                .map_err(|e| OtoLinkError::StorageError(e.to_string()))?;
        }

        Ok(())
    }
}

impl Default for FileCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<String>> {
        if !self.file_path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.file_path)
            .map_err(|e| OtoLinkError::StorageError(e.to_string()))?;
        let parsed: CredentialsFile = toml::from_str(&text)
            .map_err(|e| OtoLinkError::StorageError(format!("corrupt credentials file: {}", e)))?;
        Ok(parsed.token)
    }

    fn store(&self, token: &str) -> Result<()> {
        self.write_file(&CredentialsFile {
            token: Some(token.to_string()),
        })
    }

    fn clear(&self) -> Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)
                .map_err(|e| OtoLinkError::StorageError(e.to_string()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load().unwrap(), None);

        store.store("token-1").unwrap();
        assert_eq!(store.load().unwrap(), Some("token-1".to_string()));

        store.store("token-2").unwrap();
        assert_eq!(store.load().unwrap(), Some("token-2".to_string()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Idempotent clear
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        let store = FileCredentialStore::with_path(path.clone());

        assert_eq!(store.load().unwrap(), None);

        store.store("abc").unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), Some("abc".to_string()));

        // A fresh store instance sees the persisted token.
        let reopened = FileCredentialStore::with_path(path.clone());
        assert_eq!(reopened.load().unwrap(), Some("abc".to_string()));

        store.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(store.load().unwrap(), None);

        // Idempotent clear on a missing file
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_file_store_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        let store = FileCredentialStore::with_path(path.clone());
        store.store("abc").unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.toml");
        fs::write(&path, "not [valid toml").unwrap();

        let store = FileCredentialStore::with_path(path);
        assert!(matches!(
            store.load(),
            Err(OtoLinkError::StorageError(_))
        ));
    }
}
