//! Credential store - where the staff bearer token lives
//!
//! Set at login, read by every authenticated request, cleared at logout.
//! Injected into the HTTP client so tests can supply their own store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::models::User;
use tokio::sync::RwLock;

use crate::ClientResult;

/// Stored credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token issued at login
    pub token: String,
    /// User the token belongs to
    pub user: Option<User>,
}

impl Credential {
    pub fn new(token: impl Into<String>, user: Option<User>) -> Self {
        Self {
            token: token.into(),
            user,
        }
    }
}

/// Credential store capability
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Current credential, if logged in
    async fn load(&self) -> Option<Credential>;

    /// Replace the stored credential
    async fn save(&self, credential: Credential) -> ClientResult<()>;

    /// Forget the stored credential
    async fn clear(&self) -> ClientResult<()>;

    /// Current bearer token
    async fn token(&self) -> Option<String> {
        self.load().await.map(|c| c.token)
    }

    /// Current signed-in user
    async fn user(&self) -> Option<User> {
        self.load().await.and_then(|c| c.user)
    }
}

/// In-process credential store
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    credential: RwLock<Option<Credential>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            credential: RwLock::new(Some(Credential::new(token, None))),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn load(&self) -> Option<Credential> {
        self.credential.read().await.clone()
    }

    async fn save(&self, credential: Credential) -> ClientResult<()> {
        *self.credential.write().await = Some(credential);
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        *self.credential.write().await = None;
        Ok(())
    }
}

/// JSON file credential store, survives process restarts
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the credential file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether a credential file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn load(&self) -> Option<Credential> {
        let json = tokio::fs::read_to_string(&self.path).await.ok()?;
        match serde_json::from_str(&json) {
            Ok(credential) => Some(credential),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring unreadable credential file");
                None
            }
        }
    }

    async fn save(&self, credential: Credential) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(&credential)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }

    async fn clear(&self) -> ClientResult<()> {
        if self.path.exists() {
            tokio::fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::UserRole;
    use tempfile::TempDir;

    fn waiter() -> User {
        User {
            id: "u1".into(),
            username: "budi".into(),
            role: UserRole::Waiter,
            entity_id: Some("e1".into()),
            entity: Some("Branch One".into()),
        }
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryCredentialStore::new();
        assert!(store.token().await.is_none());

        store.save(Credential::new("tok", Some(waiter()))).await.unwrap();
        assert_eq!(store.token().await.as_deref(), Some("tok"));
        assert_eq!(store.user().await.unwrap().username, "budi");

        store.clear().await.unwrap();
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_file_store_save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCredentialStore::new(temp_dir.path().join("auth").join("credential.json"));

        assert!(!store.exists());
        assert!(store.load().await.is_none());

        store.save(Credential::new("tok", Some(waiter()))).await.unwrap();
        assert!(store.exists());

        // A fresh handle on the same file sees the saved credential
        let reopened = FileCredentialStore::new(store.path());
        assert_eq!(reopened.load().await, Some(Credential::new("tok", Some(waiter()))));

        store.clear().await.unwrap();
        assert!(!store.exists());
        assert!(store.token().await.is_none());
    }

    #[tokio::test]
    async fn test_file_store_ignores_garbage() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("credential.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileCredentialStore::new(path);
        assert!(store.load().await.is_none());
    }
}
