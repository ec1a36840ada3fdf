//! Session store.
//!
//! A [`SessionStore`] is created once per process from a [`SessionStorage`]
//! backend and then cloned into every page and into the API client. Reads are
//! served from memory; every write goes through [`SessionStore::set`] or
//! [`SessionStore::clear`] so the persisted keys and the in-memory copy move
//! together.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, PoisonError, RwLock},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the API key.
pub const API_KEY_KEY: &str = "apiKey";

/// The token + API key pair identifying a user to the remote service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque bearer token returned by the login endpoint.
    pub token: Option<String>,
    /// API key stored alongside the token.
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
}

impl Session {
    /// Build a session from a freshly issued token.
    #[must_use]
    pub fn new(token: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            api_key: Some(api_key.into()),
        }
    }

    /// The token, if present and non-empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }

    /// The API key, if present and non-empty.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    /// Whether the session carries a usable token.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Value for an `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }
}

/// Failure writing to the persistent backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("session storage failed for '{key}': {message}")]
pub struct StorageError {
    /// Key being written or removed.
    pub key: String,
    /// Backend-provided reason.
    pub message: String,
}

impl StorageError {
    /// Create an error for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Persistent string key-value backend.
///
/// Reads never fail: a missing or unreadable key is `None`.
pub trait SessionStorage: Send + Sync {
    /// Read a key.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a key.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key. Removing a missing key succeeds.
    ///
    /// # Errors
    /// Returns [`StorageError`] when the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend for native builds and tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Create an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let storage = Self::new();
        {
            let mut map = storage
                .entries
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            for (key, value) in entries {
                map.insert(key.to_string(), value.to_string());
            }
        }
        storage
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Process-wide session context. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    current: Arc<RwLock<Session>>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.get();
        f.debug_struct("SessionStore")
            .field("authenticated", &session.is_authenticated())
            .field("has_api_key", &session.api_key().is_some())
            .finish_non_exhaustive()
    }
}

impl SessionStore {
    /// Load the persisted session once from `storage`.
    #[must_use]
    pub fn load(storage: impl SessionStorage + 'static) -> Self {
        Self::from_shared(Arc::new(storage))
    }

    /// Same as [`SessionStore::load`] for an already shared backend.
    #[must_use]
    pub fn from_shared(storage: Arc<dyn SessionStorage>) -> Self {
        let session = Session {
            token: storage.get(TOKEN_KEY),
            api_key: storage.get(API_KEY_KEY),
        };
        debug!(
            authenticated = session.is_authenticated(),
            "session loaded from storage"
        );
        Self {
            storage,
            current: Arc::new(RwLock::new(session)),
        }
    }

    /// Store with an empty in-memory backend.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(MemoryStorage::new())
    }

    /// Current session.
    #[must_use]
    pub fn get(&self) -> Session {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a usable token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }

    /// Replace the session and persist both keys.
    ///
    /// The in-memory copy is updated before the backend is touched, so the
    /// running process stays consistent even when persistence fails. Absent
    /// fields remove their key.
    ///
    /// # Errors
    /// Returns the first [`StorageError`] raised by the backend.
    pub fn set(&self, session: Session) -> Result<(), StorageError> {
        let token = session.token().map(ToString::to_string);
        let api_key = session.api_key().map(ToString::to_string);
        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = session;

        let token_result = self.persist(TOKEN_KEY, token.as_deref());
        let api_key_result = self.persist(API_KEY_KEY, api_key.as_deref());
        token_result.and(api_key_result)
    }

    /// Forget the session and remove both keys.
    ///
    /// # Errors
    /// Returns the first [`StorageError`] raised by the backend.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.set(Session::default())
    }

    /// Drop the session holding `rejected`, a token the remote service
    /// refused. A newer session stored since the request went out is kept.
    /// Storage failures are logged rather than returned since the caller is
    /// already on an error path.
    ///
    /// Returns whether the session was dropped.
    #[must_use]
    pub fn invalidate(&self, rejected: &str) -> bool {
        {
            let mut current = self
                .current
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if current.token() != Some(rejected) {
                debug!("rejected token is no longer current, keeping session");
                return false;
            }
            *current = Session::default();
        }
        info!("session invalidated");
        let token_result = self.persist(TOKEN_KEY, None);
        let api_key_result = self.persist(API_KEY_KEY, None);
        if let Err(err) = token_result.and(api_key_result) {
            warn!(error = %err, "failed to remove invalidated session from storage");
        }
        true
    }

    fn persist(&self, key: &str, value: Option<&str>) -> Result<(), StorageError> {
        let result = match value {
            Some(value) => self.storage.set(key, value),
            None => self.storage.remove(key),
        };
        if let Err(err) = &result {
            warn!(error = %err, "session write failed");
        }
        result
    }
}
