//! Session Persistence
//!
//! Tokens and the signed-in user survive reloads through a small
//! key/value seam. The browser uses `localStorage`, the CLI a JSON file,
//! tests the in-memory store.
//!
//! Operator and customer sessions live side by side under different keys
//! so signing out of one never touches the other.

#[cfg(feature = "native")]
mod file;

#[cfg(feature = "native")]
pub use file::FileStore;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::warn;

use crate::models::User;

/// Session storage errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backend refused the write (quota, private mode, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// String key/value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}

/// Which audience a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// Admin panel staff
    Operator,
    /// Public booking site customers
    Customer,
}

impl Namespace {
    pub fn token_key(&self) -> &'static str {
        match self {
            Namespace::Operator => "token",
            Namespace::Customer => "customer_token",
        }
    }

    pub fn user_key(&self) -> &'static str {
        match self {
            Namespace::Operator => "user",
            Namespace::Customer => "customer_user",
        }
    }
}

/// What a previous visit left behind
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSession {
    pub token: String,
    /// `None` when the cached user is missing or unreadable
    pub user: Option<User>,
}

/// Token and user persistence for one namespace
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
    namespace: Namespace,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, namespace: Namespace) -> Self {
        Self { store, namespace }
    }

    pub fn namespace(&self) -> Namespace {
        self.namespace
    }

    pub fn save(&self, token: &str, user: &User) -> Result<(), StoreError> {
        let user_json = serde_json::to_string(user)?;
        self.store.set(self.namespace.token_key(), token)?;
        self.store.set(self.namespace.user_key(), &user_json)?;
        Ok(())
    }

    pub fn token(&self) -> Option<String> {
        self.store
            .get(self.namespace.token_key())
            .filter(|t| !t.is_empty())
    }

    pub fn load(&self) -> Option<StoredSession> {
        let token = self.token()?;
        let user = self.store.get(self.namespace.user_key()).and_then(|raw| {
            serde_json::from_str(&raw)
                .map_err(|e| warn!(error = %e, "Discarding unreadable cached user"))
                .ok()
        });
        Some(StoredSession { token, user })
    }

    /// Remove token and user of this namespace only.
    ///
    /// Both keys are attempted; the first failure is returned.
    pub fn clear(&self) -> Result<(), StoreError> {
        let token = self.store.remove(self.namespace.token_key());
        let user = self.store.remove(self.namespace.user_key());
        token.and(user)
    }
}

#[cfg(test)]
pub(crate) fn sample_user(role: crate::models::Role) -> User {
    User {
        id: "u1".to_string(),
        email: "ayse@rentacar.com".to_string(),
        full_name: "Ayse Yilmaz".to_string(),
        role,
        company_id: Some("c1".to_string()),
        phone: None,
        is_active: true,
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    #[test]
    fn test_save_and_load() {
        let store = MemoryStore::new();
        let session = SessionStore::new(&store, Namespace::Operator);
        session.save("tok-1", &sample_user(Role::FirmaAdmin)).unwrap();

        let loaded = session.load().unwrap();
        assert_eq!(loaded.token, "tok-1");
        assert_eq!(loaded.user.unwrap().role, Role::FirmaAdmin);
        assert_eq!(store.get("token").as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_namespaces_are_independent() {
        let store = MemoryStore::new();
        let operator = SessionStore::new(&store, Namespace::Operator);
        let customer = SessionStore::new(&store, Namespace::Customer);
        operator.save("op", &sample_user(Role::Operasyon)).unwrap();
        customer.save("cu", &sample_user(Role::Musteri)).unwrap();

        customer.clear().unwrap();
        assert!(customer.load().is_none());
        assert_eq!(operator.load().unwrap().token, "op");
        assert_eq!(store.len(), 2);
    }

    /// Refuses to remove one key, delegates the rest
    struct StuckKey<'a> {
        inner: &'a MemoryStore,
        stuck: &'static str,
    }

    impl KeyValueStore for StuckKey<'_> {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), StoreError> {
            if key == self.stuck {
                return Err(StoreError::Unavailable("locked".into()));
            }
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_clear_removes_user_when_token_removal_fails() {
        let store = MemoryStore::new();
        let session = SessionStore::new(
            StuckKey { inner: &store, stuck: "token" },
            Namespace::Operator,
        );
        session.save("tok", &sample_user(Role::Personel)).unwrap();

        let err = session.clear().unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        assert!(store.get("user").is_none());
        assert_eq!(store.get("token").as_deref(), Some("tok"));
    }

    #[test]
    fn test_corrupt_user_keeps_token() {
        let store = MemoryStore::new();
        store.set("token", "tok").unwrap();
        store.set("user", "{not json").unwrap();

        let loaded = SessionStore::new(&store, Namespace::Operator).load().unwrap();
        assert_eq!(loaded.token, "tok");
        assert!(loaded.user.is_none());
    }
}
