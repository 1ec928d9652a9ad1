//! Session token storage.
//!
//! Holds the token handed out by the login endpoint together with its
//! expiry. A present-but-expired token behaves identically to an absent one
//! for every caller, including the access gate. The store is a cheap
//! cloneable handle meant to be passed in explicitly, never a hidden global.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Session token validity window granted by the login endpoint.
pub const SESSION_TTL_DAYS: i64 = 30;

/// Stored token with expiration tracking.
#[derive(Debug, Clone)]
struct StoredToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl StoredToken {
    fn is_valid(&self) -> bool {
        Utc::now() < self.expires_at
    }
}

/// Shared handle to the session token.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    inner: Arc<RwLock<Option<StoredToken>>>,
}

impl CredentialStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a token with the given validity window.
    pub fn set(&self, token: impl Into<String>, ttl_days: i64) {
        self.set_with_expiry(token, Utc::now() + Duration::days(ttl_days));
    }

    fn set_with_expiry(&self, token: impl Into<String>, expires_at: DateTime<Utc>) {
        let mut guard = self.inner.write().expect("credential store lock poisoned");
        *guard = Some(StoredToken {
            token: token.into(),
            expires_at,
        });
        debug!("session token stored");
    }

    /// The current token, or `None` when never set, cleared, or expired.
    pub fn get(&self) -> Option<String> {
        let guard = self.inner.read().expect("credential store lock poisoned");
        guard
            .as_ref()
            .filter(|stored| stored.is_valid())
            .map(|stored| stored.token.clone())
    }

    /// True when a usable token is present.
    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }

    /// Remove the token (logout).
    pub fn clear(&self) {
        let mut guard = self.inner.write().expect("credential store lock poisoned");
        if guard.take().is_some() {
            debug!("session token cleared");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_absent() {
        let store = CredentialStore::new();
        assert_eq!(store.get(), None);
        assert!(!store.is_present());
    }

    #[test]
    fn test_set_then_get() {
        let store = CredentialStore::new();
        store.set("tok-123", SESSION_TTL_DAYS);
        assert_eq!(store.get().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_clear_removes_token() {
        let store = CredentialStore::new();
        store.set("tok-123", SESSION_TTL_DAYS);
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_expired_token_reads_as_absent() {
        let store = CredentialStore::new();
        store.set_with_expiry("tok-123", Utc::now() - Duration::seconds(1));
        assert_eq!(store.get(), None);
        assert!(!store.is_present());
    }

    #[test]
    fn test_clones_share_state() {
        let store = CredentialStore::new();
        let handle = store.clone();
        store.set("tok-123", SESSION_TTL_DAYS);
        assert_eq!(handle.get().as_deref(), Some("tok-123"));
        handle.clear();
        assert_eq!(store.get(), None);
    }
}
