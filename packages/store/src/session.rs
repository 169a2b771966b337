//! # Login session persistence
//!
//! The only state that survives a page reload is the id of the signed-in
//! account, stored under [`LOGIN_KEY`]. [`Session`] wraps any
//! [`KeyValueStore`] so the same logic runs against browser `localStorage`
//! ([`crate::LocalStorageStore`]), the filesystem ([`crate::FileStore`]) or
//! memory ([`crate::MemoryStore`]).

/// Storage key holding the signed-in account id.
pub const LOGIN_KEY: &str = "keyLogin";

/// Synchronous string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// The persisted login state on top of a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct Session<S> {
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Id of the signed-in account, if any. Blank values count as signed out.
    pub fn login_key(&self) -> Option<String> {
        self.store
            .get(LOGIN_KEY)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.login_key().is_some()
    }

    /// Persist `user_id` as the signed-in account.
    pub fn remember(&self, user_id: &str) {
        self.store.set(LOGIN_KEY, user_id);
    }

    /// Clear the signed-in account.
    pub fn forget(&self) {
        self.store.remove(LOGIN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_remember_and_forget() {
        let session = Session::new(MemoryStore::new());
        assert!(!session.is_logged_in());

        session.remember("48213");
        assert_eq!(session.login_key().as_deref(), Some("48213"));

        session.forget();
        assert!(session.login_key().is_none());
    }

    #[test]
    fn test_blank_value_is_signed_out() {
        let store = MemoryStore::new();
        store.set(LOGIN_KEY, "  ");
        let session = Session::new(store);
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_sessions_share_backing_store() {
        let store = MemoryStore::new();
        let a = Session::new(store.clone());
        let b = Session::new(store);
        a.remember("7");
        assert_eq!(b.login_key().as_deref(), Some("7"));
    }
}
