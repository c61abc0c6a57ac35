//! Session Persistence
//!
//! Tokens and identity kept in browser storage. The presence of a session
//! decides which views render.

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::config::{KEY_ACCESS, KEY_NAME, KEY_REFRESH, KEY_ROLE};
use crate::models::{LoginGrant, Role};

/// String key/value store holding the session
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
pub struct BrowserStorage {
    storage: Option<web_sys::Storage>,
}

impl BrowserStorage {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[SESSION] localStorage unavailable, sessions will not persist");
        }
        Self { storage }
    }
}

impl Default for BrowserStorage {
    fn default() -> Self {
        Self::new()
    }
}

/// Log a failed storage write; `true` when the call went through
fn storage_ok<E>(result: Result<(), E>, action: &str, key: &str) -> bool {
    if result.is_err() {
        log::error!("[SESSION] failed to {} {}", action, key);
        return false;
    }
    true
}

impl TokenStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            storage_ok(storage.set_item(key, value), "write", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = &self.storage {
            storage_ok(storage.remove_item(key), "remove", key);
        }
    }
}

/// In-memory store
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

#[cfg(test)]
impl TokenStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.borrow_mut().remove(key);
    }
}

/// Signed-in identity
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub access: String,
    pub refresh: String,
    pub display_name: String,
    pub role: Role,
}

impl From<LoginGrant> for Session {
    fn from(grant: LoginGrant) -> Self {
        Self {
            access: grant.access,
            refresh: grant.refresh,
            display_name: grant.display_name,
            role: grant.role,
        }
    }
}

impl Session {
    /// Requires an access token and a display name; a missing or unknown
    /// role falls back to citizen
    pub fn load(store: &dyn TokenStore) -> Option<Session> {
        let access = store.get(KEY_ACCESS).filter(|t| !t.is_empty())?;
        let display_name = store.get(KEY_NAME).filter(|n| !n.is_empty())?;
        let role = store
            .get(KEY_ROLE)
            .and_then(|r| Role::from_storage(&r))
            .unwrap_or(Role::Citizen);
        Some(Session {
            access,
            refresh: store.get(KEY_REFRESH).unwrap_or_default(),
            display_name,
            role,
        })
    }

    pub fn save(&self, store: &dyn TokenStore) {
        store.set(KEY_ACCESS, &self.access);
        store.set(KEY_REFRESH, &self.refresh);
        store.set(KEY_NAME, &self.display_name);
        store.set(KEY_ROLE, self.role.storage_value());
    }

    /// Logout and 401 handling
    pub fn clear(store: &dyn TokenStore) {
        for key in [KEY_ACCESS, KEY_REFRESH, KEY_NAME, KEY_ROLE] {
            store.remove(key);
        }
    }

    pub fn is_officer(&self) -> bool {
        self.role.is_officer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Rank;

    fn make_session(role: Role) -> Session {
        Session {
            access: "acc".to_string(),
            refresh: "ref".to_string(),
            display_name: "Asad".to_string(),
            role,
        }
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStorage::default();
        let session = make_session(Role::Officer(Rank::Inspector));
        session.save(&store);
        assert_eq!(Session::load(&store), Some(session));
    }

    #[test]
    fn test_missing_token_means_logged_out() {
        let store = MemoryStorage::default();
        store.set(KEY_NAME, "Asad");
        assert_eq!(Session::load(&store), None);
        store.set(KEY_ACCESS, "");
        assert_eq!(Session::load(&store), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemoryStorage::default();
        make_session(Role::Citizen).save(&store);
        Session::clear(&store);
        assert_eq!(Session::load(&store), None);
        assert_eq!(store.get(KEY_REFRESH), None);
        assert_eq!(store.get(KEY_ROLE), None);
    }

    #[test]
    fn test_unknown_role_is_citizen() {
        let store = MemoryStorage::default();
        make_session(Role::Officer(Rank::Si)).save(&store);
        store.set(KEY_ROLE, "Commissioner");
        let loaded = Session::load(&store).unwrap();
        assert_eq!(loaded.role, Role::Citizen);
        assert!(!loaded.is_officer());
    }

    #[test]
    fn test_storage_failure_is_logged() {
        // another test may have installed the logger already
        let _ = rolling_logger::init(log::LevelFilter::Debug, 1024);

        assert!(storage_ok(Ok::<(), ()>(()), "remove", "challan_access"));
        assert!(!storage_ok(Err(()), "remove", "challan_refresh"));
        assert!(rolling_logger::recent()
            .iter()
            .any(|line| line.level == log::Level::Error && line.message.contains("remove challan_refresh")));
    }
}

