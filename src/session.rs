//! Session flag storage behind an injected store. The console treats the
//! presence of a token key as the sole authorization gate, so the store is a
//! plain string key/value surface with last-writer-wins semantics and no TTL.
//! Hosts provide their own backing (browser storage, keychain); the in-memory
//! store here is the default for tests and the CLI.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Well-known session keys. The names are part of the observable contract
/// shared with the backend console deployments; do not rename them.
pub mod keys {
    /// Admin bearer token attached to every API request when present.
    pub const AUTH_TOKEN: &str = "authToken";
    /// Admin profile JSON (`{"username": ..., "role": "admin"}`).
    pub const USER_DATA: &str = "userData";
    /// Signed-in student profile JSON.
    pub const STUDENT_DATA: &str = "studentData";
    /// Student session token returned by the login endpoint.
    pub const STUDENT_TOKEN: &str = "studentToken";
}

/// String key/value session storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);

    /// Removes every well-known session key. Used when the backend rejects a
    /// request as unauthorized and the whole session must be discarded.
    fn clear_all(&self) {
        self.remove(keys::AUTH_TOKEN);
        self.remove(keys::USER_DATA);
        self.remove(keys::STUDENT_DATA);
        self.remove(keys::STUDENT_TOKEN);
    }
}

/// In-memory session store. One per process; interior mutability so the
/// store can be shared behind `Arc` by the HTTP client and the auth flows.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        // A poisoned lock still holds valid data for a string map.
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values().remove(key);
    }
}
