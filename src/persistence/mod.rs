//! Storage adapter over the browser's key-value storage.
//!
//! The whole store state is one JSON blob under one fixed key. Loads are
//! tolerant - absent and corrupt both come back as `None` - and saves are
//! fire-and-forget: a failed write leaves the in-memory state authoritative
//! for the rest of the session, it just won't survive a reload.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::{Client, Post, Protocol, Task};

/// LocalStorage key holding the serialized collections
pub const STATE_KEY: &str = "nerozarb-os-v2";

/// SessionStorage key holding the role flag
pub const ROLE_KEY: &str = "nerozarb_role";

/// A key-value storage area (LocalStorage, SessionStorage, or in-memory).
///
/// Failures degrade at the edge: unavailable storage reads as `None` and
/// writes return `false`. Callers log and move on.
pub trait StorageArea {
    fn read(&self, key: &str) -> Option<String>;
    /// Returns `false` if the value could not be stored
    fn write(&self, key: &str, value: &str) -> bool;
    fn remove(&self, key: &str);
}

/// The full persisted layout: four top-level arrays, one per collection.
///
/// Every field defaults, so a blob missing a sub-collection still hydrates
/// with that collection empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    pub clients: Vec<Client>,
    pub tasks: Vec<Task>,
    pub posts: Vec<Post>,
    pub protocols: Vec<Protocol>,
}

/// Load the persisted state from `area`, treating corrupt data as absent.
pub fn load_state(area: &dyn StorageArea, key: &str) -> Option<PersistedState> {
    let json = area.read(key)?;
    match serde_json::from_str(&json) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("Discarding corrupt persisted state: {e}");
            None
        }
    }
}

/// Overwrite the persisted state. Best effort: failures are logged, never
/// surfaced to the caller.
pub fn save_state(area: &dyn StorageArea, key: &str, state: &PersistedState) {
    match serde_json::to_string(state) {
        Ok(json) => {
            if !area.write(key, &json) {
                log::warn!("Storage write failed; changes will not survive reload");
            }
        }
        Err(e) => log::warn!("Failed to serialize state: {e}"),
    }
}

/// Browser LocalStorage - durable across sessions for this origin (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl StorageArea for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        else {
            return false;
        };
        // set_item errors on quota exceeded or storage disabled
        storage.set_item(key, value).is_ok()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(key);
        }
    }
}

/// Browser SessionStorage - cleared when the tab session ends (WASM only)
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStorage;

#[cfg(target_arch = "wasm32")]
impl StorageArea for SessionStorage {
    fn read(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()
            .and_then(|w| w.session_storage().ok())
            .flatten()?;
        storage.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        let Some(storage) = web_sys::window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
        else {
            return false;
        };
        storage.set_item(key, value).is_ok()
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = web_sys::window()
            .and_then(|w| w.session_storage().ok())
            .flatten()
        {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory area for native targets and tests
#[derive(Debug, Default)]
pub struct MemoryArea {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryArea {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageArea for MemoryArea {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> bool {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}
