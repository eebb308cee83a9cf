//! Key-value slots the store persists its snapshot into.
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::logging::log;

use crate::errors::PersistError;

/// A single-profile key-value slot holding serialized store snapshots.
pub trait PersistSlot {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// In-process slot. Clones share the same backing map, so a store reopened
/// on a clone sees what the previous store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PersistSlot for MemorySlot {
    fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self.get(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::LocalStorageSlot;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::*;
    use wasm_bindgen::JsValue;

    fn js_err(e: JsValue) -> PersistError {
        PersistError::Io(format!("{:?}", e))
    }

    /// `window.localStorage` of the current browser profile.
    pub struct LocalStorageSlot {
        storage: web_sys::Storage,
    }

    impl LocalStorageSlot {
        pub fn from_window() -> Result<Self, PersistError> {
            let window = web_sys::window()
                .ok_or_else(|| PersistError::Unavailable("no window".into()))?;
            let storage = window
                .local_storage()
                .map_err(js_err)?
                .ok_or_else(|| PersistError::Unavailable("localStorage disabled".into()))?;
            Ok(Self { storage })
        }
    }

    impl PersistSlot for LocalStorageSlot {
        fn read(&self, key: &str) -> Result<Option<String>, PersistError> {
            self.storage.get_item(key).map_err(js_err)
        }

        fn write(&mut self, key: &str, value: &str) -> Result<(), PersistError> {
            self.storage.set_item(key, value).map_err(js_err)
        }
    }
}

/// The slot a running app should persist into: the browser's localStorage
/// when there is one, an in-memory slot otherwise (server render, native).
pub fn default_slot() -> Box<dyn PersistSlot> {
    #[cfg(target_arch = "wasm32")]
    {
        match LocalStorageSlot::from_window() {
            Ok(slot) => return Box::new(slot),
            Err(e) => log!("[SLOT] localStorage unavailable, using memory: {}", e),
        }
    }
    log!("[SLOT] Using in-memory slot");
    Box::new(MemorySlot::new())
}
