//! Key/value persistence port.

use std::collections::HashMap;

/// Key holding the JSON-encoded bookmark sequence.
pub const BOOKMARKS_KEY: &str = "iframe-bookmarks";

/// Key holding the explicit theme preference, absent in auto mode.
pub const THEME_KEY: &str = "preferred-theme";

/// Every key the application writes.
pub const PERSISTED_KEYS: [&str; 2] = [BOOKMARKS_KEY, THEME_KEY];

/// String storage that survives restarts.
pub trait Store {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store. The application hydrates one from the eframe storage
/// on startup and flushes it back when eframe asks to save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_owned(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
