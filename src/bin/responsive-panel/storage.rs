//! Bridges the in-memory store to eframe's persistent storage.
//!
//! `eframe::Storage` cannot delete keys, so an empty string stands for an
//! absent value.

use responsive_panel::store::PERSISTED_KEYS;
use responsive_panel::{MemoryStore, Store};

pub fn hydrate(storage: Option<&dyn eframe::Storage>) -> MemoryStore {
    let mut store = MemoryStore::new();
    let Some(storage) = storage else {
        log::warn!("No persistent storage available; bookmarks will not be saved");
        return store;
    };

    for key in PERSISTED_KEYS {
        if let Some(value) = storage.get_string(key)
            && !value.is_empty()
        {
            store.set(key, value);
        }
    }

    store
}

pub fn flush(store: &MemoryStore, storage: &mut dyn eframe::Storage) {
    for key in PERSISTED_KEYS {
        storage.set_string(key, store.get(key).unwrap_or_default());
    }
}
