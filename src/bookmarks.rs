//! Persisted bookmark list.
//!
//! The in-memory sequence is the source of truth. It is ordered newest first
//! and written back to the [`Store`] in full after every mutation.

use crate::address;
use crate::store::{BOOKMARKS_KEY, Store};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved panel address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Absolute address of the page
    pub url: String,
    /// Display label, derived from the host
    pub title: String,
    /// Creation time, stored as ISO-8601
    pub added: DateTime<Utc>,
}

impl Bookmark {
    pub fn new(url: String, added: DateTime<Utc>) -> Self {
        let title = address::derive_title(&url);
        Self { url, title, added }
    }
}

/// Result of [`Bookmarks::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added(Bookmark),
    /// The address is already bookmarked; nothing changed.
    Duplicate(String),
    /// The address was blank.
    Invalid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bookmarks {
    entries: Vec<Bookmark>,
}

impl Bookmarks {
    /// Reads the persisted sequence. A missing key is an empty list; a value
    /// that fails to decode is logged and treated as empty.
    pub fn load(store: &impl Store) -> Self {
        let Some(raw) = store.get(BOOKMARKS_KEY) else {
            return Self::default();
        };

        match serde_json::from_str::<Vec<Bookmark>>(&raw) {
            Ok(entries) => Self { entries },
            Err(err) => {
                log::warn!("Ignoring unreadable bookmarks in store: {err}");
                Self::default()
            }
        }
    }

    /// Bookmarks `url` at the head of the list.
    ///
    /// Duplicates are detected by exact string match after normalization.
    pub fn add(&mut self, store: &mut impl Store, url: &str, now: DateTime<Utc>) -> AddOutcome {
        let Some(url) = address::normalize(url) else {
            return AddOutcome::Invalid;
        };

        if self.entries.iter().any(|bookmark| bookmark.url == url) {
            return AddOutcome::Duplicate(url);
        }

        let bookmark = Bookmark::new(url, now);
        self.entries.insert(0, bookmark.clone());
        self.persist(store);
        log::info!("Bookmarked {} ({})", bookmark.url, bookmark.title);

        AddOutcome::Added(bookmark)
    }

    /// Removes the bookmark at `index`. Out of range is a no-op.
    pub fn remove(&mut self, store: &mut impl Store, index: usize) -> Option<Bookmark> {
        if index >= self.entries.len() {
            return None;
        }

        let removed = self.entries.remove(index);
        self.persist(store);
        log::info!("Removed bookmark {}", removed.url);

        Some(removed)
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.entries.get(index)
    }

    pub fn list(&self) -> &[Bookmark] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self, store: &mut impl Store) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => store.set(BOOKMARKS_KEY, json),
            Err(err) => log::error!("Failed to encode bookmarks: {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_760_000_000 + secs, 0).unwrap()
    }

    #[test]
    fn add_normalizes_and_derives_title() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::load(&store);

        let outcome = bookmarks.add(&mut store, "example.com", at(0));

        let AddOutcome::Added(bookmark) = outcome else {
            panic!("expected bookmark to be added, got {outcome:?}");
        };
        assert_eq!(bookmark.url, "https://example.com");
        assert_eq!(bookmark.title, "example.com");
        assert_eq!(bookmarks.list(), &[bookmark]);
    }

    #[test]
    fn duplicate_is_rejected_without_write() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::default();

        bookmarks.add(&mut store, "https://www.example.com", at(0));
        let persisted = store.get(BOOKMARKS_KEY);

        let outcome = bookmarks.add(&mut store, "https://www.example.com", at(5));

        assert_eq!(
            outcome,
            AddOutcome::Duplicate("https://www.example.com".to_owned())
        );
        assert_eq!(bookmarks.len(), 1);
        assert_eq!(store.get(BOOKMARKS_KEY), persisted);
    }

    #[test]
    fn trailing_slash_variant_is_distinct() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::default();

        bookmarks.add(&mut store, "https://example.com", at(0));
        bookmarks.add(&mut store, "https://example.com/", at(1));

        assert_eq!(bookmarks.len(), 2);
    }

    #[test]
    fn blank_address_is_invalid() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::default();

        assert_eq!(bookmarks.add(&mut store, "  ", at(0)), AddOutcome::Invalid);
        assert!(bookmarks.is_empty());
        assert_eq!(store.get(BOOKMARKS_KEY), None);
    }

    #[test]
    fn newest_first() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::default();

        bookmarks.add(&mut store, "a.example", at(0));
        bookmarks.add(&mut store, "b.example", at(1));

        let titles: Vec<_> = bookmarks.list().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, ["b.example", "a.example"]);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::default();
        bookmarks.add(&mut store, "a.example", at(0));

        assert_eq!(bookmarks.remove(&mut store, 1), None);
        assert_eq!(bookmarks.len(), 1);
        assert!(bookmarks.get(1).is_none());
    }

    #[test]
    fn remove_persists_immediately() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::default();
        bookmarks.add(&mut store, "a.example", at(0));
        bookmarks.add(&mut store, "b.example", at(1));

        let removed = bookmarks.remove(&mut store, 1).unwrap();

        assert_eq!(removed.title, "a.example");
        assert_eq!(Bookmarks::load(&store), bookmarks);
    }

    #[test]
    fn serialized_shape_matches_storage_format() {
        let mut store = MemoryStore::new();
        let mut bookmarks = Bookmarks::default();
        bookmarks.add(&mut store, "https://www.example.com/docs", at(0));

        let json: serde_json::Value =
            serde_json::from_str(&store.get(BOOKMARKS_KEY).unwrap()).unwrap();

        let entry = &json[0];
        assert_eq!(entry["url"], "https://www.example.com/docs");
        assert_eq!(entry["title"], "example.com");
        assert!(entry["added"].as_str().unwrap().starts_with("2025-10-09T"));
    }

    #[test]
    fn loads_records_written_by_other_clients() {
        let mut store = MemoryStore::new();
        store.set(
            BOOKMARKS_KEY,
            r#"[{"url":"https://docs.rs","title":"docs.rs","added":"2024-05-01T08:30:00.000Z"}]"#
                .to_owned(),
        );

        let bookmarks = Bookmarks::load(&store);

        assert_eq!(bookmarks.len(), 1);
        assert_eq!(bookmarks.get(0).unwrap().title, "docs.rs");
    }

    #[test]
    fn corrupt_store_value_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(BOOKMARKS_KEY, "{not json".to_owned());

        assert!(Bookmarks::load(&store).is_empty());
    }
}
