//! Display projection of the bookmark list.
//!
//! A [`BookmarkList`] is rebuilt from scratch after every mutation. Rows
//! refer to bookmarks by position, so a list built before a mutation must
//! not be used to issue actions afterwards.

use crate::bookmarks::Bookmark;

pub const EMPTY_PLACEHOLDER: &str = "No bookmarks yet. Load a page and bookmark it.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkRow {
    /// Position in the bookmark sequence when this row was built
    pub index: usize,
    pub title: String,
    pub url: String,
    pub added: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookmarkList {
    Placeholder(&'static str),
    Rows(Vec<BookmarkRow>),
}

impl BookmarkList {
    pub fn build(bookmarks: &[Bookmark]) -> Self {
        if bookmarks.is_empty() {
            return Self::Placeholder(EMPTY_PLACEHOLDER);
        }

        let rows = bookmarks
            .iter()
            .enumerate()
            .map(|(index, bookmark)| BookmarkRow {
                index,
                title: bookmark.title.clone(),
                url: bookmark.url.clone(),
                added: bookmark.added.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect();

        Self::Rows(rows)
    }
}
