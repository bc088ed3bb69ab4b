//! Core of the responsive document panel: bookmarks, sizing, theme and the
//! controller that ties them to user events.

pub mod address;
pub mod bookmarks;
pub mod config;
pub mod controller;
pub mod document;
pub mod notice;
pub mod render;
pub mod sizing;
pub mod store;
pub mod theme;

pub use bookmarks::{AddOutcome, Bookmark, Bookmarks};
pub use config::{Config, ConfigError, Preset, PresetSize, QuickLink};
pub use controller::{Effect, Event, PanelController};
pub use document::DocumentSummary;
pub use notice::{Notice, NoticeLevel};
pub use render::{BookmarkList, BookmarkRow};
pub use sizing::{PanelSize, SizeMode, Viewport};
pub use store::{MemoryStore, Store};
pub use theme::{Theme, ThemeMode};
