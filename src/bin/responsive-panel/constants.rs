use std::time::Duration;

/// Initial window size in logical pixels.
pub const WINDOW_SIZE: [f32; 2] = [1280.0, 800.0];

/// Width of the bookmarks side panel in pixels.
pub const SIDEBAR_WIDTH: f32 = 280.0;

/// Inner padding between the panel border and the document.
pub const PANEL_PADDING: f32 = 8.0;

/// How often eframe flushes the store to disk.
pub const AUTO_SAVE_INTERVAL: Duration = Duration::from_secs(1);

pub const USER_AGENT: &str = concat!("responsive-panel/", env!("CARGO_PKG_VERSION"));
