//! Event handling for the document panel page.
//!
//! The controller never touches the UI. The front end feeds it [`Event`]s
//! and carries out the [`Effect`]s it returns.

use crate::address;
use crate::bookmarks::{AddOutcome, Bookmark, Bookmarks};
use crate::config::{Config, QuickLink};
use crate::notice::Notice;
use crate::sizing::{PanelSize, PanelSizing, SizeMode, Viewport};
use crate::store::Store;
use crate::theme::{Theme, ThemeMode, ThemeSwitcher};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Load whatever is typed in the address bar.
    LoadAddress(String),
    QuickLink(String),
    SelectPreset(usize),
    ViewportChanged(Viewport),
    ToggleFullscreen,
    Escape,
    SelectTheme(ThemeMode),
    SystemThemeChanged(Theme),
    /// Bookmark the address currently shown in the panel.
    AddBookmark,
    RemoveBookmark(usize),
    OpenBookmark(usize),
    PanelLoaded(String),
    PanelLoadFailed { url: String, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Point the panel at a new address.
    Navigate(String),
    /// Replace the text in the address bar.
    ShowAddress(String),
    ResizePanel(PanelSize),
    SetFullscreen(bool),
    LockScroll(bool),
    ApplyTheme(Theme),
    /// Rebuild the bookmark list projection.
    RenderBookmarks,
    Notify(Notice),
}

pub struct PanelController<S: Store> {
    store: S,
    bookmarks: Bookmarks,
    theme: ThemeSwitcher,
    sizing: PanelSizing,
    fullscreen: bool,
    current_address: Option<String>,
    home: Option<String>,
    quick_links: Vec<QuickLink>,
}

impl<S: Store> PanelController<S> {
    pub fn new(store: S, config: Config, system_theme: Theme) -> Self {
        let bookmarks = Bookmarks::load(&store);
        let theme = ThemeSwitcher::load(&store, system_theme);
        let sizing = PanelSizing::new(config.presets, config.aspect_ratio, config.bottom_margin);

        Self {
            store,
            bookmarks,
            theme,
            sizing,
            fullscreen: false,
            current_address: None,
            home: config.home,
            quick_links: config.quick_links,
        }
    }

    /// Effects that bring a fresh front end in line with the restored state.
    pub fn startup(&mut self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::ApplyTheme(self.theme.resolved()),
            Effect::RenderBookmarks,
        ];

        if let Some(home) = self.home.clone() {
            effects.extend(self.navigate(&home));
        }

        effects
    }

    /// Handles one event, as of `Utc::now()`.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        self.handle_at(event, Utc::now())
    }

    /// Handles one event with an explicit clock, for reproducible timestamps.
    pub fn handle_at(&mut self, event: Event, now: DateTime<Utc>) -> Vec<Effect> {
        match event {
            Event::LoadAddress(raw) | Event::QuickLink(raw) => self.navigate(&raw),
            Event::SelectPreset(index) => self
                .sizing
                .select_preset(index)
                .map(Effect::ResizePanel)
                .into_iter()
                .collect(),
            Event::ViewportChanged(viewport) => self
                .sizing
                .viewport_changed(viewport)
                .map(Effect::ResizePanel)
                .into_iter()
                .collect(),
            Event::ToggleFullscreen => self.set_fullscreen(!self.fullscreen),
            Event::Escape if self.fullscreen => self.set_fullscreen(false),
            Event::Escape => Vec::new(),
            Event::SelectTheme(mode) => {
                vec![Effect::ApplyTheme(self.theme.select(&mut self.store, mode))]
            }
            Event::SystemThemeChanged(system) => self
                .theme
                .system_changed(system)
                .map(Effect::ApplyTheme)
                .into_iter()
                .collect(),
            Event::AddBookmark => self.add_bookmark(now),
            Event::RemoveBookmark(index) => self.remove_bookmark(index),
            Event::OpenBookmark(index) => match self.bookmarks.get(index) {
                Some(bookmark) => {
                    let url = bookmark.url.clone();
                    self.navigate(&url)
                }
                None => Vec::new(),
            },
            Event::PanelLoaded(url) => {
                log::info!("Panel content loaded: {url}");
                Vec::new()
            }
            Event::PanelLoadFailed { url, reason } => {
                log::error!("Error loading panel content from {url}: {reason}");
                Vec::new()
            }
        }
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.list()
    }

    pub fn current_address(&self) -> Option<&str> {
        self.current_address.as_deref()
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode()
    }

    pub fn theme(&self) -> Theme {
        self.theme.resolved()
    }

    pub fn size_mode(&self) -> SizeMode {
        self.sizing.mode()
    }

    pub fn panel_size(&self) -> Option<PanelSize> {
        self.sizing.size()
    }

    pub fn sizing(&self) -> &PanelSizing {
        &self.sizing
    }

    pub fn quick_links(&self) -> &[QuickLink] {
        &self.quick_links
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn navigate(&mut self, raw: &str) -> Vec<Effect> {
        let Some(url) = address::normalize(raw) else {
            return Vec::new();
        };

        log::info!("Loading {url} into panel");
        self.current_address = Some(url.clone());
        vec![Effect::ShowAddress(url.clone()), Effect::Navigate(url)]
    }

    fn set_fullscreen(&mut self, on: bool) -> Vec<Effect> {
        self.fullscreen = on;
        vec![Effect::SetFullscreen(on), Effect::LockScroll(on)]
    }

    fn add_bookmark(&mut self, now: DateTime<Utc>) -> Vec<Effect> {
        let Some(url) = self.current_address.clone() else {
            return vec![Effect::Notify(Notice::warning(
                "Load a page before bookmarking it",
            ))];
        };

        match self.bookmarks.add(&mut self.store, &url, now) {
            AddOutcome::Added(bookmark) => vec![
                Effect::RenderBookmarks,
                Effect::Notify(Notice::success(format!("Bookmarked {}", bookmark.title))),
            ],
            AddOutcome::Duplicate(_) => vec![Effect::Notify(Notice::warning(
                "This page is already bookmarked",
            ))],
            AddOutcome::Invalid => Vec::new(),
        }
    }

    fn remove_bookmark(&mut self, index: usize) -> Vec<Effect> {
        match self.bookmarks.remove(&mut self.store, index) {
            Some(removed) => vec![
                Effect::RenderBookmarks,
                Effect::Notify(Notice::info(format!("Removed bookmark: {}", removed.title))),
            ],
            None => Vec::new(),
        }
    }
}
