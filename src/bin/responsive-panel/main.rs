#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod constants;
mod document;
mod notices;
mod storage;
mod ui;

use clap::Parser;
use constants::{AUTO_SAVE_INTERVAL, WINDOW_SIZE};
use document::DocumentState;
use eframe::egui;
use egui_toast::Toasts;
use responsive_panel::{
    BookmarkList, Config, Effect, Event, MemoryStore, Notice, PanelController, Theme, Viewport,
};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

/// Native viewer for a single responsive document panel.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Address to load instead of the configured home page
    #[arg(long)]
    url: Option<String>,

    /// Configuration file (RON); defaults to the user config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Main application state for the panel viewer.
pub struct PanelApp {
    controller: PanelController<MemoryStore>,
    address_input: String,
    bookmark_list: BookmarkList,
    document: DocumentState,
    scroll_locked: bool,
    /// Fullscreen state last reported by the window system
    os_fullscreen: bool,
    last_viewport: Option<Viewport>,
    last_system_theme: Option<egui::Theme>,
    pending: Vec<Event>,
    notice_seconds: f64,
    toasts: Toasts,
    runtime: tokio::runtime::Runtime,
}

impl PanelApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        mut config: Config,
        config_error: Option<String>,
        url: Option<String>,
    ) -> Self {
        if url.is_some() {
            config.home = url;
        }

        let store = storage::hydrate(cc.storage);
        let mut app = Self::with_store(&cc.egui_ctx, store, config);

        if let Some(err) = config_error {
            app.notify(Notice::error(format!("Using default configuration: {err}")));
        }
        app
    }

    /// Builds the app around an already hydrated store and applies the
    /// startup effects.
    fn with_store(ctx: &egui::Context, store: MemoryStore, config: Config) -> Self {
        let toasts = Toasts::new()
            .anchor(egui::Align2::RIGHT_TOP, (-10.0, 10.0))
            .direction(egui::Direction::TopDown);

        let notice_seconds = config.notice_seconds;
        let system_theme = ctx.system_theme();
        let controller = PanelController::new(
            store,
            config,
            system_theme.map_or(Theme::Light, from_egui_theme),
        );

        let runtime = tokio::runtime::Runtime::new().expect("create tokio runtime");

        let mut app = Self {
            controller,
            address_input: String::new(),
            bookmark_list: BookmarkList::build(&[]),
            document: DocumentState::Idle,
            scroll_locked: false,
            os_fullscreen: false,
            last_viewport: None,
            last_system_theme: system_theme,
            pending: Vec::new(),
            notice_seconds,
            toasts,
            runtime,
        };

        let effects = app.controller.startup();
        app.apply_effects(ctx, effects);
        app
    }

    /// Queues an event to be handled after this frame's UI pass.
    fn dispatch(&mut self, event: Event) {
        self.pending.push(event);
    }

    fn handle_pending(&mut self, ctx: &egui::Context) {
        for event in std::mem::take(&mut self.pending) {
            let effects = self.controller.handle(event);
            self.apply_effects(ctx, effects);
        }
    }

    fn apply_effects(&mut self, ctx: &egui::Context, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Navigate(url) => self.document.load(ctx, &self.runtime, url),
                Effect::ShowAddress(address) => self.address_input = address,
                Effect::ResizePanel(_) => ctx.request_repaint(),
                Effect::SetFullscreen(on) => {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(on));
                }
                Effect::LockScroll(locked) => self.scroll_locked = locked,
                Effect::ApplyTheme(theme) => ctx.set_theme(to_egui_theme(theme)),
                Effect::RenderBookmarks => {
                    self.bookmark_list = BookmarkList::build(self.controller.bookmarks());
                }
                Effect::Notify(notice) => self.notify(notice),
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        self.toasts.add(notices::toast(notice, self.notice_seconds));
    }

    /// Reports load results from the document fetcher to the controller.
    fn poll_document(&mut self) {
        if let Some(event) = self.document.poll() {
            self.dispatch(event);
        }
    }

    fn poll_os_fullscreen(&mut self, ctx: &egui::Context) {
        if let Some(fullscreen) = ctx.input(|i| i.viewport().fullscreen) {
            self.sync_os_fullscreen(fullscreen);
        }
    }

    /// Leaves fullscreen when the window system ends it on its own, e.g.
    /// through a title-bar control, so the hidden controls come back.
    fn sync_os_fullscreen(&mut self, fullscreen: bool) {
        let left = self.os_fullscreen && !fullscreen;
        self.os_fullscreen = fullscreen;

        if left && self.controller.is_fullscreen() {
            log::info!("Window left fullscreen");
            self.dispatch(Event::Escape);
        }
    }

    /// Follows system theme changes; the controller decides whether they apply.
    fn poll_system_theme(&mut self, ctx: &egui::Context) {
        let system = ctx.system_theme();
        if system != self.last_system_theme {
            self.last_system_theme = system;
            if let Some(system) = system {
                self.dispatch(Event::SystemThemeChanged(from_egui_theme(system)));
            }
        }
    }
}

impl eframe::App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_document();
        self.poll_system_theme(ctx);
        self.poll_os_fullscreen(ctx);
        self.handle_keyboard_input(ctx);

        if !self.controller.is_fullscreen() {
            self.show_toolbar(ctx);
            self.show_status_bar(ctx);
            self.show_bookmarks(ctx);
        }
        self.show_central_panel(ctx);

        self.handle_pending(ctx);

        self.toasts.show(ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        storage::flush(self.controller.store(), storage);
    }

    fn auto_save_interval(&self) -> Duration {
        AUTO_SAVE_INTERVAL
    }
}

fn to_egui_theme(theme: Theme) -> egui::Theme {
    match theme {
        Theme::Light => egui::Theme::Light,
        Theme::Dark => egui::Theme::Dark,
    }
}

fn from_egui_theme(theme: egui::Theme) -> Theme {
    match theme {
        egui::Theme::Light => Theme::Light,
        egui::Theme::Dark => Theme::Dark,
    }
}

fn main() -> eframe::Result {
    env_logger::init();
    let args = Args::parse();

    let (config, config_error) = match Config::load(args.config.as_deref()) {
        Ok(config) => (config, None),
        Err(err) => {
            log::error!("Failed to load configuration: {err}");
            match Config::embedded_default() {
                Ok(config) => (config, Some(err.to_string())),
                Err(default_err) => {
                    eprintln!("Error: {err}; default configuration unusable: {default_err}");
                    process::exit(1);
                }
            }
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Responsive Panel",
        options,
        Box::new(|cc| Ok(Box::new(PanelApp::new(cc, config, config_error, args.url)))),
    )
}
