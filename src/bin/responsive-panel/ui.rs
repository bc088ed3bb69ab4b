//! UI rendering methods for the panel viewer.

use crate::PanelApp;
use crate::constants::{PANEL_PADDING, SIDEBAR_WIDTH};
use crate::document::DocumentState;
use eframe::egui;
use responsive_panel::{BookmarkList, Event, Notice, ThemeMode, Viewport};

impl PanelApp {
    /// F11 toggles fullscreen, Escape leaves it.
    pub fn handle_keyboard_input(&mut self, ctx: &egui::Context) {
        let (toggle, escape) =
            ctx.input(|i| (i.key_pressed(egui::Key::F11), i.key_pressed(egui::Key::Escape)));

        if toggle {
            self.dispatch(Event::ToggleFullscreen);
        }
        if escape {
            self.dispatch(Event::Escape);
        }
    }

    /// Renders the address bar, size presets, theme switcher and quick links.
    pub fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label("Address");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.address_input)
                        .hint_text("example.com")
                        .desired_width(ui.available_width() - 80.0),
                );
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                if ui.button("Load").clicked() || submitted {
                    self.dispatch(Event::LoadAddress(self.address_input.clone()));
                }
            });

            ui.horizontal_wrapped(|ui| {
                ui.strong("Size");
                let active = self.controller.sizing().active_preset();
                let mut selected = None;
                for (idx, preset) in self.controller.sizing().presets().iter().enumerate() {
                    if ui.selectable_label(active == idx, &preset.label).clicked() {
                        selected = Some(idx);
                    }
                }
                if let Some(idx) = selected {
                    self.dispatch(Event::SelectPreset(idx));
                }

                ui.separator();
                if ui
                    .button("Fullscreen")
                    .on_hover_text("Toggle fullscreen (F11)")
                    .clicked()
                {
                    self.dispatch(Event::ToggleFullscreen);
                }

                ui.separator();
                ui.strong("Theme");
                let current = self.controller.theme_mode();
                for mode in ThemeMode::ALL {
                    if ui
                        .selectable_label(current == mode, mode.to_string())
                        .clicked()
                    {
                        self.dispatch(Event::SelectTheme(mode));
                    }
                }
            });

            if !self.controller.quick_links().is_empty() {
                ui.horizontal_wrapped(|ui| {
                    ui.strong("Quick links");
                    let mut clicked = None;
                    for link in self.controller.quick_links() {
                        if ui.small_button(&link.label).on_hover_text(&link.url).clicked() {
                            clicked = Some(link.url.clone());
                        }
                    }
                    if let Some(url) = clicked {
                        self.dispatch(Event::QuickLink(url));
                    }
                });
            }
            ui.add_space(4.0);
        });
    }

    /// Renders the bottom status bar with the shortcut hint and panel address.
    pub fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Enter: Load | F11: Fullscreen | Esc: Exit fullscreen");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(size) = self.controller.panel_size() {
                        ui.label(format!("{:.0} × {:.0}", size.width, size.height));
                        ui.separator();
                    }
                    if let Some(address) = self.controller.current_address() {
                        ui.label(address);
                    }
                });
            });
        });
    }

    /// Renders the bookmark side panel from the last built projection.
    pub fn show_bookmarks(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("bookmarks")
            .exact_width(SIDEBAR_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.strong("Bookmarks");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .button("＋ Add")
                            .on_hover_text("Bookmark the current page")
                            .clicked()
                        {
                            self.dispatch(Event::AddBookmark);
                        }
                    });
                });
                ui.separator();

                let mut action = None;
                egui::ScrollArea::vertical().show(ui, |ui| match &self.bookmark_list {
                    BookmarkList::Placeholder(text) => {
                        ui.weak(*text);
                    }
                    BookmarkList::Rows(rows) => {
                        for row in rows {
                            ui.horizontal(|ui| {
                                if ui.link(&row.title).on_hover_text(&row.url).clicked() {
                                    action = Some(Event::OpenBookmark(row.index));
                                }
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .small_button("🗑")
                                            .on_hover_text("Delete bookmark")
                                            .clicked()
                                        {
                                            action = Some(Event::RemoveBookmark(row.index));
                                        }
                                    },
                                );
                            });
                            ui.small(&row.added);
                            ui.add_space(6.0);
                        }
                    }
                });

                if let Some(event) = action {
                    self.dispatch(event);
                }
            });
    }

    /// Renders the central panel containing the document panel.
    pub fn show_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let area = ui.max_rect();
            egui::ScrollArea::both()
                .enable_scrolling(!self.scroll_locked)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    // Fullscreen fills the window; the responsive fit only
                    // tracks the windowed layout.
                    let size = if self.controller.is_fullscreen() {
                        ui.available_size()
                    } else {
                        self.report_viewport(Viewport {
                            width: area.width(),
                            height: area.height(),
                            panel_top: ui.cursor().top() - area.top(),
                        });

                        self.controller
                            .panel_size()
                            .map_or(egui::vec2(area.width(), 0.0), |size| {
                                egui::vec2(size.width, size.height)
                            })
                    };
                    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
                    self.show_panel_frame(ui, rect);
                });
        });
    }

    /// Reports the viewport when it differs from the last one sent.
    fn report_viewport(&mut self, viewport: Viewport) {
        if self.last_viewport != Some(viewport) {
            self.last_viewport = Some(viewport);
            self.dispatch(Event::ViewportChanged(viewport));
        }
    }

    fn show_panel_frame(&mut self, ui: &mut egui::Ui, rect: egui::Rect) {
        let visuals = ui.visuals();
        ui.painter().rect_filled(rect, 4.0, visuals.extreme_bg_color);
        ui.painter().rect_stroke(
            rect,
            4.0,
            visuals.widgets.noninteractive.bg_stroke,
            egui::StrokeKind::Inside,
        );

        let mut content = ui.new_child(
            egui::UiBuilder::new()
                .max_rect(rect.shrink(PANEL_PADDING))
                .layout(egui::Layout::top_down(egui::Align::Min)),
        );
        content.set_clip_rect(rect);
        self.show_document(&mut content);
    }

    /// Renders the loaded document, or its loading state.
    fn show_document(&mut self, ui: &mut egui::Ui) {
        match &self.document {
            DocumentState::Idle => {
                ui.centered_and_justified(|ui| {
                    ui.weak("Enter an address to load a page");
                });
            }
            DocumentState::Loading { .. } => {
                ui.centered_and_justified(|ui| ui.spinner());
            }
            // Load failures are only logged.
            DocumentState::Failed => {}
            DocumentState::Ready(summary) => {
                let mut open_failed = None;
                ui.horizontal(|ui| {
                    ui.heading(summary.title.as_deref().unwrap_or(&summary.url));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Open in browser").clicked()
                            && let Err(err) = open::that(&summary.url)
                        {
                            log::error!("Failed to open {}: {err}", summary.url);
                            open_failed = Some(err.to_string());
                        }
                        ui.weak(format!("HTTP {}", summary.status));
                    });
                });
                ui.weak(&summary.url);
                ui.separator();

                egui::ScrollArea::vertical()
                    .id_salt("document_text")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.label(&summary.text);
                    });

                if let Some(err) = open_failed {
                    self.notify(Notice::error(format!("Could not open browser: {err}")));
                }
            }
        }
    }
}
