//! Panel sizing: responsive auto-fit versus explicit preset sizes.

use crate::config::{Preset, PresetSize};

/// Window geometry the panel is laid out in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    /// Distance from the top of the viewport to the top of the panel.
    pub panel_top: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeMode {
    /// Fill the width, fit the height to the viewport.
    Responsive,
    /// Explicit size; viewport changes are ignored.
    Custom { width: f32, height: f32 },
}

#[derive(Debug, Clone)]
pub struct PanelSizing {
    presets: Vec<Preset>,
    active_preset: usize,
    mode: SizeMode,
    viewport: Option<Viewport>,
    size: Option<PanelSize>,
    aspect_ratio: f32,
    bottom_margin: f32,
}

impl PanelSizing {
    pub fn new(presets: Vec<Preset>, aspect_ratio: f32, bottom_margin: f32) -> Self {
        Self {
            presets,
            active_preset: 0,
            mode: SizeMode::Responsive,
            viewport: None,
            size: None,
            aspect_ratio,
            bottom_margin,
        }
    }

    /// Switches to the preset at `index`. Returns the new panel size when it
    /// changed; an unknown index leaves everything as it was.
    pub fn select_preset(&mut self, index: usize) -> Option<PanelSize> {
        let preset = self.presets.get(index)?;
        self.active_preset = index;

        match preset.size {
            PresetSize::Full => {
                self.mode = SizeMode::Responsive;
                self.refit()
            }
            PresetSize::Fixed { width, height } => {
                self.mode = SizeMode::Custom { width, height };
                self.update_size(PanelSize { width, height })
            }
        }
    }

    /// Records new viewport geometry and re-fits when responsive.
    pub fn viewport_changed(&mut self, viewport: Viewport) -> Option<PanelSize> {
        self.viewport = Some(viewport);
        match self.mode {
            SizeMode::Responsive => self.refit(),
            SizeMode::Custom { .. } => None,
        }
    }

    pub fn mode(&self) -> SizeMode {
        self.mode
    }

    pub fn active_preset(&self) -> usize {
        self.active_preset
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Current panel size, unknown until the first viewport is reported in
    /// responsive mode.
    pub fn size(&self) -> Option<PanelSize> {
        self.size
    }

    fn refit(&mut self) -> Option<PanelSize> {
        let viewport = self.viewport?;
        let size = fit(viewport, self.aspect_ratio, self.bottom_margin);
        self.update_size(size)
    }

    fn update_size(&mut self, size: PanelSize) -> Option<PanelSize> {
        if self.size == Some(size) {
            return None;
        }
        log::debug!("Panel resized to {:.0}x{:.0}", size.width, size.height);
        self.size = Some(size);
        Some(size)
    }
}

/// The lesser of the aspect-derived height and the space left below the
/// panel, minus the margin.
pub fn fit(viewport: Viewport, aspect_ratio: f32, bottom_margin: f32) -> PanelSize {
    let aspect_height = viewport.width * aspect_ratio;
    let remaining = viewport.height - viewport.panel_top - bottom_margin;

    PanelSize {
        width: viewport.width,
        height: aspect_height.min(remaining).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presets() -> Vec<Preset> {
        vec![
            Preset {
                label: "Full".to_owned(),
                size: PresetSize::Full,
            },
            Preset {
                label: "Mobile".to_owned(),
                size: PresetSize::Fixed {
                    width: 375.0,
                    height: 667.0,
                },
            },
        ]
    }

    fn viewport(width: f32, height: f32) -> Viewport {
        Viewport {
            width,
            height,
            panel_top: 100.0,
        }
    }

    #[test]
    fn fit_uses_aspect_when_space_allows() {
        let size = fit(viewport(800.0, 1000.0), 0.5625, 20.0);
        assert_eq!(
            size,
            PanelSize {
                width: 800.0,
                height: 450.0
            }
        );
    }

    #[test]
    fn fit_limited_by_remaining_space() {
        let size = fit(viewport(1600.0, 600.0), 0.5625, 20.0);
        assert_eq!(size.height, 480.0);
    }

    #[test]
    fn fit_never_negative() {
        let size = fit(viewport(1600.0, 50.0), 0.5625, 20.0);
        assert_eq!(size.height, 0.0);
    }

    #[test]
    fn starts_responsive_on_first_preset() {
        let mut sizing = PanelSizing::new(presets(), 0.5625, 20.0);

        assert_eq!(sizing.mode(), SizeMode::Responsive);
        assert_eq!(sizing.active_preset(), 0);
        assert_eq!(sizing.size(), None);

        let size = sizing.viewport_changed(viewport(800.0, 1000.0));
        assert_eq!(size.map(|s| s.height), Some(450.0));
    }

    #[test]
    fn custom_mode_ignores_viewport() {
        let mut sizing = PanelSizing::new(presets(), 0.5625, 20.0);
        sizing.viewport_changed(viewport(800.0, 1000.0));

        let size = sizing.select_preset(1);
        assert_eq!(
            size,
            Some(PanelSize {
                width: 375.0,
                height: 667.0
            })
        );
        assert_eq!(
            sizing.mode(),
            SizeMode::Custom {
                width: 375.0,
                height: 667.0
            }
        );

        assert_eq!(sizing.viewport_changed(viewport(1200.0, 900.0)), None);
        assert_eq!(sizing.size().map(|s| s.width), Some(375.0));
    }

    #[test]
    fn full_preset_refits_against_latest_viewport() {
        let mut sizing = PanelSizing::new(presets(), 0.5625, 20.0);
        sizing.viewport_changed(viewport(800.0, 1000.0));
        sizing.select_preset(1);
        sizing.viewport_changed(viewport(1600.0, 600.0));

        let size = sizing.select_preset(0);

        assert_eq!(sizing.mode(), SizeMode::Responsive);
        assert_eq!(
            size,
            Some(PanelSize {
                width: 1600.0,
                height: 480.0
            })
        );
    }

    #[test]
    fn unchanged_viewport_reports_nothing() {
        let mut sizing = PanelSizing::new(presets(), 0.5625, 20.0);
        sizing.viewport_changed(viewport(800.0, 1000.0));
        assert_eq!(sizing.viewport_changed(viewport(800.0, 1000.0)), None);
    }

    #[test]
    fn unknown_preset_is_ignored() {
        let mut sizing = PanelSizing::new(presets(), 0.5625, 20.0);
        assert_eq!(sizing.select_preset(7), None);
        assert_eq!(sizing.active_preset(), 0);
    }
}
