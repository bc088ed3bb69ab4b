//! Light/dark/auto theme selection.

use crate::store::{Store, THEME_KEY};
use std::fmt;

/// A concrete visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// What the user picked in the theme switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the system preference.
    Auto,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::Auto];

    fn explicit(self) -> Option<Theme> {
        match self {
            Self::Light => Some(Theme::Light),
            Self::Dark => Some(Theme::Dark),
            Self::Auto => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Auto => "Auto",
        };
        f.write_str(label)
    }
}

/// Tracks the stored preference and the last known system theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSwitcher {
    preference: Option<Theme>,
    system: Theme,
}

impl ThemeSwitcher {
    pub fn load(store: &impl Store, system: Theme) -> Self {
        let preference = store.get(THEME_KEY).and_then(|value| {
            let parsed = Theme::parse(&value);
            if parsed.is_none() {
                log::warn!("Ignoring unknown stored theme {value:?}");
            }
            parsed
        });

        Self { preference, system }
    }

    /// Applies a selection and returns the theme that should now be shown.
    pub fn select(&mut self, store: &mut impl Store, mode: ThemeMode) -> Theme {
        self.preference = mode.explicit();
        match self.preference {
            Some(theme) => store.set(THEME_KEY, theme.as_str().to_owned()),
            None => store.remove(THEME_KEY),
        }
        self.resolved()
    }

    /// Records a system theme change. Returns the theme to show when the
    /// change is being followed, `None` while an explicit preference is set.
    pub fn system_changed(&mut self, system: Theme) -> Option<Theme> {
        self.system = system;
        match self.preference {
            Some(_) => None,
            None => Some(system),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        match self.preference {
            Some(Theme::Light) => ThemeMode::Light,
            Some(Theme::Dark) => ThemeMode::Dark,
            None => ThemeMode::Auto,
        }
    }

    pub fn resolved(&self) -> Theme {
        self.preference.unwrap_or(self.system)
    }
}
