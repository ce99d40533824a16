use ratatui::style::Color;
use std::fmt;
use taskgen::TaskColor;

use crate::storage::{KeyValueStore, THEME_KEY};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Only the exact stored literals are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored preference, else the terminal's reported background.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::load_with_terminal(store, std::env::var("COLORFGBG").ok().as_deref())
    }

    fn load_with_terminal(store: &dyn KeyValueStore, colorfgbg: Option<&str>) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(raw)) => {
                if let Some(theme) = Theme::parse(&raw) {
                    return theme;
                }
                tracing::warn!(value = %raw, "ignoring unrecognized stored theme");
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "could not read stored theme"),
        }
        Self::from_colorfgbg(colorfgbg)
    }

    pub fn persist(&self, store: &dyn KeyValueStore) {
        if let Err(e) = store.set(THEME_KEY, self.as_str()) {
            tracing::error!(error = %e, "failed to persist theme");
        }
    }

    /// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"); background 7 or 15 means light.
    fn from_colorfgbg(value: Option<&str>) -> Self {
        let background = value
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match background {
            Some(7) | Some(15) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Rgb(129, 140, 248),
                border: Color::Gray,
                today: Color::LightBlue,
                error: Color::LightRed,
                highlight: Color::Yellow,
            },
            Theme::Light => Palette {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                border: Color::DarkGray,
                today: Color::Blue,
                error: Color::Red,
                highlight: Color::Magenta,
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub today: Color,
    pub error: Color,
    pub highlight: Color,
}

/// Terminal color for a task category.
pub fn task_color(color: TaskColor) -> Color {
    match color {
        TaskColor::Red => Color::Red,
        TaskColor::Blue => Color::Blue,
        TaskColor::Green => Color::Green,
        TaskColor::Yellow => Color::Rgb(245, 158, 11),
        TaskColor::Purple => Color::Rgb(168, 85, 247),
        TaskColor::Indigo => Color::Rgb(99, 102, 241),
        TaskColor::Pink => Color::Rgb(236, 72, 153),
    }
}
