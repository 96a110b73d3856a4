//! Light/dark color themes.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used to draw the interface for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
}

const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Rgb(17, 24, 39),
    muted: Color::Rgb(75, 85, 99),
    border: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(5, 150, 105),
    highlight: Color::Rgb(37, 99, 235),
    success: Color::Rgb(21, 128, 61),
    error: Color::Rgb(185, 28, 28),
};

const DARK: Palette = Palette {
    background: Color::Rgb(44, 44, 44),
    text: Color::Rgb(241, 243, 242),
    muted: Color::Rgb(209, 213, 219),
    border: Color::Rgb(55, 65, 81),
    accent: Color::Rgb(52, 211, 153),
    highlight: Color::Rgb(96, 165, 250),
    success: Color::Rgb(74, 222, 128),
    error: Color::Rgb(248, 113, 113),
};

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "claro",
            Theme::Dark => "escuro",
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Guess the terminal's scheme from `COLORFGBG` ("fg;bg").
    pub fn detect() -> Option<Self> {
        let value = std::env::var("COLORFGBG").ok()?;
        Self::from_colorfgbg(&value)
    }

    fn from_colorfgbg(value: &str) -> Option<Self> {
        let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
        // ANSI 0-6 and 8 are dark backgrounds
        Some(match background {
            0..=6 | 8 => Theme::Dark,
            _ => Theme::Light,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_colorfgbg() {
        assert_eq!(Theme::from_colorfgbg("15;0"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("0;15"), Some(Theme::Light));
        assert_eq!(Theme::from_colorfgbg("12;default;8"), Some(Theme::Dark));
        assert_eq!(Theme::from_colorfgbg("garbage"), None);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
