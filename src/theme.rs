//! Theme and styling for the LOUPE TUI.
//!
//! Status colors are shared by both modes. Everything that depends on the
//! background (text, borders, the lime accent) comes from a [`Palette`].

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Constants
// ============================================================================

/// Success indicator color.
pub const SUCCESS_COLOR: Color = Color::Rgb(0x00, 0xC8, 0x53);

/// Warning indicator color.
pub const WARNING_COLOR: Color = Color::Rgb(0xFF, 0xA0, 0x00);

/// Error indicator color.
pub const ERROR_COLOR: Color = Color::Rgb(0xFF, 0x3B, 0x30);

/// Brand lime.
pub const LIME: Color = Color::Rgb(0xDD, 0xFF, 0x00);

// ============================================================================
// Theme Mode
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Header indicator.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Dark => "☾",
            Self::Light => "☀",
        }
    }

    #[must_use]
    pub const fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette::DARK,
            Self::Light => Palette::LIGHT,
        }
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Background-dependent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    /// Accent for focused elements, keys and the logo.
    pub primary: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Palette {
    pub const DARK: Self = Self {
        background: Color::Rgb(0x0B, 0x0B, 0x0F),
        text: Color::Rgb(0xF2, 0xF2, 0xF2),
        muted: Color::Gray,
        primary: LIME,
        border: Color::DarkGray,
        selected_bg: Color::Rgb(0x2A, 0x2D, 0x1A),
    };

    pub const LIGHT: Self = Self {
        background: Color::Rgb(0xF7, 0xF7, 0xF2),
        text: Color::Rgb(0x14, 0x14, 0x14),
        muted: Color::Rgb(0x6B, 0x6B, 0x6B),
        primary: Color::Rgb(0x5C, 0x7A, 0x00),
        border: Color::Rgb(0xB8, 0xB8, 0xB0),
        selected_bg: Color::Rgb(0xE6, 0xF5, 0xA8),
    };

    /// Base style painted over the whole frame.
    #[must_use]
    pub const fn base_style(&self) -> Style {
        Style::new().fg(self.text).bg(self.background)
    }

    /// Default border style for unfocused elements.
    #[must_use]
    pub const fn border_style(&self) -> Style {
        Style::new().fg(self.border)
    }

    /// Border style for focused/active elements.
    #[must_use]
    pub const fn focused_border_style(&self) -> Style {
        Style::new().fg(self.primary)
    }

    /// Title style for focused/active elements.
    #[must_use]
    pub const fn focused_title_style(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    /// Style for selected items in lists.
    #[must_use]
    pub const fn selected_style(&self) -> Style {
        Style::new()
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub const fn muted_style(&self) -> Style {
        Style::new().fg(self.muted)
    }

    /// Key hints and accents.
    #[must_use]
    pub const fn key_style(&self) -> Style {
        Style::new().fg(self.primary).add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_palettes_differ() {
        assert_eq!(ThemeMode::Dark.toggle(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
        assert_ne!(ThemeMode::Dark.palette(), ThemeMode::Light.palette());
        assert_eq!(ThemeMode::Dark.palette().primary, LIME);
    }
}
