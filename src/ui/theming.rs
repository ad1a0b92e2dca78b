// SPDX-License-Identifier: MPL-2.0
//! Theme modes and the color scheme derived from them.

use crate::ui::design_tokens::{opacity, palette};
use iced::{theme::Palette, Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    pub accent_primary: Color,
    pub accent_secondary: Color,
    pub accent_highlight: Color,

    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::LIGHT_PRIMARY,
            surface_secondary: palette::LIGHT_SECONDARY,
            surface_tertiary: palette::LIGHT_TERTIARY,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_tertiary: palette::TEXT_TERTIARY,

            accent_primary: palette::ACCENT_BRIGHT,
            accent_secondary: palette::ACCENT_DEEP,
            accent_highlight: palette::ACCENT_DEEP,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Dark theme (Dark mode), the brand default.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::BACKGROUND_PRIMARY,
            surface_secondary: palette::BACKGROUND_SECONDARY,
            surface_tertiary: palette::BACKGROUND_TERTIARY,

            text_primary: palette::TEXT_PRIMARY,
            text_secondary: palette::TEXT_SECONDARY,
            text_tertiary: palette::TEXT_TERTIARY,

            accent_primary: palette::ACCENT_BRIGHT,
            accent_secondary: palette::ACCENT_DEEP,
            accent_highlight: palette::ACCENT_LIGHT,

            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme for a resolved mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Builds the Iced theme for a mode from the brand color scheme.
#[must_use]
pub fn iced_theme(mode: ThemeMode) -> Theme {
    let scheme = ColorScheme::for_mode(mode);
    let name = if mode.is_dark() { "Eyes0n Dark" } else { "Eyes0n Light" };

    Theme::custom(
        name.to_string(),
        Palette {
            background: scheme.surface_secondary,
            text: scheme.text_primary,
            primary: scheme.accent_primary,
            success: palette::SUCCESS_500,
            warning: palette::WARNING_500,
            danger: palette::ERROR_500,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn accents_are_purple_in_both_modes() {
        for scheme in [ColorScheme::light(), ColorScheme::dark()] {
            assert!(scheme.accent_primary.b > scheme.accent_primary.g);
            assert!(scheme.accent_primary.r > scheme.accent_primary.g);
        }
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        // System mode depends on the host; it only has to not panic.
        let _ = ThemeMode::System.is_dark();
    }
}
