// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Fixed header bar.
pub fn header(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color { a: 0.95, ..base })),
        border: Border {
            color: palette::BACKGROUND_TERTIARY,
            width: 1.0,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Page footer.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND_PRIMARY)),
        text_color: Some(palette::TEXT_TERTIARY),
        ..Default::default()
    }
}

/// Floating preview popup surface.
pub fn popup(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::POPUP_SURFACE)),
        text_color: Some(palette::TEXT_PRIMARY),
        border: Border {
            color: palette::POPUP_BORDER,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::POPUP,
        ..Default::default()
    }
}

/// Translucent info panel over the popup media.
pub fn popup_info(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Thumbnail placeholder; remote images are not fetched.
pub fn thumbnail(dimmed: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let base = palette::BACKGROUND_TERTIARY;
        let color = if dimmed {
            Color {
                r: base.r * opacity::DIMMED_THUMBNAIL,
                g: base.g * opacity::DIMMED_THUMBNAIL,
                b: base.b * opacity::DIMMED_THUMBNAIL,
                a: 1.0,
            }
        } else {
            base
        };

        container::Style {
            background: Some(Background::Color(color)),
            text_color: Some(palette::TEXT_TERTIARY),
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Revealed player surface.
pub fn player(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::TEXT_SECONDARY),
        border: Border {
            color: palette::ACCENT_DEEP,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

/// Round play badge over the static thumbnail.
pub fn play_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hero banner backdrop.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Gradient(
            iced::gradient::Linear::new(iced::Radians(0.0))
                .add_stop(0.0, palette::BACKGROUND_PRIMARY)
                .add_stop(1.0, palette::ACCENT_DEEP)
                .into(),
        )),
        text_color: Some(palette::TEXT_PRIMARY),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Drop-down menu panel.
pub fn menu(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BACKGROUND_SECONDARY)),
        text_color: Some(palette::TEXT_SECONDARY),
        border: Border {
            color: palette::BACKGROUND_TERTIARY,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Generic page panel (dashboard and profile pages).
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimmed_thumbnail_is_darker() {
        let theme = Theme::Dark;
        let normal = thumbnail(false)(&theme);
        let dimmed = thumbnail(true)(&theme);

        match (normal.background, dimmed.background) {
            (Some(Background::Color(a)), Some(Background::Color(b))) => assert!(b.r < a.r),
            other => panic!("expected solid backgrounds, got {:?}", other),
        }
    }
}
