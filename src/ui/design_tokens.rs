// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors (dark surfaces, purple accents, gray text)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and layout sizes shared by views and hit-testing
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use eyeson::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```

## Modification

Layout sizes in [`sizing`] are also the inputs of the feed hit-test geometry.
Changing one changes where the pointer is considered to be; keep the view
code and the layout math reading the same constants.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Surfaces (very dark gray to medium dark gray)
    pub const BACKGROUND_PRIMARY: Color = Color::from_rgb8(0x12, 0x12, 0x12);
    pub const BACKGROUND_SECONDARY: Color = Color::from_rgb8(0x1E, 0x1E, 0x1E);
    pub const BACKGROUND_TERTIARY: Color = Color::from_rgb8(0x2D, 0x2D, 0x2D);
    pub const POPUP_SURFACE: Color = Color::from_rgb8(0x1A, 0x1A, 0x1A);
    pub const POPUP_BORDER: Color = Color::from_rgb8(0x2A, 0x2A, 0x2A);

    // Accents (purple scale)
    pub const ACCENT_DEEP: Color = Color::from_rgb8(0x37, 0x00, 0xB3);
    pub const ACCENT_BRIGHT: Color = Color::from_rgb8(0x62, 0x00, 0xEE);
    pub const ACCENT_LIGHT: Color = Color::from_rgb8(0xBB, 0x86, 0xFC);

    // Text
    pub const TEXT_PRIMARY: Color = Color::from_rgb8(0xFF, 0xFF, 0xFF);
    pub const TEXT_SECONDARY: Color = Color::from_rgb8(0xE1, 0xE1, 0xE1);
    pub const TEXT_TERTIARY: Color = Color::from_rgb8(0xA0, 0xA0, 0xA0);
    pub const TEXT_MUTED: Color = Color::from_rgb8(0xB3, 0xB3, 0xB3);

    // Light-mode surfaces
    pub const LIGHT_PRIMARY: Color = Color::from_rgb8(0xFA, 0xFA, 0xFA);
    pub const LIGHT_SECONDARY: Color = Color::from_rgb8(0xEE, 0xEE, 0xEE);
    pub const LIGHT_TERTIARY: Color = Color::from_rgb8(0xDD, 0xDD, 0xDD);
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Brightness kept on a thumbnail while the player is not yet revealed.
    pub const DIMMED_THUMBNAIL: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Chrome
    pub const HEADER_HEIGHT: f32 = 64.0;
    pub const FOOTER_HEIGHT: f32 = 48.0;
    pub const SEARCH_WIDTH: f32 = 250.0;
    pub const SEARCH_HEIGHT: f32 = 32.0;
    pub const PROFILE_MENU_WIDTH: f32 = 200.0;
    pub const PROFILE_MENU_ITEM_HEIGHT: f32 = 36.0;

    // Feed
    pub const FEED_PADDING: f32 = 24.0;
    pub const HERO_HEIGHT: f32 = 320.0;
    pub const SECTION_SPACING: f32 = 32.0;
    pub const RAIL_TITLE_HEIGHT: f32 = 36.0;
    pub const RAIL_SPACING: f32 = 24.0;

    // Thumbnail cards (2:3 shorts format)
    pub const CARD_WIDTH: f32 = 192.0;
    pub const CARD_THUMB_HEIGHT: f32 = 288.0;
    pub const CARD_CAPTION_HEIGHT: f32 = 44.0;
    pub const CARD_SPACING: f32 = 16.0;

    // Preview popup
    pub const POPUP_WIDTH: f32 = 320.0;
    pub const POPUP_INFO_HEIGHT: f32 = 150.0;
    pub const PLAY_BADGE: f32 = 40.0;

    // Icons and controls
    pub const ICON_MD: f32 = 24.0;
    pub const BUTTON_HEIGHT: f32 = 36.0;
    pub const CAROUSEL_DOT: f32 = 8.0;
    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Large title - Hero headline
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - Brand name
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Rail headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Popup item name
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Small body - Card captions
    pub const BODY_SM: f32 = 13.0;

    /// Caption - Dates, durations
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Borders
// ============================================================================

pub mod border {
    /// Toast accents.
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Floating preview popup.
    pub const POPUP: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.6,
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 32.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::DIMMED_THUMBNAIL > 0.0 && opacity::DIMMED_THUMBNAIL < 1.0);

    // A popup must fit next to a card on the narrowest supported window.
    assert!(sizing::POPUP_WIDTH > sizing::CARD_WIDTH);
    assert!(sizing::CARD_THUMB_HEIGHT > sizing::CARD_WIDTH);

    // The search field sits inside the header bar.
    assert!(sizing::SEARCH_HEIGHT < sizing::HEADER_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn search_field_fits_in_header_with_padding() {
        assert!(sizing::SEARCH_HEIGHT + 2.0 * spacing::SM <= sizing::HEADER_HEIGHT);
    }

    #[test]
    fn palette_matches_brand_hex_values() {
        let deep = palette::ACCENT_DEEP;
        assert!((deep.r - 0x37 as f32 / 255.0).abs() < 1e-6);
        assert!(deep.g.abs() < 1e-6);
        assert!((deep.b - 0xB3 as f32 / 255.0).abs() < 1e-6);
    }
}
