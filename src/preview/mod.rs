// SPDX-License-Identifier: MPL-2.0
//! Hover preview: hover intent, popup placement and the delayed player reveal.
//!
//! Everything here is pure state driven by explicit `now: Instant` values, so
//! the whole lifecycle can be exercised in tests without a window.

pub mod embed;
pub mod hover_intent;
pub mod metrics;
pub mod placement;
pub mod popup;
pub mod reveal;
pub mod timer;

pub use embed::{resolve_embed_url, resolve_embed_url_with};
pub use hover_intent::{HoverEvent, HoverIntent, HoverSession, Phase, Related};
pub use metrics::{HitTest, LayoutMetrics, ViewportMetrics, HEADER_HEIGHT_FALLBACK};
pub use placement::{compute_placement, PlacementRequest, PopupPlacement, PopupPolicy};
pub use popup::{Popup, PopupEvent};
pub use reveal::Reveal;
pub use timer::Timer;

use crate::config::{
    PreviewConfig, DEFAULT_HOVER_CONFIRM_MS, DEFAULT_HOVER_DISMISS_MS, DEFAULT_PREVIEW_AUTOPLAY,
    DEFAULT_REVEAL_DELAY_MS, DEFAULT_SCROLL_SETTLE_MS, MAX_HOVER_CONFIRM_MS, MAX_HOVER_DISMISS_MS,
    MAX_REVEAL_DELAY_MS, MAX_SCROLL_SETTLE_MS, MIN_HOVER_CONFIRM_MS, MIN_HOVER_DISMISS_MS,
    MIN_SCROLL_SETTLE_MS,
};
use std::time::Duration;

/// Preview delays, always within their valid ranges.
///
/// # Example
///
/// ```
/// use eyeson::config::PreviewConfig;
/// use eyeson::preview::PreviewTimings;
///
/// let config = PreviewConfig {
///     hover_confirm_ms: Some(10),
///     ..PreviewConfig::default()
/// };
/// let timings = PreviewTimings::from_config(&config);
/// assert_eq!(timings.hover_confirm().as_millis(), 100); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTimings {
    hover_confirm_ms: u64,
    hover_dismiss_ms: u64,
    reveal_delay_ms: u64,
    scroll_settle_ms: u64,
    autoplay: bool,
}

impl PreviewTimings {
    #[must_use]
    pub fn from_config(config: &PreviewConfig) -> Self {
        Self {
            hover_confirm_ms: config
                .hover_confirm_ms
                .unwrap_or(DEFAULT_HOVER_CONFIRM_MS)
                .clamp(MIN_HOVER_CONFIRM_MS, MAX_HOVER_CONFIRM_MS),
            hover_dismiss_ms: config
                .hover_dismiss_ms
                .unwrap_or(DEFAULT_HOVER_DISMISS_MS)
                .clamp(MIN_HOVER_DISMISS_MS, MAX_HOVER_DISMISS_MS),
            reveal_delay_ms: config
                .reveal_delay_ms
                .unwrap_or(DEFAULT_REVEAL_DELAY_MS)
                .min(MAX_REVEAL_DELAY_MS),
            scroll_settle_ms: config
                .scroll_settle_ms
                .unwrap_or(DEFAULT_SCROLL_SETTLE_MS)
                .clamp(MIN_SCROLL_SETTLE_MS, MAX_SCROLL_SETTLE_MS),
            autoplay: config.autoplay.unwrap_or(DEFAULT_PREVIEW_AUTOPLAY),
        }
    }

    #[must_use]
    pub fn hover_confirm(&self) -> Duration {
        Duration::from_millis(self.hover_confirm_ms)
    }

    #[must_use]
    pub fn hover_dismiss(&self) -> Duration {
        Duration::from_millis(self.hover_dismiss_ms)
    }

    #[must_use]
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    #[must_use]
    pub fn scroll_settle(&self) -> Duration {
        Duration::from_millis(self.scroll_settle_ms)
    }

    #[must_use]
    pub fn autoplay(&self) -> bool {
        self.autoplay
    }
}

impl Default for PreviewTimings {
    fn default() -> Self {
        Self::from_config(&PreviewConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_config_defaults() {
        let timings = PreviewTimings::default();
        assert_eq!(timings.hover_confirm(), Duration::from_millis(500));
        assert_eq!(timings.hover_dismiss(), Duration::from_millis(300));
        assert_eq!(timings.reveal_delay(), Duration::from_millis(100));
        assert_eq!(timings.scroll_settle(), Duration::from_millis(150));
        assert!(timings.autoplay());
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let timings = PreviewTimings::from_config(&PreviewConfig {
            hover_confirm_ms: Some(99_999),
            hover_dismiss_ms: Some(0),
            reveal_delay_ms: Some(50_000),
            scroll_settle_ms: Some(1),
            autoplay: None,
        });

        assert_eq!(timings.hover_confirm().as_millis(), u128::from(MAX_HOVER_CONFIRM_MS));
        assert_eq!(timings.hover_dismiss().as_millis(), u128::from(MIN_HOVER_DISMISS_MS));
        assert_eq!(timings.reveal_delay().as_millis(), u128::from(MAX_REVEAL_DELAY_MS));
        assert_eq!(timings.scroll_settle().as_millis(), u128::from(MIN_SCROLL_SETTLE_MS));
        assert_eq!(timings.autoplay(), DEFAULT_PREVIEW_AUTOPLAY);
    }

    #[test]
    fn zero_reveal_delay_is_allowed() {
        let timings = PreviewTimings::from_config(&PreviewConfig {
            reveal_delay_ms: Some(0),
            ..PreviewConfig::default()
        });
        assert_eq!(timings.reveal_delay(), Duration::ZERO);
    }
}
