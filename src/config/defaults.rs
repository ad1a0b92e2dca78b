// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Hover intent**: Confirm and dismiss debounce delays
//! - **Preview**: Reveal delay and scroll-settle debounce
//! - **Hero**: Featured carousel auto-advance
//! - **Search**: Query debounce

// ==========================================================================
// Hover Intent Defaults
// ==========================================================================

/// Pointer dwell time before a thumbnail hover becomes a preview (ms).
pub const DEFAULT_HOVER_CONFIRM_MS: u64 = 500;

/// Minimum hover confirm delay (ms).
pub const MIN_HOVER_CONFIRM_MS: u64 = 100;

/// Maximum hover confirm delay (ms).
pub const MAX_HOVER_CONFIRM_MS: u64 = 2_000;

/// Grace period after the pointer leaves before the preview closes (ms).
pub const DEFAULT_HOVER_DISMISS_MS: u64 = 300;

/// Minimum hover dismiss delay (ms).
pub const MIN_HOVER_DISMISS_MS: u64 = 50;

/// Maximum hover dismiss delay (ms).
pub const MAX_HOVER_DISMISS_MS: u64 = 2_000;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Delay between showing the static thumbnail and revealing the player (ms).
pub const DEFAULT_REVEAL_DELAY_MS: u64 = 100;

/// Maximum reveal delay (ms). Zero reveals on the first tick after mount.
pub const MAX_REVEAL_DELAY_MS: u64 = 2_000;

/// Quiet period after the last scroll event before the settle probe runs (ms).
pub const DEFAULT_SCROLL_SETTLE_MS: u64 = 150;

/// Minimum scroll-settle debounce (ms).
pub const MIN_SCROLL_SETTLE_MS: u64 = 50;

/// Maximum scroll-settle debounce (ms).
pub const MAX_SCROLL_SETTLE_MS: u64 = 1_000;

/// Whether the embedded player starts playing as soon as it is revealed.
pub const DEFAULT_PREVIEW_AUTOPLAY: bool = true;

/// Tick interval driving every pending deadline (ms).
pub const TIMER_TICK_MS: u64 = 16;

// ==========================================================================
// Hero Carousel Defaults
// ==========================================================================

/// Seconds between automatic hero slides. Zero disables auto-advance.
pub const DEFAULT_HERO_AUTO_ADVANCE_SECS: u32 = 6;

/// Maximum auto-advance interval (seconds).
pub const MAX_HERO_AUTO_ADVANCE_SECS: u32 = 60;

// ==========================================================================
// Search Defaults
// ==========================================================================

/// Typing pause before a search query is committed (ms).
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;

/// Maximum search debounce (ms).
pub const MAX_SEARCH_DEBOUNCE_MS: u64 = 2_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_HOVER_CONFIRM_MS <= DEFAULT_HOVER_CONFIRM_MS);
    assert!(DEFAULT_HOVER_CONFIRM_MS <= MAX_HOVER_CONFIRM_MS);

    assert!(MIN_HOVER_DISMISS_MS <= DEFAULT_HOVER_DISMISS_MS);
    assert!(DEFAULT_HOVER_DISMISS_MS <= MAX_HOVER_DISMISS_MS);

    assert!(DEFAULT_REVEAL_DELAY_MS <= MAX_REVEAL_DELAY_MS);

    assert!(MIN_SCROLL_SETTLE_MS <= DEFAULT_SCROLL_SETTLE_MS);
    assert!(DEFAULT_SCROLL_SETTLE_MS <= MAX_SCROLL_SETTLE_MS);

    assert!(DEFAULT_HERO_AUTO_ADVANCE_SECS <= MAX_HERO_AUTO_ADVANCE_SECS);
    assert!(DEFAULT_SEARCH_DEBOUNCE_MS <= MAX_SEARCH_DEBOUNCE_MS);

    // The tick must be finer than the shortest timer it drives.
    assert!(TIMER_TICK_MS < MIN_HOVER_DISMISS_MS);
};
