// SPDX-License-Identifier: MPL-2.0
//! Analytic geometry of the home feed.
//!
//! The feed view is built from the fixed sizes in [`sizing`], so the window
//! position of every thumbnail can be derived from the scroll offsets alone.
//! This is what the pointer tracker hit-tests against.
//!
//! Vertical structure of the scrolled content (below the header):
//!
//! ```text
//! FEED_PADDING
//! [hero HERO_HEIGHT + SECTION_SPACING]      only without a search query
//! rail 0: RAIL_TITLE_HEIGHT + CARD_THUMB_HEIGHT + CARD_CAPTION_HEIGHT
//! RAIL_SPACING
//! rail 1: ...
//! ```

use crate::content::ItemId;
use crate::preview::{HitTest, LayoutMetrics};
use crate::ui::design_tokens::sizing;
use iced::{Point, Rectangle, Size};

/// Height of one rail block.
pub const RAIL_HEIGHT: f32 =
    sizing::RAIL_TITLE_HEIGHT + sizing::CARD_THUMB_HEIGHT + sizing::CARD_CAPTION_HEIGHT;

/// Horizontal distance between two card origins.
pub const CARD_STRIDE: f32 = sizing::CARD_WIDTH + sizing::CARD_SPACING;

#[derive(Debug, Clone)]
pub struct FeedLayout {
    viewport: Option<Size>,
    header_height: f32,
    show_hero: bool,
    rails: Vec<Vec<ItemId>>,
    feed_offset: f32,
    rail_offsets: Vec<f32>,
}

impl FeedLayout {
    #[must_use]
    pub fn new(header_height: f32) -> Self {
        Self {
            viewport: None,
            header_height,
            show_hero: true,
            rails: Vec::new(),
            feed_offset: 0.0,
            rail_offsets: Vec::new(),
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = Some(viewport);
    }

    /// Replaces the rails; horizontal offsets start over.
    pub fn set_rails(&mut self, rails: Vec<Vec<ItemId>>, show_hero: bool) {
        self.rail_offsets = vec![0.0; rails.len()];
        self.rails = rails;
        self.show_hero = show_hero;
    }

    /// Records the feed's vertical offset. Returns whether it moved.
    pub fn set_feed_offset(&mut self, offset: f32) -> bool {
        update_offset(&mut self.feed_offset, offset)
    }

    /// Records a rail's horizontal offset. Returns whether it moved.
    pub fn set_rail_offset(&mut self, rail: usize, offset: f32) -> bool {
        self.rail_offsets
            .get_mut(rail)
            .is_some_and(|slot| update_offset(slot, offset))
    }

    #[must_use]
    pub fn rail_count(&self) -> usize {
        self.rails.len()
    }

    fn rails_start(&self) -> f32 {
        let hero = if self.show_hero {
            sizing::HERO_HEIGHT + sizing::SECTION_SPACING
        } else {
            0.0
        };
        sizing::FEED_PADDING + hero
    }

    /// Window y of the top of rail `rail`'s thumbnails.
    #[must_use]
    pub fn thumbnail_top(&self, rail: usize) -> f32 {
        self.header_height - self.feed_offset
            + self.rails_start()
            + rail as f32 * (RAIL_HEIGHT + sizing::RAIL_SPACING)
            + sizing::RAIL_TITLE_HEIGHT
    }

    /// Window bounds of a thumbnail image (caption excluded).
    #[must_use]
    pub fn thumbnail_rect(&self, rail: usize, index: usize) -> Rectangle {
        let offset = self.rail_offsets.get(rail).copied().unwrap_or(0.0);
        Rectangle::new(
            Point::new(
                sizing::FEED_PADDING + index as f32 * CARD_STRIDE - offset,
                self.thumbnail_top(rail),
            ),
            Size::new(sizing::CARD_WIDTH, sizing::CARD_THUMB_HEIGHT),
        )
    }
}

// Scrollables also report viewport changes caused by resizes and content
// changes; only a moved offset counts as scrolling.
fn update_offset(slot: &mut f32, offset: f32) -> bool {
    let offset = offset.max(0.0);
    let moved = (*slot - offset).abs() > 0.5;
    *slot = offset;
    moved
}

impl LayoutMetrics for FeedLayout {
    fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }

    fn header_height(&self) -> Option<f32> {
        Some(self.header_height)
    }
}

impl HitTest for FeedLayout {
    fn thumbnail_at(&self, point: Point) -> Option<(ItemId, Rectangle)> {
        let viewport = self.viewport?;
        if point.y < self.header_height
            || point.y >= viewport.height
            || point.x < sizing::FEED_PADDING
            || point.x >= viewport.width - sizing::FEED_PADDING
        {
            return None;
        }

        let content_y =
            point.y - self.header_height + self.feed_offset - self.rails_start();
        if content_y < 0.0 {
            return None;
        }
        let block = RAIL_HEIGHT + sizing::RAIL_SPACING;
        let rail = (content_y / block).floor() as usize;
        let within = content_y - rail as f32 * block;
        if !(sizing::RAIL_TITLE_HEIGHT..sizing::RAIL_TITLE_HEIGHT + sizing::CARD_THUMB_HEIGHT)
            .contains(&within)
        {
            return None;
        }
        let items = self.rails.get(rail)?;

        let offset = self.rail_offsets.get(rail).copied().unwrap_or(0.0);
        let content_x = point.x - sizing::FEED_PADDING + offset;
        let index = (content_x / CARD_STRIDE).floor() as usize;
        if content_x - index as f32 * CARD_STRIDE >= sizing::CARD_WIDTH {
            return None;
        }
        let id = items.get(index)?;

        Some((id.clone(), self.thumbnail_rect(rail, index)))
    }
}
