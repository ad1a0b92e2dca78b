// SPDX-License-Identifier: MPL-2.0
//! A mounted preview popup.
//!
//! The popup is owned by the feed as an `Option<Popup>`: mounting creates it,
//! unmounting drops it together with its reveal timer. It reports closure
//! upward through [`PopupEvent`] instead of touching shared state.

use super::embed::resolve_embed_url_with;
use super::hover_intent::HoverSession;
use super::metrics::LayoutMetrics;
use super::placement::{compute_placement, PlacementRequest, PopupPlacement, PopupPolicy};
use super::reveal::Reveal;
use super::PreviewTimings;
use crate::content::ContentItem;
use iced::{Point, Rectangle};
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupEvent {
    /// The popup must be unmounted.
    Closed,
}

#[derive(Debug, Clone)]
pub struct Popup {
    item: ContentItem,
    request: PlacementRequest,
    policy: PopupPolicy,
    placement: Option<PopupPlacement>,
    reveal: Reveal,
    embed_url: String,
}

impl Popup {
    /// Mounts a popup for a confirmed hover and places it.
    ///
    /// When metrics are not available yet the popup stays unplaced (and
    /// invisible) until the next resize.
    pub fn mount<M: LayoutMetrics + ?Sized>(
        item: ContentItem,
        session: &HoverSession,
        metrics: &M,
        policy: PopupPolicy,
        timings: &PreviewTimings,
        now: Instant,
    ) -> Self {
        let embed_url = resolve_embed_url_with(&item.video_url, timings.autoplay());
        let mut popup = Self {
            item,
            request: PlacementRequest {
                point: session.point,
                rect: session.rect,
            },
            policy,
            placement: None,
            reveal: Reveal::mount(now, timings.reveal_delay()),
            embed_url,
        };
        popup.reposition(metrics);
        log::debug!("preview popup mounted for {}", popup.item.id);
        popup
    }

    /// Recomputes the placement; a no-op while metrics are unavailable.
    pub fn reposition<M: LayoutMetrics + ?Sized>(&mut self, metrics: &M) -> bool {
        match metrics.metrics() {
            Some(metrics) => {
                self.placement = Some(compute_placement(&self.request, &metrics, &self.policy));
                true
            }
            None => false,
        }
    }

    /// Window resized: only recompute when the applied rectangle no longer
    /// fits, or when no placement could be made so far.
    pub fn on_resize<M: LayoutMetrics + ?Sized>(&mut self, metrics: &M) -> bool {
        let needs_update = match (self.placement, metrics.viewport_size()) {
            (None, _) => true,
            (Some(placement), Some(viewport)) => placement.is_out_of_bounds(viewport),
            (Some(_), None) => false,
        };
        needs_update && self.reposition(metrics)
    }

    /// Scrolling always closes the preview.
    pub fn on_scroll(&mut self) -> PopupEvent {
        self.reveal.reset();
        PopupEvent::Closed
    }

    /// Advances the reveal countdown. Returns `true` when the player appears.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.reveal.poll(now)
    }

    #[must_use]
    pub fn item(&self) -> &ContentItem {
        &self.item
    }

    #[must_use]
    pub fn placement(&self) -> Option<&PopupPlacement> {
        self.placement.as_ref()
    }

    #[must_use]
    pub fn policy(&self) -> &PopupPolicy {
        &self.policy
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Rectangle> {
        self.placement.map(|p| p.bounds())
    }

    /// Whether `point` is over the popup surface.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.bounds().is_some_and(|b| b.contains(point))
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.reveal.is_pending()
    }

    #[must_use]
    pub fn embed_url(&self) -> &str {
        &self.embed_url
    }
}
