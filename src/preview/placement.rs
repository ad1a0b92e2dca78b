// SPDX-License-Identifier: MPL-2.0
//! Popup placement.
//!
//! [`compute_placement`] is a pure function of the hover geometry, the
//! viewport metrics and the popup size policy. The result always lies inside
//! the viewport, below the header:
//!
//! - `left >= 10` and `left + width <= viewport.width - 10`
//! - `top >= header_height + 10`
//! - `top + max_height <= viewport.height - 10`
//!
//! (for any viewport at least `header_height + 20` tall and 20 wide).

use super::metrics::ViewportMetrics;
use iced::{Point, Rectangle, Size};

/// Gap kept between the popup and every viewport edge.
pub const EDGE_MARGIN: f32 = 10.0;

/// How far above the thumbnail's top edge the popup starts.
const ANCHOR_LIFT: f32 = 20.0;

/// Clamp displacement after which the popup moves below the thumbnail.
const BELOW_JUMP: f32 = 50.0;

/// Space left under an anchored popup.
const BOTTOM_MARGIN: f32 = 20.0;

/// Vertical gap between the cursor and a cursor-anchored popup.
const CURSOR_OFFSET: f32 = 5.0;

/// Size policy of the preview popup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPolicy {
    pub width: f32,
    /// Height of the 16:9 media area.
    pub media_height: f32,
    /// Height of the info panel under the media.
    pub info_height: f32,
    /// Below this height budget the popup flips above its thumbnail.
    pub min_usable_height: f32,
    /// The flip only happens when the thumbnail top is lower than this.
    pub flip_threshold: f32,
}

impl PopupPolicy {
    #[must_use]
    pub fn natural_height(&self) -> f32 {
        self.media_height + self.info_height
    }
}

impl Default for PopupPolicy {
    fn default() -> Self {
        let width = crate::ui::design_tokens::sizing::POPUP_WIDTH;
        Self {
            width,
            media_height: width * 9.0 / 16.0,
            info_height: crate::ui::design_tokens::sizing::POPUP_INFO_HEIGHT,
            min_usable_height: 200.0,
            flip_threshold: 450.0,
        }
    }
}

/// Geometry snapshot of a confirmed hover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub point: Point,
    pub rect: Option<Rectangle>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPlacement {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub max_height: f32,
    /// Height the popup would like to have.
    pub natural_height: f32,
    /// Placed above its thumbnail because there was no room below.
    pub flipped: bool,
}

impl PopupPlacement {
    /// Height actually used on screen.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.natural_height.min(self.max_height)
    }

    /// Applied rectangle in window coordinates.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.left, self.top),
            Size::new(self.width, self.height()),
        )
    }

    /// Whether the applied rectangle sticks out of `viewport`.
    #[must_use]
    pub fn is_out_of_bounds(&self, viewport: Size) -> bool {
        let bounds = self.bounds();
        bounds.x < 0.0
            || bounds.y < 0.0
            || bounds.x + bounds.width > viewport.width
            || bounds.y + bounds.height > viewport.height
    }
}

/// Computes where the popup goes.
#[must_use]
pub fn compute_placement(
    request: &PlacementRequest,
    metrics: &ViewportMetrics,
    policy: &PopupPolicy,
) -> PopupPlacement {
    let safe_top = metrics.header_height + EDGE_MARGIN;

    let raw = match request.rect {
        Some(rect) => anchored(rect, metrics.viewport, safe_top, policy),
        None => cursor_anchored(request.point, metrics.viewport, safe_top, policy),
    };

    contain(raw, metrics.viewport, safe_top, policy)
}

fn anchored(rect: Rectangle, viewport: Size, safe_top: f32, policy: &PopupPolicy) -> PopupPlacement {
    let width = policy.width;
    let natural_height = policy.natural_height();

    let centered = rect.x + rect.width / 2.0 - width / 2.0;
    let left = centered
        .min(viewport.width - width - EDGE_MARGIN)
        .max(EDGE_MARGIN);

    let wanted = rect.y - ANCHOR_LIFT;
    let mut top = wanted.max(safe_top);
    let rect_bottom = rect.y + rect.height;
    if top > rect_bottom && top - wanted > BELOW_JUMP {
        top = rect_bottom + EDGE_MARGIN;
    }

    let mut max_height = viewport.height - top - BOTTOM_MARGIN;
    let mut flipped = false;
    if max_height < policy.min_usable_height && rect.y > policy.flip_threshold {
        top = (rect.y - natural_height - EDGE_MARGIN).max(safe_top);
        max_height = rect.y - top - EDGE_MARGIN;
        flipped = true;
        log::debug!("popup flipped above thumbnail at y={}", rect.y);
    }

    PopupPlacement {
        left,
        top,
        width,
        max_height,
        natural_height,
        flipped,
    }
}

fn cursor_anchored(
    point: Point,
    viewport: Size,
    safe_top: f32,
    policy: &PopupPolicy,
) -> PopupPlacement {
    let width = policy.width;
    let natural_height = policy.natural_height();

    let mut left = point.x;
    if left + width > viewport.width {
        left = point.x - width;
        if left < 0.0 {
            left = (viewport.width - width - EDGE_MARGIN).max(EDGE_MARGIN);
        }
    }

    let mut top = (point.y + CURSOR_OFFSET).max(safe_top);
    let mut flipped = false;
    if top + natural_height > viewport.height {
        let above = point.y - natural_height - CURSOR_OFFSET;
        top = if above < safe_top {
            (viewport.height - natural_height - EDGE_MARGIN).max(safe_top)
        } else {
            flipped = true;
            above
        };
    }

    PopupPlacement {
        left,
        top,
        width,
        max_height: viewport.height - top - EDGE_MARGIN,
        natural_height,
        flipped,
    }
}

fn contain(
    placement: PopupPlacement,
    viewport: Size,
    safe_top: f32,
    policy: &PopupPolicy,
) -> PopupPlacement {
    let width = policy
        .width
        .min(viewport.width - 2.0 * EDGE_MARGIN)
        .max(0.0);
    let left = placement
        .left
        .min(viewport.width - width - EDGE_MARGIN)
        .max(EDGE_MARGIN);
    let top = placement
        .top
        .min((viewport.height - EDGE_MARGIN).max(safe_top))
        .max(safe_top);
    let max_height = placement
        .max_height
        .min(viewport.height - EDGE_MARGIN - top)
        .max(0.0);

    PopupPlacement {
        left,
        top,
        width,
        max_height,
        ..placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use proptest::prelude::*;

    fn metrics(width: f32, height: f32, header: f32) -> ViewportMetrics {
        ViewportMetrics::new(Size::new(width, height), header)
    }

    fn anchored_request(x: f32, y: f32) -> PlacementRequest {
        PlacementRequest {
            point: Point::new(x + 50.0, y + 50.0),
            rect: Some(Rectangle::new(Point::new(x, y), Size::new(192.0, 288.0))),
        }
    }

    #[test]
    fn default_policy_is_wide_16_9() {
        let policy = PopupPolicy::default();
        assert_abs_diff_eq!(policy.width, 320.0);
        assert_abs_diff_eq!(policy.media_height, 180.0);
        assert_abs_diff_eq!(policy.natural_height(), 330.0);
    }

    #[test]
    fn anchored_sits_just_above_thumbnail_when_room_allows() {
        let placement = compute_placement(
            &anchored_request(100.0, 500.0),
            &metrics(1280.0, 800.0, 72.0),
            &PopupPolicy::default(),
        );

        assert_abs_diff_eq!(placement.top, 480.0);
        assert_abs_diff_eq!(placement.left, 100.0 + 96.0 - 160.0);
        assert!(placement.left >= 10.0 && placement.left <= 1280.0 - 320.0 - 10.0);
        assert!(!placement.flipped);
    }

    #[test]
    fn short_viewport_flips_above_thumbnail() {
        let placement = compute_placement(
            &anchored_request(100.0, 500.0),
            &metrics(1280.0, 550.0, 72.0),
            &PopupPolicy::default(),
        );

        assert!(placement.flipped);
        assert!(placement.top < 500.0);
        assert_abs_diff_eq!(placement.top, 160.0);
        assert_abs_diff_eq!(placement.max_height, 330.0);
    }

    #[test]
    fn thumbnail_under_header_moves_popup_below_it() {
        let placement = compute_placement(
            &PlacementRequest {
                point: Point::new(200.0, 80.0),
                rect: Some(Rectangle::new(Point::new(150.0, -250.0), Size::new(192.0, 288.0))),
            },
            &metrics(1280.0, 800.0, 72.0),
            &PopupPolicy::default(),
        );

        // Thumbnail bottom is at 38, above the safe top of 82.
        assert_abs_diff_eq!(placement.top, 82.0);
    }

    #[test]
    fn clamps_to_right_edge() {
        let placement = compute_placement(
            &anchored_request(1180.0, 300.0),
            &metrics(1280.0, 800.0, 72.0),
            &PopupPolicy::default(),
        );
        assert_abs_diff_eq!(placement.left, 1280.0 - 320.0 - 10.0);
    }

    #[test]
    fn cursor_mode_flips_left_and_up_near_corner() {
        let placement = compute_placement(
            &PlacementRequest {
                point: Point::new(1200.0, 700.0),
                rect: None,
            },
            &metrics(1280.0, 800.0, 72.0),
            &PopupPolicy::default(),
        );

        assert_abs_diff_eq!(placement.left, 1200.0 - 320.0);
        assert_abs_diff_eq!(placement.top, 700.0 - 330.0 - 5.0);
        assert!(placement.flipped);
    }

    #[test]
    fn cursor_mode_starts_below_pointer() {
        let placement = compute_placement(
            &PlacementRequest {
                point: Point::new(300.0, 200.0),
                rect: None,
            },
            &metrics(1280.0, 800.0, 72.0),
            &PopupPolicy::default(),
        );
        assert_abs_diff_eq!(placement.left, 300.0);
        assert_abs_diff_eq!(placement.top, 205.0);
    }

    #[test]
    fn cursor_mode_falls_back_when_neither_side_fits() {
        let placement = compute_placement(
            &PlacementRequest {
                point: Point::new(200.0, 300.0),
                rect: None,
            },
            &metrics(400.0, 420.0, 72.0),
            &PopupPolicy::default(),
        );

        // Neither right nor left of the pointer fits a 320px popup.
        assert_abs_diff_eq!(placement.left, 70.0);
        // Above would cross the safe top, so clamp to the bottom.
        assert_abs_diff_eq!(placement.top, 82.0);
    }

    #[test]
    fn out_of_bounds_detection() {
        let placement = PopupPlacement {
            left: 900.0,
            top: 100.0,
            width: 320.0,
            max_height: 330.0,
            natural_height: 330.0,
            flipped: false,
        };
        assert!(!placement.is_out_of_bounds(Size::new(1280.0, 800.0)));
        assert!(placement.is_out_of_bounds(Size::new(1000.0, 800.0)));
        assert!(placement.is_out_of_bounds(Size::new(1280.0, 300.0)));
    }

    proptest! {
        #[test]
        fn placement_stays_inside_viewport(
            vw in 40.0f32..2560.0,
            extra_h in 0.0f32..1500.0,
            header in 0.0f32..120.0,
            x in -400.0f32..2800.0,
            y in -400.0f32..2000.0,
            anchored in any::<bool>(),
        ) {
            let vh = header + 20.0 + extra_h;
            let request = PlacementRequest {
                point: Point::new(x, y),
                rect: anchored.then(|| Rectangle::new(Point::new(x, y), Size::new(192.0, 288.0))),
            };
            let p = compute_placement(&request, &metrics(vw, vh, header), &PopupPolicy::default());
            let eps = 1e-3;

            prop_assert!(p.left >= EDGE_MARGIN - eps);
            prop_assert!(p.top >= header + EDGE_MARGIN - eps);
            prop_assert!(p.left + p.width <= vw - EDGE_MARGIN + eps);
            prop_assert!(p.top + p.max_height <= vh - EDGE_MARGIN + eps);
            prop_assert!(p.max_height >= 0.0);
            prop_assert!(!p.is_out_of_bounds(Size::new(vw, vh)));
        }
    }
}
