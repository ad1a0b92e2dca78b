// SPDX-License-Identifier: MPL-2.0
//! Layout capabilities the preview depends on.
//!
//! The popup never queries the window directly. Viewport size and header
//! height come from a [`LayoutMetrics`] provider, and "what is under this
//! point" from a [`HitTest`] provider, so both can be faked in tests.

use crate::content::ItemId;
use iced::{Point, Rectangle, Size};

/// Header height assumed when the provider cannot report one.
pub const HEADER_HEIGHT_FALLBACK: f32 = 72.0;

/// Resolved metrics used by placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportMetrics {
    pub viewport: Size,
    pub header_height: f32,
}

impl ViewportMetrics {
    #[must_use]
    pub fn new(viewport: Size, header_height: f32) -> Self {
        Self {
            viewport,
            header_height,
        }
    }
}

pub trait LayoutMetrics {
    /// Current window size, or `None` before the first layout pass.
    fn viewport_size(&self) -> Option<Size>;

    /// Height of the fixed header, or `None` when it is not rendered.
    fn header_height(&self) -> Option<f32>;

    /// Metrics for placement; `None` while the viewport is unknown.
    fn metrics(&self) -> Option<ViewportMetrics> {
        let viewport = self.viewport_size()?;
        let header_height = self.header_height().unwrap_or(HEADER_HEIGHT_FALLBACK);
        Some(ViewportMetrics::new(viewport, header_height))
    }
}

pub trait HitTest {
    /// Thumbnail under `point` in window coordinates, with its current bounds.
    fn thumbnail_at(&self, point: Point) -> Option<(ItemId, Rectangle)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fake {
        viewport: Option<Size>,
        header: Option<f32>,
    }

    impl LayoutMetrics for Fake {
        fn viewport_size(&self) -> Option<Size> {
            self.viewport
        }

        fn header_height(&self) -> Option<f32> {
            self.header
        }
    }

    #[test]
    fn missing_header_uses_fallback() {
        let fake = Fake {
            viewport: Some(Size::new(1280.0, 800.0)),
            header: None,
        };
        let metrics = fake.metrics().expect("viewport is known");
        assert_eq!(metrics.header_height, HEADER_HEIGHT_FALLBACK);
    }

    #[test]
    fn unknown_viewport_yields_no_metrics() {
        let fake = Fake {
            viewport: None,
            header: Some(64.0),
        };
        assert!(fake.metrics().is_none());
    }
}
