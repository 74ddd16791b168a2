// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

/// Computes where the vector document lands inside `content`.
///
/// With `fit_to_view` set, the result is `content` itself: the image is
/// stretched over the whole viewport and both `zoom` and the intrinsic
/// aspect ratio are ignored. Otherwise the target size is
/// `intrinsic * zoom` and the rectangle is centered within `content`.
///
/// The result is not clamped: a large zoom factor produces a rectangle
/// extending past `content` on all sides, and callers are expected to clip
/// drawing to the viewport.
#[must_use]
pub fn document_rect(content: Rect, intrinsic: Size, zoom: f64, fit_to_view: bool) -> Rect {
    if fit_to_view {
        return content;
    }
    centered(content, Size::new(intrinsic.width * zoom, intrinsic.height * zoom))
}

/// Computes where a pre-rendered raster lands inside `content`.
///
/// The displayed size is the raster's pixel size divided by the device
/// scale it was rendered at, so a raster produced for a 2x display occupies
/// its natural size in logical units. Zoom and fit-to-view do not apply
/// while a cached raster is displayed.
#[must_use]
pub fn raster_rect(content: Rect, width_px: u32, height_px: u32, scale: f64) -> Rect {
    centered(
        content,
        Size::new(f64::from(width_px) / scale, f64::from(height_px) / scale),
    )
}

/// Centers a rectangle of `size` within `content`.
///
/// Offsets may be negative when `size` exceeds the content extent.
fn centered(content: Rect, size: Size) -> Rect {
    let x0 = content.x0 + (content.width() - size.width) / 2.0;
    let y0 = content.y0 + (content.height() - size.height) / 2.0;
    Rect::new(x0, y0, x0 + size.width, y0 + size.height)
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{document_rect, raster_rect};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 800.0, 600.0);

    #[test]
    fn zoomed_size_is_intrinsic_times_zoom() {
        let target = document_rect(VIEWPORT, Size::new(100.0, 50.0), 3.0, false);
        assert_eq!(target.size(), Size::new(300.0, 150.0));
    }

    #[test]
    fn zoomed_target_is_centered() {
        let target = document_rect(VIEWPORT, Size::new(100.0, 50.0), 2.0, false);
        assert_eq!(target.x0, (800.0 - 200.0) / 2.0);
        assert_eq!(target.y0, (600.0 - 100.0) / 2.0);
    }

    #[test]
    fn oversized_target_gets_negative_offsets() {
        let target = document_rect(VIEWPORT, Size::new(1000.0, 1000.0), 1.0, false);
        assert_eq!(target.x0, -100.0);
        assert_eq!(target.y0, -200.0);
        assert_eq!(target.size(), Size::new(1000.0, 1000.0));
    }

    #[test]
    fn fit_to_view_fills_the_viewport() {
        // Independent of intrinsic size and zoom.
        for (w, h, z) in [(1.0, 1.0, 1.0), (4000.0, 10.0, 0.25), (33.0, 77.0, 9.0)] {
            let target = document_rect(VIEWPORT, Size::new(w, h), z, true);
            assert_eq!(target, VIEWPORT);
        }
    }

    #[test]
    fn centering_respects_the_content_origin() {
        let content = Rect::new(100.0, 40.0, 300.0, 140.0);
        let target = document_rect(content, Size::new(50.0, 50.0), 1.0, false);
        assert_eq!(target.x0, 100.0 + (200.0 - 50.0) / 2.0);
        assert_eq!(target.y0, 40.0 + (100.0 - 50.0) / 2.0);
    }

    #[test]
    fn raster_rect_divides_by_rendered_scale() {
        let target = raster_rect(VIEWPORT, 400, 200, 2.0);
        assert_eq!(target.size(), Size::new(200.0, 100.0));
        assert_eq!(target.x0, (800.0 - 200.0) / 2.0);
        assert_eq!(target.y0, (600.0 - 100.0) / 2.0);
    }

    #[test]
    fn raster_rect_at_unit_scale_uses_pixel_size() {
        let target = raster_rect(VIEWPORT, 800, 600, 1.0);
        assert_eq!(target, VIEWPORT);
    }
}
