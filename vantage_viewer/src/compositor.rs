// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Instant;

use kurbo::Rect;
use peniko::Color;
use vantage_imaging::{Fill, Surface, VectorEngine};
use vantage_view::{Background, document_rect, raster_rect};

use crate::event::ViewerEvent;
use crate::viewer::{Viewer, scaled_px};

/// Centered prompt shown while no document is loaded.
pub const PLACEHOLDER_TEXT: &str = "Drop an SVG image here.";

/// Solid background fill.
const SOLID_BACKGROUND: Color = Color::WHITE;
/// Debug border color.
const BORDER: Color = Color::from_rgb8(0, 255, 0);

impl<E: VectorEngine> Viewer<E> {
    /// Paints the viewport into `surface`.
    ///
    /// `viewport` is the content rectangle in logical units. With no
    /// document and no cached raster this draws the centered placeholder
    /// prompt and returns without a timing event. Otherwise drawing is
    /// clipped to `viewport`: background, then the cached raster (blitted
    /// at its natural-size rectangle) or a fresh vector render sized by the
    /// layout policy, then exactly one [`ViewerEvent::RenderTime`], then
    /// the optional border outline.
    pub fn paint<S: Surface>(&mut self, surface: &mut S, viewport: Rect) {
        if self.document().is_none() && self.raster().is_none() {
            surface.draw_text_centered(PLACEHOLDER_TEXT, viewport, Color::BLACK);
            return;
        }

        let state = self.state();
        surface.push_clip(viewport);

        match state.background {
            Background::None => {}
            Background::Solid => surface.fill_rect(viewport, &Fill::Solid(SOLID_BACKGROUND)),
            Background::Checker => surface.fill_rect(viewport, &Fill::Tile(self.checker())),
        }

        let started = Instant::now();
        let target = if let Some(raster) = self.raster() {
            // Pre-rendered path: displayed size comes from the raster's own
            // pixel size and rendered scale; zoom and fit do not apply.
            let target = raster_rect(
                viewport,
                raster.bitmap.width(),
                raster.bitmap.height(),
                raster.scale,
            );
            surface.draw_bitmap(&raster.bitmap, target);
            target
        } else {
            self.paint_document(surface, viewport)
        };

        let nanos = u64::try_from(started.elapsed().as_nanos()).unwrap_or(u64::MAX);
        self.push_event(ViewerEvent::RenderTime(nanos));

        if state.show_border {
            surface.stroke_rect(target, BORDER);
        }

        surface.pop_clip();
    }

    /// Live vector path: render the document at the target rectangle's
    /// physical pixel size and blit the result.
    fn paint_document<S: Surface>(&self, surface: &mut S, viewport: Rect) -> Rect {
        let state = self.state();
        let doc = self
            .document()
            .expect("paint_document requires a live document");
        let intrinsic = self.engine().intrinsic_size(doc);
        let target = document_rect(viewport, intrinsic, state.zoom, state.fit_to_view);

        let scale = self.device_scale();
        let width_px = scaled_px(target.width(), scale);
        let height_px = scaled_px(target.height(), scale);
        if let Some(bitmap) = self.engine().rasterize(doc, width_px, height_px) {
            surface.draw_bitmap(&bitmap, target);
        }
        target
    }
}
