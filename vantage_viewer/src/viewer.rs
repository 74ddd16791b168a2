// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;

use kurbo::Size;
use vantage_imaging::{Bitmap, EngineError, VectorEngine};
use vantage_view::{Background, ViewState};

use crate::checker::checker_texture;
use crate::document::DocumentSlot;
use crate::event::ViewerEvent;

/// A pre-rendered bitmap of the current document, plus the device scale it
/// was rendered at. The scale is what turns the raster's pixel size back
/// into logical units at display time.
#[derive(Debug)]
pub(crate) struct CachedRaster {
    pub(crate) bitmap: Bitmap,
    pub(crate) scale: f64,
}

/// The viewport component: document lifecycle, display state, cached
/// raster, event queue.
///
/// All methods are synchronous and expect a single-threaded, event-driven
/// host: setters mutate state and request an invalidation, the host later
/// delivers one paint request, and [`Viewer::paint`](Self::paint) does the
/// drawing. Nothing here repaints synchronously.
pub struct Viewer<E: VectorEngine> {
    engine: E,
    state: ViewState,
    slot: DocumentSlot<E::Document>,
    raster: Option<CachedRaster>,
    checker: Bitmap,
    device_scale: f64,
    events: Vec<ViewerEvent>,
    redraw_requested: bool,
}

impl<E: VectorEngine> std::fmt::Debug for Viewer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewer")
            .field("state", &self.state)
            .field("has_document", &self.slot.document().is_some())
            .field("device_scale", &self.device_scale)
            .field("pending_events", &self.events.len())
            .finish_non_exhaustive()
    }
}

impl<E: VectorEngine> Viewer<E> {
    /// Creates an empty viewer over the given engine.
    #[must_use]
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            state: ViewState::default(),
            slot: DocumentSlot::new(),
            raster: None,
            checker: checker_texture(),
            device_scale: 1.0,
            events: Vec::new(),
            redraw_requested: true,
        }
    }

    /// The current display state.
    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Whether a document is currently loaded.
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.slot.document().is_some()
    }

    /// The loaded document's natural size, or `None` while empty.
    #[must_use]
    pub fn intrinsic_size(&self) -> Option<Size> {
        self.slot.document().map(|doc| self.engine.intrinsic_size(doc))
    }

    /// Sets the zoom factor. Ignored while fit-to-view or a cached raster
    /// is active.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.state.zoom = zoom;
        self.request_redraw();
    }

    /// Toggles stretch-to-fill display.
    pub fn set_fit_to_view(&mut self, fit: bool) {
        self.state.fit_to_view = fit;
        self.request_redraw();
    }

    /// Selects what to paint behind the image.
    pub fn set_background(&mut self, background: Background) {
        self.state.background = background;
        self.request_redraw();
    }

    /// Toggles the debug outline around the image's target rectangle.
    pub fn set_show_border(&mut self, show: bool) {
        self.state.show_border = show;
        self.request_redraw();
    }

    /// Switches between re-rendering the vector document every paint and
    /// displaying a raster pre-rendered at the current device scale.
    ///
    /// Turning raster mode on (re)generates the cached raster from the
    /// live document; turning it off discards the cache. The cache is not
    /// refreshed when the device scale changes later; hosts that care can
    /// toggle the mode again.
    pub fn set_raster_mode(&mut self, on: bool) {
        self.state.raster_mode = on;
        if on {
            self.regenerate_raster();
        } else {
            self.raster = None;
        }
        self.request_redraw();
    }

    /// Records the display's device-pixel scale.
    ///
    /// Used to size raster pre-renders and live render targets. Does not
    /// invalidate an existing cached raster.
    pub fn set_device_scale(&mut self, scale: f64) {
        self.device_scale = scale;
        self.request_redraw();
    }

    /// The device-pixel scale last recorded via
    /// [`set_device_scale`](Self::set_device_scale).
    #[must_use]
    pub fn device_scale(&self) -> f64 {
        self.device_scale
    }

    /// Loads a document from an in-memory byte buffer.
    ///
    /// `dpi` is the product of the display's logical DPI and its device
    /// scale at this moment. The previous document (and any raster cached
    /// from it) is released before the parse; on failure the viewer stays
    /// empty and queues one [`ViewerEvent::LoadError`].
    pub fn load_data(&mut self, data: &[u8], dpi: f64) {
        self.begin_load();
        let parsed = self.engine.parse_data(data, dpi);
        self.finish_load(parsed);
    }

    /// Loads a document from a file on disk. Semantics as
    /// [`load_data`](Self::load_data).
    pub fn load_file(&mut self, path: &Path, dpi: f64) {
        self.begin_load();
        let parsed = self.engine.parse_file(path, dpi);
        self.finish_load(parsed);
    }

    /// Queued events, in occurrence order.
    #[must_use]
    pub fn events(&self) -> &[ViewerEvent] {
        &self.events
    }

    /// Takes the queued events, leaving the queue empty.
    pub fn drain_events(&mut self) -> Vec<ViewerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Returns and clears the pending invalidation request.
    ///
    /// Hosts call this after processing their own events and schedule a
    /// repaint when it returns `true`.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    pub(crate) fn document(&self) -> Option<&E::Document> {
        self.slot.document()
    }

    pub(crate) fn raster(&self) -> Option<&CachedRaster> {
        self.raster.as_ref()
    }

    pub(crate) fn checker(&self) -> &Bitmap {
        &self.checker
    }

    pub(crate) fn push_event(&mut self, event: ViewerEvent) {
        self.events.push(event);
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// The previous document and its raster are released before the parse
    /// is even attempted; a failing parse must not resurrect them.
    fn begin_load(&mut self) {
        self.slot.clear();
        self.raster = None;
    }

    fn finish_load(&mut self, parsed: Result<E::Document, EngineError>) {
        match parsed {
            Ok(doc) => {
                self.slot.install(doc);
                if self.state.raster_mode {
                    self.regenerate_raster();
                }
            }
            Err(err) => {
                self.events
                    .push(ViewerEvent::LoadError(err.message().to_owned()));
            }
        }
        self.request_redraw();
    }

    fn regenerate_raster(&mut self) {
        let scale = self.device_scale;
        self.raster = self.slot.document().and_then(|doc| {
            let intrinsic = self.engine.intrinsic_size(doc);
            let width_px = scaled_px(intrinsic.width, scale);
            let height_px = scaled_px(intrinsic.height, scale);
            let bitmap = self.engine.rasterize(doc, width_px, height_px)?;
            Some(CachedRaster { bitmap, scale })
        });
    }
}

/// A logical extent in device pixels, rounded to the nearest whole pixel.
pub(crate) fn scaled_px(logical: f64, scale: f64) -> u32 {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "extents are clamped non-negative and far below u32::MAX"
    )]
    {
        (logical * scale).round().max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use crate::ViewerEvent;
    use crate::testutil::MockEngine;

    use super::{Viewer, scaled_px};

    #[test]
    fn setters_request_invalidation_without_painting() {
        let mut viewer = Viewer::new(MockEngine::new(Size::new(100.0, 50.0)));
        assert!(viewer.take_redraw_request());
        assert!(!viewer.take_redraw_request());

        viewer.set_zoom(2.0);
        assert!(viewer.take_redraw_request());
        viewer.set_fit_to_view(true);
        assert!(viewer.take_redraw_request());
        assert!(!viewer.take_redraw_request());
    }

    #[test]
    fn failed_load_empties_the_viewer_and_queues_one_error() {
        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());

        viewer.load_data(b"good", 96.0);
        assert!(viewer.has_document());
        assert_eq!(engine.live_documents(), 1);

        viewer.load_data(MockEngine::BAD_DATA, 96.0);
        assert!(!viewer.has_document());
        assert!(viewer.intrinsic_size().is_none());
        assert_eq!(engine.live_documents(), 0);

        let events = viewer.drain_events();
        let errors: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                ViewerEvent::LoadError(msg) => Some(msg),
                _ => None,
            })
            .collect();
        assert_eq!(errors.len(), 1);
        assert!(!errors[0].is_empty());
    }

    #[test]
    fn reload_replaces_exactly_one_document() {
        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());

        viewer.load_data(b"first", 96.0);
        viewer.load_data(b"second", 96.0);
        assert_eq!(engine.live_documents(), 1);
        assert_eq!(engine.dropped_documents(), 1);

        drop(viewer);
        assert_eq!(engine.live_documents(), 0);
    }

    #[test]
    fn previous_document_is_released_before_the_parse_starts() {
        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());

        viewer.load_data(b"first", 96.0);
        viewer.load_data(b"second", 96.0);
        assert_eq!(engine.live_at_last_parse(), Some(0));

        viewer.load_data(MockEngine::BAD_DATA, 96.0);
        assert_eq!(engine.live_at_last_parse(), Some(0));
    }

    #[test]
    fn raster_mode_caches_at_the_current_device_scale() {
        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());
        viewer.set_device_scale(2.0);
        viewer.load_data(b"good", 96.0);

        viewer.set_raster_mode(true);
        assert_eq!(engine.rasterize_calls(), 1);
        assert_eq!(engine.last_rasterize_size(), Some((200, 100)));

        viewer.set_raster_mode(false);
        viewer.set_raster_mode(true);
        assert_eq!(engine.rasterize_calls(), 2);
    }

    #[test]
    fn document_swap_regenerates_the_raster_cache() {
        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());
        viewer.load_data(b"first", 96.0);
        viewer.set_raster_mode(true);
        assert_eq!(engine.rasterize_calls(), 1);

        engine.set_intrinsic(Size::new(30.0, 30.0));
        viewer.load_data(b"second", 96.0);
        assert_eq!(engine.rasterize_calls(), 2);
        assert_eq!(engine.last_rasterize_size(), Some((30, 30)));
    }

    #[test]
    fn failed_load_discards_the_previous_raster() {
        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());
        viewer.load_data(b"good", 96.0);
        viewer.set_raster_mode(true);

        viewer.load_data(MockEngine::BAD_DATA, 96.0);
        assert!(viewer.raster().is_none());
    }

    #[test]
    fn scaled_px_rounds_to_whole_pixels() {
        assert_eq!(scaled_px(100.0, 1.0), 100);
        assert_eq!(scaled_px(100.0, 1.5), 150);
        assert_eq!(scaled_px(33.4, 1.0), 33);
        assert_eq!(scaled_px(-5.0, 1.0), 0);
    }
}
