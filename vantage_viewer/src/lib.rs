// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_viewer --heading-base-level=0

//! Vantage Viewer: a headless SVG viewport component.
//!
//! [`Viewer`] owns the whole render/state pipeline of an image viewport:
//! - at most one parsed document at a time, loaded from bytes, a file, or a
//!   drag-and-drop, with the previous document released before every load;
//! - the display state (zoom, fit-to-view, background, border, raster mode)
//!   with setters that request invalidation instead of painting;
//! - an optional pre-rendered raster cached at the current device scale;
//! - the compositor that, per paint request, clips to the viewport, paints
//!   the background, draws the cached raster or a fresh vector render into
//!   the computed target rectangle, and overlays the debug border.
//!
//! The vector engine and the paint target stay behind the
//! [`vantage_imaging`] traits, so the component runs identically under a
//! real host (`winit` + `vantage_skia` + `vantage_svg`) and under tests
//! (mock engine + recording surface).
//!
//! Outputs are pulled, not pushed: the host drains queued [`ViewerEvent`]s
//! (load errors, per-paint render timings, rejected drops) and the pending
//! redraw request whenever it is convenient.
//!
//! ## Example
//!
//! ```rust,ignore
//! use kurbo::Rect;
//! use vantage_viewer::{Background, Viewer};
//!
//! let mut viewer = Viewer::new(vantage_svg::SvgEngine::new());
//! viewer.set_background(Background::Checker);
//! viewer.load_file("image.svg".as_ref(), 96.0 * scale);
//!
//! // Later, on the host's paint event:
//! viewer.paint(&mut surface, Rect::new(0.0, 0.0, 800.0, 600.0));
//! for event in viewer.drain_events() {
//!     // report load errors / render timings
//! }
//! ```

mod checker;
mod compositor;
mod document;
mod dropped;
mod event;
#[cfg(test)]
mod testutil;
mod viewer;

pub use checker::checker_texture;
pub use compositor::PLACEHOLDER_TEXT;
pub use dropped::UNSUPPORTED_DROP_MESSAGE;
pub use event::ViewerEvent;
pub use viewer::Viewer;

pub use vantage_view::{Background, ViewState};
