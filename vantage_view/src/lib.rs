// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_view --heading-base-level=0

//! Vantage View: view state and layout policy for an image viewport.
//!
//! This crate provides the small, headless model behind the Vantage viewer:
//! the per-viewport display state ([`ViewState`]) and the pure functions that
//! decide, on every paint, where an image of a given intrinsic size lands
//! inside a viewport rectangle ([`document_rect`], [`raster_rect`]).
//!
//! It does **not** own a document, a renderer, or any pixels. Callers are
//! expected to:
//! - Hold a [`ViewState`] next to whatever owns the document.
//! - Call [`document_rect`] (or [`raster_rect`] when a pre-rendered bitmap is
//!   being displayed) on each paint to obtain the target rectangle.
//! - Do their own clipping; target rectangles may extend past the viewport
//!   when the zoom factor is large.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use vantage_view::{ViewState, document_rect};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let mut state = ViewState::default();
//! state.zoom = 2.0;
//!
//! // A 100x50 image at 2x zoom is a 200x100 rect centered in the viewport.
//! let target = document_rect(viewport, Size::new(100.0, 50.0), state.zoom, state.fit_to_view);
//! assert_eq!(target, Rect::new(300.0, 250.0, 500.0, 350.0));
//! ```
//!
//! ## Design notes
//!
//! - Fit-to-view stretches the image over the whole viewport. It deliberately
//!   ignores both the zoom factor and the intrinsic aspect ratio.
//! - Zoom is a single uniform scalar applied to both axes.
//! - While a pre-rendered raster is displayed, its on-screen size comes from
//!   the raster's own pixel size and the device scale it was rendered at;
//!   zoom and fit-to-view do not apply to it.
//!
//! This crate is `no_std`.

#![no_std]

mod layout;
mod state;

pub use layout::{document_rect, raster_rect};
pub use state::{Background, ViewState};
