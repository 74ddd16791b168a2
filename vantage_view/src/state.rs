// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// What to paint behind the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Background {
    /// Leave the surface untouched.
    #[default]
    None,
    /// Fill the viewport with a solid light color.
    Solid,
    /// Tile a small two-tone checkerboard texture, the usual way of hinting
    /// at transparent regions.
    Checker,
}

/// Display state of a single viewport.
///
/// This is plain data: mutating a field here does not repaint anything.
/// The owning viewer exposes setters that update these fields and request
/// an invalidation from the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    /// Uniform zoom factor applied to the image's intrinsic size.
    ///
    /// Must be positive. Ignored while `fit_to_view` is set or while a
    /// cached raster is displayed.
    pub zoom: f64,
    /// Stretch the image over the full viewport, ignoring `zoom` and the
    /// intrinsic aspect ratio.
    pub fit_to_view: bool,
    /// What to paint behind the image.
    pub background: Background,
    /// Outline the image's target rectangle for debugging.
    pub show_border: bool,
    /// Display a pre-rendered raster instead of re-rendering the vector
    /// document on every paint.
    pub raster_mode: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            fit_to_view: false,
            background: Background::None,
            show_border: false,
            raster_mode: false,
        }
    }
}
