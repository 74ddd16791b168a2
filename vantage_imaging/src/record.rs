// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;
use peniko::Color;

use crate::{Bitmap, Fill, Surface};

/// Owned snapshot of a [`Fill`], suitable for recording.
#[derive(Clone, Debug, PartialEq)]
pub enum FillKind {
    /// A solid fill with the given color.
    Solid(Color),
    /// A tiled fill; only the tile's pixel size is retained.
    Tile {
        /// Tile width in pixels.
        width: u32,
        /// Tile height in pixels.
        height: u32,
    },
}

/// A single recorded [`Surface`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// A clip rectangle was pushed.
    PushClip(Rect),
    /// The most recent clip was popped.
    PopClip,
    /// A rectangle was filled.
    FillRect {
        /// Filled rectangle.
        rect: Rect,
        /// Fill that was used.
        fill: FillKind,
    },
    /// A bitmap was blitted.
    DrawBitmap {
        /// Source bitmap width in pixels.
        width: u32,
        /// Source bitmap height in pixels.
        height: u32,
        /// Destination rectangle in logical units.
        dst: Rect,
    },
    /// A rectangle outline was stroked.
    StrokeRect {
        /// Outlined rectangle.
        rect: Rect,
        /// Stroke color.
        color: Color,
    },
    /// Centered text was requested.
    TextCentered {
        /// The text.
        text: String,
        /// Rectangle the text is centered in.
        rect: Rect,
    },
}

/// A [`Surface`] that records calls instead of producing pixels.
///
/// Intended for tests that assert on the order and shape of the
/// compositor's output. Clips are tracked for nesting; popping with no
/// active clip panics, mirroring a programming error rather than a drawing
/// condition.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    clip_depth: usize,
}

impl RecordingSurface {
    /// Returns the recorded operations in call order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Clears the recorded operations.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Number of clips currently pushed and not yet popped.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }
}

impl Surface for RecordingSurface {
    fn push_clip(&mut self, rect: Rect) {
        self.clip_depth += 1;
        self.ops.push(SurfaceOp::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        let Some(depth) = self.clip_depth.checked_sub(1) else {
            panic!("pop_clip underflow in RecordingSurface");
        };
        self.clip_depth = depth;
        self.ops.push(SurfaceOp::PopClip);
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill<'_>) {
        let fill = match fill {
            Fill::Solid(color) => FillKind::Solid(*color),
            Fill::Tile(bitmap) => FillKind::Tile {
                width: bitmap.width(),
                height: bitmap.height(),
            },
        };
        self.ops.push(SurfaceOp::FillRect { rect, fill });
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dst: Rect) {
        self.ops.push(SurfaceOp::DrawBitmap {
            width: bitmap.width(),
            height: bitmap.height(),
            dst,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::StrokeRect { rect, color });
    }

    fn draw_text_centered(&mut self, text: &str, rect: Rect, _color: Color) {
        self.ops.push(SurfaceOp::TextCentered {
            text: text.to_string(),
            rect,
        });
    }
}
