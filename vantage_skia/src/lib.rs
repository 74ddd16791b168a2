// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_skia --heading-base-level=0

//! tiny-skia implementation of the Vantage [`Surface`] trait.
//!
//! [`PixmapSurface`] paints onto a borrowed [`tiny_skia::Pixmap`] at a
//! fixed device scale: callers speak logical units, the surface multiplies
//! them onto physical pixels. Rect clips are kept as a stack and applied as
//! a mask; bitmap blits and tiled fills go through pattern shaders so the
//! blit and the engine's rasterization share one pixel format.
//!
//! Text is rasterized with `fontdue` when a font is attached; without one,
//! text calls are silently dropped (headless use does not need glyphs).

use kurbo::Rect;
use peniko::Color;
use tiny_skia::{
    FillRule, FilterQuality, Mask, Paint, PathBuilder, Pattern, Pixmap, SpreadMode, Stroke,
    Transform,
};
use vantage_imaging::{Bitmap, Fill, Surface};

/// A [`Surface`] that rasterizes onto a `tiny_skia::Pixmap`.
pub struct PixmapSurface<'a> {
    pixmap: &'a mut Pixmap,
    scale: f32,
    clips: Vec<Rect>,
    mask: Option<Mask>,
    font: Option<&'a fontdue::Font>,
    /// Logical font size for [`Surface::draw_text_centered`].
    text_size: f32,
}

impl std::fmt::Debug for PixmapSurface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("scale", &self.scale)
            .field("clips", &self.clips)
            .field("has_font", &self.font.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> PixmapSurface<'a> {
    /// Creates a surface over `pixmap`, mapping logical units onto pixels
    /// with `scale`.
    #[must_use]
    pub fn new(pixmap: &'a mut Pixmap, scale: f32) -> Self {
        Self {
            pixmap,
            scale,
            clips: Vec::new(),
            mask: None,
            font: None,
            text_size: 14.0,
        }
    }

    /// Attaches a font for text drawing.
    #[must_use]
    pub fn with_font(mut self, font: &'a fontdue::Font) -> Self {
        self.font = Some(font);
        self
    }

    fn device_transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    /// Intersection of all pushed clips, in logical units.
    fn clip_rect(&self) -> Option<Rect> {
        let mut iter = self.clips.iter();
        let first = *iter.next()?;
        Some(iter.fold(first, |acc, r| acc.intersect(*r)))
    }

    fn rebuild_mask(&mut self) {
        self.mask = self.clip_rect().and_then(|clip| {
            let mut mask = Mask::new(self.pixmap.width(), self.pixmap.height())?;
            let rect = to_skia_rect(clip)?;
            let path = PathBuilder::from_rect(rect);
            mask.fill_path(&path, FillRule::Winding, false, self.device_transform());
            Some(mask)
        });
    }

    fn fill_with_paint(&mut self, rect: Rect, paint: &Paint<'_>) {
        let Some(rect) = to_skia_rect(rect) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, paint, self.device_transform(), self.mask.as_ref());
    }
}

fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "viewport geometry fits f32 comfortably"
    )]
    tiny_skia::Rect::from_ltrb(
        rect.x0 as f32,
        rect.y0 as f32,
        rect.x1 as f32,
        rect.y1 as f32,
    )
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    let rgba = color.to_rgba8();
    tiny_skia::Color::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a)
}

fn bitmap_to_pixmap(bitmap: &Bitmap) -> Option<Pixmap> {
    let size = tiny_skia::IntSize::from_wh(bitmap.width(), bitmap.height())?;
    Pixmap::from_vec(bitmap.data().to_vec(), size)
}

impl Surface for PixmapSurface<'_> {
    fn push_clip(&mut self, rect: Rect) {
        self.clips.push(rect);
        self.rebuild_mask();
    }

    fn pop_clip(&mut self) {
        assert!(!self.clips.is_empty(), "pop_clip underflow in PixmapSurface");
        self.clips.pop();
        self.rebuild_mask();
    }

    fn fill_rect(&mut self, rect: Rect, fill: &Fill<'_>) {
        match fill {
            Fill::Solid(color) => {
                let mut paint = Paint::default();
                paint.set_color(to_skia_color(*color));
                paint.anti_alias = false;
                self.fill_with_paint(rect, &paint);
            }
            Fill::Tile(bitmap) => {
                let Some(tile) = bitmap_to_pixmap(bitmap) else {
                    return;
                };
                let paint = Paint {
                    shader: Pattern::new(
                        tile.as_ref(),
                        SpreadMode::Repeat,
                        FilterQuality::Nearest,
                        1.0,
                        Transform::identity(),
                    ),
                    anti_alias: false,
                    ..Paint::default()
                };
                self.fill_with_paint(rect, &paint);
            }
        }
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, dst: Rect) {
        if dst.width() <= 0.0 || dst.height() <= 0.0 {
            return;
        }
        let Some(src) = bitmap_to_pixmap(bitmap) else {
            return;
        };
        // Map the bitmap's pixel space onto the destination rect; the
        // device transform is applied on top by `fill_rect` below.
        #[allow(
            clippy::cast_possible_truncation,
            reason = "viewport geometry fits f32 comfortably"
        )]
        let to_dst = Transform::from_row(
            (dst.width() / f64::from(bitmap.width())) as f32,
            0.0,
            0.0,
            (dst.height() / f64::from(bitmap.height())) as f32,
            dst.x0 as f32,
            dst.y0 as f32,
        );
        let paint = Paint {
            shader: Pattern::new(
                src.as_ref(),
                SpreadMode::Pad,
                FilterQuality::Bilinear,
                1.0,
                to_dst,
            ),
            anti_alias: false,
            ..Paint::default()
        };
        self.fill_with_paint(dst, &paint);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = to_skia_rect(rect) else {
            return;
        };
        let path = PathBuilder::from_rect(rect);
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = false;
        self.pixmap.stroke_path(
            &path,
            &paint,
            &Stroke {
                width: 1.0,
                ..Stroke::default()
            },
            self.device_transform(),
            self.mask.as_ref(),
        );
    }

    fn draw_text_centered(&mut self, text: &str, rect: Rect, color: Color) {
        let Some(font) = self.font else {
            return;
        };
        let px = self.text_size * self.scale;
        let Some(line) = font.horizontal_line_metrics(px) else {
            return;
        };

        let advance: f32 = text
            .chars()
            .map(|ch| font.metrics(ch, px).advance_width)
            .sum();

        #[allow(
            clippy::cast_possible_truncation,
            reason = "viewport geometry fits f32 comfortably"
        )]
        let (cx, cy) = (
            (rect.center().x as f32) * self.scale,
            (rect.center().y as f32) * self.scale,
        );
        let mut pen_x = cx - advance / 2.0;
        let baseline = cy + (line.ascent + line.descent) / 2.0;

        let rgba = color.to_rgba8();
        for ch in text.chars() {
            let (metrics, coverage) = font.rasterize(ch, px);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "glyph offsets are small integers"
            )]
            let left = (pen_x + metrics.xmin as f32) as i32;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "glyph offsets are small integers"
            )]
            let top = (baseline - metrics.ymin as f32) as i32 - metrics.height as i32;
            blend_coverage(
                self.pixmap,
                &coverage,
                metrics.width,
                left,
                top,
                [rgba.r, rgba.g, rgba.b],
            );
            pen_x += metrics.advance_width;
        }
    }
}

/// Blends an alpha-coverage glyph bitmap onto the pixmap at `(left, top)`.
fn blend_coverage(
    pixmap: &mut Pixmap,
    coverage: &[u8],
    glyph_width: usize,
    left: i32,
    top: i32,
    rgb: [u8; 3],
) {
    if glyph_width == 0 {
        return;
    }
    let pm_width = pixmap.width() as i32;
    let pm_height = pixmap.height() as i32;
    let data = pixmap.data_mut();

    for (i, &cov) in coverage.iter().enumerate() {
        if cov == 0 {
            continue;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            reason = "glyph bitmaps are tiny"
        )]
        let x = left + (i % glyph_width) as i32;
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_possible_wrap,
            reason = "glyph bitmaps are tiny"
        )]
        let y = top + (i / glyph_width) as i32;
        if x < 0 || y < 0 || x >= pm_width || y >= pm_height {
            continue;
        }
        let idx = (y * pm_width + x) as usize * 4;
        let a = u32::from(cov);
        let inv = 255 - a;
        // Source-over with a premultiplied solid-color source.
        for (c, &src) in data[idx..idx + 3].iter_mut().zip(rgb.iter()) {
            *c = ((u32::from(src) * a + u32::from(*c) * inv) / 255).min(255) as u8;
        }
        data[idx + 3] = ((255 * a + u32::from(data[idx + 3]) * inv) / 255).min(255) as u8;
    }
}
