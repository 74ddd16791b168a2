// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=vantage_svg --heading-base-level=0

//! resvg-backed [`VectorEngine`] implementation.
//!
//! [`SvgEngine`] parses SVG and gzip-compressed SVGZ data with `usvg`
//! (threading the caller's DPI into unit resolution and sharing one
//! system-font database across parses) and rasterizes documents with
//! `resvg` into premultiplied RGBA8 bitmaps.
//!
//! `usvg` reports recoverable problems through the `log` facade; call
//! [`init_log`] once at startup to get them on stderr.

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::Once;

use kurbo::Size;
use usvg::fontdb;
use vantage_imaging::{Bitmap, EngineError, VectorEngine};

/// Installs a process-wide stderr logger for engine warnings.
///
/// Idempotent; only the first call has any effect. Expected before the
/// first parse so malformed-but-recoverable input is reported somewhere.
pub fn init_log() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = fern::Dispatch::new()
            .format(log_format)
            .level(log::LevelFilter::Warn)
            .chain(std::io::stderr())
            .apply();
    });
}

fn log_format(out: fern::FormatCallback<'_>, message: &fmt::Arguments<'_>, record: &log::Record<'_>) {
    let lvl = match record.level() {
        log::Level::Error => "Error",
        log::Level::Warn => "Warning",
        log::Level::Info => "Info",
        log::Level::Debug => "Debug",
        log::Level::Trace => "Trace",
    };

    out.finish(format_args!("{} (in {}): {}", lvl, record.target(), message));
}

/// SVG parse/render service built on `usvg` and `resvg`.
///
/// Construction loads the system font database once; every parsed document
/// shares it, so text inside SVG files resolves without per-parse I/O.
#[derive(Clone, Debug)]
pub struct SvgEngine {
    fontdb: Arc<fontdb::Database>,
}

impl SvgEngine {
    /// Creates an engine with the system fonts loaded.
    #[must_use]
    pub fn new() -> Self {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();
        Self {
            fontdb: Arc::new(db),
        }
    }

    fn options(&self, dpi: f64) -> usvg::Options<'static> {
        let mut options = usvg::Options::default();
        #[allow(
            clippy::cast_possible_truncation,
            reason = "usvg speaks f32 DPI; display DPI values are far below f32 limits"
        )]
        {
            options.dpi = dpi as f32;
        }
        options.fontdb = Arc::clone(&self.fontdb);
        options
    }
}

impl Default for SvgEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VectorEngine for SvgEngine {
    type Document = usvg::Tree;

    fn parse_data(&self, data: &[u8], dpi: f64) -> Result<usvg::Tree, EngineError> {
        // `from_data` sniffs the gzip magic, so SVGZ needs no special casing.
        usvg::Tree::from_data(data, &self.options(dpi))
            .map_err(|e| EngineError::new(e.to_string()))
    }

    fn parse_file(&self, path: &Path, dpi: f64) -> Result<usvg::Tree, EngineError> {
        let data = std::fs::read(path)
            .map_err(|e| EngineError::new(format!("cannot read '{}': {e}", path.display())))?;
        self.parse_data(&data, dpi)
    }

    fn intrinsic_size(&self, document: &usvg::Tree) -> Size {
        let size = document.size();
        Size::new(f64::from(size.width()), f64::from(size.height()))
    }

    fn rasterize(&self, document: &usvg::Tree, width_px: u32, height_px: u32) -> Option<Bitmap> {
        let mut pixmap = tiny_skia::Pixmap::new(width_px, height_px)?;

        let size = document.size();
        #[allow(
            clippy::cast_precision_loss,
            reason = "pixel extents fit f32 for any realistic viewport"
        )]
        let transform = tiny_skia::Transform::from_scale(
            width_px as f32 / size.width(),
            height_px as f32 / size.height(),
        );
        resvg::render(document, transform, &mut pixmap.as_mut());

        Some(Bitmap::from_rgba8(width_px, height_px, pixmap.take()))
    }
}
