// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use std::path::Path;

use kurbo::Size;

use crate::Bitmap;

/// A parse or render failure reported by a [`VectorEngine`].
///
/// Engines report failures as text; this newtype guarantees the text is
/// never empty so hosts can always display something.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineError {
    message: String,
}

impl EngineError {
    /// Wraps an engine's error text.
    ///
    /// Empty text is replaced by a generic message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            String::from("unknown engine error")
        } else {
            message
        };
        Self { message }
    }

    /// The error text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl core::error::Error for EngineError {}

/// The external vector-image service: parse, measure, rasterize.
///
/// Documents are opaque to the viewer; their resources are released by
/// dropping them. All calls are synchronous and bounded; the viewport's
/// event model treats parse and render as unconditionally completing.
pub trait VectorEngine {
    /// Opaque parsed document.
    type Document;

    /// Parses an image from an in-memory byte buffer.
    ///
    /// `dpi` is the product of the display's logical DPI and its device
    /// scale; the engine uses it to resolve physical units.
    fn parse_data(&self, data: &[u8], dpi: f64) -> Result<Self::Document, EngineError>;

    /// Parses an image from a file on disk.
    fn parse_file(&self, path: &Path, dpi: f64) -> Result<Self::Document, EngineError>;

    /// The document's natural size, in its own coordinate system.
    fn intrinsic_size(&self, document: &Self::Document) -> Size;

    /// Rasterizes the document, antialiased, into a bitmap of exactly
    /// `width_px` x `height_px` pixels.
    ///
    /// Returns `None` when either dimension is zero.
    fn rasterize(
        &self,
        document: &Self::Document,
        width_px: u32,
        height_px: u32,
    ) -> Option<Bitmap>;
}
