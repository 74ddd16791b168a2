// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mock vector engine shared by the unit tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use kurbo::Size;
use vantage_imaging::{Bitmap, EngineError, VectorEngine};

#[derive(Debug)]
struct Shared {
    intrinsic: Size,
    created: usize,
    dropped: usize,
    rasterize_calls: usize,
    last_rasterize: Option<(u32, u32)>,
    loaded_files: Vec<PathBuf>,
    live_at_last_parse: Option<usize>,
}

/// Scriptable [`VectorEngine`] that counts document lifetimes and render
/// requests. Clones share their counters.
#[derive(Clone, Debug)]
pub(crate) struct MockEngine {
    shared: Rc<RefCell<Shared>>,
}

/// Opaque mock document; bumps the engine's drop counter on release.
#[derive(Debug)]
pub(crate) struct MockDocument {
    size: Size,
    shared: Rc<RefCell<Shared>>,
}

impl Drop for MockDocument {
    fn drop(&mut self) {
        self.shared.borrow_mut().dropped += 1;
    }
}

impl MockEngine {
    /// Byte buffer that makes [`VectorEngine::parse_data`] fail.
    pub(crate) const BAD_DATA: &'static [u8] = b"bad";

    pub(crate) fn new(intrinsic: Size) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                intrinsic,
                created: 0,
                dropped: 0,
                rasterize_calls: 0,
                last_rasterize: None,
                loaded_files: Vec::new(),
                live_at_last_parse: None,
            })),
        }
    }

    /// Changes the intrinsic size reported for documents parsed from now on.
    pub(crate) fn set_intrinsic(&self, size: Size) {
        self.shared.borrow_mut().intrinsic = size;
    }

    pub(crate) fn live_documents(&self) -> usize {
        let shared = self.shared.borrow();
        shared.created - shared.dropped
    }

    pub(crate) fn dropped_documents(&self) -> usize {
        self.shared.borrow().dropped
    }

    pub(crate) fn rasterize_calls(&self) -> usize {
        self.shared.borrow().rasterize_calls
    }

    pub(crate) fn last_rasterize_size(&self) -> Option<(u32, u32)> {
        self.shared.borrow().last_rasterize
    }

    /// Paths handed to [`VectorEngine::parse_file`], in call order.
    pub(crate) fn loaded_files(&self) -> Vec<PathBuf> {
        self.shared.borrow().loaded_files.clone()
    }

    /// How many documents were alive when the engine last began a parse.
    pub(crate) fn live_at_last_parse(&self) -> Option<usize> {
        self.shared.borrow().live_at_last_parse
    }
}

impl VectorEngine for MockEngine {
    type Document = MockDocument;

    fn parse_data(&self, data: &[u8], _dpi: f64) -> Result<MockDocument, EngineError> {
        {
            let mut shared = self.shared.borrow_mut();
            let live = shared.created - shared.dropped;
            shared.live_at_last_parse = Some(live);
        }
        if data == Self::BAD_DATA {
            return Err(EngineError::new("mock parse failure"));
        }
        let mut shared = self.shared.borrow_mut();
        shared.created += 1;
        Ok(MockDocument {
            size: shared.intrinsic,
            shared: Rc::clone(&self.shared),
        })
    }

    fn parse_file(&self, path: &Path, dpi: f64) -> Result<MockDocument, EngineError> {
        self.shared
            .borrow_mut()
            .loaded_files
            .push(path.to_path_buf());
        let data = std::fs::read(path)
            .map_err(|e| EngineError::new(format!("cannot read '{}': {e}", path.display())))?;
        self.parse_data(&data, dpi)
    }

    fn intrinsic_size(&self, document: &MockDocument) -> Size {
        document.size
    }

    fn rasterize(&self, _document: &MockDocument, width_px: u32, height_px: u32) -> Option<Bitmap> {
        let mut shared = self.shared.borrow_mut();
        shared.rasterize_calls += 1;
        shared.last_rasterize = Some((width_px, height_px));
        if width_px == 0 || height_px == 0 {
            return None;
        }
        let data = [0x80, 0x80, 0x80, 0xff].repeat(width_px as usize * height_px as usize);
        Some(Bitmap::from_rgba8(width_px, height_px, data))
    }
}
