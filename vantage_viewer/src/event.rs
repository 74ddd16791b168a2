// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

/// An observable output of the viewer, queued in occurrence order.
///
/// Hosts drain these with [`Viewer::drain_events`](crate::Viewer::drain_events)
/// after handling their own events; nothing here is delivered by callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    /// A load failed. Carries the engine's error text, never empty. The
    /// viewer is back in the empty state.
    LoadError(String),
    /// A non-empty paint completed; elapsed time in nanoseconds. Emitted
    /// exactly once per paint, for both the cached-raster and the live
    /// vector path. The empty-state placeholder paint emits nothing.
    RenderTime(u64),
    /// A dropped file was skipped because its extension is not a supported
    /// vector format. Non-fatal; remaining dropped files are still
    /// processed.
    UnsupportedDrop(PathBuf),
}
