// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::ffi::OsStr;
use std::path::Path;

use vantage_imaging::VectorEngine;

use crate::event::ViewerEvent;
use crate::viewer::Viewer;

/// Canonical warning for drops the viewer rejects; hosts that render a
/// message dialog for [`ViewerEvent::UnsupportedDrop`] can use it verbatim.
pub const UNSUPPORTED_DROP_MESSAGE: &str = "You can drop only SVG and SVGZ files.";

impl<E: VectorEngine> Viewer<E> {
    /// Whether a drag hovering the viewport should be accepted.
    ///
    /// Always `true`: the host keeps the copy/accept cursor during
    /// drag-enter and drag-move, and filtering happens per file at drop
    /// time instead.
    #[must_use]
    pub fn accepts_drag(&self) -> bool {
        true
    }

    /// Processes a list of dropped file paths, in input order.
    ///
    /// Symbolic links and non-regular files are skipped silently (drops
    /// routinely include directories and links). Files with a supported
    /// extension (`svg`/`svgz`, ASCII case-insensitive) are loaded via
    /// [`load_file`](Self::load_file) with the given `dpi`; anything else
    /// queues a [`ViewerEvent::UnsupportedDrop`] and processing continues
    /// with the next candidate.
    pub fn handle_drop<P: AsRef<Path>>(&mut self, paths: &[P], dpi: f64) {
        for path in paths {
            let path = path.as_ref();
            let Ok(meta) = std::fs::symlink_metadata(path) else {
                continue;
            };
            if meta.file_type().is_symlink() || !meta.is_file() {
                continue;
            }

            if has_supported_extension(path) {
                self.load_file(path, dpi);
            } else {
                self.push_event(ViewerEvent::UnsupportedDrop(path.to_path_buf()));
            }
        }
    }
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg") || ext.eq_ignore_ascii_case("svgz"))
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use kurbo::Size;

    use crate::testutil::MockEngine;
    use crate::{Viewer, ViewerEvent};

    use super::has_supported_extension;

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(has_supported_extension(Path::new("a.svg")));
        assert!(has_supported_extension(Path::new("a.SVG")));
        assert!(has_supported_extension(Path::new("a.SvGz")));
        assert!(!has_supported_extension(Path::new("a.png")));
        assert!(!has_supported_extension(Path::new("a.svg.bak")));
        assert!(!has_supported_extension(Path::new("svg")));
    }

    #[test]
    fn drags_are_always_accepted() {
        let viewer = Viewer::new(MockEngine::new(Size::new(1.0, 1.0)));
        assert!(viewer.accepts_drag());
    }

    #[test]
    fn drop_filters_per_file_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let a_svg = dir.path().join("a.svg");
        let b_png = dir.path().join("b.png");
        let c_svgz = dir.path().join("c.svgz");
        std::fs::write(&a_svg, b"good").unwrap();
        std::fs::write(&b_png, b"good").unwrap();
        std::fs::write(&c_svgz, b"good").unwrap();

        let mut candidates = vec![a_svg.clone(), b_png.clone(), c_svgz.clone()];

        // A symlink with a supported extension is skipped silently.
        #[cfg(unix)]
        let d_link = {
            let link = dir.path().join("d.svg");
            std::os::unix::fs::symlink(&a_svg, &link).unwrap();
            candidates.push(link.clone());
            link
        };

        // As is a directory and a path that does not exist.
        candidates.push(dir.path().to_path_buf());
        candidates.push(dir.path().join("missing.svg"));

        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());
        viewer.handle_drop(&candidates, 96.0);

        assert_eq!(engine.loaded_files(), vec![a_svg, c_svgz]);

        let warnings: Vec<PathBuf> = viewer
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                ViewerEvent::UnsupportedDrop(path) => Some(path),
                _ => None,
            })
            .collect();
        assert_eq!(warnings, vec![b_png]);

        #[cfg(unix)]
        let _ = d_link;
    }

    #[test]
    fn drop_load_failures_do_not_stop_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.svg");
        let fine = dir.path().join("fine.svg");
        std::fs::write(&broken, MockEngine::BAD_DATA).unwrap();
        std::fs::write(&fine, b"good").unwrap();

        let engine = MockEngine::new(Size::new(100.0, 50.0));
        let mut viewer = Viewer::new(engine.clone());
        viewer.handle_drop(&[broken, fine], 96.0);

        assert_eq!(engine.loaded_files().len(), 2);
        assert!(viewer.has_document());
        let errors = viewer
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, ViewerEvent::LoadError(_)))
            .count();
        assert_eq!(errors, 1);
    }
}
