// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal windowed host for the Vantage viewer.
//!
//! Usage: `svgview [file.svg]`, or just drop an SVG/SVGZ onto the window.
//!
//! Keys: `f` fit-to-view, `b` cycle background, `o` outline, `r` raster
//! mode, `+`/`-` zoom, `1` reset zoom.

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::Result;
use kurbo::Rect;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::Key;
use winit::window::Window;

use vantage_skia::PixmapSurface;
use vantage_svg::SvgEngine;
use vantage_viewer::{Background, UNSUPPORTED_DROP_MESSAGE, Viewer, ViewerEvent};

/// Well-known font locations for the placeholder text. Best effort: the
/// viewer works fine without glyphs.
const FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/Library/Fonts/Arial Unicode.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

fn load_font() -> Option<fontdue::Font> {
    FONT_PATHS.iter().find_map(|path| {
        let data = std::fs::read(path).ok()?;
        fontdue::Font::from_bytes(data, fontdue::FontSettings::default()).ok()
    })
}

struct App {
    viewer: Viewer<SvgEngine>,
    font: Option<fontdue::Font>,
    initial_file: Option<PathBuf>,
    window: Option<Rc<Window>>,
    surface: Option<softbuffer::Surface<Rc<Window>, Rc<Window>>>,
}

impl App {
    fn new(initial_file: Option<PathBuf>) -> Self {
        Self {
            viewer: Viewer::new(SvgEngine::new()),
            font: load_font(),
            initial_file,
            window: None,
            surface: None,
        }
    }

    fn dpi(&self) -> f64 {
        96.0 * self.viewer.device_scale()
    }

    fn handle_key(&mut self, key: &Key) {
        let Key::Character(ch) = key else {
            return;
        };
        let state = self.viewer.state();
        match ch.as_str() {
            "f" => self.viewer.set_fit_to_view(!state.fit_to_view),
            "o" => self.viewer.set_show_border(!state.show_border),
            "r" => self.viewer.set_raster_mode(!state.raster_mode),
            "b" => self.viewer.set_background(match state.background {
                Background::None => Background::Solid,
                Background::Solid => Background::Checker,
                Background::Checker => Background::None,
            }),
            "+" => self.viewer.set_zoom(state.zoom * 1.25),
            "-" => self.viewer.set_zoom(state.zoom / 1.25),
            "1" => self.viewer.set_zoom(1.0),
            _ => {}
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(surface)) = (self.window.as_ref(), self.surface.as_mut()) else {
            return;
        };
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        if surface.resize(width, height).is_err() {
            return;
        }

        let scale = window.scale_factor();
        let Some(mut pixmap) = tiny_skia::Pixmap::new(size.width, size.height) else {
            return;
        };
        pixmap.fill(tiny_skia::Color::from_rgba8(0x2e, 0x2e, 0x2e, 0xff));

        {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "display scale factors fit f32"
            )]
            let mut target = PixmapSurface::new(&mut pixmap, scale as f32);
            if let Some(font) = self.font.as_ref() {
                target = target.with_font(font);
            }
            let viewport = Rect::new(
                0.0,
                0.0,
                f64::from(size.width) / scale,
                f64::from(size.height) / scale,
            );
            self.viewer.paint(&mut target, viewport);
        }

        let Ok(mut buffer) = surface.buffer_mut() else {
            return;
        };
        for (dst, px) in buffer.iter_mut().zip(pixmap.data().chunks_exact(4)) {
            *dst = (u32::from(px[0]) << 16) | (u32::from(px[1]) << 8) | u32::from(px[2]);
        }
        let _ = buffer.present();
    }

    fn report_events(&mut self) {
        for event in self.viewer.drain_events() {
            match event {
                ViewerEvent::LoadError(message) => eprintln!("Error: {message}"),
                ViewerEvent::UnsupportedDrop(path) => {
                    eprintln!("{} ({})", UNSUPPORTED_DROP_MESSAGE, path.display());
                }
                ViewerEvent::RenderTime(nanos) => {
                    if let Some(window) = self.window.as_ref() {
                        let ms = nanos as f64 / 1_000_000.0;
                        window.set_title(&format!("svgview - rendered in {ms:.2} ms"));
                    }
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("svgview")
            .with_inner_size(LogicalSize::new(800, 600));
        let window = Rc::new(
            event_loop
                .create_window(attributes)
                .expect("window creation"),
        );
        let context = softbuffer::Context::new(Rc::clone(&window)).expect("softbuffer context");
        let surface =
            softbuffer::Surface::new(&context, Rc::clone(&window)).expect("softbuffer surface");

        self.viewer.set_device_scale(window.scale_factor());
        if let Some(path) = self.initial_file.take() {
            let dpi = self.dpi();
            self.viewer.load_file(&path, dpi);
        }

        self.window = Some(window);
        self.surface = Some(surface);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(_) => {
                if let Some(window) = self.window.as_ref() {
                    window.request_redraw();
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.viewer.set_device_scale(scale_factor);
            }
            WindowEvent::HoveredFile(_) => {
                // Unconditional accept; filtering happens at drop time.
                let _ = self.viewer.accepts_drag();
            }
            WindowEvent::DroppedFile(path) => {
                let dpi = self.dpi();
                self.viewer.handle_drop(&[path], dpi);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.handle_key(&event.logical_key);
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }

        self.report_events();
        if self.viewer.take_redraw_request() {
            if let Some(window) = self.window.as_ref() {
                window.request_redraw();
            }
        }
    }
}

fn main() -> Result<()> {
    vantage_svg::init_log();

    let initial_file = std::env::args().nth(1).map(PathBuf::from);
    let event_loop = EventLoop::new()?;
    let mut app = App::new(initial_file);
    event_loop.run_app(&mut app)?;
    Ok(())
}
