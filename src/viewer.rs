//! Standalone viewer window backed by winit.
//!
//! ```no_run
//! # use skyview::Viewer;
//! Viewer::builder()
//!     .with_title("Skyview")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    error::SkyviewError, input::KeyAction, options::Options, InputEvent,
    MouseButton, ViewerEngine, ViewerRequest,
};

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    options: Option<Options>,
    title: Option<String>,
}

impl ViewerBuilder {
    /// Create a builder with default options and the options' title.
    const fn new() -> Self {
        Self {
            options: None,
            title: None,
        }
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Set the window title, overriding the display options.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        let mut options = self.options.unwrap_or_default();
        if let Some(title) = self.title {
            options.display.title = title;
        }
        Viewer { options }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A window showing the sky camera, the two cubes and the ground.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    options: Options,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub const fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed or the quit key is pressed.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::Viewer`] if the event loop cannot be created
    /// or fails while running.
    pub fn run(self) -> Result<(), SkyviewError> {
        let event_loop = EventLoop::new()
            .map_err(|e| SkyviewError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine: None,
            cursor: PhysicalPosition::new(0.0, 0.0),
            options: self.options,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SkyviewError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: Option<ViewerEngine>,
    cursor: PhysicalPosition<f64>,
    options: Options,
}

/// Window size as reported; a minimised window reports zero and the engine
/// skips it.
const fn window_size(inner: PhysicalSize<u32>) -> (u32, u32) {
    (inner.width, inner.height)
}

impl ViewerApp {
    fn request_redraw_if_needed(&self) {
        if let (Some(window), Some(engine)) = (&self.window, &self.engine) {
            if engine.needs_redraw() {
                window.request_redraw();
            }
        }
    }

    fn redraw(&mut self) {
        let (Some(window), Some(engine)) = (&self.window, &mut self.engine)
        else {
            return;
        };
        match engine.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Outdated | wgpu::SurfaceError::Lost) => {
                let (w, h) = window_size(window.inner_size());
                engine.resize(w, h);
                window.request_redraw();
            }
            Err(e) => log::error!("render error: {e:?}"),
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let display = &self.options.display;
        let attrs = Window::default_attributes()
            .with_title(&display.title)
            .with_inner_size(PhysicalSize::new(display.width, display.height));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window_size(window.inner_size());
        let engine = match pollster::block_on(ViewerEngine::new(
            window.clone(),
            size,
            &self.options,
        )) {
            Ok(e) => e,
            Err(e) => {
                log::error!("Failed to initialize engine: {e}");
                event_loop.exit();
                return;
            }
        };
        log::info!(
            "Press {} for help",
            self.options
                .keybindings
                .key_for(KeyAction::Help)
                .unwrap_or("the help key")
        );

        window.request_redraw();
        self.window = Some(window);
        self.engine = Some(engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        if matches!(event, WindowEvent::CloseRequested) {
            event_loop.exit();
            return;
        }

        let Some(engine) = &mut self.engine else {
            return;
        };

        match event {
            WindowEvent::Resized(size) => {
                let (w, h) = window_size(size);
                engine.resize(w, h);
            }

            WindowEvent::RedrawRequested => {
                self.redraw();
                return;
            }

            WindowEvent::MouseInput { button, state, .. } => {
                let Some(button) = MouseButton::from_winit(button) else {
                    return;
                };
                let _ = engine.handle_input(InputEvent::MouseButton {
                    button,
                    pressed: state == ElementState::Pressed,
                    x: self.cursor.x,
                    y: self.cursor.y,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = position;
                let _ = engine.handle_input(InputEvent::CursorMoved {
                    x: position.x,
                    y: position.y,
                });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                if engine.handle_key(&format!("{code:?}"))
                    == Some(ViewerRequest::Exit)
                {
                    event_loop.exit();
                    return;
                }
            }

            _ => return,
        }

        self.request_redraw_if_needed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ViewerCore;

    #[test]
    fn minimised_window_size_reaches_the_core_unclamped() {
        let mut core = ViewerCore::new(&Options::default());
        let (w, h) = window_size(PhysicalSize::new(0, 0));
        assert_eq!((w, h), (0, 0));
        let before = core.viewport();
        core.resize(w, h);
        assert_eq!(core.viewport(), before);
    }
}
