//! The viewer engine: [`ViewerCore`] plus the GPU resources that draw it.
//!
//! All interaction logic lives in [`core`] and is GPU-free. This layer owns
//! the wgpu context and renderer, takes screenshots, and presents frames.

/// Discrete viewer commands and the requests they hand back.
pub mod command;
/// GPU-free interaction state.
pub mod core;

use std::path::Path;

use self::{
    command::{ViewerCommand, ViewerRequest},
    core::ViewerCore,
};
use crate::{
    error::SkyviewError,
    gpu::render_context::RenderContext,
    input::InputEvent,
    options::Options,
    renderer::{
        screenshot::{self, Image},
        SceneRenderer,
    },
};

/// The viewer: interaction state plus the GPU resources that draw it.
///
/// # Frame loop
///
/// Forward mouse events to [`handle_input`](Self::handle_input) and key
/// presses to [`handle_key`](Self::handle_key). When
/// [`needs_redraw`](Self::needs_redraw) reports true, call
/// [`render`](Self::render). Call [`resize`](Self::resize) when the window
/// size changes.
///
/// # Off-screen use
///
/// [`ViewerEngine::headless`] builds an engine with no window;
/// [`capture`](Self::capture) then renders and reads back a frame.
pub struct ViewerEngine {
    /// Core wgpu device, queue, and surface.
    pub context: RenderContext,
    renderer: SceneRenderer,
    core: ViewerCore,
}

impl ViewerEngine {
    /// Create an engine presenting to `window`.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::Gpu`] if the GPU context cannot be created.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
        options: &Options,
    ) -> Result<Self, SkyviewError> {
        let context = RenderContext::new(window, size).await?;
        Ok(Self::from_context(context, options))
    }

    /// Create an engine with no window, sized from the display options.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::Gpu`] if no adapter or device is available.
    pub async fn headless(options: &Options) -> Result<Self, SkyviewError> {
        let context = RenderContext::headless(
            options.display.width,
            options.display.height,
        )
        .await?;
        Ok(Self::from_context(context, options))
    }

    fn from_context(context: RenderContext, options: &Options) -> Self {
        let size = (context.width(), context.height());
        let renderer = SceneRenderer::new(
            &context.device,
            context.format(),
            size,
            &options.scene,
        );
        let mut core = ViewerCore::new(options);
        core.resize(size.0, size.1);
        Self {
            context,
            renderer,
            core,
        }
    }

    /// Interaction state.
    #[must_use]
    pub const fn core(&self) -> &ViewerCore {
        &self.core
    }

    /// Options the engine was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        self.core.options()
    }

    /// Whether something changed since the last [`render`](Self::render).
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.core.needs_redraw()
    }

    /// Resize the surface, depth buffer and projection. Ignores zero
    /// dimensions.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.context.resize(width, height);
        self.renderer.resize(&self.context.device, width, height);
        self.core.resize(width, height);
    }

    /// Process a mouse event. Returns whether a redraw was requested.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        self.core.handle_input(event)
    }

    /// Execute the command bound to `key`, if any.
    ///
    /// Screenshots are taken here; only [`ViewerRequest::Exit`] is passed
    /// on.
    pub fn handle_key(&mut self, key: &str) -> Option<ViewerRequest> {
        let request = self.core.handle_key(key)?;
        self.fulfil(request)
    }

    /// Apply a command, taking a screenshot if it asks for one.
    pub fn execute(&mut self, command: ViewerCommand) -> Option<ViewerRequest> {
        let request = self.core.execute(command)?;
        self.fulfil(request)
    }

    fn fulfil(&self, request: ViewerRequest) -> Option<ViewerRequest> {
        match request {
            ViewerRequest::Screenshot => {
                let path = &self.options().display.screenshot_path;
                match self.save_screenshot(Path::new(path)) {
                    Ok(()) => log::info!("Screenshot written to {path}"),
                    Err(e) => log::error!("Screenshot failed: {e}"),
                }
                None
            }
            ViewerRequest::Exit => Some(request),
        }
    }

    /// Draw the current scene to the surface and present it.
    ///
    /// # Errors
    ///
    /// Returns [`wgpu::SurfaceError`] if no frame can be acquired.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let _ = self.core.take_redraw();
        let frame = self.context.get_next_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.renderer
            .prepare(&self.context.queue, &self.core.snapshot());
        let mut encoder = self.context.create_encoder("Scene Encoder");
        self.renderer.encode(&mut encoder, &view);
        self.context.submit(encoder);
        frame.present();
        Ok(())
    }

    /// Render the current scene off-screen and read it back.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError::Screenshot`] if the read-back fails.
    pub fn capture(&self) -> Result<Image, SkyviewError> {
        screenshot::capture(&self.context, &self.renderer, &self.core.snapshot())
    }

    /// Render the current scene and write it to `path` as binary PPM.
    ///
    /// # Errors
    ///
    /// Returns [`SkyviewError`] if the read-back or the write fails.
    pub fn save_screenshot(&self, path: &Path) -> Result<(), SkyviewError> {
        self.capture()?.save_ppm(path)
    }
}
