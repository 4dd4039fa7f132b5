//! GPU-free viewer state and event handling.
//!
//! [`ViewerCore`] owns everything that decides *what* is drawn: poses,
//! selection, mouse state, window geometry and shading. It never touches
//! the GPU; the renderer reads a [`RenderSnapshot`] each frame.

use glam::{DMat4, DVec2, DVec3};

use super::command::{ViewerCommand, ViewerRequest};
use crate::{
    camera::{Frustum, Viewport},
    input::{DragKind, InputEvent, KeyAction, MotionMapper, MouseState},
    math::{normal_matrix, Rbt},
    options::{Options, ShadingMode},
    scene::{FrameId, FrameSelector, SceneState},
};

/// Pose and colour of one drawable, relative to the eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Object-to-eye transform: `eye⁻¹ · object`.
    pub model_view: Rbt,
    /// Normal matrix of `model_view`.
    pub normal: Rbt,
    /// Linear RGB colour.
    pub color: [f32; 3],
}

impl DrawItem {
    fn new(inv_eye: &Rbt, object: &Rbt, color: [f32; 3]) -> Self {
        let model_view = inv_eye.compose(object);
        Self {
            model_view,
            normal: normal_matrix(&model_view),
            color,
        }
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    /// Perspective projection (OpenGL-style NDC depth, near = +1).
    pub projection: DMat4,
    /// Light positions in eye space.
    pub lights: [DVec3; 2],
    /// The ground plane.
    pub ground: DrawItem,
    /// Object 1 and object 2, in that order.
    pub cubes: [DrawItem; 2],
    /// Active shading mode.
    pub shading: ShadingMode,
}

/// Interaction state of the viewer.
#[derive(Debug, Clone)]
pub struct ViewerCore {
    options: Options,
    scene: SceneState,
    selector: FrameSelector,
    mouse: MouseState,
    viewport: Viewport,
    frustum: Frustum,
    motion: MotionMapper,
    shading: ShadingMode,
    redraw: bool,
}

impl ViewerCore {
    /// Initial state from options. A first redraw is pending.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        let viewport =
            Viewport::new(options.display.width, options.display.height);
        Self {
            options: options.clone(),
            scene: SceneState::new(&options.scene),
            selector: FrameSelector::new(),
            mouse: MouseState::new(),
            viewport,
            frustum: Frustum::new(&options.camera, viewport),
            motion: MotionMapper::new(&options.camera),
            shading: options.display.shading,
            redraw: true,
        }
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// Options the core was built from.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Current poses.
    #[must_use]
    pub const fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Current view / edit-target selection.
    #[must_use]
    pub const fn selector(&self) -> &FrameSelector {
        &self.selector
    }

    /// Current window geometry.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Current projection parameters.
    #[must_use]
    pub const fn frustum(&self) -> &Frustum {
        &self.frustum
    }

    /// Active shading mode.
    #[must_use]
    pub const fn shading(&self) -> ShadingMode {
        self.shading
    }

    // ── Redraw ──────────────────────────────────────────────────────

    /// Mark the frame dirty. Repeated requests coalesce.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Whether a redraw is pending.
    #[must_use]
    pub const fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Return and clear the pending-redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    // ── Events ──────────────────────────────────────────────────────

    /// Process a mouse event. Returns whether a redraw was requested.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::MouseButton {
                button,
                pressed,
                x,
                y,
            } => {
                let position = self.viewport.to_bottom_left(x, y);
                self.mouse.handle_button(button, pressed, position);
                false
            }
            InputEvent::CursorMoved { x, y } => {
                let position = self.viewport.to_bottom_left(x, y);
                self.handle_drag(position)
            }
        }
    }

    fn handle_drag(&mut self, position: DVec2) -> bool {
        let buttons = self.mouse.buttons();
        let delta = self.mouse.handle_move(position);
        let Some(kind) = DragKind::from_buttons(buttons) else {
            return false;
        };
        let m = self.motion.motion(kind, delta, self.selector.sign_flip());
        if self.scene.apply_motion(&self.selector, &m) {
            log::trace!(
                "{kind:?} drag {delta} applied to {}",
                self.selector.edit_target()
            );
        }
        self.request_redraw();
        true
    }

    /// Track a new window size. Zero dimensions are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = Viewport::new(width, height);
        self.frustum.update(self.viewport);
        log::debug!(
            "Size of window is now {width}x{height}, fovy {:.2}",
            self.frustum.fovy
        );
        self.request_redraw();
    }

    /// Apply a command. Screenshot and quit are handed back to the caller.
    ///
    /// Every command requests a redraw.
    pub fn execute(&mut self, command: ViewerCommand) -> Option<ViewerRequest> {
        self.request_redraw();
        match command {
            ViewerCommand::CycleView => {
                let view = self.selector.cycle_view();
                log::info!("Active view set to {view}");
                None
            }
            ViewerCommand::CycleEditTarget => {
                let target = self.selector.cycle_edit_target();
                log::info!("Active edit target set to {target}");
                if !self.selector.edit_allowed() {
                    log::info!(
                        "The sky camera can only be edited from its own view"
                    );
                }
                None
            }
            ViewerCommand::ToggleSkySky => {
                let _ = self.selector.toggle_sky_sky();
                let mode = self.selector.camera_mode();
                if self.selector.sky_sky_active() {
                    log::info!("Editing sky camera w.r.t. {} frame", mode.label());
                } else {
                    log::info!(
                        "Camera motion set to {} (applies when the sky camera \
                         is both view and edit target)",
                        mode.label()
                    );
                }
                None
            }
            ViewerCommand::CycleShading => {
                self.shading = self.shading.next();
                log::info!("Shading mode set to {}", self.shading.label());
                None
            }
            ViewerCommand::Help => {
                self.log_help();
                None
            }
            ViewerCommand::Screenshot => Some(ViewerRequest::Screenshot),
            ViewerCommand::Quit => Some(ViewerRequest::Exit),
        }
    }

    /// Look up a key (winit `KeyCode` debug name) and execute its command.
    ///
    /// Returns `None` for unbound keys.
    pub fn handle_key(&mut self, key: &str) -> Option<ViewerRequest> {
        let action = self.options.keybindings.lookup(key)?;
        self.execute(action.command())
    }

    fn log_help(&self) {
        log::info!("Keys:");
        for action in KeyAction::ALL {
            let key = self.options.keybindings.key_for(action).unwrap_or("-");
            log::info!("  {key:<10} {}", action.description());
        }
        log::info!("Mouse:");
        log::info!("  left drag           rotate");
        log::info!("  right drag          translate in the view plane");
        log::info!("  middle or both drag translate along the view axis");
    }

    // ── Frame data ──────────────────────────────────────────────────

    /// Pose of the eye.
    #[must_use]
    pub const fn eye_rbt(&self) -> Rbt {
        self.scene.eye_rbt(self.selector.view())
    }

    /// Projection, lights and per-drawable transforms for the next frame.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        let inv_eye = self.eye_rbt().inverse();
        let scene_opts = &self.options.scene;
        let lighting = &self.options.lighting;
        RenderSnapshot {
            projection: self.frustum.projection(self.viewport),
            lights: [
                inv_eye.transform_point(DVec3::from(lighting.light1)),
                inv_eye.transform_point(DVec3::from(lighting.light2)),
            ],
            ground: DrawItem::new(
                &inv_eye,
                &self.scene.world(),
                scene_opts.ground_color,
            ),
            cubes: [
                DrawItem::new(
                    &inv_eye,
                    &self.scene.rbt(FrameId::Object1),
                    scene_opts.object1_color,
                ),
                DrawItem::new(
                    &inv_eye,
                    &self.scene.rbt(FrameId::Object2),
                    scene_opts.object2_color,
                ),
            ],
            shading: self.shading,
        }
    }
}
