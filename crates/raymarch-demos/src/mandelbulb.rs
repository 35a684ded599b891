use std::time::Instant;

use glam::Vec3;

use raymarch_engine::camera::OrbitCamera;
use raymarch_engine::core::{App, AppControl, FrameCtx};
use raymarch_engine::input::{InputEvent, InputFrame, Key, MouseButtonState, PointerButtonEvent};
use raymarch_engine::params::{FrameParams, FrameUniforms};
use raymarch_engine::render::RenderLoop;
use raymarch_engine::shader::ShaderSource;
use raymarch_engine::time::FpsMeter;

use crate::controls::ControlPanel;

/// Point the camera orbits; x/y pick the rotation pivot, z the distance.
pub const SCENE_CENTER: Vec3 = Vec3::new(-1.5, 0.4, 2.0);

/// Mandelbulb demo: drag to orbit, keyboard panel for zoom/blob/spike/hue,
/// FPS in the window title.
pub struct MandelbulbApp {
    title: String,
    render_loop: RenderLoop,
    camera: OrbitCamera,
    panel: ControlPanel,
    fps: FpsMeter,
}

impl MandelbulbApp {
    pub fn new(title: impl Into<String>, shader: ShaderSource) -> Self {
        Self {
            title: title.into(),
            render_loop: RenderLoop::new(shader),
            camera: OrbitCamera::default(),
            panel: ControlPanel::default(),
            fps: FpsMeter::new(Instant::now()),
        }
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    /// Applies this frame's pointer and key events in arrival order.
    pub fn apply_input(&mut self, input: &InputFrame) {
        for ev in &input.events {
            match ev {
                InputEvent::PointerButton(PointerButtonEvent { state, x, y, .. }) => match state {
                    MouseButtonState::Pressed => self.camera.pointer_down(*x, *y),
                    MouseButtonState::Released => self.camera.pointer_up(),
                },
                InputEvent::PointerMoved(p) => self.camera.pointer_move(p.x, p.y),
                // Releases outside the window never arrive.
                InputEvent::Focused(false) => self.camera.pointer_up(),
                _ => {}
            }
        }

        if self.panel.apply_frame(input) {
            log::debug!("scene controls: {:?}", self.panel.values);
        }
    }

    /// Builds the uniform block for the next frame at `image_size`.
    pub fn frame_uniforms(&self, image_size: (u32, u32)) -> FrameUniforms {
        let controls = &self.panel.values;
        let view = self.camera.view_matrix(SCENE_CENTER);

        FrameParams::new(self.render_loop.frame(), image_size, &view, controls.fov())
            .with_scene(SCENE_CENTER, controls)
            .build()
    }
}

impl App for MandelbulbApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        self.apply_input(ctx.input_frame);

        let uniforms = self.frame_uniforms(ctx.surface_size());
        let control = self.render_loop.tick(ctx, &uniforms);

        if let Some(fps) = self.fps.sample(ctx.now, self.render_loop.frame()) {
            log::debug!("{fps} FPS.");
            ctx.window.set_title(&format!("{} - {fps} FPS.", self.title));
        }

        control
    }
}
