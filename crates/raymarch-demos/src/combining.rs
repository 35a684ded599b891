use std::f64::consts::PI;

use glam::Vec3;

use raymarch_engine::camera::{scene_view_matrix, CameraRotation};
use raymarch_engine::core::{App, AppControl, FrameCtx};
use raymarch_engine::input::Key;
use raymarch_engine::params::{FrameParams, FrameUniforms};
use raymarch_engine::render::RenderLoop;
use raymarch_engine::shader::ShaderSource;

/// Fixed vertical field of view, in degrees.
pub const FOV: f32 = 80.0;

/// Point the camera orbits; x/y pick the rotation pivot, z the distance.
pub const SCENE_CENTER: Vec3 = Vec3::new(0.0, 0.5, -3.0);

/// Frames per degree of pitch / yaw.
const PITCH_FRAMES_PER_DEGREE: f64 = 13.0;
const YAW_FRAMES_PER_DEGREE: f64 = 7.0;

/// Rotation at `frame`: pitch climbs one degree every 13 frames, yaw falls
/// one degree every 7.
pub fn auto_rotation(frame: u64) -> CameraRotation {
    let degrees = frame as f64 * PI / 180.0;
    CameraRotation::new(
        (degrees / PITCH_FRAMES_PER_DEGREE) as f32,
        (-degrees / YAW_FRAMES_PER_DEGREE) as f32,
    )
}

/// Camera-rows-only block for `frame`; the scene rows stay zero.
pub fn frame_uniforms(frame: u64, image_size: (u32, u32)) -> FrameUniforms {
    let view = scene_view_matrix(Vec3::ZERO, SCENE_CENTER, auto_rotation(frame));
    FrameParams::new(frame, image_size, &view, FOV).build()
}

/// Rotating-primitive demo: no interaction, the frame counter drives the
/// camera.
pub struct CombiningApp {
    render_loop: RenderLoop,
}

impl CombiningApp {
    pub fn new(shader: ShaderSource) -> Self {
        Self {
            render_loop: RenderLoop::new(shader),
        }
    }
}

impl App for CombiningApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.keys_pressed.contains(&Key::Escape) {
            return AppControl::Exit;
        }

        let uniforms = frame_uniforms(self.render_loop.frame(), ctx.surface_size());
        self.render_loop.tick(ctx, &uniforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_starts_at_rest() {
        assert_eq!(auto_rotation(0), CameraRotation::default());
    }

    #[test]
    fn rotation_rates_match_frame_clock() {
        let half_turn_pitch = auto_rotation(13 * 180);
        assert!((half_turn_pitch.pitch - std::f32::consts::PI).abs() < 1e-5);

        let half_turn_yaw = auto_rotation(7 * 180);
        assert!((half_turn_yaw.yaw + std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn block_carries_camera_rows_only() {
        let block = frame_uniforms(360, (1024, 768));
        assert_eq!(block.fov, 80.0);
        assert_eq!(block.frame, 360.0);
        assert_eq!(block.image_size, [1024.0, 768.0]);

        let tail = &block.as_bytes()[FrameUniforms::CAMERA_ROWS_END..];
        assert_eq!(tail.len(), 48);
        assert!(tail.iter().all(|b| *b == 0));
    }

    #[test]
    fn view_changes_as_frames_advance() {
        assert_ne!(frame_uniforms(0, (8, 8)).view, frame_uniforms(1, (8, 8)).view);
    }
}
