use glam::{Vec2, Vec3};

use super::{scene_view_matrix, CameraRotation};

/// Radians of rotation per pixel of pointer drag.
pub const DRAG_SENSITIVITY: f32 = 0.003;

/// Pointer-driven camera: a fixed eye and a rotation accumulated from drags.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    eye: Vec3,
    rotation: CameraRotation,
    /// Last pointer position while a drag is in progress.
    drag_from: Option<Vec2>,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn new(eye: Vec3) -> Self {
        Self {
            eye,
            rotation: CameraRotation::default(),
            drag_from: None,
        }
    }

    pub fn rotation(&self) -> CameraRotation {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    /// Starts a drag at `(x, y)`.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.drag_from = Some(Vec2::new(x, y));
        log::trace!("camera drag started at ({x}, {y})");
    }

    /// Rotates by the pixel delta since the last recorded position.
    ///
    /// Horizontal motion turns yaw, vertical motion turns pitch with the sign
    /// inverted. Ignored when no drag is in progress.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        let Some(prev) = self.drag_from else { return };
        let pos = Vec2::new(x, y);
        let delta = pos - prev;

        self.rotation.yaw += delta.x * DRAG_SENSITIVITY;
        self.rotation.pitch -= delta.y * DRAG_SENSITIVITY;
        self.drag_from = Some(pos);
    }

    /// Ends the drag.
    pub fn pointer_up(&mut self) {
        self.drag_from = None;
    }

    /// View matrix for the current rotation, orbiting `center`.
    pub fn view_matrix(&self, center: Vec3) -> glam::Mat4 {
        scene_view_matrix(self.eye, center, self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn move_without_drag_is_ignored() {
        let mut cam = OrbitCamera::default();
        cam.pointer_move(100.0, 100.0);
        assert_eq!(cam.rotation(), CameraRotation::default());
    }

    #[test]
    fn drag_accumulates_scaled_deltas() {
        let mut cam = OrbitCamera::default();
        cam.pointer_down(10.0, 10.0);
        cam.pointer_move(110.0, 60.0);

        let r = cam.rotation();
        assert!((r.yaw - 0.3).abs() < EPS);
        assert!((r.pitch + 0.15).abs() < EPS);
    }

    #[test]
    fn drag_there_and_back_restores_rotation() {
        let mut cam = OrbitCamera::default();
        cam.pointer_down(0.0, 0.0);
        cam.pointer_move(37.0, -12.0);
        let start = cam.rotation();

        cam.pointer_move(250.0, 90.0);
        cam.pointer_move(37.0, -12.0);

        let end = cam.rotation();
        assert!((end.yaw - start.yaw).abs() < 1e-5);
        assert!((end.pitch - start.pitch).abs() < 1e-5);
    }

    #[test]
    fn pointer_up_ends_drag() {
        let mut cam = OrbitCamera::default();
        cam.pointer_down(0.0, 0.0);
        cam.pointer_move(5.0, 0.0);
        cam.pointer_up();
        assert!(!cam.is_dragging());

        let before = cam.rotation();
        cam.pointer_move(500.0, 500.0);
        assert_eq!(cam.rotation(), before);
    }

    #[test]
    fn new_drag_starts_from_new_press_position() {
        let mut cam = OrbitCamera::default();
        cam.pointer_down(0.0, 0.0);
        cam.pointer_up();
        cam.pointer_down(300.0, 300.0);
        cam.pointer_move(300.0, 300.0);
        assert_eq!(cam.rotation(), CameraRotation::default());
    }

    #[test]
    fn view_matrix_tracks_rotation() {
        let center = Vec3::new(-1.5, 0.4, 2.0);
        let mut cam = OrbitCamera::default();
        let still = cam.view_matrix(center);

        cam.pointer_down(0.0, 0.0);
        cam.pointer_move(200.0, 0.0);
        assert_ne!(cam.view_matrix(center), still);
        assert_eq!(
            cam.view_matrix(center),
            scene_view_matrix(Vec3::ZERO, center, cam.rotation())
        );
    }
}
