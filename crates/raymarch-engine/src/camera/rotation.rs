use glam::{Mat4, Vec3};

/// Camera rotation around the scene center, in radians.
///
/// Unbounded; angles accumulate freely.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CameraRotation {
    /// Rotation about the X axis.
    pub pitch: f32,
    /// Rotation about the Y axis.
    pub yaw: f32,
}

impl CameraRotation {
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }
}

/// Builds the scene view matrix for an eye looking at `center`, with the
/// scene rotated by `rotation` about `center`.
///
/// `inverse(lookAt(eye, center, +Y) · T(center) · Rx(pitch) · Ry(yaw) · T(-center))`
///
/// The result maps camera space back to world space; the shader uses it to
/// turn per-pixel rays into scene rays.
pub fn scene_view_matrix(eye: Vec3, center: Vec3, rotation: CameraRotation) -> Mat4 {
    let look = Mat4::look_at_rh(eye, center, Vec3::Y);
    let orbit = Mat4::from_translation(center)
        * Mat4::from_rotation_x(rotation.pitch)
        * Mat4::from_rotation_y(rotation.yaw)
        * Mat4::from_translation(-center);
    (look * orbit).inverse()
}
