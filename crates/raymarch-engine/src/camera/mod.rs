//! Camera state.
//!
//! The camera sits at a fixed eye and orbits the scene center by a pitch/yaw
//! rotation. `OrbitCamera` accumulates that rotation from pointer drags;
//! `scene_view_matrix` is the shared composition used by every demo.

mod orbit;
mod rotation;

pub use orbit::{OrbitCamera, DRAG_SENSITIVITY};
pub use rotation::{scene_view_matrix, CameraRotation};
