//! Raymarch engine crate.
//!
//! Hosts an external full-screen WGSL scene: owns the platform and GPU
//! runtime, the camera state, and the per-frame uniform block the shader
//! reads.

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod params;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
