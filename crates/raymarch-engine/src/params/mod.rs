//! Frame parameters: the uniform block handed to the shader each frame and
//! the conversions that feed it (zoom → field of view, hue → RGB).

mod block;
mod builder;
mod controls;
mod hsl;

pub use block::FrameUniforms;
pub use builder::FrameParams;
pub use controls::{fov_from_zoom, SceneControls};
pub use hsl::{hsl_to_rgb, hue_to_color, SCENE_LIGHTNESS, SCENE_SATURATION};
