//! GPU rendering.
//!
//! There is a single renderer: the external scene shader drawn as a
//! full-screen triangle strip. `RenderLoop` wraps it with the per-tick
//! clear/draw/count sequence.

mod ctx;
mod driver;
mod fullscreen;

pub use ctx::{RenderCtx, RenderTarget};
pub use driver::{RenderLoop, CLEAR_COLOR};
pub use fullscreen::FullscreenRenderer;
