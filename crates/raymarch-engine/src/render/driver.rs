use crate::core::{AppControl, FrameCtx, FrameStatus};
use crate::params::FrameUniforms;
use crate::render::FullscreenRenderer;
use crate::shader::ShaderSource;
use crate::time::FrameCounter;

/// Background behind the scene: transparent black, composited by the window
/// system through the premultiplied-alpha surface.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color::TRANSPARENT;

/// Per-tick render driver: clear, upload the frame block, draw once, count
/// the frame.
///
/// There is no pause or stop state. The counter advances only for frames
/// that were actually presented.
pub struct RenderLoop {
    renderer: FullscreenRenderer,
    frames: FrameCounter,
}

impl RenderLoop {
    pub fn new(shader: ShaderSource) -> Self {
        Self {
            renderer: FullscreenRenderer::new(shader),
            frames: FrameCounter::new(),
        }
    }

    /// Frame number for the frame about to be drawn.
    pub fn frame(&self) -> u64 {
        self.frames.get()
    }

    /// Draws one frame with `uniforms`.
    pub fn tick(&mut self, ctx: &mut FrameCtx<'_, '_>, uniforms: &FrameUniforms) -> AppControl {
        let renderer = &mut self.renderer;
        let status = ctx.render(CLEAR_COLOR, |rctx, target| {
            renderer.render(rctx, target, uniforms);
        });
        self.finish_frame(status)
    }

    fn finish_frame(&mut self, status: FrameStatus) -> AppControl {
        match status {
            FrameStatus::Presented => {
                self.frames.advance();
                AppControl::Continue
            }
            FrameStatus::Skipped => AppControl::Continue,
            FrameStatus::Fatal => {
                log::error!("surface lost beyond recovery after {} frames", self.frames.get());
                AppControl::Exit
            }
        }
    }
}
