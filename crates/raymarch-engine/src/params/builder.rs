use glam::{Mat4, Vec3};

use super::{hue_to_color, FrameUniforms, SceneControls};

/// Assembles the [`FrameUniforms`] block for one frame.
///
/// The camera rows (view, image size, fov, frame) are always written; the
/// scene rows stay zero unless [`FrameParams::with_scene`] fills them.
#[derive(Debug, Copy, Clone)]
pub struct FrameParams {
    block: FrameUniforms,
}

impl FrameParams {
    /// `image_size` is the drawable size in physical pixels, `fov` in degrees.
    pub fn new(frame: u64, image_size: (u32, u32), view: &Mat4, fov: f32) -> Self {
        let block = FrameUniforms {
            view: view.to_cols_array(),
            image_size: [image_size.0 as f32, image_size.1 as f32],
            fov,
            frame: frame as f32,
            ..FrameUniforms::default()
        };
        Self { block }
    }

    /// Writes the scene center and the scene controls. The hue control is
    /// converted to an RGB color; zoom is not written (it only drives fov).
    pub fn with_scene(mut self, center: Vec3, controls: &SceneControls) -> Self {
        self.block.scene_center = center.to_array();
        self.block.blob = controls.blob;
        self.block.spike = controls.spike;
        self.block.color = hue_to_color(controls.hue);
        self
    }

    pub fn build(self) -> FrameUniforms {
        self.block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> Mat4 {
        Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0))
    }

    #[test]
    fn camera_rows_hold_frame_inputs() {
        let block = FrameParams::new(42, (1920, 1080), &view(), 37.0).build();

        assert_eq!(block.view, view().to_cols_array());
        // Column-major: translation lives in cells 12..15.
        assert_eq!(&block.view[12..15], &[1.0, 2.0, 3.0]);
        assert_eq!(block.image_size, [1920.0, 1080.0]);
        assert_eq!(block.fov, 37.0);
        assert_eq!(block.frame, 42.0);
    }

    #[test]
    fn camera_only_block_is_zero_past_camera_rows() {
        let block = FrameParams::new(7, (640, 480), &view(), 80.0).build();
        let tail = &block.as_bytes()[FrameUniforms::CAMERA_ROWS_END..];
        assert!(tail.iter().all(|b| *b == 0));
    }

    #[test]
    fn scene_rows_follow_controls() {
        let controls = SceneControls {
            zoom: 1.0,
            blob: 0.25,
            spike: 0.75,
            hue: 0.0,
        };
        let center = Vec3::new(-1.5, 0.4, 2.0);
        let block = FrameParams::new(0, (800, 600), &Mat4::IDENTITY, controls.fov())
            .with_scene(center, &controls)
            .build();

        assert_eq!(block.fov, 12.0);
        assert_eq!(block.scene_center, [-1.5, 0.4, 2.0]);
        assert_eq!(block.blob, 0.25);
        assert_eq!(block.spike, 0.75);
        assert_eq!(block.reserved, [0.0; 3]);
        assert_eq!(block.color, hue_to_color(0.0));
        assert_eq!(block._pad, 0.0);
    }

    #[test]
    fn block_size_is_independent_of_inputs() {
        let extremes = [
            (0u64, (1u32, 1u32), f32::MIN_POSITIVE),
            (u64::MAX, (u32::MAX, u32::MAX), 1.0e9),
            (123_456, (3840, 2160), -5.0),
        ];
        for (frame, size, knob) in extremes {
            let controls = SceneControls { zoom: knob, blob: knob, spike: knob, hue: knob };
            let block = FrameParams::new(frame, size, &Mat4::IDENTITY, controls.fov())
                .with_scene(Vec3::splat(knob), &controls)
                .build();
            assert_eq!(block.as_bytes().len(), FrameUniforms::SIZE);
        }
    }
}
