use bytemuck::{Pod, Zeroable};

/// Per-frame uniform block shared with the external shader.
///
/// Layout version 1, 128 bytes, every field a 32-bit float, grouped in
/// 16-byte rows:
///
/// | offset | contents                                |
/// |--------|-----------------------------------------|
/// | 0      | view matrix (column-major)              |
/// | 64     | image width, image height, fov, frame   |
/// | 80     | scene center xyz, blob                  |
/// | 96     | spike, three reserved zeros             |
/// | 112    | color rgb, trailing pad                 |
///
/// The shader reads this positionally; field order and padding must not
/// change without bumping [`FrameUniforms::LAYOUT_VERSION`].
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub view: [f32; 16],

    pub image_size: [f32; 2],
    /// Vertical field of view in degrees.
    pub fov: f32,
    /// Frame counter, converted to float like every other field.
    pub frame: f32,

    pub scene_center: [f32; 3],
    pub blob: f32,

    pub spike: f32,
    pub reserved: [f32; 3],

    pub color: [f32; 3],
    pub _pad: f32,
}

const _: () = assert!(std::mem::size_of::<FrameUniforms>() == FrameUniforms::SIZE);

impl FrameUniforms {
    pub const LAYOUT_VERSION: u32 = 1;

    /// Byte size of the block and of the GPU buffer that holds it.
    pub const SIZE: usize = 128;

    /// Byte offset of the first field after the frame counter. Shaders that
    /// only consume the camera rows stop here.
    pub const CAMERA_ROWS_END: usize = 80;

    /// Serialized form uploaded to the GPU, always exactly `SIZE` bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::zeroed()
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use super::*;

    #[test]
    fn block_is_128_bytes() {
        assert_eq!(FrameUniforms::default().as_bytes().len(), 128);
    }

    #[test]
    fn field_offsets_follow_layout_v1() {
        assert_eq!(offset_of!(FrameUniforms, view), 0);
        assert_eq!(offset_of!(FrameUniforms, image_size), 64);
        assert_eq!(offset_of!(FrameUniforms, fov), 72);
        assert_eq!(offset_of!(FrameUniforms, frame), 76);
        assert_eq!(offset_of!(FrameUniforms, scene_center), 80);
        assert_eq!(offset_of!(FrameUniforms, blob), 92);
        assert_eq!(offset_of!(FrameUniforms, spike), 96);
        assert_eq!(offset_of!(FrameUniforms, reserved), 100);
        assert_eq!(offset_of!(FrameUniforms, color), 112);
        assert_eq!(offset_of!(FrameUniforms, _pad), 124);
    }

    #[test]
    fn fields_serialize_at_their_offsets() {
        let block = FrameUniforms {
            fov: 62.0,
            ..FrameUniforms::default()
        };
        let bytes = block.as_bytes();
        assert_eq!(&bytes[72..76], &62.0f32.to_ne_bytes());
    }
}
