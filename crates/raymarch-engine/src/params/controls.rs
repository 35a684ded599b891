/// Snapshot of the user-facing scene controls, each nominally in `0..=1`.
///
/// Values are read as-is every frame; nothing here validates them.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SceneControls {
    pub zoom: f32,
    pub blob: f32,
    pub spike: f32,
    /// Hue as a fraction of a full turn.
    pub hue: f32,
}

impl Default for SceneControls {
    fn default() -> Self {
        Self {
            zoom: 0.5,
            blob: 0.5,
            spike: 0.5,
            hue: 0.6,
        }
    }
}

impl SceneControls {
    /// Field of view in degrees for the current zoom.
    #[inline]
    pub fn fov(&self) -> f32 {
        fov_from_zoom(self.zoom)
    }
}

/// Maps the zoom control onto a vertical field of view in degrees:
/// zoom 0 is 62°, zoom 1 is 12°.
#[inline]
pub fn fov_from_zoom(zoom: f32) -> f32 {
    62.0 - zoom * 50.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fov_endpoints_are_exact() {
        assert_eq!(fov_from_zoom(0.0), 62.0);
        assert_eq!(fov_from_zoom(1.0), 12.0);
    }

    #[test]
    fn fov_is_affine_in_zoom() {
        assert_eq!(fov_from_zoom(0.5), 37.0);
        assert_eq!(SceneControls { zoom: 0.25, ..SceneControls::default() }.fov(), 49.5);
    }

    #[test]
    fn out_of_range_zoom_is_passed_through() {
        assert_eq!(fov_from_zoom(2.0), -38.0);
    }
}
