/// Saturation used for scene colors.
pub const SCENE_SATURATION: f32 = 0.6;

/// Lightness used for scene colors.
pub const SCENE_LIGHTNESS: f32 = 0.55;

/// Converts a `0..1` hue into linear RGB at the fixed scene saturation and
/// lightness.
///
/// Standard HSL → RGB: for each channel offset `n` in `[0, 8, 4]`,
/// `k = (n + h / 30) mod 12` and
/// `lig - a * max(-1, min(k - 3, min(9 - k, 1)))` with `a = sat * min(lig, 1 - lig)`.
/// The remainder truncates like the shader-side reference, so hue 1.0 lands
/// on the same color as hue 0.0.
pub fn hue_to_color(hue: f32) -> [f32; 3] {
    hsl_to_rgb(hue * 360.0, SCENE_SATURATION, SCENE_LIGHTNESS)
}

/// HSL → RGB with `hue_degrees` in `[0, 360]`.
pub fn hsl_to_rgb(hue_degrees: f32, sat: f32, lig: f32) -> [f32; 3] {
    let a = sat * lig.min(1.0 - lig);
    let channel = |n: f32| {
        let k = (n + hue_degrees / 30.0) % 12.0;
        lig - a * (k - 3.0).min((9.0 - k).min(1.0)).max(-1.0)
    };
    [channel(0.0), channel(8.0), channel(4.0)]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < EPS)
    }

    // Peak and floor channel values at sat 0.6 / lig 0.55.
    const HI: f32 = 0.82;
    const LO: f32 = 0.28;

    #[test]
    fn hue_wraps_at_full_turn() {
        assert_eq!(hue_to_color(0.0), hue_to_color(1.0));
    }

    #[test]
    fn primaries_follow_hue_order() {
        assert!(approx(hue_to_color(0.0), [HI, LO, LO]), "{:?}", hue_to_color(0.0));
        assert!(approx(hue_to_color(1.0 / 3.0), [LO, HI, LO]), "{:?}", hue_to_color(1.0 / 3.0));
        assert!(approx(hue_to_color(2.0 / 3.0), [LO, LO, HI]), "{:?}", hue_to_color(2.0 / 3.0));
    }

    #[test]
    fn secondaries_mix_neighbouring_channels() {
        // 60° is yellow: red and green both at the peak.
        assert!(approx(hue_to_color(1.0 / 6.0), [HI, HI, LO]));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let [r, g, b] = hsl_to_rgb(137.0, 0.0, 0.4);
        assert!((r - 0.4).abs() < EPS && (g - 0.4).abs() < EPS && (b - 0.4).abs() < EPS);
    }

    #[test]
    fn channels_stay_in_unit_range() {
        for i in 0..=100 {
            let rgb = hue_to_color(i as f32 / 100.0);
            assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)), "{rgb:?}");
        }
    }
}
