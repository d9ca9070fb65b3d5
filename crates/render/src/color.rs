//! HSB-to-RGB conversion.
//!
//! The simulation core speaks HSB: hue in [0, 360), saturation and
//! brightness on a 0-100 scale. The canvas stores RGB in [0, 1]. Pure
//! functions, `f64` throughout.

use driftfield_core::Hsb;

/// Converts an [`Hsb`] color to RGB components in [0, 1].
///
/// Hue is wrapped into [0, 360); saturation and brightness are clamped to
/// their 0-100 scale before normalizing.
pub fn hsb_to_rgb(color: Hsb) -> [f64; 3] {
    let h = color.hue.rem_euclid(360.0);
    let s = (color.saturation.clamp(0.0, 100.0)) / 100.0;
    let v = (color.brightness.clamp(0.0, 100.0)) / 100.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    [r + m, g + m, b + m]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb(color: Hsb, expected: [f64; 3]) {
        let rgb = hsb_to_rgb(color);
        for (i, (got, want)) in rgb.iter().zip(expected).enumerate() {
            assert!(
                (got - want).abs() < 1e-9,
                "component {i}: got {got}, want {want}"
            );
        }
    }

    #[test]
    fn primary_hues_map_to_pure_channels() {
        assert_rgb(Hsb::new(0.0, 100.0, 100.0), [1.0, 0.0, 0.0]);
        assert_rgb(Hsb::new(120.0, 100.0, 100.0), [0.0, 1.0, 0.0]);
        assert_rgb(Hsb::new(240.0, 100.0, 100.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn zero_saturation_is_gray_at_the_brightness_level() {
        assert_rgb(Hsb::new(123.0, 0.0, 50.0), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn zero_brightness_is_black_for_any_hue() {
        for hue in [0.0, 90.0, 317.0] {
            assert_rgb(Hsb::new(hue, 80.0, 0.0), [0.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn hue_wraps_past_360() {
        assert_eq!(
            hsb_to_rgb(Hsb::new(480.0, 80.0, 100.0)),
            hsb_to_rgb(Hsb::new(120.0, 80.0, 100.0))
        );
    }

    #[test]
    fn out_of_scale_saturation_and_brightness_clamp() {
        assert_eq!(
            hsb_to_rgb(Hsb::new(200.0, 150.0, 120.0)),
            hsb_to_rgb(Hsb::new(200.0, 100.0, 100.0))
        );
    }

    #[test]
    fn components_always_in_unit_interval() {
        for i in 0..360 {
            let rgb = hsb_to_rgb(Hsb::new(i as f64, 80.0, 100.0));
            for c in rgb {
                assert!((0.0..=1.0).contains(&c), "hue {i} gave component {c}");
            }
        }
    }
}
