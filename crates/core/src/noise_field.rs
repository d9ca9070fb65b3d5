//! Coherent 3D noise driving the flow field.
//!
//! Wraps the `noise` crate's Perlin generator behind the narrow contract the
//! simulation needs: a deterministic, continuous scalar in [0, 1] for any
//! (x, y, z), plus a time offset that creeps forward each tick so the field
//! animates without discontinuity.

use noise::{NoiseFn, Perlin};

/// Amount added to the z offset each tick. Small enough that consecutive
/// frames sample nearly the same noise slice.
const Z_STEP: f64 = 0.003;

/// Deterministic coherent-noise source with an advancing time offset.
#[derive(Clone)]
pub struct NoiseField {
    noise: Perlin,
    z_offset: f64,
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("z_offset", &self.z_offset)
            .finish_non_exhaustive()
    }
}

impl NoiseField {
    /// Creates a noise field from a seed. Same seed, same noise everywhere.
    pub fn new(seed: u32) -> Self {
        Self {
            noise: Perlin::new(seed),
            z_offset: 0.0,
        }
    }

    /// Samples the noise at (x, y, z), mapped from Perlin's [-1, 1] into
    /// [0, 1]. Deterministic for identical inputs and continuous in all
    /// three coordinates.
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        (self.noise.get([x, y, z]) * 0.5 + 0.5).clamp(0.0, 1.0)
    }

    /// Current time offset, fed back into [`sample`](Self::sample) as the z
    /// coordinate by the flow grid.
    pub fn z_offset(&self) -> f64 {
        self.z_offset
    }

    /// Advances the time offset by one tick's worth.
    pub fn advance(&mut self) {
        self.z_offset += Z_STEP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Determinism --

    #[test]
    fn same_seed_and_inputs_produce_identical_samples() {
        let a = NoiseField::new(7);
        let b = NoiseField::new(7);
        for i in 0..100 {
            let x = i as f64 * 0.13;
            assert_eq!(a.sample(x, x * 0.5, 0.0), b.sample(x, x * 0.5, 0.0));
        }
    }

    #[test]
    fn different_seeds_produce_different_fields() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let diverged = (0..100).any(|i| {
            let x = i as f64 * 0.31;
            a.sample(x, 0.7, 0.0) != b.sample(x, 0.7, 0.0)
        });
        assert!(diverged, "seeds 1 and 2 sampled identically everywhere");
    }

    // -- Range --

    #[test]
    fn samples_stay_in_unit_interval() {
        let field = NoiseField::new(42);
        for i in 0..1000 {
            let x = (i % 37) as f64 * 0.21;
            let y = (i % 53) as f64 * 0.17;
            let z = i as f64 * 0.003;
            let v = field.sample(x, y, z);
            assert!((0.0..=1.0).contains(&v), "sample({x}, {y}, {z}) = {v}");
        }
    }

    // -- Continuity --

    #[test]
    fn nearby_inputs_produce_nearby_outputs() {
        // The field must look spatially smooth: a tiny input delta may only
        // move the output by a tiny amount.
        let field = NoiseField::new(42);
        let eps = 1e-4;
        for i in 0..200 {
            let x = i as f64 * 0.19;
            let y = i as f64 * 0.07;
            let delta = (field.sample(x + eps, y, 0.5) - field.sample(x, y, 0.5)).abs();
            assert!(delta < 0.01, "jump of {delta} across eps at ({x}, {y})");
        }
    }

    // -- Time offset --

    #[test]
    fn advance_moves_z_offset_by_fixed_step() {
        let mut field = NoiseField::new(0);
        assert_eq!(field.z_offset(), 0.0);
        field.advance();
        assert!((field.z_offset() - Z_STEP).abs() < f64::EPSILON);
        field.advance();
        assert!((field.z_offset() - 2.0 * Z_STEP).abs() < f64::EPSILON);
    }

    #[test]
    fn advance_does_not_change_sampling_at_fixed_z() {
        let mut field = NoiseField::new(9);
        let before = field.sample(1.0, 2.0, 0.25);
        field.advance();
        assert_eq!(field.sample(1.0, 2.0, 0.25), before);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn sample_in_unit_interval_for_any_seed_and_point(
                seed: u32,
                x in -100.0_f64..100.0,
                y in -100.0_f64..100.0,
                z in -10.0_f64..10.0,
            ) {
                let field = NoiseField::new(seed);
                let v = field.sample(x, y, z);
                prop_assert!(
                    (0.0..=1.0).contains(&v),
                    "sample({x}, {y}, {z}) = {v} for seed {seed}"
                );
            }
        }
    }
}
