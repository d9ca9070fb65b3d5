//! A single agent: kinematic state plus the steering forces that act on it.

use crate::flow_grid::FlowFieldGrid;
use glam::DVec2;

/// Magnitude of the homing force toward a followed point or collective
/// target. A gentle pull, not a snap.
const SEEK_STRENGTH: f64 = 0.5;

/// Per-tick hue advance, wrapping modulo 360.
const HUE_STEP: f64 = 0.2;

/// One particle: position, velocity, an acceleration accumulator zeroed
/// after every integration, a cycling hue for the renderer, and a stable
/// index that fixes its slot along a collective curve.
#[derive(Debug, Clone)]
pub struct Particle {
    position: DVec2,
    velocity: DVec2,
    acceleration: DVec2,
    max_speed: f64,
    hue: f64,
    stable_index: usize,
}

impl Particle {
    /// Creates a particle at rest.
    pub fn new(position: DVec2, hue: f64, max_speed: f64, stable_index: usize) -> Self {
        Self {
            position,
            velocity: DVec2::ZERO,
            acceleration: DVec2::ZERO,
            max_speed,
            hue,
            stable_index,
        }
    }

    /// Current position.
    pub fn position(&self) -> DVec2 {
        self.position
    }

    /// Current velocity.
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Current acceleration accumulator.
    pub fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    /// Cycling hue in [0, 360).
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Fixed identity used for collective-mode targeting. Never changes
    /// over the particle's lifetime, so its curve slot is coherent
    /// frame-to-frame.
    pub fn stable_index(&self) -> usize {
        self.stable_index
    }

    /// Adds a force into the acceleration accumulator.
    pub fn apply_force(&mut self, force: DVec2) {
        self.acceleration += force;
    }

    /// Applies the flow-field cell under the particle as a force. Outside
    /// the grid this is a zero force.
    pub fn follow_field(&mut self, grid: &FlowFieldGrid) {
        self.apply_force(grid.lookup(self.position));
    }

    /// Applies a fixed-magnitude homing force toward `target`. A particle
    /// already at the target feels nothing.
    pub fn seek(&mut self, target: DVec2) {
        let desired = (target - self.position).normalize_or_zero() * SEEK_STRENGTH;
        self.apply_force(desired);
    }

    /// Integrates one tick: accumulate acceleration into velocity, clamp
    /// speed, move, reset the accumulator.
    pub fn integrate(&mut self) {
        self.velocity += self.acceleration;
        self.velocity = self.velocity.clamp_length_max(self.max_speed);
        self.position += self.velocity;
        self.acceleration = DVec2::ZERO;
    }

    /// Wraps the position around the area edges: a coordinate past one edge
    /// reappears at the opposite edge.
    pub fn wrap(&mut self, width: f64, height: f64) {
        if self.position.x > width {
            self.position.x = 0.0;
        }
        if self.position.x < 0.0 {
            self.position.x = width;
        }
        if self.position.y > height {
            self.position.y = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = height;
        }
    }

    /// Advances the hue by one tick's step, wrapping modulo 360.
    pub fn advance_hue(&mut self) {
        self.hue = (self.hue + HUE_STEP) % 360.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_field::NoiseField;

    fn particle_at(x: f64, y: f64) -> Particle {
        Particle::new(DVec2::new(x, y), 0.0, 4.0, 0)
    }

    // -- Forces --

    #[test]
    fn apply_force_accumulates() {
        let mut p = particle_at(0.0, 0.0);
        p.apply_force(DVec2::new(1.0, 0.0));
        p.apply_force(DVec2::new(0.0, 2.0));
        assert_eq!(p.acceleration(), DVec2::new(1.0, 2.0));
    }

    #[test]
    fn seek_applies_fixed_magnitude_toward_target() {
        let mut p = particle_at(10.0, 10.0);
        p.seek(DVec2::new(110.0, 10.0));
        assert!((p.acceleration() - DVec2::new(0.5, 0.0)).length() < 1e-9);
    }

    #[test]
    fn seek_magnitude_is_independent_of_distance() {
        let mut near = particle_at(0.0, 0.0);
        let mut far = particle_at(0.0, 0.0);
        near.seek(DVec2::new(1.0, 0.0));
        far.seek(DVec2::new(1000.0, 0.0));
        assert!((near.acceleration().length() - far.acceleration().length()).abs() < 1e-9);
    }

    #[test]
    fn seek_at_the_target_is_a_zero_force() {
        let mut p = particle_at(5.0, 5.0);
        p.seek(DVec2::new(5.0, 5.0));
        assert_eq!(p.acceleration(), DVec2::ZERO);
    }

    #[test]
    fn follow_field_uses_the_containing_cell() {
        let mut grid = FlowFieldGrid::new(800.0, 600.0, 100.0).unwrap();
        grid.regenerate(&NoiseField::new(42));
        let mut p = particle_at(250.0, 130.0);
        p.follow_field(&grid);
        assert_eq!(p.acceleration(), grid.lookup(DVec2::new(250.0, 130.0)));
    }

    #[test]
    fn follow_field_outside_bounds_leaves_acceleration_zero() {
        let mut grid = FlowFieldGrid::new(800.0, 600.0, 100.0).unwrap();
        grid.regenerate(&NoiseField::new(42));
        let mut p = particle_at(-50.0, 130.0);
        p.follow_field(&grid);
        assert_eq!(p.acceleration(), DVec2::ZERO);
    }

    // -- Integration --

    #[test]
    fn integrate_moves_and_resets_acceleration() {
        let mut p = particle_at(0.0, 0.0);
        p.apply_force(DVec2::new(1.0, 0.0));
        p.integrate();
        assert_eq!(p.velocity(), DVec2::new(1.0, 0.0));
        assert_eq!(p.position(), DVec2::new(1.0, 0.0));
        assert_eq!(p.acceleration(), DVec2::ZERO);
    }

    #[test]
    fn integrate_clamps_speed_to_max() {
        let mut p = particle_at(0.0, 0.0);
        for _ in 0..100 {
            p.apply_force(DVec2::new(3.0, 0.0));
            p.integrate();
            assert!(p.velocity().length() <= 4.0 + 1e-9);
        }
        assert!((p.velocity().length() - 4.0).abs() < 1e-9);
    }

    // -- Edge wrapping --

    #[test]
    fn wrap_relocates_past_right_edge_to_left() {
        let mut p = particle_at(801.0, 300.0);
        p.wrap(800.0, 600.0);
        assert_eq!(p.position(), DVec2::new(0.0, 300.0));
    }

    #[test]
    fn wrap_relocates_past_left_edge_to_right() {
        let mut p = particle_at(-1.0, 300.0);
        p.wrap(800.0, 600.0);
        assert_eq!(p.position(), DVec2::new(800.0, 300.0));
    }

    #[test]
    fn wrap_relocates_past_bottom_edge_to_top() {
        let mut p = particle_at(400.0, 601.0);
        p.wrap(800.0, 600.0);
        assert_eq!(p.position(), DVec2::new(400.0, 0.0));
    }

    #[test]
    fn wrap_relocates_past_top_edge_to_bottom() {
        let mut p = particle_at(400.0, -1.0);
        p.wrap(800.0, 600.0);
        assert_eq!(p.position(), DVec2::new(400.0, 600.0));
    }

    #[test]
    fn wrap_leaves_interior_positions_alone() {
        let mut p = particle_at(400.0, 300.0);
        p.wrap(800.0, 600.0);
        assert_eq!(p.position(), DVec2::new(400.0, 300.0));
    }

    // -- Hue --

    #[test]
    fn hue_advances_by_fixed_step_and_wraps() {
        let mut p = Particle::new(DVec2::ZERO, 359.9, 4.0, 0);
        p.advance_hue();
        assert!((p.hue() - 0.1).abs() < 1e-9);
        assert!((0.0..360.0).contains(&p.hue()));
    }

    #[test]
    fn stable_index_is_preserved() {
        let mut p = Particle::new(DVec2::ZERO, 0.0, 4.0, 137);
        p.apply_force(DVec2::new(1.0, 1.0));
        p.integrate();
        p.wrap(800.0, 600.0);
        p.advance_hue();
        assert_eq!(p.stable_index(), 137);
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn velocity_never_exceeds_max_speed_after_integrate(
                fx in -100.0_f64..100.0,
                fy in -100.0_f64..100.0,
                steps in 1_usize..50,
            ) {
                let mut p = particle_at(0.0, 0.0);
                for _ in 0..steps {
                    p.apply_force(DVec2::new(fx, fy));
                    p.integrate();
                    prop_assert!(p.velocity().length() <= 4.0 + 1e-9);
                    prop_assert_eq!(p.acceleration(), DVec2::ZERO);
                }
            }

            #[test]
            fn wrap_puts_single_excursions_back_on_an_edge(
                x in -800.0_f64..1600.0,
                y in -600.0_f64..1200.0,
            ) {
                let mut p = particle_at(x, y);
                p.wrap(800.0, 600.0);
                let pos = p.position();
                prop_assert!((0.0..=800.0).contains(&pos.x), "x = {}", pos.x);
                prop_assert!((0.0..=600.0).contains(&pos.y), "y = {}", pos.y);
            }
        }
    }
}
