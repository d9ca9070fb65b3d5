//! The particle system: population ownership and the per-tick pipeline.
//!
//! One tick runs, in strict order: noise time advance, full grid
//! regeneration, then one pass over the population applying exactly one
//! steering rule per particle, integration, edge wrap, and hue advance.
//! The grid is fully rewritten before any particle reads it; curve caches
//! are prepared before the pass so the pass reads shared state immutably.

use crate::clock::SimulationClock;
use crate::config::SimConfig;
use crate::curve::CurveSampler;
use crate::error::SimError;
use crate::flow_grid::FlowFieldGrid;
use crate::mode::{ModeController, SteeringMode};
use crate::noise_field::NoiseField;
use crate::particle::Particle;
use crate::prng::Xorshift64;
use glam::DVec2;

/// Owns the agent population and every shared structure it reads.
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    width: f64,
    height: f64,
    cell_size: f64,
    max_speed: f64,
    noise: NoiseField,
    grid: FlowFieldGrid,
    curves: CurveSampler,
    particles: Vec<Particle>,
    clock: SimulationClock,
    rng: Xorshift64,
}

impl ParticleSystem {
    /// Builds a system from a validated configuration: grid allocated,
    /// population scattered uniformly over the area with random hues.
    ///
    /// Returns `SimError::DegenerateArea` or `SimError::EmptyPopulation`
    /// for configurations that cannot support a simulation.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let grid = FlowFieldGrid::new(config.width, config.height, config.cell_size)?;
        let mut rng = Xorshift64::new(config.seed);
        let particles = spawn_population(
            &mut rng,
            config.particles,
            config.width,
            config.height,
            config.max_speed,
        );
        Ok(Self {
            width: config.width,
            height: config.height,
            cell_size: config.cell_size,
            max_speed: config.max_speed,
            noise: NoiseField::new(config.seed as u32),
            grid,
            curves: CurveSampler::new(config.width, config.height),
            particles,
            clock: SimulationClock::new(),
            rng,
        })
    }

    /// Area width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Area height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The population, in stable-index order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The flow grid as of the last tick.
    pub fn grid(&self) -> &FlowFieldGrid {
        &self.grid
    }

    /// The curve sampler for the current area.
    pub fn curves(&self) -> &CurveSampler {
        &self.curves
    }

    /// The tick clock.
    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    /// Runs one tick under the given modes. The caller gates freezing; this
    /// always advances.
    pub fn tick(&mut self, modes: &ModeController, pointer: DVec2) {
        self.noise.advance();
        self.grid.regenerate(&self.noise);
        if modes.collective() {
            self.curves.prepare(modes.curve_family());
        }
        let population = self.particles.len();
        for particle in self.particles.iter_mut() {
            if modes.collective() {
                let target = self.curves.collective_target(
                    particle.stable_index(),
                    population,
                    modes.curve_family(),
                );
                particle.seek(target);
            } else {
                match modes.steering() {
                    SteeringMode::FlowField => particle.follow_field(&self.grid),
                    SteeringMode::FollowPoint => particle.seek(pointer),
                }
            }
            particle.integrate();
            particle.wrap(self.width, self.height);
            particle.advance_hue();
        }
        self.clock.advance();
    }

    /// Replaces the simulation area: reallocates the flow grid and drops
    /// every cached curve outline before the next tick can run.
    ///
    /// A degenerate new area is rejected and the previous consistent
    /// grid/curve pair stays in place.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<(), SimError> {
        let grid = FlowFieldGrid::new(width, height, self.cell_size)?;
        self.grid = grid;
        self.curves.set_area(width, height);
        self.width = width;
        self.height = height;
        Ok(())
    }

    /// Respawns the population from the ongoing PRNG stream. Stable indices
    /// restart at zero; positions and hues are fresh.
    pub fn reset(&mut self) {
        let count = self.particles.len();
        self.particles = spawn_population(
            &mut self.rng,
            count,
            self.width,
            self.height,
            self.max_speed,
        );
    }
}

/// Scatters `count` particles uniformly over the area, each with a random
/// starting hue and a stable index equal to its position in the vector.
fn spawn_population(
    rng: &mut Xorshift64,
    count: usize,
    width: f64,
    height: f64,
    max_speed: f64,
) -> Vec<Particle> {
    (0..count)
        .map(|index| {
            let position = DVec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height));
            let hue = rng.next_range(0.0, 360.0);
            Particle::new(position, hue, max_speed, index)
        })
        .collect()
}
