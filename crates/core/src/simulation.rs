//! The simulation facade: event routing, the freeze gate, and the render
//! hand-off.
//!
//! Ties a [`ParticleSystem`] to a [`ModeController`] for a host frame loop:
//! drain input events, run one tick unless frozen, then report the frame to
//! a [`Renderer`].

use crate::config::SimConfig;
use crate::error::SimError;
use crate::mode::{InputEvent, ModeController};
use crate::prng::Xorshift64;
use crate::render::{Hsb, InputSource, Renderer};
use crate::system::ParticleSystem;
use glam::DVec2;
use std::f64::consts::TAU;

/// Base particle point size before the mode controller's scale applies.
const BASE_POINT_SIZE: f64 = 1.5;
/// Decorative polygons emitted per frame while shapes are on.
const DECOR_POLYGON_COUNT: usize = 2;
/// Vertex jitter applied to each decorative polygon corner.
const DECOR_JITTER: f64 = 10.0;
/// Stroke saturation/brightness for decorative polygons.
const DECOR_STROKE: (f64, f64) = (90.0, 100.0);

/// A running simulation: system, modes, and a jitter stream for the
/// decorative shapes.
#[derive(Debug, Clone)]
pub struct Simulation {
    system: ParticleSystem,
    modes: ModeController,
    decor_rng: Xorshift64,
}

impl Simulation {
    /// Builds a simulation from a configuration, with default modes.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        Ok(Self {
            system: ParticleSystem::new(config)?,
            modes: ModeController::new(),
            // Offset stream so decoration jitter never mirrors the spawn
            // positions.
            decor_rng: Xorshift64::new(config.seed.wrapping_add(0x5FEC)),
        })
    }

    /// The particle system.
    pub fn system(&self) -> &ParticleSystem {
        &self.system
    }

    /// The mode state.
    pub fn modes(&self) -> &ModeController {
        &self.modes
    }

    /// Mutable mode state, for headless drivers that configure directly
    /// instead of through events.
    pub fn modes_mut(&mut self) -> &mut ModeController {
        &mut self.modes
    }

    /// Routes one input event: `Resize` and `Reset` act on the particle
    /// system, everything else mutates mode state.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<(), SimError> {
        match event {
            InputEvent::Resize { width, height } => self.system.resize(*width, *height),
            InputEvent::Reset => {
                self.system.reset();
                Ok(())
            }
            other => {
                self.modes.apply(other);
                Ok(())
            }
        }
    }

    /// Drains and applies every pending event from an input source, in
    /// arrival order.
    pub fn pump(&mut self, input: &mut dyn InputSource) -> Result<(), SimError> {
        for event in input.drain_events() {
            self.handle_event(&event)?;
        }
        Ok(())
    }

    /// Runs one tick unless frozen. While frozen nothing mutates: the clock
    /// halts, the noise offset holds, every particle stays put.
    pub fn tick(&mut self, pointer: DVec2) {
        if self.modes.frozen() {
            return;
        }
        self.system.tick(&self.modes, pointer);
    }

    /// Reports one frame: every particle as a point, then the decorative
    /// polygons when shapes are enabled.
    pub fn render(&mut self, renderer: &mut dyn Renderer) {
        renderer.begin_frame();
        let size = BASE_POINT_SIZE * self.modes.size_scale();
        for particle in self.system.particles() {
            renderer.draw_point(particle.position(), particle.hue(), size);
        }
        if self.modes.shapes() {
            for _ in 0..DECOR_POLYGON_COUNT {
                let (vertices, stroke) = self.next_decor_polygon();
                renderer.draw_polygon(&vertices, stroke);
            }
        }
        renderer.end_frame();
    }

    /// One jittered regular polygon at a random position: 3-7 sides,
    /// radius 10-50, hue drifting with the tick count.
    fn next_decor_polygon(&mut self) -> (Vec<DVec2>, Hsb) {
        let rng = &mut self.decor_rng;
        let center = DVec2::new(
            rng.next_range(0.0, self.system.width()),
            rng.next_range(0.0, self.system.height()),
        );
        let sides = rng.next_range(3.0, 8.0).floor() as usize;
        let radius = rng.next_range(10.0, 50.0);
        let rotation = rng.next_range(0.0, TAU);
        let hue = (self.system.clock().ticks() as f64 * 2.0 + rng.next_range(0.0, 100.0)) % 360.0;
        let vertices = (0..sides)
            .map(|s| {
                let angle = rotation + s as f64 / sides as f64 * TAU;
                let jitter = DVec2::new(
                    rng.next_range(-DECOR_JITTER, DECOR_JITTER),
                    rng.next_range(-DECOR_JITTER, DECOR_JITTER),
                );
                center + radius * DVec2::from_angle(angle) + jitter
            })
            .collect();
        (vertices, Hsb::new(hue, DECOR_STROKE.0, DECOR_STROKE.1))
    }
}
