#![deny(unsafe_code)]
//! Core types for the driftfield particle simulation.
//!
//! A Perlin-driven [`FlowFieldGrid`] steers a population of [`Particle`]s;
//! a [`CurveSampler`] redistributes them evenly along parametric and
//! fractal outlines in collective mode. [`Simulation`] wires the system to
//! the [`Renderer`]/[`InputSource`] collaborator seams.

pub mod clock;
pub mod config;
pub mod curve;
pub mod error;
pub mod flow_grid;
pub mod mode;
pub mod noise_field;
pub mod particle;
pub mod prng;
pub mod render;
pub mod simulation;
pub mod system;

pub use clock::SimulationClock;
pub use config::SimConfig;
pub use curve::{CurveFamily, CurveSampler, Polyline};
pub use error::SimError;
pub use flow_grid::FlowFieldGrid;
pub use mode::{InputEvent, ModeController, SteeringMode};
pub use noise_field::NoiseField;
pub use particle::Particle;
pub use prng::Xorshift64;
pub use render::{Hsb, InputSource, QueuedInput, Renderer};
pub use simulation::Simulation;
pub use system::ParticleSystem;
