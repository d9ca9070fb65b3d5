//! Reproducible simulation configuration.
//!
//! A [`SimConfig`] captures everything needed to recreate a run: area
//! dimensions, population size, flow-grid cell size, speed limit, and PRNG
//! seed. Two identical configs produce identical simulations.

use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Simulation configuration with ready-to-run defaults.
///
/// Deserializes leniently: any missing field takes its default, so a JSON
/// config only needs the fields it overrides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Simulation area width.
    pub width: f64,
    /// Simulation area height.
    pub height: f64,
    /// Particle population size.
    pub particles: usize,
    /// Flow-grid cell size in area units.
    pub cell_size: f64,
    /// Per-particle speed limit.
    pub max_speed: f64,
    /// PRNG seed for spawn positions and hues.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            particles: 6000,
            cell_size: 100.0,
            max_speed: 4.0,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Validates that the area supports at least a 1x1 flow grid and the
    /// population is non-empty.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.particles == 0 {
            return Err(SimError::EmptyPopulation);
        }
        let degenerate = !(self.width > 0.0)
            || !(self.height > 0.0)
            || !(self.cell_size > 0.0)
            || (self.width / self.cell_size).floor() < 1.0
            || (self.height / self.cell_size).floor() < 1.0;
        if degenerate {
            return Err(SimError::DegenerateArea {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            });
        }
        Ok(())
    }
}
