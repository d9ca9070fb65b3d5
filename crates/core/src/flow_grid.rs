//! The flow-field grid: a coarse lattice of unit direction vectors.
//!
//! Each cell covers `cell_size` square units of the simulation area and
//! holds one unit vector derived from the noise field. The whole grid is
//! rewritten every tick; particles read it through [`FlowFieldGrid::lookup`].

use crate::error::SimError;
use crate::noise_field::NoiseField;
use glam::DVec2;
use std::f64::consts::TAU;

/// Spatial increment between adjacent cells in noise space. Smaller values
/// make neighboring cells more similar.
const NOISE_INC: f64 = 0.1;

/// Full rotations mapped across the noise range. Two turns instead of one
/// amplifies directional variety.
const ANGLE_TURNS: f64 = 2.0;

/// Dense grid of unit direction vectors, indexed `x + y * cols`, row-major.
#[derive(Debug, Clone)]
pub struct FlowFieldGrid {
    cols: usize,
    rows: usize,
    cell_size: f64,
    cells: Vec<DVec2>,
}

impl FlowFieldGrid {
    /// Creates a zeroed grid covering `width` x `height` with square cells
    /// of `cell_size` units.
    ///
    /// Returns `SimError::DegenerateArea` if any dimension is non-positive
    /// or the area is smaller than a single cell in either direction. The
    /// grid must never be built against an area it cannot cover.
    pub fn new(width: f64, height: f64, cell_size: f64) -> Result<Self, SimError> {
        let degenerate = || SimError::DegenerateArea {
            width,
            height,
            cell_size,
        };
        if !(width > 0.0) || !(height > 0.0) || !(cell_size > 0.0) {
            return Err(degenerate());
        }
        let cols = (width / cell_size).floor() as usize;
        let rows = (height / cell_size).floor() as usize;
        if cols == 0 || rows == 0 {
            return Err(degenerate());
        }
        Ok(Self {
            cols,
            rows,
            cell_size,
            cells: vec![DVec2::ZERO; cols * rows],
        })
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Read-only access to the cell vectors, row-major.
    pub fn cells(&self) -> &[DVec2] {
        &self.cells
    }

    /// Recomputes every cell from the noise field at its current time
    /// offset. Each cell becomes the unit vector at angle
    /// `noise * 2π * ANGLE_TURNS`. One cheap O(cols * rows) pass, run every
    /// tick.
    pub fn regenerate(&mut self, noise: &NoiseField) {
        let z = noise.z_offset();
        for y in 0..self.rows {
            for x in 0..self.cols {
                let angle =
                    noise.sample(x as f64 * NOISE_INC, y as f64 * NOISE_INC, z) * TAU * ANGLE_TURNS;
                self.cells[x + y * self.cols] = DVec2::from_angle(angle);
            }
        }
    }

    /// Returns the direction vector of the cell containing `position`, or
    /// `DVec2::ZERO` when the position falls outside the grid. Particles may
    /// transiently sit out of bounds during a resize; that must steer them
    /// nowhere rather than panic.
    pub fn lookup(&self, position: DVec2) -> DVec2 {
        if position.x < 0.0 || position.y < 0.0 {
            return DVec2::ZERO;
        }
        let col = (position.x / self.cell_size).floor() as usize;
        let row = (position.y / self.cell_size).floor() as usize;
        if col >= self.cols || row >= self.rows {
            return DVec2::ZERO;
        }
        self.cells[col + row * self.cols]
    }
}
