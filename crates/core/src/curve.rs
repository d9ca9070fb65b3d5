//! Collective shapes: arc-length-parameterized outlines and target sampling.
//!
//! Each curve family answers "point at normalized distance `t`" queries.
//! Star, Fibonacci spiral, and fractal tree are built once into a
//! [`Polyline`] and cached; circle and Archimedean spiral are cheap enough
//! to evaluate analytically per query. Caches are invalidated whenever the
//! simulation area changes.

use crate::error::SimError;
use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Vertex count of the star outline: 5 outer and 5 inner points.
const STAR_POINTS: usize = 10;
/// Angle of the first (outer) star vertex, pointing straight up.
const STAR_START_ANGLE: f64 = -FRAC_PI_2;
/// Angular step between consecutive Fibonacci-spiral samples.
const SPIRAL_THETA_STEP: f64 = 0.02;
/// Hard cap on the Fibonacci-spiral polar angle, guarding against
/// floating-point runaway in the exponential.
const SPIRAL_THETA_MAX: f64 = 50.0;
/// Archimedean spiral sweep: four full turns. Independent tuning constant,
/// unrelated to the Fibonacci cap.
const ARCHIMEDEAN_SWEEP: f64 = 8.0 * PI;
/// Branching depth of the fractal tree. Fixed, so the recursion is bounded.
const TREE_DEPTH: u32 = 5;
/// Length ratio between a branch and its children.
const TREE_SCALE: f64 = 0.67;
/// Angle between a branch and each of its two children.
const TREE_SPREAD: f64 = FRAC_PI_4;

/// The supported collective-shape curve families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveFamily {
    Star,
    Circle,
    ArchimedeanSpiral,
    FibonacciSpiral,
    FractalTree,
}

/// All family names, in cycle order.
const FAMILY_NAMES: &[&str] = &[
    "star",
    "circle",
    "archimedean-spiral",
    "fibonacci-spiral",
    "fractal-tree",
];

impl CurveFamily {
    /// Returns a slice of all recognized family names, in cycle order.
    pub fn list_names() -> &'static [&'static str] {
        FAMILY_NAMES
    }

    /// Constructs a family by name.
    ///
    /// Returns `SimError::UnknownCurve` if the name is not recognized.
    pub fn from_name(name: &str) -> Result<Self, SimError> {
        match name {
            "star" => Ok(CurveFamily::Star),
            "circle" => Ok(CurveFamily::Circle),
            "archimedean-spiral" => Ok(CurveFamily::ArchimedeanSpiral),
            "fibonacci-spiral" => Ok(CurveFamily::FibonacciSpiral),
            "fractal-tree" => Ok(CurveFamily::FractalTree),
            _ => Err(SimError::UnknownCurve(name.to_string())),
        }
    }

    /// The family's canonical name.
    pub fn name(&self) -> &'static str {
        match self {
            CurveFamily::Star => "star",
            CurveFamily::Circle => "circle",
            CurveFamily::ArchimedeanSpiral => "archimedean-spiral",
            CurveFamily::FibonacciSpiral => "fibonacci-spiral",
            CurveFamily::FractalTree => "fractal-tree",
        }
    }

    /// The next family in cycle order, wrapping at the end.
    pub fn cycle(&self) -> Self {
        match self {
            CurveFamily::Star => CurveFamily::Circle,
            CurveFamily::Circle => CurveFamily::ArchimedeanSpiral,
            CurveFamily::ArchimedeanSpiral => CurveFamily::FibonacciSpiral,
            CurveFamily::FibonacciSpiral => CurveFamily::FractalTree,
            CurveFamily::FractalTree => CurveFamily::Star,
        }
    }
}

/// An ordered vertex sequence with precomputed per-segment lengths.
///
/// Invariants: `lengths[i] == distance(vertices[i], vertices[i+1])` and
/// `total_length == sum(lengths)`.
#[derive(Debug, Clone)]
pub struct Polyline {
    vertices: Vec<DVec2>,
    lengths: Vec<f64>,
    total_length: f64,
}

impl Polyline {
    /// Builds a polyline from a vertex sequence, measuring every segment.
    pub fn from_vertices(vertices: Vec<DVec2>) -> Self {
        let lengths: Vec<f64> = vertices
            .windows(2)
            .map(|pair| pair[0].distance(pair[1]))
            .collect();
        let total_length = lengths.iter().sum();
        Self {
            vertices,
            lengths,
            total_length,
        }
    }

    /// The vertex sequence.
    pub fn vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Per-segment lengths, one fewer than the vertices.
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    /// Total arc length.
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The point at normalized arc distance `t`.
    ///
    /// `t` is clamped to [0, 1]. Walks the accumulated segment lengths to
    /// the containing segment and interpolates linearly inside it; a walk
    /// that runs off the end returns the final vertex.
    pub fn point_at(&self, t: f64) -> DVec2 {
        let Some(&first) = self.vertices.first() else {
            return DVec2::ZERO;
        };
        if self.vertices.len() < 2 || self.total_length <= 0.0 {
            return first;
        }
        let target = t.clamp(0.0, 1.0) * self.total_length;
        let mut travelled = 0.0;
        for (i, &len) in self.lengths.iter().enumerate() {
            if travelled + len >= target {
                if len <= 0.0 {
                    return self.vertices[i];
                }
                let s = (target - travelled) / len;
                return self.vertices[i].lerp(self.vertices[i + 1], s);
            }
            travelled += len;
        }
        self.vertices[self.vertices.len() - 1]
    }
}

/// Maps a particle's stable index to its evenly spaced curve parameter:
/// `t = (index mod population) / (population - 1)`.
///
/// Index 0 maps to 0, index `population - 1` maps to 1. A population of one
/// (or zero) has no spacing to distribute; the parameter is 0.
pub fn collective_parameter(stable_index: usize, population: usize) -> f64 {
    if population <= 1 {
        return 0.0;
    }
    (stable_index % population) as f64 / (population - 1) as f64
}

/// Curve outlines for the current simulation area.
///
/// Polyline-backed families are built lazily and cached; call
/// [`prepare`](Self::prepare) once before a tick's read-only particle pass.
/// [`set_area`](Self::set_area) drops every cache so the next access
/// rebuilds against the new dimensions.
#[derive(Debug, Clone)]
pub struct CurveSampler {
    width: f64,
    height: f64,
    star: Option<Polyline>,
    fibonacci: Option<Polyline>,
    tree: Option<Polyline>,
}

impl CurveSampler {
    /// Creates a sampler for the given area with no outlines built yet.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            star: None,
            fibonacci: None,
            tree: None,
        }
    }

    /// Replaces the area dimensions and invalidates all cached outlines.
    pub fn set_area(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.invalidate();
    }

    /// Drops every cached outline; each rebuilds on its next access.
    pub fn invalidate(&mut self) {
        self.star = None;
        self.fibonacci = None;
        self.tree = None;
    }

    /// Ensures the cache for a polyline-backed family is built. Analytic
    /// families need no preparation.
    pub fn prepare(&mut self, family: CurveFamily) {
        match family {
            CurveFamily::Star => {
                if self.star.is_none() {
                    self.star = Some(star_outline(self.width, self.height));
                }
            }
            CurveFamily::FibonacciSpiral => {
                if self.fibonacci.is_none() {
                    self.fibonacci = Some(fibonacci_spiral_outline(self.width, self.height));
                }
            }
            CurveFamily::FractalTree => {
                if self.tree.is_none() {
                    self.tree = Some(fractal_tree_outline(self.width, self.height));
                }
            }
            CurveFamily::Circle | CurveFamily::ArchimedeanSpiral => {}
        }
    }

    /// The point at normalized arc distance `t` along the given family.
    ///
    /// Reads the cache when present; an unprepared polyline family falls
    /// back to building the outline for this query alone, so a query racing
    /// a resize still answers instead of failing.
    pub fn point_on(&self, family: CurveFamily, t: f64) -> DVec2 {
        match family {
            CurveFamily::Star => match &self.star {
                Some(outline) => outline.point_at(t),
                None => star_outline(self.width, self.height).point_at(t),
            },
            CurveFamily::Circle => circle_point(self.width, self.height, t),
            CurveFamily::ArchimedeanSpiral => archimedean_point(self.width, self.height, t),
            CurveFamily::FibonacciSpiral => match &self.fibonacci {
                Some(outline) => outline.point_at(t),
                None => fibonacci_spiral_outline(self.width, self.height).point_at(t),
            },
            CurveFamily::FractalTree => match &self.tree {
                Some(outline) => outline.point_at(t),
                None => fractal_tree_outline(self.width, self.height).point_at(t),
            },
        }
    }

    /// The collective-mode target for a particle: evenly spaced along the
    /// active family, ordered by stable index.
    pub fn collective_target(
        &self,
        stable_index: usize,
        population: usize,
        family: CurveFamily,
    ) -> DVec2 {
        self.point_on(family, collective_parameter(stable_index, population))
    }
}

fn area_center(width: f64, height: f64) -> DVec2 {
    DVec2::new(width / 2.0, height / 2.0)
}

/// Regular 10-gon alternating outer radius `min(w,h)/3` and half that,
/// closed by repeating the first vertex.
fn star_outline(width: f64, height: f64) -> Polyline {
    let center = area_center(width, height);
    let outer = width.min(height) / 3.0;
    let inner = outer / 2.0;
    let mut vertices = Vec::with_capacity(STAR_POINTS + 1);
    for i in 0..STAR_POINTS {
        let angle = STAR_START_ANGLE + i as f64 * TAU / STAR_POINTS as f64;
        let r = if i % 2 == 0 { outer } else { inner };
        vertices.push(center + r * DVec2::from_angle(angle));
    }
    vertices.push(vertices[0]);
    Polyline::from_vertices(vertices)
}

/// Logarithmic spiral `r(θ) = e^(θ·ln φ)`, sampled at a fixed angular step
/// until it leaves a `min(w,h)/2` disc or hits the angle cap.
fn fibonacci_spiral_outline(width: f64, height: f64) -> Polyline {
    let center = area_center(width, height);
    let golden_ratio = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let b = golden_ratio.ln();
    let max_r = 0.5 * width.min(height);
    let mut vertices = Vec::new();
    let mut theta = 0.0;
    loop {
        let r = (b * theta).exp();
        if r > max_r {
            break;
        }
        vertices.push(center + r * DVec2::from_angle(theta));
        theta += SPIRAL_THETA_STEP;
        if theta > SPIRAL_THETA_MAX {
            break;
        }
    }
    Polyline::from_vertices(vertices)
}

/// Point on the centered circle of radius `min(w,h)/4` at `angle = t·2π`.
fn circle_point(width: f64, height: f64, t: f64) -> DVec2 {
    let r = width.min(height) / 4.0;
    area_center(width, height) + r * DVec2::from_angle(t * TAU)
}

/// Point on the centered Archimedean spiral: `angle = t·8π`,
/// `r = t·min(w,h)/2`.
fn archimedean_point(width: f64, height: f64, t: f64) -> DVec2 {
    let r = t * width.min(height) / 2.0;
    area_center(width, height) + r * DVec2::from_angle(t * ARCHIMEDEAN_SWEEP)
}

/// All branch segments of the tree, depth-first, before any cleanup.
fn tree_segments(width: f64, height: f64) -> Vec<(DVec2, DVec2)> {
    let mut segments = Vec::new();
    let root = DVec2::new(width / 2.0, height);
    let trunk = width.min(height) / 4.0;
    branch(&mut segments, root, DVec2::new(0.0, -1.0), trunk, TREE_DEPTH);
    segments
}

fn branch(
    segments: &mut Vec<(DVec2, DVec2)>,
    position: DVec2,
    direction: DVec2,
    length: f64,
    level: u32,
) {
    if level == 0 {
        return;
    }
    let end = position + direction * length;
    segments.push((position, end));
    let shorter = length * TREE_SCALE;
    let left = DVec2::from_angle(-TREE_SPREAD).rotate(direction);
    let right = DVec2::from_angle(TREE_SPREAD).rotate(direction);
    branch(segments, end, left, shorter, level - 1);
    branch(segments, end, right, shorter, level - 1);
}

/// Flattens the branch segments into one vertex sequence, dropping
/// consecutive duplicates, and measures it.
fn fractal_tree_outline(width: f64, height: f64) -> Polyline {
    let segments = tree_segments(width, height);
    let mut cleaned: Vec<DVec2> = Vec::with_capacity(segments.len() * 2);
    for (start, end) in segments {
        if cleaned.last() != Some(&start) {
            cleaned.push(start);
        }
        if cleaned.last() != Some(&end) {
            cleaned.push(end);
        }
    }
    Polyline::from_vertices(cleaned)
}
