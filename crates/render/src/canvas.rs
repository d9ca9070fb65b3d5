//! An RGB pixel canvas implementing the core `Renderer` seam.
//!
//! One area unit maps to one pixel. `begin_frame` does not clear: it fades
//! every pixel a little toward the background, which is what turns moving
//! points into motion trails.

use crate::color::hsb_to_rgb;
use driftfield_core::{Hsb, Renderer, SimError};
use glam::DVec2;

/// Per-frame fade toward the background. Low enough that a few dozen
/// frames of history stay visible.
const TRAIL_FADE: f64 = 0.05;
/// Particle stroke saturation on the 0-100 scale.
const POINT_SATURATION: f64 = 80.0;
/// Particle stroke brightness on the 0-100 scale.
const POINT_BRIGHTNESS: f64 = 100.0;
/// Particle stroke alpha in [0, 1].
const POINT_ALPHA: f64 = 0.8;

/// A CPU pixel buffer: `width * height` RGB triples in [0, 1], row-major.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<[f64; 3]>,
    background: [f64; 3],
}

impl PixelCanvas {
    /// Creates a canvas cleared to black.
    ///
    /// Returns `SimError::InvalidDimensions` if either dimension is zero or
    /// `width * height` overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .ok_or(SimError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            pixels: vec![[0.0; 3]; len],
            background: [0.0; 3],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the pixel triples, row-major.
    pub fn pixels(&self) -> &[[f64; 3]] {
        &self.pixels
    }

    /// The pixel at (x, y). Panics on out-of-range indices; drawing calls
    /// never do this, only misindexed test code can.
    pub fn pixel(&self, x: usize, y: usize) -> [f64; 3] {
        self.pixels[y * self.width + x]
    }

    /// Replaces the trail background color.
    pub fn set_background(&mut self, color: Hsb) {
        self.background = hsb_to_rgb(color);
    }

    /// Converts the buffer to RGBA8, alpha always 255.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|rgb| {
                let r = (rgb[0].clamp(0.0, 1.0) * 255.0).round() as u8;
                let g = (rgb[1].clamp(0.0, 1.0) * 255.0).round() as u8;
                let b = (rgb[2].clamp(0.0, 1.0) * 255.0).round() as u8;
                [r, g, b, 255u8]
            })
            .collect()
    }

    /// Alpha-blends `rgb` into the pixel containing (x, y); positions off
    /// the canvas are dropped.
    fn blend(&mut self, x: f64, y: f64, rgb: [f64; 3], alpha: f64) {
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (xi, yi) = (x.floor() as usize, y.floor() as usize);
        if xi >= self.width || yi >= self.height {
            return;
        }
        let pixel = &mut self.pixels[yi * self.width + xi];
        for (dst, src) in pixel.iter_mut().zip(rgb) {
            *dst = *dst * (1.0 - alpha) + src * alpha;
        }
    }

    /// Strokes the segment from `a` to `b` by sampling one point per unit
    /// of length.
    fn stroke_line(&mut self, a: DVec2, b: DVec2, rgb: [f64; 3], alpha: f64) {
        let steps = a.distance(b).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let p = a.lerp(b, i as f64 / steps as f64);
            self.blend(p.x, p.y, rgb, alpha);
        }
    }
}

impl Renderer for PixelCanvas {
    fn begin_frame(&mut self) {
        let bg = self.background;
        for pixel in &mut self.pixels {
            for (dst, src) in pixel.iter_mut().zip(bg) {
                *dst = *dst * (1.0 - TRAIL_FADE) + src * TRAIL_FADE;
            }
        }
    }

    fn draw_point(&mut self, position: DVec2, hue: f64, size: f64) {
        let rgb = hsb_to_rgb(Hsb::new(hue, POINT_SATURATION, POINT_BRIGHTNESS));
        let radius = (size / 2.0).max(0.5);
        let r = radius.ceil() as i64;
        for dy in -r..=r {
            for dx in -r..=r {
                let offset = DVec2::new(dx as f64, dy as f64);
                if offset.length() <= radius {
                    self.blend(
                        position.x + offset.x,
                        position.y + offset.y,
                        rgb,
                        POINT_ALPHA,
                    );
                }
            }
        }
    }

    fn draw_polygon(&mut self, vertices: &[DVec2], stroke: Hsb) {
        if vertices.len() < 2 {
            return;
        }
        let rgb = hsb_to_rgb(stroke);
        let alpha = (stroke.alpha / 100.0).clamp(0.0, 1.0);
        for pair in vertices.windows(2) {
            self.stroke_line(pair[0], pair[1], rgb, alpha);
        }
        // Close the ring.
        self.stroke_line(vertices[vertices.len() - 1], vertices[0], rgb, alpha);
    }

    fn end_frame(&mut self) {}
}
