//! Collaborator interfaces: the rendering hand-off and the input seam.
//!
//! The core never draws a pixel or polls a device. It reports through an
//! object-safe [`Renderer`] and reads pointer position plus discrete events
//! from an [`InputSource`].

use crate::mode::InputEvent;
use glam::DVec2;

/// An HSB color: hue in [0, 360), saturation/brightness/alpha on a 0-100
/// scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
    pub alpha: f64,
}

impl Hsb {
    /// An opaque HSB color.
    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha: 100.0,
        }
    }

    /// The same color with a different alpha.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

/// Sink for one frame of drawing. The core calls `begin_frame`, then one
/// `draw_point` per particle and one `draw_polygon` per decorative shape,
/// then `end_frame`. Implementations own every pixel/canvas concern.
pub trait Renderer {
    fn begin_frame(&mut self);

    /// Draws one particle: position, its cycling hue, and the
    /// caller-supplied size.
    fn draw_point(&mut self, position: DVec2, hue: f64, size: f64);

    /// Strokes a closed polygon through `vertices`.
    fn draw_polygon(&mut self, vertices: &[DVec2], stroke: Hsb);

    fn end_frame(&mut self);
}

/// Source of pointer position and discrete input events. The core drains
/// events once per frame; it never polls raw devices.
pub trait InputSource {
    /// Current pointer position in area coordinates.
    fn pointer(&self) -> DVec2;

    /// Removes and returns all events delivered since the last drain, in
    /// arrival order.
    fn drain_events(&mut self) -> Vec<InputEvent>;
}

/// Queue-backed [`InputSource`] for tests and headless drivers: set the
/// pointer, push events, hand it to the simulation.
#[derive(Debug, Clone, Default)]
pub struct QueuedInput {
    pointer: DVec2,
    events: Vec<InputEvent>,
}

impl QueuedInput {
    /// An input source with the pointer at the origin and no events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the pointer.
    pub fn set_pointer(&mut self, position: DVec2) {
        self.pointer = position;
    }

    /// Enqueues an event for the next drain.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push(event);
    }
}

impl InputSource for QueuedInput {
    fn pointer(&self) -> DVec2 {
        self.pointer
    }

    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}
