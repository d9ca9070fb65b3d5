//! Process-wide mode state and the input events that mutate it.
//!
//! The controller is an explicit struct passed by reference into the tick,
//! never ambient globals: the simulation core stays testable without any UI
//! attached. Single writer (the event loop), read-only during a tick.

use crate::curve::CurveFamily;

/// Lower bound of the particle size scale exposed to UI sliders.
const SIZE_SCALE_MIN: f64 = 0.5;
/// Upper bound of the particle size scale.
const SIZE_SCALE_MAX: f64 = 5.0;

/// Which steering rule applies while collective mode is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SteeringMode {
    /// Follow the flow-field cell under the particle.
    FlowField,
    /// Home toward the pointer position.
    FollowPoint,
}

/// Discrete named events delivered by an input source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    ToggleShapes,
    ToggleFollow,
    ToggleFreeze,
    Reset,
    ToggleCollective,
    CycleCurveFamily,
    SetSizeScale(f64),
    Resize { width: f64, height: f64 },
}

/// The toggles that parameterize a tick without altering any component's
/// internal logic.
#[derive(Debug, Clone)]
pub struct ModeController {
    steering: SteeringMode,
    collective: bool,
    curve_family: CurveFamily,
    size_scale: f64,
    shapes: bool,
    frozen: bool,
}

impl Default for ModeController {
    fn default() -> Self {
        Self {
            steering: SteeringMode::FlowField,
            collective: false,
            curve_family: CurveFamily::Star,
            size_scale: 1.0,
            shapes: true,
            frozen: false,
        }
    }
}

impl ModeController {
    /// Fresh controller with the startup defaults: flow-field steering,
    /// collective off, star family, unit size, shapes on, running.
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective steering while collective mode is off.
    pub fn steering(&self) -> SteeringMode {
        self.steering
    }

    /// Whether collective mode is on. Collective always overrides the
    /// flow/follow sub-mode.
    pub fn collective(&self) -> bool {
        self.collective
    }

    /// The active collective curve family.
    pub fn curve_family(&self) -> CurveFamily {
        self.curve_family
    }

    /// Particle size multiplier, within [0.5, 5.0].
    pub fn size_scale(&self) -> f64 {
        self.size_scale
    }

    /// Whether decorative shapes are drawn.
    pub fn shapes(&self) -> bool {
        self.shapes
    }

    /// Whether tick advancement is halted.
    pub fn frozen(&self) -> bool {
        self.frozen
    }

    /// Selects the collective curve family directly (headless drivers; the
    /// event path only cycles).
    pub fn set_curve_family(&mut self, family: CurveFamily) {
        self.curve_family = family;
    }

    /// Turns collective mode on or off directly.
    pub fn set_collective(&mut self, on: bool) {
        self.collective = on;
    }

    /// Selects the flow/follow sub-mode directly.
    pub fn set_steering(&mut self, steering: SteeringMode) {
        self.steering = steering;
    }

    /// Shows or hides decorative shapes directly.
    pub fn set_shapes(&mut self, on: bool) {
        self.shapes = on;
    }

    /// Applies one pure mode event. `Reset` and `Resize` concern the
    /// particle system and are ignored here; the owning simulation routes
    /// them.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::ToggleShapes => self.shapes = !self.shapes,
            InputEvent::ToggleFollow => {
                self.steering = match self.steering {
                    SteeringMode::FlowField => SteeringMode::FollowPoint,
                    SteeringMode::FollowPoint => SteeringMode::FlowField,
                };
            }
            InputEvent::ToggleFreeze => self.frozen = !self.frozen,
            InputEvent::ToggleCollective => self.collective = !self.collective,
            InputEvent::CycleCurveFamily => self.curve_family = self.curve_family.cycle(),
            InputEvent::SetSizeScale(scale) => {
                self.size_scale = scale.clamp(SIZE_SCALE_MIN, SIZE_SCALE_MAX);
            }
            InputEvent::Reset | InputEvent::Resize { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_describe_a_running_flow_field_simulation() {
        let modes = ModeController::new();
        assert_eq!(modes.steering(), SteeringMode::FlowField);
        assert!(!modes.collective());
        assert_eq!(modes.curve_family(), CurveFamily::Star);
        assert_eq!(modes.size_scale(), 1.0);
        assert!(modes.shapes());
        assert!(!modes.frozen());
    }

    #[test]
    fn toggle_follow_flips_between_the_two_sub_modes() {
        let mut modes = ModeController::new();
        modes.apply(&InputEvent::ToggleFollow);
        assert_eq!(modes.steering(), SteeringMode::FollowPoint);
        modes.apply(&InputEvent::ToggleFollow);
        assert_eq!(modes.steering(), SteeringMode::FlowField);
    }

    #[test]
    fn toggle_collective_is_independent_of_steering() {
        let mut modes = ModeController::new();
        modes.apply(&InputEvent::ToggleFollow);
        modes.apply(&InputEvent::ToggleCollective);
        assert!(modes.collective());
        // The sub-mode survives underneath and is restored on toggle-off.
        assert_eq!(modes.steering(), SteeringMode::FollowPoint);
        modes.apply(&InputEvent::ToggleCollective);
        assert!(!modes.collective());
        assert_eq!(modes.steering(), SteeringMode::FollowPoint);
    }

    #[test]
    fn cycle_curve_family_walks_the_registry() {
        let mut modes = ModeController::new();
        modes.apply(&InputEvent::CycleCurveFamily);
        assert_eq!(modes.curve_family(), CurveFamily::Circle);
        for _ in 0..4 {
            modes.apply(&InputEvent::CycleCurveFamily);
        }
        assert_eq!(modes.curve_family(), CurveFamily::Star);
    }

    #[test]
    fn set_size_scale_clamps_to_slider_range() {
        let mut modes = ModeController::new();
        modes.apply(&InputEvent::SetSizeScale(3.0));
        assert_eq!(modes.size_scale(), 3.0);
        modes.apply(&InputEvent::SetSizeScale(0.0));
        assert_eq!(modes.size_scale(), SIZE_SCALE_MIN);
        modes.apply(&InputEvent::SetSizeScale(100.0));
        assert_eq!(modes.size_scale(), SIZE_SCALE_MAX);
    }

    #[test]
    fn toggle_freeze_flips_and_restores() {
        let mut modes = ModeController::new();
        modes.apply(&InputEvent::ToggleFreeze);
        assert!(modes.frozen());
        modes.apply(&InputEvent::ToggleFreeze);
        assert!(!modes.frozen());
    }

    #[test]
    fn reset_and_resize_do_not_touch_mode_state() {
        let mut modes = ModeController::new();
        modes.apply(&InputEvent::Reset);
        modes.apply(&InputEvent::Resize {
            width: 100.0,
            height: 100.0,
        });
        assert_eq!(modes.steering(), SteeringMode::FlowField);
        assert!(!modes.collective());
        assert!(modes.shapes());
    }
}
