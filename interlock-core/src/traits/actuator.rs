//! Actuator and indicator traits

use crate::state::ActuatorState;

/// Trait for the motor actuator output stage
///
/// Implementations drive the enable line and both status LEDs from one
/// call, so callers never observe a half-written state.
pub trait ActuatorDriver {
    /// Drive the outputs for `state` and remember it
    fn set_state(&mut self, state: ActuatorState);

    /// Last state written
    fn state(&self) -> ActuatorState;

    /// Current level of the enable line
    fn output_level(&self) -> bool {
        self.state().pin_levels().output
    }
}

/// Trait for a single indicator LED
pub trait Indicator {
    /// Light or darken the LED
    fn set_lit(&mut self, lit: bool);

    /// Check if the LED is currently lit
    fn is_lit(&self) -> bool;
}
