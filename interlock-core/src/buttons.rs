//! Push-button overrides
//!
//! A button edge forces the actuator into an explicit state. The override
//! holds until the next write, whether that comes from the control cycle or
//! from the other button.

use crate::state::ActuatorState;
use crate::traits::ActuatorDriver;

/// Rising edge on one of the override buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    StartPressed,
    StopPressed,
}

impl ButtonEvent {
    /// State the actuator is forced into
    pub const fn target_state(self) -> ActuatorState {
        match self {
            ButtonEvent::StartPressed => ActuatorState::Running,
            ButtonEvent::StopPressed => ActuatorState::Stopped,
        }
    }

    /// Operator-facing console line
    pub const fn message(self) -> &'static str {
        match self {
            ButtonEvent::StartPressed => "Start!",
            ButtonEvent::StopPressed => "Stop!",
        }
    }
}

/// Apply a button override to the actuator
pub fn handle_button<A: ActuatorDriver>(event: ButtonEvent, actuator: &mut A) -> ActuatorState {
    let state = event.target_state();
    actuator.set_state(state);
    state
}
