//! Actuator state and its pin encoding
//!
//! The enable output and the red/green status LEDs are always derived from
//! one [`ActuatorState`], so they can never disagree.

/// Logical state of the motor actuator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActuatorState {
    /// Nothing has been written since power-on
    #[default]
    Undefined,
    /// Motor enabled
    Running,
    /// Motor disabled
    Stopped,
}

/// Pin levels for one actuator state
///
/// LEDs are active-low: `true` (logic 1) means the LED is dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinLevels {
    /// Actuator enable line (active-high)
    pub output: bool,
    /// Red LED pin level
    pub red: bool,
    /// Green LED pin level
    pub green: bool,
}

/// Pin level that turns an active-low LED dark
pub const LED_OFF: bool = true;

/// Pin level that lights an active-low LED
pub const LED_ON: bool = false;

impl ActuatorState {
    /// Pin levels encoding this state
    ///
    /// Running lights green only, Stopped lights red only, Undefined
    /// leaves both dark with the output off.
    pub const fn pin_levels(self) -> PinLevels {
        match self {
            ActuatorState::Undefined => PinLevels {
                output: false,
                red: LED_OFF,
                green: LED_OFF,
            },
            ActuatorState::Running => PinLevels {
                output: true,
                red: LED_OFF,
                green: LED_ON,
            },
            ActuatorState::Stopped => PinLevels {
                output: false,
                red: LED_ON,
                green: LED_OFF,
            },
        }
    }

    pub fn is_running(self) -> bool {
        self == ActuatorState::Running
    }
}
