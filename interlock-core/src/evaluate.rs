//! Threshold evaluation
//!
//! Every channel trips on `quantity >= limit`. What a trip means depends on
//! the channel:
//!
//! | Channel     | at/above limit | below limit |
//! |-------------|----------------|-------------|
//! | Light       | start          | stop        |
//! | Temperature | stop           | no action   |
//! | Torque      | stop           | no action   |
//!
//! The light channel compares LDR resistance, so it starts the motor once the
//! resistance reaches its limit and stops it otherwise.

use crate::config::Thresholds;
use crate::convert::ReadingFault;
use crate::state::ActuatorState;
use crate::traits::Channel;

/// Inclusive trip test
pub fn evaluate(quantity: f32, limit: f32) -> bool {
    quantity >= limit
}

/// Outcome of evaluating one channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Verdict {
    pub channel: Channel,
    /// Limit reached (false when the conversion failed)
    pub tripped: bool,
    /// State to write, if any
    pub action: Option<ActuatorState>,
    /// Read or conversion fault that forced a stop
    pub fault: Option<ReadingFault>,
}

impl Verdict {
    /// Console line announcing this verdict, if it is worth announcing
    pub fn message(&self) -> Option<&'static str> {
        if self.fault.is_some() {
            return Some(match self.channel {
                Channel::Light => "LDR fault, Stop!",
                Channel::Temperature => "Thermistor fault, Stop!",
                Channel::Torque => "Current sensor fault, Stop!",
            });
        }
        if !self.tripped {
            return None;
        }
        Some(match self.channel {
            Channel::Light => "LDR Start!",
            Channel::Temperature => "Thermistor Stop!",
            Channel::Torque => "Current Stop!",
        })
    }
}

impl Thresholds {
    /// Limit configured for `channel`
    pub fn limit(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Light => self.light_resistance_ohms,
            Channel::Temperature => self.temperature_c,
            Channel::Torque => self.motor_current_a,
        }
    }
}

/// Decide what a converted quantity means for the actuator
pub fn decide(channel: Channel, quantity: f32, limit: f32) -> Verdict {
    let tripped = evaluate(quantity, limit);
    let action = match (channel, tripped) {
        (Channel::Light, true) => Some(ActuatorState::Running),
        (Channel::Light, false) => Some(ActuatorState::Stopped),
        (Channel::Temperature | Channel::Torque, true) => Some(ActuatorState::Stopped),
        (Channel::Temperature | Channel::Torque, false) => None,
    };

    Verdict {
        channel,
        tripped,
        action,
        fault: None,
    }
}

/// Decide for a channel reading; a faulted reading stops the motor
pub fn decide_reading(
    channel: Channel,
    reading: Result<f32, ReadingFault>,
    thresholds: &Thresholds,
) -> Verdict {
    match reading {
        Ok(quantity) => decide(channel, quantity, thresholds.limit(channel)),
        Err(fault) => Verdict {
            channel,
            tripped: false,
            action: Some(ActuatorState::Stopped),
            fault: Some(fault),
        },
    }
}
