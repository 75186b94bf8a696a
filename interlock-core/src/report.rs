//! Per-cycle telemetry
//!
//! The firmware logs a report line by line through defmt; `Display` renders
//! the same lines for host-side tools and tests.

use core::fmt;

use crate::controller::{Reading, Readings, Verdicts};
use crate::state::ActuatorState;
use crate::traits::Channel;

/// What one control cycle saw and did
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleReport {
    pub readings: Readings,
    pub verdicts: Verdicts,
    /// Actuator state after the cycle's writes
    pub state: ActuatorState,
    /// Enable line level after the cycle's writes
    pub output: bool,
}

impl Channel {
    /// Label used on the console
    pub fn label(self) -> &'static str {
        match self {
            Channel::Light => "LDR Resistance",
            Channel::Temperature => "Current Temperature Value",
            Channel::Torque => "Motor Current",
        }
    }
}

impl CycleReport {
    /// Quantity lines in console order
    pub fn lines(&self) -> [(Channel, Reading); 3] {
        Channel::ALL.map(|channel| (channel, self.readings.get(channel)))
    }

    /// Enable line as the console shows it
    pub fn output_digit(&self) -> u8 {
        self.output as u8
    }
}

impl fmt::Display for CycleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (channel, reading) in self.lines() {
            match reading {
                Ok(value) => writeln!(f, "{}: {} {}", channel.label(), value, channel.unit())?,
                Err(fault) => writeln!(f, "{}: fault ({:?})", channel.label(), fault)?,
            }
        }
        write!(f, "OUTPUT: {}", self.output_digit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{ConversionError, ReadingFault};
    use core::fmt::Write;
    use heapless::String;

    fn report(light: Reading, output: bool) -> CycleReport {
        CycleReport {
            readings: Readings {
                light,
                temperature: Ok(25.0),
                current: Ok(0.5),
            },
            verdicts: Verdicts::new(),
            state: if output {
                ActuatorState::Running
            } else {
                ActuatorState::Stopped
            },
            output,
        }
    }

    #[test]
    fn test_render_lines() {
        let mut out: String<256> = String::new();
        write!(out, "{}", report(Ok(3300.0), true)).unwrap();

        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("LDR Resistance: 3300 ohm"));
        assert_eq!(lines.next(), Some("Current Temperature Value: 25 C"));
        assert_eq!(lines.next(), Some("Motor Current: 0.5 A"));
        assert_eq!(lines.next(), Some("OUTPUT: 1"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_render_fault() {
        let mut out: String<256> = String::new();
        let light = Err(ReadingFault::Conversion(ConversionError::DivisionByZero));
        write!(out, "{}", report(light, false)).unwrap();

        assert!(out.starts_with("LDR Resistance: fault (Conversion(DivisionByZero))"));
        assert!(out.ends_with("OUTPUT: 0"));
    }

    #[test]
    fn test_lines_follow_channel_order() {
        let lines = report(Ok(1.0), false).lines();
        assert_eq!(lines[0].0, Channel::Light);
        assert_eq!(lines[1].0, Channel::Temperature);
        assert_eq!(lines[2].0, Channel::Torque);
    }
}
