//! One control cycle
//!
//! A cycle samples every channel once, runs the enabled threshold checks in
//! channel order, writes each resulting decision to the actuator and returns
//! a report built from the same samples. Later writes win, so a temperature
//! or torque stop overrides a light start within the same cycle.
//!
//! The forever loop and its sleep live in the firmware.

use heapless::Vec;

use crate::config::InterlockConfig;
use crate::convert::{convert, ReadingFault};
use crate::evaluate::{decide_reading, Verdict};
use crate::report::CycleReport;
use crate::traits::{ActuatorDriver, Channel, SensorReader};

/// Converted value of one channel, or why there is none
pub type Reading = Result<f32, ReadingFault>;

/// All three channels from one sampling pass
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readings {
    /// LDR resistance (Ω)
    pub light: Reading,
    /// Thermistor temperature (°C)
    pub temperature: Reading,
    /// Motor current (A)
    pub current: Reading,
}

impl Readings {
    pub fn get(&self, channel: Channel) -> Reading {
        match channel {
            Channel::Light => self.light,
            Channel::Temperature => self.temperature,
            Channel::Torque => self.current,
        }
    }
}

/// Verdicts of the enabled channels, in evaluation order
pub type Verdicts = Vec<Verdict, 3>;

/// Interlock control logic bound to one configuration
#[derive(Debug, Clone)]
pub struct Controller {
    config: InterlockConfig,
}

impl Controller {
    pub const fn new(config: InterlockConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InterlockConfig {
        &self.config
    }

    /// Whether the threshold check of `channel` runs
    pub fn is_enabled(&self, channel: Channel) -> bool {
        let evaluators = &self.config.evaluators;
        match channel {
            Channel::Light => evaluators.light,
            Channel::Temperature => evaluators.temperature,
            Channel::Torque => evaluators.torque,
        }
    }

    /// Sample and convert one channel
    pub fn read_channel<S: SensorReader>(&self, sensors: &mut S, channel: Channel) -> Reading {
        let raw = sensors.read(channel)?;
        let quantity = convert(channel, raw, &self.config.circuit)?;
        Ok(quantity.value)
    }

    /// Sample and convert all channels, enabled or not
    pub fn sample<S: SensorReader>(&self, sensors: &mut S) -> Readings {
        Readings {
            light: self.read_channel(sensors, Channel::Light),
            temperature: self.read_channel(sensors, Channel::Temperature),
            current: self.read_channel(sensors, Channel::Torque),
        }
    }

    /// Run the enabled threshold checks
    pub fn evaluate(&self, readings: &Readings) -> Verdicts {
        let mut verdicts = Verdicts::new();
        for channel in Channel::ALL {
            if !self.is_enabled(channel) {
                continue;
            }
            let verdict = decide_reading(channel, readings.get(channel), &self.config.thresholds);
            // Capacity equals the channel count
            let _ = verdicts.push(verdict);
        }
        verdicts
    }

    /// Write every decision in order
    pub fn apply<A: ActuatorDriver>(&self, verdicts: &Verdicts, actuator: &mut A) {
        for action in verdicts.iter().filter_map(|v| v.action) {
            actuator.set_state(action);
        }
    }

    /// Sample, evaluate, actuate and report
    pub fn run_cycle<S, A>(&self, sensors: &mut S, actuator: &mut A) -> CycleReport
    where
        S: SensorReader,
        A: ActuatorDriver,
    {
        let readings = self.sample(sensors);
        let verdicts = self.evaluate(&readings);
        self.apply(&verdicts, actuator);

        CycleReport {
            readings,
            verdicts,
            state: actuator.state(),
            output: actuator.output_level(),
        }
    }
}
