//! State shared between Embassy tasks
//!
//! The control task and the two button tasks all write [`ACTUATOR`]; each
//! write holds a critical section, so the most recent writer wins.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use interlock_drivers::actuator::GpioActuator;
use interlock_drivers::sensor::AdcSensorReader;
use interlock_drivers::shared::SharedActuator;
use interlock_hal_rp2040::{RpAdc, RpOutput};

/// Motor enable (GPIO2) with red (GPIO16) and green (GPIO17) status LEDs
pub type BoardActuator = GpioActuator<RpOutput<'static>, RpOutput<'static>, RpOutput<'static>>;

/// LDR, thermistor and current-sense inputs on ADC0..ADC2
pub type BoardSensors = AdcSensorReader<RpAdc<'static>>;

/// The single motor actuator
pub static ACTUATOR: SharedActuator<CriticalSectionRawMutex, BoardActuator> =
    SharedActuator::new();
