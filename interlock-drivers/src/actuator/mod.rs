//! Actuator output implementations

pub mod gpio;
pub mod led;

pub use gpio::GpioActuator;
pub use led::ActiveLowLed;
