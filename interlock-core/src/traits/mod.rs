//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic
//! and hardware-specific implementations.

pub mod actuator;
pub mod sensor;

pub use actuator::{ActuatorDriver, Indicator};
pub use sensor::{Channel, RawSample, SensorError, SensorReader};
