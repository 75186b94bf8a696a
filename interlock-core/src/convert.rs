//! Unit conversion
//!
//! Maps normalized samples to physical quantities. All functions are pure;
//! for in-range samples they compute exactly the divider and Ohm's-law
//! expressions in `f32`.
//!
//! Divider channels reject a zero sample instead of returning an infinite
//! resistance, and every channel rejects samples outside [0, 1].

use crate::config::CircuitConfig;
use crate::traits::{Channel, RawSample, SensorError};

/// Thermistor resistance at the 25 °C reference point (Ω)
pub const THERMISTOR_R25_OHMS: f32 = 10000.0;

/// Linearized thermistor slope (Ω per °C)
pub const THERMISTOR_SLOPE_OHMS_PER_C: f32 = -320.0;

/// Reference temperature of the linear approximation (°C)
pub const THERMISTOR_REFERENCE_C: f32 = 25.0;

/// Errors that can occur at the converter boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionError {
    /// Sample of zero on a voltage-divider channel
    DivisionByZero,
    /// Sample is NaN or outside [0, 1]
    SensorOutOfRange,
}

/// Why a channel has no usable quantity this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadingFault {
    /// The ADC read itself failed
    Sensor(SensorError),
    /// The sample could not be converted
    Conversion(ConversionError),
}

impl From<SensorError> for ReadingFault {
    fn from(err: SensorError) -> Self {
        ReadingFault::Sensor(err)
    }
}

impl From<ConversionError> for ReadingFault {
    fn from(err: ConversionError) -> Self {
        ReadingFault::Conversion(err)
    }
}

/// A physical quantity in the unit of its channel
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Quantity {
    pub channel: Channel,
    pub value: f32,
}

impl Channel {
    /// Unit symbol of this channel's physical quantity
    pub fn unit(self) -> &'static str {
        match self {
            Channel::Light => "ohm",
            Channel::Temperature => "C",
            Channel::Torque => "A",
        }
    }
}

fn checked(raw: RawSample) -> Result<f32, ConversionError> {
    if raw.is_in_range() {
        Ok(raw.value())
    } else {
        Err(ConversionError::SensorOutOfRange)
    }
}

/// Voltage on the ADC pin for a sample
pub fn sample_voltage(raw: RawSample, supply_voltage: f32) -> f32 {
    supply_voltage * raw.value()
}

/// Invert a divider where the unknown resistor sits opposite the bias
///
/// `R = R_bias * (Vsupply - Vsample) / Vsample`
pub fn divider_resistance(
    raw: RawSample,
    supply_voltage: f32,
    bias_ohms: f32,
) -> Result<f32, ConversionError> {
    let value = checked(raw)?;
    if value == 0.0 {
        return Err(ConversionError::DivisionByZero);
    }

    let volts = sample_voltage(raw, supply_voltage);
    Ok(bias_ohms * ((supply_voltage - volts) / volts))
}

/// LDR resistance (Ω)
///
/// Resistance falls as the sample rises.
pub fn light_resistance(raw: RawSample, circuit: &CircuitConfig) -> Result<f32, ConversionError> {
    divider_resistance(raw, circuit.supply_voltage, circuit.ldr_bias_ohms)
}

/// Thermistor temperature (°C), linear approximation around 25 °C
pub fn thermistor_temperature(
    raw: RawSample,
    circuit: &CircuitConfig,
) -> Result<f32, ConversionError> {
    let resistance = divider_resistance(raw, circuit.supply_voltage, circuit.thermistor_bias_ohms)?;
    Ok(((resistance - THERMISTOR_R25_OHMS) / THERMISTOR_SLOPE_OHMS_PER_C) + THERMISTOR_REFERENCE_C)
}

/// Motor current (A) through the series sense resistor
pub fn motor_current(raw: RawSample, circuit: &CircuitConfig) -> Result<f32, ConversionError> {
    checked(raw)?;
    Ok(sample_voltage(raw, circuit.supply_voltage) / circuit.motor_series_ohms)
}

/// Convert a sample using the formula of `channel`
pub fn convert(
    channel: Channel,
    raw: RawSample,
    circuit: &CircuitConfig,
) -> Result<Quantity, ConversionError> {
    let value = match channel {
        Channel::Light => light_resistance(raw, circuit)?,
        Channel::Temperature => thermistor_temperature(raw, circuit)?,
        Channel::Torque => motor_current(raw, circuit)?,
    };
    Ok(Quantity { channel, value })
}
