//! Configuration type definitions
//!
//! The firmware bakes one [`InterlockConfig`] in at build time. `Default`
//! reproduces the stock bench setup.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Microcontroller supply voltage (V)
pub const SUPPLY_VOLTAGE: f32 = 3.3;

/// Bias resistor in the lower leg of the LDR divider (Ω)
pub const LDR_BIAS_OHMS: f32 = 3300.0;

/// Bias resistor in the lower leg of the thermistor divider (Ω)
pub const THERMISTOR_BIAS_OHMS: f32 = 10000.0;

/// Current-sense resistor in series with the motor (Ω)
pub const MOTOR_SERIES_OHMS: f32 = 10.0;

/// LDR resistance at or above which the motor is started (Ω)
pub const LIGHT_RESISTANCE_LIMIT_OHMS: f32 = 25000.0;

/// Temperature at or above which the motor is stopped (°C)
pub const TEMPERATURE_LIMIT_C: f32 = 20.0;

/// Motor current at or above which the motor is stopped (A)
pub const MOTOR_CURRENT_LIMIT_A: f32 = 0.1;

/// Control cycle sleep (ms)
pub const CYCLE_PERIOD_MS: u32 = 1000;

/// Boot blink duration of the blue LED (ms)
pub const HEARTBEAT_MS: u32 = 1000;

/// Sensor front-end circuit constants
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct CircuitConfig {
    /// Supply voltage, also the ADC reference (V)
    pub supply_voltage: f32,
    /// LDR divider bias resistor (Ω)
    pub ldr_bias_ohms: f32,
    /// Thermistor divider bias resistor (Ω)
    pub thermistor_bias_ohms: f32,
    /// Motor current-sense resistor (Ω)
    pub motor_series_ohms: f32,
}

impl Default for CircuitConfig {
    fn default() -> Self {
        Self {
            supply_voltage: SUPPLY_VOLTAGE,
            ldr_bias_ohms: LDR_BIAS_OHMS,
            thermistor_bias_ohms: THERMISTOR_BIAS_OHMS,
            motor_series_ohms: MOTOR_SERIES_OHMS,
        }
    }
}

/// Per-channel trip limits
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Thresholds {
    /// LDR resistance limit (Ω)
    pub light_resistance_ohms: f32,
    /// Thermistor temperature limit (°C)
    pub temperature_c: f32,
    /// Motor current limit (A)
    pub motor_current_a: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            light_resistance_ohms: LIGHT_RESISTANCE_LIMIT_OHMS,
            temperature_c: TEMPERATURE_LIMIT_C,
            motor_current_a: MOTOR_CURRENT_LIMIT_A,
        }
    }
}

/// Which threshold checks run each cycle
///
/// Disabled channels are still sampled and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EvaluatorSet {
    pub light: bool,
    pub temperature: bool,
    pub torque: bool,
}

impl Default for EvaluatorSet {
    fn default() -> Self {
        Self {
            light: true,
            temperature: false,
            torque: false,
        }
    }
}

/// Complete interlock configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct InterlockConfig {
    pub circuit: CircuitConfig,
    pub thresholds: Thresholds,
    pub evaluators: EvaluatorSet,
    /// Sleep between control cycles (ms)
    pub cycle_period_ms: u32,
    /// Boot blink duration (ms)
    pub heartbeat_ms: u32,
}

impl Default for InterlockConfig {
    fn default() -> Self {
        Self {
            circuit: CircuitConfig::default(),
            thresholds: Thresholds::default(),
            evaluators: EvaluatorSet::default(),
            cycle_period_ms: CYCLE_PERIOD_MS,
            heartbeat_ms: HEARTBEAT_MS,
        }
    }
}

/// Configuration validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Supply voltage is zero, negative or not finite
    NonPositiveSupply,
    /// A bias or series resistor is zero, negative or not finite
    NonPositiveResistor,
    /// A threshold is NaN or infinite
    NonFiniteLimit,
    /// Cycle or heartbeat period is zero
    ZeroPeriod,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            ConfigError::NonPositiveSupply => "supply_voltage must be a positive number",
            ConfigError::NonPositiveResistor => "resistor values must be positive numbers",
            ConfigError::NonFiniteLimit => "threshold limits must be finite",
            ConfigError::ZeroPeriod => "cycle_period_ms and heartbeat_ms must be non-zero",
        };
        f.write_str(msg)
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

impl InterlockConfig {
    /// Check the configuration for values the converters cannot use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_positive(self.circuit.supply_voltage) {
            return Err(ConfigError::NonPositiveSupply);
        }

        let resistors = [
            self.circuit.ldr_bias_ohms,
            self.circuit.thermistor_bias_ohms,
            self.circuit.motor_series_ohms,
        ];
        if !resistors.iter().all(|r| is_positive(*r)) {
            return Err(ConfigError::NonPositiveResistor);
        }

        let limits = [
            self.thresholds.light_resistance_ohms,
            self.thresholds.temperature_c,
            self.thresholds.motor_current_a,
        ];
        if !limits.iter().all(|l| l.is_finite()) {
            return Err(ConfigError::NonFiniteLimit);
        }

        if self.cycle_period_ms == 0 || self.heartbeat_ms == 0 {
            return Err(ConfigError::ZeroPeriod);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_bench_setup() {
        let config = InterlockConfig::default();
        assert_eq!(config.circuit.supply_voltage, 3.3);
        assert_eq!(config.circuit.ldr_bias_ohms, 3300.0);
        assert_eq!(config.circuit.thermistor_bias_ohms, 10000.0);
        assert_eq!(config.circuit.motor_series_ohms, 10.0);
        assert_eq!(config.thresholds.light_resistance_ohms, 25000.0);
        assert_eq!(config.thresholds.temperature_c, 20.0);
        assert_eq!(config.thresholds.motor_current_a, 0.1);
        assert_eq!(config.cycle_period_ms, 1000);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_only_light_enabled_by_default() {
        let evaluators = EvaluatorSet::default();
        assert!(evaluators.light);
        assert!(!evaluators.temperature);
        assert!(!evaluators.torque);
    }

    #[test]
    fn test_rejects_bad_supply() {
        let mut config = InterlockConfig::default();
        config.circuit.supply_voltage = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveSupply));

        config.circuit.supply_voltage = f32::NAN;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveSupply));
    }

    #[test]
    fn test_rejects_bad_resistor() {
        let mut config = InterlockConfig::default();
        config.circuit.motor_series_ohms = -10.0;
        assert_eq!(config.validate(), Err(ConfigError::NonPositiveResistor));
    }

    #[test]
    fn test_rejects_infinite_limit() {
        let mut config = InterlockConfig::default();
        config.thresholds.temperature_c = f32::INFINITY;
        assert_eq!(config.validate(), Err(ConfigError::NonFiniteLimit));
    }

    #[test]
    fn test_rejects_zero_period() {
        let mut config = InterlockConfig::default();
        config.cycle_period_ms = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroPeriod));
    }

    #[test]
    fn test_negative_temperature_limit_is_allowed() {
        let mut config = InterlockConfig::default();
        config.thresholds.temperature_c = -5.0;
        assert_eq!(config.validate(), Ok(()));
    }
}
