//! Sensor channel and reader trait

/// Analog sensor channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Light-dependent resistor
    Light,
    /// NTC thermistor
    Temperature,
    /// Motor current-sense resistor
    Torque,
}

impl Channel {
    /// All channels in evaluation order
    pub const ALL: [Channel; 3] = [Channel::Light, Channel::Temperature, Channel::Torque];
}

/// Errors that can occur while sampling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// ADC conversion failed
    ConversionError,
    /// No input is wired to the requested channel
    InvalidChannel,
}

/// Normalized analog reading, `Vsample / Vsupply`
///
/// Nominally in [0, 1]. Values are stored as read; range checks happen in
/// the unit converters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample(f32);

impl RawSample {
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Normalize an ADC count against the converter's full-scale count
    pub fn from_counts(counts: u16, full_scale: u16) -> Self {
        if full_scale == 0 {
            return Self(f32::NAN);
        }
        Self(counts as f32 / full_scale as f32)
    }

    pub const fn value(self) -> f32 {
        self.0
    }

    /// True when the sample lies in [0, 1]
    pub fn is_in_range(self) -> bool {
        (0.0..=1.0).contains(&self.0)
    }
}

/// Trait for the analog front-end
///
/// Takes `&mut self` because ADC reads typically require mutable access.
pub trait SensorReader {
    /// Sample one channel
    fn read(&mut self, channel: Channel) -> Result<RawSample, SensorError>;
}
