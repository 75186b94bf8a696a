//! ADC-backed sensor reader
//!
//! Maps the three interlock channels onto indices of a multi-channel ADC
//! and normalizes counts to [`RawSample`]s.

use interlock_core::traits::{Channel, RawSample, SensorError, SensorReader};
use interlock_hal::{AdcError, AdcReader};

/// ADC index of each sensor channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap {
    pub light: u8,
    pub temperature: u8,
    pub torque: u8,
}

impl ChannelMap {
    pub fn index(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Light => self.light,
            Channel::Temperature => self.temperature,
            Channel::Torque => self.torque,
        }
    }
}

/// Sensor reader over any [`AdcReader`]
pub struct AdcSensorReader<A> {
    adc: A,
    map: ChannelMap,
}

impl<A: AdcReader> AdcSensorReader<A> {
    pub fn new(adc: A, map: ChannelMap) -> Self {
        Self { adc, map }
    }

    /// Get access to the underlying ADC
    pub fn adc(&self) -> &A {
        &self.adc
    }
}

impl<A: AdcReader> SensorReader for AdcSensorReader<A> {
    fn read(&mut self, channel: Channel) -> Result<RawSample, SensorError> {
        let counts = self
            .adc
            .read(self.map.index(channel))
            .map_err(|e| match e {
                AdcError::Conversion => SensorError::ConversionError,
                AdcError::UnknownChannel | AdcError::AlreadyRegistered => {
                    SensorError::InvalidChannel
                }
            })?;

        Ok(RawSample::from_counts(counts, self.adc.full_scale()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ADC returning fixed counts per index
    struct ScriptedAdc {
        counts: [Result<u16, AdcError>; 3],
    }

    impl AdcReader for ScriptedAdc {
        fn read(&mut self, index: u8) -> Result<u16, AdcError> {
            self.counts
                .get(index as usize)
                .copied()
                .unwrap_or(Err(AdcError::UnknownChannel))
        }

        fn full_scale(&self) -> u16 {
            4095
        }
    }

    fn map() -> ChannelMap {
        ChannelMap {
            light: 0,
            temperature: 1,
            torque: 2,
        }
    }

    #[test]
    fn test_counts_normalized() {
        let adc = ScriptedAdc {
            counts: [Ok(4095), Ok(0), Ok(2048)],
        };
        let mut reader = AdcSensorReader::new(adc, map());

        assert_eq!(reader.read(Channel::Light).unwrap().value(), 1.0);
        assert_eq!(reader.read(Channel::Temperature).unwrap().value(), 0.0);
        let torque = reader.read(Channel::Torque).unwrap().value();
        assert!((torque - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_channel_mapping() {
        let adc = ScriptedAdc {
            counts: [Ok(100), Ok(200), Ok(300)],
        };
        let swapped = ChannelMap {
            light: 2,
            temperature: 0,
            torque: 1,
        };
        let mut reader = AdcSensorReader::new(adc, swapped);

        let light = reader.read(Channel::Light).unwrap();
        assert_eq!(light, RawSample::from_counts(300, 4095));
    }

    #[test]
    fn test_conversion_error() {
        let adc = ScriptedAdc {
            counts: [Err(AdcError::Conversion), Ok(0), Ok(0)],
        };
        let mut reader = AdcSensorReader::new(adc, map());

        assert_eq!(
            reader.read(Channel::Light),
            Err(SensorError::ConversionError)
        );
    }

    #[test]
    fn test_unmapped_index() {
        let adc = ScriptedAdc {
            counts: [Ok(0), Ok(0), Ok(0)],
        };
        let bad = ChannelMap {
            light: 7,
            temperature: 1,
            torque: 2,
        };
        let mut reader = AdcSensorReader::new(adc, bad);

        assert_eq!(reader.read(Channel::Light), Err(SensorError::InvalidChannel));
        assert_eq!(reader.adc().full_scale(), 4095);
    }
}
