//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor

use embassy_rp::adc::{Adc, Blocking, Channel};
use heapless::Vec;
use interlock_hal::{AdcError, AdcReader};

/// Full-scale count of the RP2040 ADC
pub const ADC_FULL_SCALE: u16 = 4095;

/// Maximum number of external channels
pub const MAX_CHANNELS: usize = 4;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
}

/// Blocking ADC with a set of registered pin channels
///
/// Channels are addressed by registration order, which is the index
/// [`AdcReader::read`] expects.
pub struct RpAdc<'d> {
    adc: Adc<'d, Blocking>,
    channels: Vec<(AdcChannel, Channel<'d>), MAX_CHANNELS>,
}

impl<'d> RpAdc<'d> {
    pub fn new(adc: Adc<'d, Blocking>) -> Self {
        Self {
            adc,
            channels: Vec::new(),
        }
    }

    /// Register a pin channel and return its read index
    pub fn register(&mut self, id: AdcChannel, channel: Channel<'d>) -> Result<u8, AdcError> {
        if self.channels.iter().any(|(existing, _)| *existing == id) {
            return Err(AdcError::AlreadyRegistered);
        }
        let index = self.channels.len() as u8;
        self.channels
            .push((id, channel))
            .map_err(|_| AdcError::AlreadyRegistered)?;
        Ok(index)
    }
}

impl AdcReader for RpAdc<'_> {
    fn read(&mut self, index: u8) -> Result<u16, AdcError> {
        let (_, channel) = self
            .channels
            .get_mut(index as usize)
            .ok_or(AdcError::UnknownChannel)?;
        self.adc
            .blocking_read(channel)
            .map_err(|_| AdcError::Conversion)
    }

    fn full_scale(&self) -> u16 {
        ADC_FULL_SCALE
    }
}
