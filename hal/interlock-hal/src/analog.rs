//! Analog input abstraction
//!
//! A single ADC peripheral is usually multiplexed over several pins, so the
//! trait is addressed by channel index rather than one object per pin.

/// ADC read failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// The peripheral reported a conversion error
    Conversion,
    /// No channel is registered at the requested index
    UnknownChannel,
    /// Channel already registered, or no free slot left
    AlreadyRegistered,
}

/// Multi-channel ADC
pub trait AdcReader {
    /// Read the raw conversion result of channel `index`
    fn read(&mut self, index: u8) -> Result<u16, AdcError>;

    /// Largest count the converter can return (4095 for a 12-bit ADC)
    fn full_scale(&self) -> u16;
}
