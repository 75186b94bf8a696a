//! RP2040-specific HAL for the motor interlock firmware
//!
//! Implements the shared `interlock-hal` traits on top of `embassy-rp`:
//!
//! - GPIO output wrapper
//! - ADC channel mapping and a blocking multi-channel reader

#![no_std]

pub mod adc;
pub mod gpio;

pub use adc::{AdcChannel, RpAdc};
pub use gpio::RpOutput;
