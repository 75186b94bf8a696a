//! Sensor implementations

pub mod adc;

pub use adc::{AdcSensorReader, ChannelMap};
