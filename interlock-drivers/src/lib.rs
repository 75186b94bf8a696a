//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in interlock-core:
//!
//! - ADC-backed sensor reader
//! - GPIO actuator (enable line plus active-low status LEDs)
//! - Active-low indicator LED
//! - Shared actuator handle for the control loop and button tasks

#![no_std]
#![deny(unsafe_code)]

pub mod actuator;
pub mod sensor;
pub mod shared;
