//! Board-agnostic core logic for the motor interlock firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (sensor reader, actuator driver)
//! - Unit conversion from normalized samples to physical quantities
//! - Threshold evaluation per sensor channel
//! - Actuator state and LED encoding
//! - Button override semantics
//! - One control cycle and its telemetry report
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod config;
pub mod controller;
pub mod convert;
pub mod evaluate;
pub mod report;
pub mod state;
pub mod traits;
