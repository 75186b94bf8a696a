//! Interlock Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the interlock drivers are written
//! against. Chip-specific crates (currently RP2040) implement them, so the
//! driver and core crates stay testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (interlock-firmware)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  interlock-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ interlock-hal-    │
//!           │     rp2040        │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (actuator enable, LEDs)
//! - [`analog::AdcReader`] - Multi-channel analog sampling

#![no_std]
#![deny(unsafe_code)]

pub mod analog;
pub mod gpio;

pub use analog::{AdcError, AdcReader};
pub use gpio::OutputPin;
