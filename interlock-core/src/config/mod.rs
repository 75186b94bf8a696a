//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware generates one
//! instance at build time from `interlock.toml`.

pub mod codegen;
pub mod types;

pub use codegen::{ErrorBox, RustConst};
pub use types::*;
