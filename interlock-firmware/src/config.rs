//! Compiled-in configuration
//!
//! build.rs parses and validates interlock.toml, then emits
//! `INTERLOCK_CONFIG` into `$OUT_DIR/interlock_config.rs`.

use interlock_core::config::{CircuitConfig, EvaluatorSet, InterlockConfig, Thresholds};

include!(concat!(env!("OUT_DIR"), "/interlock_config.rs"));
