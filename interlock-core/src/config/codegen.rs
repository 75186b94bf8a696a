//! Build-time rendering
//!
//! The firmware build script writes [`RustConst`] into `$OUT_DIR` and
//! `include!`s it, so a config parsed from TOML on the host becomes a
//! `const` on the target. Render only validated configs: NaN or infinite
//! floats have no literal. [`ErrorBox`] frames build failure messages.

use core::fmt::{self, Write as _};

use super::types::InterlockConfig;

/// Name of the generated constant
pub const CONST_NAME: &str = "INTERLOCK_CONFIG";

/// `Display` adapter emitting `pub const INTERLOCK_CONFIG: InterlockConfig = ...;`
///
/// The emitted code names `InterlockConfig`, `CircuitConfig`, `Thresholds`
/// and `EvaluatorSet` unqualified; the including module imports them.
pub struct RustConst<'a>(&'a InterlockConfig);

impl InterlockConfig {
    pub fn rust_const(&self) -> RustConst<'_> {
        RustConst(self)
    }
}

/// `{:?}` always keeps a decimal point or exponent, so the suffix parses
struct F32Literal(f32);

impl fmt::Display for F32Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}_f32", self.0)
    }
}

impl fmt::Display for RustConst<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.0.circuit;
        let t = &self.0.thresholds;
        let e = &self.0.evaluators;

        writeln!(f, "pub const {}: InterlockConfig = InterlockConfig {{", CONST_NAME)?;
        writeln!(f, "    circuit: CircuitConfig {{")?;
        writeln!(f, "        supply_voltage: {},", F32Literal(c.supply_voltage))?;
        writeln!(f, "        ldr_bias_ohms: {},", F32Literal(c.ldr_bias_ohms))?;
        writeln!(f, "        thermistor_bias_ohms: {},", F32Literal(c.thermistor_bias_ohms))?;
        writeln!(f, "        motor_series_ohms: {},", F32Literal(c.motor_series_ohms))?;
        writeln!(f, "    }},")?;
        writeln!(f, "    thresholds: Thresholds {{")?;
        writeln!(f, "        light_resistance_ohms: {},", F32Literal(t.light_resistance_ohms))?;
        writeln!(f, "        temperature_c: {},", F32Literal(t.temperature_c))?;
        writeln!(f, "        motor_current_a: {},", F32Literal(t.motor_current_a))?;
        writeln!(f, "    }},")?;
        writeln!(f, "    evaluators: EvaluatorSet {{")?;
        writeln!(f, "        light: {},", e.light)?;
        writeln!(f, "        temperature: {},", e.temperature)?;
        writeln!(f, "        torque: {},", e.torque)?;
        writeln!(f, "    }},")?;
        writeln!(f, "    cycle_period_ms: {},", self.0.cycle_period_ms)?;
        writeln!(f, "    heartbeat_ms: {},", self.0.heartbeat_ms)?;
        writeln!(f, "}};")
    }
}

/// Text columns inside an [`ErrorBox`] frame
pub const BOX_WIDTH: usize = 64;

/// Message lines framed as `║  <line padded to BOX_WIDTH> ║`
///
/// Longer lines are cut on a char boundary and end in `...`.
pub struct ErrorBox<'a>(pub &'a str);

impl fmt::Display for ErrorBox<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.lines().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            f.write_str("║  ")?;

            let shown = if line.chars().count() > BOX_WIDTH {
                let end = line
                    .char_indices()
                    .nth(BOX_WIDTH - 3)
                    .map_or(line.len(), |(at, _)| at);
                f.write_str(&line[..end])?;
                f.write_str("...")?;
                BOX_WIDTH
            } else {
                f.write_str(line)?;
                line.chars().count()
            };

            for _ in shown..BOX_WIDTH {
                f.write_char(' ')?;
            }
            f.write_str(" ║")?;
        }
        Ok(())
    }
}
