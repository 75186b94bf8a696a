//! GPIO wrappers
//!
//! `embassy-rp` pins are foreign types, so they are wrapped before the
//! `interlock-hal` traits can be implemented for them. Button inputs are
//! used as plain `embassy_rp::gpio::Input` since only edge waiting is needed.

use embassy_rp::gpio::Output;

/// Push-pull output implementing [`interlock_hal::OutputPin`]
pub struct RpOutput<'d>(Output<'d>);

impl<'d> RpOutput<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self(pin)
    }
}

impl interlock_hal::OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn toggle(&mut self) {
        self.0.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
