//! Active-low indicator LED
//!
//! The LED is wired between the supply and the pin, so driving the pin low
//! lights it.

use interlock_core::traits::Indicator;
use interlock_hal::OutputPin;

pub struct ActiveLowLed<P> {
    pin: P,
}

impl<P: OutputPin> ActiveLowLed<P> {
    /// Wrap a pin and switch the LED off
    pub fn new(pin: P) -> Self {
        let mut led = Self { pin };
        led.set_lit(false);
        led
    }

    /// Flip the LED
    pub fn toggle(&mut self) {
        self.pin.toggle();
    }

    /// Get access to the underlying pin
    pub fn pin(&self) -> &P {
        &self.pin
    }
}

impl<P: OutputPin> Indicator for ActiveLowLed<P> {
    fn set_lit(&mut self, lit: bool) {
        // Lit = pin low
        self.pin.set_state(!lit);
    }

    fn is_lit(&self) -> bool {
        self.pin.is_set_low()
    }
}
