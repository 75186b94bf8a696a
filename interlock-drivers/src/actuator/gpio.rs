//! GPIO actuator output
//!
//! Drives the motor enable line (active-high) and the red/green status LEDs
//! (active-low) from one [`ActuatorState`].

use interlock_core::state::{ActuatorState, LED_ON};
use interlock_core::traits::{ActuatorDriver, Indicator};
use interlock_hal::OutputPin;

use super::led::ActiveLowLed;

/// Motor enable line plus status LEDs
pub struct GpioActuator<E, R, G> {
    enable: E,
    red: ActiveLowLed<R>,
    green: ActiveLowLed<G>,
    state: ActuatorState,
}

impl<E: OutputPin, R: OutputPin, G: OutputPin> GpioActuator<E, R, G> {
    /// Create the actuator in the boot state: output off, both LEDs dark
    pub fn new(enable: E, red: R, green: G) -> Self {
        let mut actuator = Self {
            enable,
            red: ActiveLowLed::new(red),
            green: ActiveLowLed::new(green),
            state: ActuatorState::Undefined,
        };
        actuator.drive(ActuatorState::Undefined);
        actuator
    }

    /// Pins change one at a time, so both LEDs go dark before the target
    /// one is lit; no intermediate write shows red and green together.
    fn drive(&mut self, state: ActuatorState) {
        let levels = state.pin_levels();
        self.red.set_lit(false);
        self.green.set_lit(false);
        self.enable.set_state(levels.output);
        if levels.red == LED_ON {
            self.red.set_lit(true);
        }
        if levels.green == LED_ON {
            self.green.set_lit(true);
        }
    }

    pub fn red(&self) -> &ActiveLowLed<R> {
        &self.red
    }

    pub fn green(&self) -> &ActiveLowLed<G> {
        &self.green
    }
}

impl<E: OutputPin, R: OutputPin, G: OutputPin> ActuatorDriver for GpioActuator<E, R, G> {
    fn set_state(&mut self, state: ActuatorState) {
        self.drive(state);
        self.state = state;
    }

    fn state(&self) -> ActuatorState {
        self.state
    }

    fn output_level(&self) -> bool {
        self.enable.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuator::led::mock::MockPin;
    use core::cell::Cell;

    fn actuator() -> GpioActuator<MockPin, MockPin, MockPin> {
        GpioActuator::new(MockPin::new(), MockPin::new(), MockPin::new())
    }

    #[test]
    fn test_boot_state() {
        let actuator = actuator();

        assert_eq!(actuator.state(), ActuatorState::Undefined);
        assert!(!actuator.output_level());
        assert!(!actuator.red().is_lit());
        assert!(!actuator.green().is_lit());
        // Active-low: dark LEDs sit at logic 1
        assert!(actuator.red().pin().is_set_high());
        assert!(actuator.green().pin().is_set_high());
    }

    #[test]
    fn test_running() {
        let mut actuator = actuator();
        actuator.set_state(ActuatorState::Running);

        assert!(actuator.output_level());
        assert!(actuator.green().is_lit());
        assert!(!actuator.red().is_lit());
    }

    #[test]
    fn test_stopped() {
        let mut actuator = actuator();
        actuator.set_state(ActuatorState::Running);
        actuator.set_state(ActuatorState::Stopped);

        assert_eq!(actuator.state(), ActuatorState::Stopped);
        assert!(!actuator.output_level());
        assert!(actuator.red().is_lit());
        assert!(!actuator.green().is_lit());
    }

    #[test]
    fn test_leds_never_both_lit() {
        let mut actuator = actuator();
        for state in [
            ActuatorState::Running,
            ActuatorState::Stopped,
            ActuatorState::Running,
            ActuatorState::Running,
            ActuatorState::Stopped,
        ] {
            actuator.set_state(state);
            assert!(!(actuator.red().is_lit() && actuator.green().is_lit()));
            assert_eq!(actuator.green().is_lit(), actuator.output_level());
        }
    }

    /// Pin sharing one level table with its siblings
    ///
    /// Slot 0 is the enable line, 1 red, 2 green. Every write checks
    /// whether both active-low LEDs are lit at that instant.
    struct WatchedPin<'a> {
        slot: usize,
        levels: &'a Cell<[bool; 3]>,
        overlap: &'a Cell<bool>,
        writes: &'a Cell<u32>,
    }

    impl WatchedPin<'_> {
        fn write(&mut self, high: bool) {
            let mut levels = self.levels.get();
            levels[self.slot] = high;
            self.levels.set(levels);
            self.writes.set(self.writes.get() + 1);
            if !levels[1] && !levels[2] {
                self.overlap.set(true);
            }
        }
    }

    impl OutputPin for WatchedPin<'_> {
        fn set_high(&mut self) {
            self.write(true);
        }

        fn set_low(&mut self) {
            self.write(false);
        }

        fn is_set_high(&self) -> bool {
            self.levels.get()[self.slot]
        }
    }

    fn watched<'a>(
        slot: usize,
        levels: &'a Cell<[bool; 3]>,
        overlap: &'a Cell<bool>,
        writes: &'a Cell<u32>,
    ) -> WatchedPin<'a> {
        WatchedPin {
            slot,
            levels,
            overlap,
            writes,
        }
    }

    #[test]
    fn test_no_write_lights_both_leds() {
        // LEDs start dark (high), enable low
        let levels = Cell::new([false, true, true]);
        let overlap = Cell::new(false);
        let writes = Cell::new(0);
        let mut actuator = GpioActuator::new(
            watched(0, &levels, &overlap, &writes),
            watched(1, &levels, &overlap, &writes),
            watched(2, &levels, &overlap, &writes),
        );

        for state in [
            ActuatorState::Running,
            ActuatorState::Stopped,
            ActuatorState::Running,
            ActuatorState::Undefined,
            ActuatorState::Stopped,
        ] {
            let before = writes.get();
            actuator.set_state(state);
            assert!(writes.get() > before);
            assert!(!overlap.get(), "both LEDs lit while switching to {:?}", state);
        }

        // Final levels: Stopped = enable low, red lit, green dark
        assert_eq!(levels.get(), [false, false, true]);
    }

    #[test]
    fn test_actuator_trait() {
        fn start<A: ActuatorDriver>(a: &mut A) {
            a.set_state(ActuatorState::Running);
        }

        let mut actuator = actuator();
        start(&mut actuator);
        assert!(actuator.state().is_running());
    }
}
