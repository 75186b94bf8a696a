//! Shared actuator handle
//!
//! The control task and both button tasks write the same actuator. The
//! handle keeps it in a blocking mutex so each write runs to completion
//! inside one critical section; whichever write happens last wins.
//!
//! ```ignore
//! static ACTUATOR: SharedActuator<CriticalSectionRawMutex, MyActuator> = SharedActuator::new();
//!
//! ACTUATOR.install(actuator);
//! ACTUATOR.set_state(ActuatorState::Stopped);
//! ```

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use interlock_core::state::ActuatorState;
use interlock_core::traits::ActuatorDriver;

pub struct SharedActuator<M: RawMutex, A> {
    inner: Mutex<M, RefCell<Option<A>>>,
}

impl<M: RawMutex, A> Default for SharedActuator<M, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, A> SharedActuator<M, A> {
    /// Create an empty handle, usable in a `static`
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Hand the actuator over; replaces any previous one
    pub fn install(&self, actuator: A) {
        self.inner.lock(|cell| {
            cell.replace(Some(actuator));
        });
    }

    pub fn is_installed(&self) -> bool {
        self.inner.lock(|cell| cell.borrow().is_some())
    }

    /// Run `f` on the actuator inside the lock
    ///
    /// Returns `None` when nothing is installed yet.
    pub fn with<U>(&self, f: impl FnOnce(&mut A) -> U) -> Option<U> {
        self.inner
            .lock(|cell| cell.borrow_mut().as_mut().map(f))
    }
}

impl<M: RawMutex, A: ActuatorDriver> SharedActuator<M, A> {
    /// Write a state; ignored until an actuator is installed
    pub fn set_state(&self, state: ActuatorState) -> bool {
        self.with(|actuator| actuator.set_state(state)).is_some()
    }

    pub fn state(&self) -> ActuatorState {
        self.with(|actuator| actuator.state()).unwrap_or_default()
    }

    pub fn output_level(&self) -> bool {
        self.with(|actuator| actuator.output_level()).unwrap_or(false)
    }
}

/// Lets a `&SharedActuator` stand in wherever an [`ActuatorDriver`] is taken
impl<M: RawMutex, A: ActuatorDriver> ActuatorDriver for &SharedActuator<M, A> {
    fn set_state(&mut self, state: ActuatorState) {
        SharedActuator::set_state(*self, state);
    }

    fn state(&self) -> ActuatorState {
        SharedActuator::state(*self)
    }

    fn output_level(&self) -> bool {
        SharedActuator::output_level(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use interlock_core::buttons::{handle_button, ButtonEvent};
    use interlock_core::config::InterlockConfig;
    use interlock_core::controller::Controller;
    use interlock_core::traits::{Channel, Indicator, RawSample, SensorError, SensorReader};

    use crate::actuator::led::mock::MockPin;
    use crate::actuator::GpioActuator;

    type TestActuator = GpioActuator<MockPin, MockPin, MockPin>;

    fn shared() -> SharedActuator<NoopRawMutex, TestActuator> {
        let shared = SharedActuator::new();
        shared.install(GpioActuator::new(
            MockPin::new(),
            MockPin::new(),
            MockPin::new(),
        ));
        shared
    }

    /// Bright light: the light check decides Stopped
    struct BrightSensors;

    impl SensorReader for BrightSensors {
        fn read(&mut self, channel: Channel) -> Result<RawSample, SensorError> {
            Ok(match channel {
                Channel::Light => RawSample::new(0.9),
                Channel::Temperature => RawSample::new(0.5),
                Channel::Torque => RawSample::new(0.05),
            })
        }
    }

    #[test]
    fn test_writes_ignored_until_installed() {
        let shared: SharedActuator<NoopRawMutex, TestActuator> = SharedActuator::new();

        assert!(!shared.is_installed());
        assert!(!shared.set_state(ActuatorState::Running));
        assert_eq!(shared.state(), ActuatorState::Undefined);
        assert!(!shared.output_level());
    }

    #[test]
    fn test_set_state_drives_pins() {
        let shared = shared();

        assert!(shared.set_state(ActuatorState::Running));
        assert!(shared.output_level());
        let green_lit = shared.with(|a| a.green().is_lit());
        assert_eq!(green_lit, Some(true));
    }

    #[test]
    fn test_button_after_cycle_wins() {
        let shared = shared();
        let controller = Controller::new(InterlockConfig::default());
        let mut handle = &shared;

        let report = controller.run_cycle(&mut BrightSensors, &mut handle);
        assert_eq!(report.state, ActuatorState::Stopped);

        handle_button(ButtonEvent::StartPressed, &mut handle);
        assert_eq!(shared.state(), ActuatorState::Running);
        assert!(shared.output_level());
    }

    #[test]
    fn test_cycle_after_button_wins() {
        let shared = shared();
        let controller = Controller::new(InterlockConfig::default());
        let mut handle = &shared;

        handle_button(ButtonEvent::StartPressed, &mut handle);
        let report = controller.run_cycle(&mut BrightSensors, &mut handle);

        assert_eq!(report.state, ActuatorState::Stopped);
        assert!(!report.output);
    }

    #[test]
    fn test_stop_then_start() {
        let shared = shared();
        let mut handle = &shared;

        handle_button(ButtonEvent::StopPressed, &mut handle);
        handle_button(ButtonEvent::StartPressed, &mut handle);

        assert_eq!(shared.state(), ActuatorState::Running);
    }
}
