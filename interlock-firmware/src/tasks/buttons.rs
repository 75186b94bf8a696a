//! Start/stop push-button tasks
//!
//! One task instance per button. A rising edge on the (pulled-down) input
//! writes the button's target state straight to the actuator.

use defmt::*;
use embassy_rp::gpio::Input;

use interlock_core::buttons::{handle_button, ButtonEvent};

use crate::channels::ACTUATOR;

#[embassy_executor::task(pool_size = 2)]
pub async fn button_task(mut button: Input<'static>, event: ButtonEvent) {
    info!("Button task started: {:?}", event);

    let mut actuator = &ACTUATOR;

    loop {
        button.wait_for_rising_edge().await;

        info!("{}", event.message());
        let state = handle_button(event, &mut actuator);
        debug!("Actuator now {:?}", state);
    }
}
