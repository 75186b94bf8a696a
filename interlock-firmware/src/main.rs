//! Motor Interlock Firmware
//!
//! Main firmware binary for an RP2040 board that gates a motor enable line
//! on three analog sensors (light, temperature, motor current) with manual
//! start/stop override buttons.
//!
//! Pinout:
//! - ADC0/GPIO26: LDR divider, ADC1/GPIO27: thermistor divider,
//!   ADC2/GPIO28: current-sense resistor
//! - GPIO14: start button, GPIO15: stop button (both pulled down)
//! - GPIO2: motor enable (active-high)
//! - GPIO16/17/18: red/green/blue LEDs (active-low)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use interlock_core::buttons::ButtonEvent;
use interlock_core::controller::Controller;
use interlock_drivers::actuator::{ActiveLowLed, GpioActuator};
use interlock_drivers::sensor::{AdcSensorReader, ChannelMap};
use interlock_hal_rp2040::{AdcChannel, RpAdc, RpOutput};

use crate::channels::ACTUATOR;

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Interlock firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Validated at build time
    let config = config::INTERLOCK_CONFIG;
    info!(
        "Limits: light={} ohm, temperature={} C, current={} A",
        config.thresholds.light_resistance_ohms,
        config.thresholds.temperature_c,
        config.thresholds.motor_current_a
    );
    info!("Evaluators: {:?}", config.evaluators);

    // Motor enable off, both status LEDs dark until the first decision
    let actuator = GpioActuator::new(
        RpOutput::new(Output::new(p.PIN_2, Level::Low)),
        RpOutput::new(Output::new(p.PIN_16, Level::High)),
        RpOutput::new(Output::new(p.PIN_17, Level::High)),
    );
    ACTUATOR.install(actuator);
    info!("Actuator initialized ({:?})", ACTUATOR.state());

    // Override buttons
    let start_button = Input::new(p.PIN_14, Pull::Down);
    let stop_button = Input::new(p.PIN_15, Pull::Down);
    spawner
        .spawn(tasks::button_task(start_button, ButtonEvent::StartPressed))
        .unwrap();
    spawner
        .spawn(tasks::button_task(stop_button, ButtonEvent::StopPressed))
        .unwrap();
    info!("Buttons armed");

    // Sensor inputs, read in blocking mode once per cycle
    let mut adc = RpAdc::new(Adc::new_blocking(p.ADC, Default::default()));
    let map = ChannelMap {
        light: unwrap!(adc.register(AdcChannel::Adc0, Channel::new_pin(p.PIN_26, Pull::None))),
        temperature: unwrap!(adc.register(AdcChannel::Adc1, Channel::new_pin(p.PIN_27, Pull::None))),
        torque: unwrap!(adc.register(AdcChannel::Adc2, Channel::new_pin(p.PIN_28, Pull::None))),
    };
    let sensors = AdcSensorReader::new(adc, map);
    info!("ADC initialized: {:?}", map);

    // Boot heartbeat
    let mut blue = ActiveLowLed::new(RpOutput::new(Output::new(p.PIN_18, Level::High)));
    tasks::boot_blink(&mut blue, config.heartbeat_ms).await;

    spawner
        .spawn(tasks::control_task(sensors, Controller::new(config)))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task keeps the blue LED pin alive; all work happens in spawned tasks
    loop {
        Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
