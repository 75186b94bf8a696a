//! Control loop task
//!
//! Once per cycle: sample all three sensors, run the enabled threshold
//! checks against the actuator, log the verdicts and the sensor report,
//! then sleep for the configured period.

use defmt::*;
use embassy_time::{Duration, Timer};

use interlock_core::controller::Controller;
use interlock_core::report::CycleReport;

use crate::channels::{BoardSensors, ACTUATOR};

#[embassy_executor::task]
pub async fn control_task(mut sensors: BoardSensors, controller: Controller) {
    info!("Control task started");

    let period = Duration::from_millis(controller.config().cycle_period_ms as u64);
    let mut actuator = &ACTUATOR;

    loop {
        let report = controller.run_cycle(&mut sensors, &mut actuator);
        log_report(&report);

        Timer::after(period).await;
    }
}

fn log_report(report: &CycleReport) {
    for verdict in report.verdicts.iter() {
        if let Some(message) = verdict.message() {
            if verdict.fault.is_some() {
                warn!("{}", message);
            } else {
                info!("{}", message);
            }
        }
    }

    for (channel, reading) in report.lines() {
        match reading {
            Ok(value) => info!("{}: {} {}", channel.label(), value, channel.unit()),
            Err(fault) => warn!("{}: fault ({:?})", channel.label(), fault),
        }
    }

    info!("OUTPUT: {}", report.output_digit());
}
