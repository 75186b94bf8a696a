//! Boot heartbeat on the blue LED

use defmt::*;
use embassy_time::Timer;

use interlock_drivers::actuator::ActiveLowLed;
use interlock_hal::OutputPin;

/// Light the LED for `duration_ms`, then switch it off again
pub async fn boot_blink<P: OutputPin>(led: &mut ActiveLowLed<P>, duration_ms: u32) {
    debug!("Boot blink ({} ms)", duration_ms);
    led.toggle();
    Timer::after_millis(duration_ms as u64).await;
    led.toggle();
}
