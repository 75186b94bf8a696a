//! Embassy async tasks
//!
//! Each task runs independently and meets the others only at the shared
//! actuator.

pub mod buttons;
pub mod control;
pub mod heartbeat;

pub use buttons::button_task;
pub use control::control_task;
pub use heartbeat::boot_blink;
