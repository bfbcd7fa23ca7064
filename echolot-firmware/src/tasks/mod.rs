//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod display;
pub mod echo;
pub mod trigger;

pub use display::{display_task, DisplayTaskConfig};
pub use echo::{echo_capture_task, echo_convert_task, EchoConfig};
pub use trigger::{trigger_task, TriggerConfig};
