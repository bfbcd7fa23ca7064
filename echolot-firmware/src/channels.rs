//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.
//!
//! All cross-task state flows through the three primitives below; the
//! tasks themselves hold no shared variables.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use echolot_core::ranging::{DistanceReading, EchoPulse};

/// Distance channel capacity: single-slot, one reading in flight
const DISTANCE_CHANNEL_SIZE: usize = 1;

/// Gate signal: the renderer raises it to request one measurement,
/// the pulse generator consumes it. Carries no payload.
pub static MEASURE_GATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Captured echo pulse handoff from edge capture to the conversion loop.
///
/// A `Signal` rather than a channel: signalling never blocks and an
/// unconsumed pulse is overwritten, which is what the capture side
/// needs (it runs off the GPIO interrupt and only the newest pulse
/// matters).
pub static ECHO_PULSE: Signal<CriticalSectionRawMutex, EchoPulse> = Signal::new();

/// Distance readings from the conversion loop to the renderer.
///
/// Capacity 1: the sender blocks until the renderer has drained the
/// previous reading, giving implicit backpressure.
pub static DISTANCE_READINGS: Channel<CriticalSectionRawMutex, DistanceReading, DISTANCE_CHANNEL_SIZE> =
    Channel::new();
