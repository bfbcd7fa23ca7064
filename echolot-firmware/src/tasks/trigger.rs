//! Trigger pulse generation task
//!
//! Waits for the measurement gate, then drives the HC-SR04 TRIG pin
//! high for a fixed pulse width. A quiet period after each pulse
//! bounds the sampling rate and lets in-flight echoes die out before
//! the next shot.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Timer;

use crate::channels::MEASURE_GATE;

/// Trigger timing configuration
pub struct TriggerConfig {
    /// Width of the trigger pulse in milliseconds
    pub pulse_ms: u64,
    /// Enforced idle time after each pulse in milliseconds
    pub quiet_ms: u64,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            pulse_ms: 10,
            quiet_ms: 300,
        }
    }
}

impl TriggerConfig {
    /// Lower bound on the time between consecutive pulse starts
    pub fn min_cycle_ms(&self) -> u64 {
        self.pulse_ms + self.quiet_ms
    }
}

/// Trigger task - fires one pulse per gate signal
#[embassy_executor::task]
pub async fn trigger_task(mut trig: Output<'static>, config: TriggerConfig) {
    info!(
        "Trigger task started, min cycle {} ms",
        config.min_cycle_ms()
    );

    loop {
        MEASURE_GATE.wait().await;

        trig.set_high();
        Timer::after_millis(config.pulse_ms).await;
        trig.set_low();

        // Quiet period: no new pulse may start before this elapses,
        // even if the gate is raised again immediately
        Timer::after_millis(config.quiet_ms).await;
    }
}
