//! Echo timing tasks
//!
//! Two cooperating tasks make up the echo timer:
//!
//! - `echo_capture_task` sleeps on the ECHO pin's edge interrupts and
//!   timestamps the rising and falling edge of each pulse. The wakeup
//!   comes straight from the GPIO IRQ, so this path must stay short
//!   and must never block: the completed pulse goes into an
//!   overwrite-on-full signal slot.
//! - `echo_convert_task` polls that slot once per period, converts
//!   pulse width to centimeters and publishes the reading (or the
//!   no-echo sentinel) to the renderer.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Instant, Ticker};

use echolot_core::ranging::{DistanceReading, EchoPulse};

use crate::channels::{DISTANCE_READINGS, ECHO_PULSE};

/// Echo conversion loop configuration
pub struct EchoConfig {
    /// Polling period in milliseconds; one reading is published per period
    pub poll_period_ms: u64,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self {
            poll_period_ms: 1000,
        }
    }
}

/// Edge capture task - timestamps echo pulses
///
/// Malformed captures (falling edge not after the rising edge, which
/// can happen if the sensor glitches while the executor is busy) are
/// still handed off; the conversion loop classifies them.
#[embassy_executor::task]
pub async fn echo_capture_task(mut echo: Input<'static>) {
    info!("Echo capture task started");

    loop {
        echo.wait_for_rising_edge().await;
        let started_at_us = Instant::now().as_micros();

        echo.wait_for_falling_edge().await;
        let ended_at_us = Instant::now().as_micros();

        // Overwrites any unconsumed pulse; only the newest matters
        ECHO_PULSE.signal(EchoPulse {
            started_at_us,
            ended_at_us,
            last_valid_read_us: ended_at_us,
        });

        trace!("Echo pulse captured: {} us", ended_at_us - started_at_us);
    }
}

/// Conversion loop task - polls captured pulses and publishes readings
#[embassy_executor::task]
pub async fn echo_convert_task(config: EchoConfig) {
    info!("Echo convert task started");

    let mut ticker = Ticker::every(Duration::from_millis(config.poll_period_ms));
    let mut last_attempt_us: u64 = 0;

    loop {
        let reading = match ECHO_PULSE.try_take() {
            Some(pulse) => DistanceReading::from_pulse(&pulse),
            None => DistanceReading::NoEcho,
        };

        match reading {
            DistanceReading::Distance(cm) => {
                trace!("Distance: {} cm", cm);
            }
            DistanceReading::NoEcho => {
                // Covers both a silent cycle and out-of-order edges
                last_attempt_us = Instant::now().as_micros();
                warn!("No valid echo this cycle (at {} us)", last_attempt_us);
            }
        }

        // Blocking send into the single slot; the renderer drains it
        DISTANCE_READINGS.send(reading).await;

        ticker.next().await;
    }
}
