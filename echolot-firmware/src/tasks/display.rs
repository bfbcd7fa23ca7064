//! Display rendering task
//!
//! Drives the whole measurement cycle: raises the gate so the trigger
//! task fires a pulse, blocks for the resulting reading, then sweeps
//! the display from the previous value to the new one.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;

use echolot_core::render::{Frame, Sweep};
use echolot_core::traits::DisplayDriver;

use crate::channels::{DISTANCE_READINGS, MEASURE_GATE};
use crate::ssd1306::Ssd1306;

/// Renderer timing configuration
pub struct DisplayTaskConfig {
    /// Delay between animation frames in milliseconds
    pub frame_ms: u64,
    /// Settle time after each animation pass in milliseconds
    pub settle_ms: u64,
}

impl Default for DisplayTaskConfig {
    fn default() -> Self {
        Self {
            frame_ms: 5,
            settle_ms: 100,
        }
    }
}

/// Display task - requests readings and animates the OLED
#[embassy_executor::task]
pub async fn display_task(
    mut display: Ssd1306<I2c<'static, I2C1, Blocking>>,
    config: DisplayTaskConfig,
) {
    info!("Display task started");

    let mut previous: i16 = 0;

    loop {
        // Request one measurement, then block for its result
        MEASURE_GATE.signal(());
        let reading = DISTANCE_READINGS.receive().await;

        let target = reading.raw();
        let sweep = Sweep::new(previous, target);
        trace!("Sweep {} -> {} ({} frames)", previous, target, sweep.frame_count());

        for value in sweep {
            let frame = Frame::for_sweep(reading, value);
            if let Err(e) = frame.draw(&mut display) {
                warn!("Frame draw failed: {:?}", e);
            }
            Timer::after_millis(config.frame_ms).await;
        }

        previous = target;
        Timer::after_millis(config.settle_ms).await;
    }
}
