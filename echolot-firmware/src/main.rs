//! Echolot - Ultrasonic Rangefinder Firmware
//!
//! Main firmware binary for RP2040-based boards with an HC-SR04
//! ultrasonic sensor and a 128x32 SSD1306 OLED.
//!
//! Named after the German "Echolot" (echo sounder) - distance is
//! measured by timing how long the sound pulse takes to come back.
//!
//! Three tasks cooperate through the statics in [`channels`]: the
//! display task raises the measurement gate, the trigger task fires
//! one pulse per raise, and the echo tasks time the returning pulse
//! and publish the converted distance.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c;
use {defmt_rtt as _, panic_probe as _};

use echolot_core::traits::DisplayDriver;

use crate::ssd1306::Ssd1306;
use crate::tasks::{DisplayTaskConfig, EchoConfig, TriggerConfig};

mod channels;
mod font;
mod ssd1306;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Echolot firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // HC-SR04 pins (TRIG=GPIO17, ECHO=GPIO16)
    let trig = Output::new(p.PIN_17, Level::Low);
    let echo = Input::new(p.PIN_16, Pull::None);

    // Setup I2C for OLED (SDA=GPIO14, SCL=GPIO15)
    let i2c = i2c::I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c::Config::default());

    // Initialize OLED display with a boot splash
    let mut display = Ssd1306::new(i2c);
    if let Err(e) = display.init() {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
        display.clear_buffer().ok();
        display.draw_string(0, 0, 1, "Echolot").ok();
        display.draw_string(0, 10, 1, "Rangefinder v0.1").ok();
        display.show().ok();
    }

    // Spawn tasks
    spawner
        .spawn(tasks::trigger_task(trig, TriggerConfig::default()))
        .unwrap();
    spawner.spawn(tasks::echo_capture_task(echo)).unwrap();
    spawner
        .spawn(tasks::echo_convert_task(EchoConfig::default()))
        .unwrap();
    spawner
        .spawn(tasks::display_task(display, DisplayTaskConfig::default()))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
