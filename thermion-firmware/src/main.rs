//! Thermion - Two-Digit Thermometer Firmware
//!
//! Main firmware binary for RP2040-based thermometer boards. A DS1621
//! on a bit-banged I2C bus is polled once per interval and the reading
//! is shown on two seven-segment digits behind 74HC595 shift registers.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use {defmt_rtt as _, panic_probe as _};

mod board;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Thermion firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    info!(
        "Config: sensor={:#x}, settle={}us, poll={}ms, power-on={}",
        config.device_address(),
        config.settle_us,
        config.poll_interval_ms,
        config.power_on_value
    );

    let mut thermometer = board::thermometer(p, &config);

    match thermometer.init() {
        Ok(()) => info!("Sensor configured, first conversion started"),
        Err(e) => warn!("Sensor init failed: {}, retrying on first poll", e),
    }

    spawner
        .spawn(tasks::poll_task(thermometer, config.poll_interval_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");

    // Main task has nothing else to do - all work happens in spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
