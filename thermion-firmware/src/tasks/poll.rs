//! Sensor poll task
//!
//! Drives the thermometer at a fixed cadence. Each tick runs a whole
//! poll (bus transactions and display refresh) with blocking delays
//! before the next tick is awaited.

use defmt::*;
use embassy_time::{Duration, Ticker};

use thermion_drivers::PollOutcome;

use crate::board::BoardThermometer;

/// Poll task - one `poll_and_update` per interval
#[embassy_executor::task]
pub async fn poll_task(mut thermometer: BoardThermometer, interval_ms: u32) {
    info!("Poll task started ({}ms)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));
    let mut last_state = thermometer.state();

    loop {
        ticker.next().await;

        match thermometer.poll_and_update() {
            PollOutcome::Converting => trace!("Conversion in progress"),
            PollOutcome::Updated(value) => debug!("Temperature: {}°C", value),
            PollOutcome::RestartFailed { value, error } => {
                warn!("Showing {}°C but next conversion not started: {}", value, error)
            }
            PollOutcome::Failed(e) => {
                warn!("Poll failed: {}, still showing {}", e, thermometer.displayed())
            }
        }

        let state = thermometer.state();
        if state != last_state {
            trace!("Sensor state: {} -> {}", last_state, state);
            last_state = state;
        }
    }
}
