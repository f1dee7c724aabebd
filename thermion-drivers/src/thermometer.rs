//! Thermometer poll loop
//!
//! Ties a [`OneShotSensor`] to a [`SegmentDisplay`]. One call to
//! [`Thermometer::poll_and_update`] is one tick:
//!
//! ```text
//! status ─┬─ DONE set ──> read temperature ─> clamp 0..=99 ─> show it
//!         │
//!         ├─ 1SHOT clear ─> write one-shot configuration
//!         │
//!         └─ DONE set or 1SHOT clear ─> start next conversion
//!
//! render displayed value (every tick, whatever happened above)
//! ```
//!
//! The status register is read first on every tick, so what happens next
//! depends only on what the sensor reports. A failed bus operation leaves
//! the displayed value alone and is handed back to the caller.

use thermion_core::segment;
use thermion_core::state::{ConversionState, SensorEvent};
use thermion_core::traits::{OneShotSensor, SegmentDisplay};

/// Result of one poll tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome<E> {
    /// Conversion still running (or just requested); value unchanged
    Converting,
    /// New reading shown and the next conversion started
    Updated(u8),
    /// New reading shown, but the next conversion could not be started
    ///
    /// The sensor's done-flag stays set, so the following tick reads the
    /// same result again and retries.
    RestartFailed { value: u8, error: E },
    /// Bus operation failed; value unchanged
    Failed(E),
}

/// Sensor plus display, polled at a fixed cadence
pub struct Thermometer<S, D> {
    sensor: S,
    display: D,
    /// Value on the display
    displayed: u8,
    /// Last known sensor session state (logging only)
    state: ConversionState,
}

impl<S: OneShotSensor, D: SegmentDisplay> Thermometer<S, D> {
    /// Create a thermometer showing `power_on_value` until the first reading
    pub fn new(sensor: S, display: D, power_on_value: u8) -> Self {
        Self {
            sensor,
            display,
            displayed: power_on_value.min(segment::MAX_VALUE),
            state: ConversionState::Idle,
        }
    }

    /// Show the power-on value, configure one-shot mode and start the
    /// first conversion
    ///
    /// A failure here is not fatal: [`poll_and_update`](Self::poll_and_update)
    /// sees the missing configuration in the status register and writes it.
    pub fn init(&mut self) -> Result<(), S::Error> {
        self.display.render(self.displayed);
        self.rearm(true)
    }

    /// Run one tick of the poll loop
    pub fn poll_and_update(&mut self) -> PollOutcome<S::Error> {
        let outcome = self.poll_sensor().unwrap_or_else(PollOutcome::Failed);
        self.display.render(self.displayed);
        outcome
    }

    /// Value currently on the display
    pub fn displayed(&self) -> u8 {
        self.displayed
    }

    /// Last known sensor session state
    pub fn state(&self) -> ConversionState {
        self.state
    }

    /// Give the sensor and display back
    pub fn release(self) -> (S, D) {
        (self.sensor, self.display)
    }

    /// Optionally rewrite the configuration, then start a conversion
    fn rearm(&mut self, configure: bool) -> Result<(), S::Error> {
        if configure {
            self.sensor.configure_one_shot()?;
            self.state = self.state.transition(SensorEvent::Configured);
        }
        self.sensor.start_conversion()?;
        self.state = self.state.transition(SensorEvent::ConversionStarted);
        Ok(())
    }

    fn poll_sensor(&mut self) -> Result<PollOutcome<S::Error>, S::Error> {
        let status = self.sensor.conversion_status()?;
        self.state = self
            .state
            .transition(SensorEvent::StatusPolled { done: status.done });

        let reading = if status.done {
            let celsius = self.sensor.read_celsius()?;
            self.state = self.state.transition(SensorEvent::TemperatureRead);
            self.displayed = segment::clamp_celsius(celsius);
            Some(self.displayed)
        } else {
            None
        };

        if status.one_shot && reading.is_none() {
            return Ok(PollOutcome::Converting);
        }

        // Configuration lost (power-up, or init never got through)
        Ok(match (self.rearm(!status.one_shot), reading) {
            (Ok(()), Some(value)) => PollOutcome::Updated(value),
            (Ok(()), None) => PollOutcome::Converting,
            (Err(error), Some(value)) => PollOutcome::RestartFailed { value, error },
            (Err(error), None) => PollOutcome::Failed(error),
        })
    }
}
