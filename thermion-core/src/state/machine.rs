//! Conversion state definition
//!
//! ```text
//! Idle --Configured--> ReadyForConversion --ConversionStarted--> Converting
//! Converting --StatusPolled{done: false}--> Converting
//! Converting --StatusPolled{done: true}--> ConversionDone
//! ConversionDone --TemperatureRead--> ValueAvailable
//! ValueAvailable --ConversionStarted--> Converting
//! ```

use super::events::SensorEvent;

/// Logical sensor session states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConversionState {
    /// Power-on, configuration not yet written
    #[default]
    Idle,
    /// One-shot mode configured, no conversion requested
    ReadyForConversion,
    /// Conversion requested, done-flag not yet seen
    Converting,
    /// Done-flag observed, result unread
    ConversionDone,
    /// Result read, next conversion not yet requested
    ValueAvailable,
}

impl ConversionState {
    /// Process an observation and return the next state
    pub fn transition(self, event: SensorEvent) -> Self {
        use ConversionState::*;
        use SensorEvent::*;

        match (self, event) {
            // Configuration can be rewritten at any time and parks the sensor
            (_, Configured) => ReadyForConversion,

            // Redundant starts are accepted by the sensor
            (_, ConversionStarted) => Converting,

            // The sensor's flag wins over whatever was assumed before
            (_, StatusPolled { done: false }) => Converting,
            (_, StatusPolled { done: true }) => ConversionDone,

            (ConversionDone, TemperatureRead) => ValueAvailable,

            // Default: stay in current state
            _ => self,
        }
    }
}
