//! Observations that move the logical conversion state

/// Outcome of one successful sensor operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorEvent {
    /// One-shot configuration written
    Configured,
    /// Start-conversion command accepted
    ConversionStarted,
    /// Status register read; `done` is the done-flag
    StatusPolled { done: bool },
    /// Temperature register drained
    TemperatureRead,
}
