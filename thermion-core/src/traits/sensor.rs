//! Temperature sensor trait

/// Flags read back from the sensor's status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ConversionStatus {
    /// A conversion has finished and its result can be read
    pub done: bool,
    /// The sensor is configured for one-shot conversions
    pub one_shot: bool,
}

/// Temperature sensor operated in one-shot mode
///
/// The sensor performs a single conversion per [`start_conversion`] call
/// and raises its own done-flag when the result is ready. Implementations
/// must not cache the conversion status: every [`conversion_status`]
/// call asks the device.
///
/// [`start_conversion`]: OneShotSensor::start_conversion
/// [`conversion_status`]: OneShotSensor::conversion_status
pub trait OneShotSensor {
    /// Error type for sensor operations
    type Error;

    /// Put the sensor into one-shot conversion mode
    fn configure_one_shot(&mut self) -> Result<(), Self::Error>;

    /// Begin a conversion
    ///
    /// Must succeed when a conversion is already running.
    fn start_conversion(&mut self) -> Result<(), Self::Error>;

    /// Read the done and one-shot flags
    fn conversion_status(&mut self) -> Result<ConversionStatus, Self::Error>;

    /// Check the sensor's done-flag
    fn is_conversion_done(&mut self) -> Result<bool, Self::Error> {
        self.conversion_status().map(|status| status.done)
    }

    /// Read the last conversion result in whole degrees Celsius
    fn read_celsius(&mut self) -> Result<i8, Self::Error>;
}
