//! Configuration type definitions

use crate::segment::MAX_VALUE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// DS1621 base address; A2..A0 pins fill the low three bits
pub const DS1621_BASE_ADDRESS: u8 = 0b100_1000;

/// Shortest settle delay that still meets standard-mode I2C timing
///
/// Standard mode needs 4.7 µs of clock-low and 4.0 µs of clock-high.
pub const MIN_SETTLE_US: u32 = 5;

/// Shortest poll interval accepted
pub const MIN_POLL_INTERVAL_MS: u32 = 10;

/// Thermometer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct ThermometerConfig {
    /// Level of the sensor's A2, A1, A0 pins (0-7)
    pub address_pins: u8,
    /// Delay after every bus line transition (µs)
    pub settle_us: u32,
    /// Time between polls of the sensor (ms)
    pub poll_interval_ms: u32,
    /// Value shown until the first successful reading
    pub power_on_value: u8,
}

impl ThermometerConfig {
    /// Defaults matching the reference board (A2..A0 tied low)
    pub const DEFAULT: Self = Self {
        address_pins: 0,
        settle_us: 10,
        poll_interval_ms: 1000,
        power_on_value: crate::segment::SELF_TEST_VALUE,
    };

    /// 7-bit bus address of the sensor
    pub fn device_address(&self) -> u8 {
        DS1621_BASE_ADDRESS | (self.address_pins & 0b111)
    }

    /// Check every field against its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.address_pins > 0b111 {
            return Err(ConfigError::AddressPinsOutOfRange);
        }
        if self.settle_us < MIN_SETTLE_US {
            return Err(ConfigError::SettleTooShort);
        }
        if self.poll_interval_ms < MIN_POLL_INTERVAL_MS {
            return Err(ConfigError::PollIntervalTooShort);
        }
        if self.power_on_value > MAX_VALUE {
            return Err(ConfigError::PowerOnValueOutOfRange);
        }
        Ok(())
    }
}

impl Default for ThermometerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More than three address pins requested
    AddressPinsOutOfRange,
    /// Settle delay below the bus timing minimum
    SettleTooShort,
    /// Poll interval below the accepted minimum
    PollIntervalTooShort,
    /// Power-on value does not fit two digits
    PowerOnValueOutOfRange,
}
