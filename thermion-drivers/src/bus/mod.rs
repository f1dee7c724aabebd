//! Software two-wire (I2C) bus
//!
//! Everything is built from two [`BusLine`]s. There is no peripheral
//! assistance: edges are produced by flipping pin directions and timing
//! comes from a blocking [`DelayNs`](embedded_hal::delay::DelayNs) after
//! every transition.

pub mod bitbang;
pub mod line;

pub use bitbang::BitBangI2c;
pub use line::BusLine;

use embedded_hal::i2c::{ErrorKind, NoAcknowledgeSource};

/// Transfer direction encoded in the address byte's R/W bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Master writes (R/W = 0)
    Write,
    /// Master reads (R/W = 1)
    Read,
}

impl Direction {
    /// Combine a 7-bit address with the R/W bit
    pub fn address_byte(self, address: u8) -> u8 {
        match self {
            Direction::Write => address << 1,
            Direction::Read => (address << 1) | 1,
        }
    }
}

/// Bus-level failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Clock would not go low at start; bus held by someone else or stuck
    BusBusy,
    /// No device acknowledged the address byte
    AddressNack,
    /// A data byte was not acknowledged
    NoAck,
}

impl embedded_hal::i2c::Error for BusError {
    fn kind(&self) -> ErrorKind {
        match self {
            BusError::BusBusy => ErrorKind::ArbitrationLoss,
            BusError::AddressNack => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
            BusError::NoAck => ErrorKind::NoAcknowledge(NoAcknowledgeSource::Data),
        }
    }
}
