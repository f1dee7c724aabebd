//! Bit-banged I2C master
//!
//! # Bus conditions
//!
//! ```text
//!         start                 bit            ack              stop
//! SDA  ‾‾‾‾\________       X‾‾‾‾‾‾‾‾‾X       ‾‾‾\___/‾‾‾       ____/‾‾‾‾
//! SCL  ‾‾‾‾‾‾‾\_____       ___/‾‾‾\___       ____/‾\____       __/‾‾‾‾‾‾
//! ```
//!
//! Data only changes while the clock is low. A data edge while the clock
//! is high is a start (falling) or stop (rising) condition.
//!
//! No clock stretching: the master never waits for a slave to release
//! the clock, so every transaction takes a fixed number of settle delays.

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorType, I2c, Operation, SevenBitAddress};
use thermion_hal::OpenDrainPin;

use super::{BusError, BusLine, Direction};

/// I2C master driving two open-drain GPIO lines
pub struct BitBangI2c<SCL, SDA, D> {
    scl: BusLine<SCL>,
    sda: BusLine<SDA>,
    delay: D,
}

impl<SCL: OpenDrainPin, SDA: OpenDrainPin, D: DelayNs> BitBangI2c<SCL, SDA, D> {
    /// Create a new bus master with both lines released
    ///
    /// # Arguments
    /// - `scl`: Clock line pin
    /// - `sda`: Data line pin
    /// - `delay`: Blocking delay used after every line transition
    /// - `settle_us`: Settle delay in microseconds (10 µs gives ~25 kHz)
    pub fn new(scl: SCL, sda: SDA, delay: D, settle_us: u32) -> Self {
        Self {
            scl: BusLine::new(scl, settle_us),
            sda: BusLine::new(sda, settle_us),
            delay,
        }
    }

    /// Generate a start (or repeated start) condition
    ///
    /// Fails with [`BusError::BusBusy`] if the clock still reads high after
    /// being pulled low. The caller must abandon the transaction.
    pub fn start(&mut self) -> Result<(), BusError> {
        // Data first: releasing it while the clock is low is not a condition
        self.sda.release(&mut self.delay);
        self.scl.release(&mut self.delay);

        self.sda.pull_low(&mut self.delay);
        self.scl.pull_low(&mut self.delay);

        if self.scl.sample() {
            return Err(BusError::BusBusy);
        }
        Ok(())
    }

    /// Generate a stop condition, leaving both lines released
    pub fn stop(&mut self) {
        self.sda.pull_low(&mut self.delay);
        self.scl.release(&mut self.delay);
        self.sda.release(&mut self.delay);
    }

    /// Transmit one byte, MSB first, and sample the acknowledgment
    ///
    /// The ninth clock pulse carries the receiver's ack: low means the
    /// byte was accepted.
    pub fn send_byte(&mut self, byte: u8) -> Result<(), BusError> {
        let mut out = byte;
        for _ in 0..8 {
            self.sda.set_bit(out & 0x80 != 0, &mut self.delay);
            self.pulse_clock();
            out <<= 1;
        }

        self.sda.release(&mut self.delay);
        let nacked = self.pulse_clock();

        if nacked {
            Err(BusError::NoAck)
        } else {
            Ok(())
        }
    }

    /// Transmit a 7-bit address with the R/W bit
    ///
    /// A missing ack is reported as [`BusError::AddressNack`].
    pub fn send_address(&mut self, address: u8, direction: Direction) -> Result<(), BusError> {
        self.send_byte(direction.address_byte(address))
            .map_err(|_| BusError::AddressNack)
    }

    /// Receive one byte, MSB first
    ///
    /// The data line is released first so the slave can drive it. The
    /// caller follows up with [`ack`](Self::ack) or [`nack`](Self::nack).
    pub fn receive_byte(&mut self) -> u8 {
        self.sda.release(&mut self.delay);

        let mut byte = 0u8;
        for _ in 0..8 {
            byte = (byte << 1) | self.pulse_clock() as u8;
        }
        byte
    }

    /// Acknowledge a received byte; more bytes will follow
    pub fn ack(&mut self) {
        self.sda.pull_low(&mut self.delay);
        self.pulse_clock();
        self.sda.release(&mut self.delay);
    }

    /// Refuse the next byte; ends a read
    pub fn nack(&mut self) {
        self.sda.release(&mut self.delay);
        self.pulse_clock();
    }

    /// Check that neither side is holding a line low
    pub fn is_idle(&self) -> bool {
        self.scl.sample() && self.sda.sample()
    }

    /// Give back the pins and the delay
    pub fn release(self) -> (SCL, SDA, D) {
        (self.scl.into_inner(), self.sda.into_inner(), self.delay)
    }

    /// Clock high, sample data, clock low; returns the sampled level
    fn pulse_clock(&mut self) -> bool {
        self.scl.release(&mut self.delay);
        let level = self.sda.sample();
        self.scl.pull_low(&mut self.delay);
        level
    }

    /// Run operations between a start and the final stop
    ///
    /// Start and address are sent for the first operation and whenever
    /// the direction changes (repeated start, no stop in between).
    fn run(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), BusError> {
        let mut current: Option<Direction> = None;
        // Last received byte still waits for its ack/nack
        let mut owed = false;

        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => {
                    if current == Some(Direction::Read) {
                        self.end_read(owed);
                        owed = false;
                    }
                    if current != Some(Direction::Write) {
                        self.start()?;
                        self.send_address(address, Direction::Write)?;
                        current = Some(Direction::Write);
                    }
                    for &byte in bytes.iter() {
                        self.send_byte(byte)?;
                    }
                }
                Operation::Read(buffer) => {
                    if current != Some(Direction::Read) {
                        self.start()?;
                        self.send_address(address, Direction::Read)?;
                        current = Some(Direction::Read);
                    }
                    // Adjacent reads are one run; only the run's last byte is NACKed
                    for slot in buffer.iter_mut() {
                        if owed {
                            self.ack();
                        }
                        *slot = self.receive_byte();
                        owed = true;
                    }
                }
            }
        }

        if current == Some(Direction::Read) {
            self.end_read(owed);
        }
        Ok(())
    }

    /// NACK the slave out of a read
    ///
    /// An addressed slave drives the first data bit right away. With no
    /// byte received yet, one is clocked out and dropped so the NACK lands
    /// in an ack slot and the slave lets go of the data line.
    fn end_read(&mut self, owed: bool) {
        if !owed {
            let _ = self.receive_byte();
        }
        self.nack();
    }
}

impl<SCL, SDA, D> ErrorType for BitBangI2c<SCL, SDA, D> {
    type Error = BusError;
}

impl<SCL: OpenDrainPin, SDA: OpenDrainPin, D: DelayNs> I2c<SevenBitAddress>
    for BitBangI2c<SCL, SDA, D>
{
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if operations.is_empty() {
            return Ok(());
        }

        // Stop even on failure so the bus is left released
        let result = self.run(address, operations);
        self.stop();
        result
    }
}
