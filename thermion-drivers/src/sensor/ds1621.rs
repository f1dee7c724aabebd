//! DS1621 digital thermometer (one-shot mode)
//!
//! The DS1621 sits on the two-wire bus at `0b1001_A2A1A0`. This driver
//! uses three of its commands:
//!
//! - Access Config (0xAC): write the one-shot configuration, or read the
//!   1-byte config/status register
//! - Start Convert (0xEE): begin a conversion (no payload)
//! - Read Temperature (0xAA): read the 2-byte temperature register
//!
//! # Conversion cycle
//!
//! ```text
//! configure_one_shot -> start_conversion -> poll status until DONE
//!                            ^                        |
//!                            +---- read_temperature <-+
//! ```
//!
//! Nothing about the cycle is cached here. The DONE bit in the sensor's
//! status register is the only record of whether a conversion finished.

use embedded_hal::i2c::I2c;
use thermion_core::config::DS1621_BASE_ADDRESS;
use thermion_core::traits::{ConversionStatus, OneShotSensor};

/// DS1621 command opcodes
pub mod opcode {
    /// Read or write the configuration/status register
    pub const ACCESS_CONFIG: u8 = 0xAC;
    /// Begin a temperature conversion
    pub const START_CONVERT: u8 = 0xEE;
    /// Read the last conversion result
    pub const READ_TEMPERATURE: u8 = 0xAA;
}

/// Configuration payload: 1SHOT = 1, POL = 1 (active-high Tout)
pub const ONE_SHOT_MODE: u8 = 0b0000_0011;

/// Commands written to the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Write [`ONE_SHOT_MODE`] to the configuration register
    ConfigureOneShot,
    /// Begin a conversion
    StartConvert,
}

impl Command {
    /// Opcode byte sent after the address
    pub fn opcode(self) -> u8 {
        match self {
            Command::ConfigureOneShot => opcode::ACCESS_CONFIG,
            Command::StartConvert => opcode::START_CONVERT,
        }
    }

    /// Byte sent after the opcode, if any
    pub fn payload(self) -> Option<u8> {
        match self {
            Command::ConfigureOneShot => Some(ONE_SHOT_MODE),
            Command::StartConvert => None,
        }
    }
}

/// Registers read from the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Register {
    /// Configuration/status, 1 byte
    Config,
    /// Temperature, 2 bytes (whole °C, then the half-degree bit)
    Temperature,
}

impl Register {
    /// Opcode that selects the register
    pub fn opcode(self) -> u8 {
        match self {
            Register::Config => opcode::ACCESS_CONFIG,
            Register::Temperature => opcode::READ_TEMPERATURE,
        }
    }

    /// Bytes the sensor expects to be clocked out
    ///
    /// The whole register is always drained, even when only the first
    /// byte is used.
    pub fn width(self) -> usize {
        match self {
            Register::Config => 1,
            Register::Temperature => 2,
        }
    }
}

/// Decoded configuration/status register
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusRegister(u8);

impl StatusRegister {
    /// Conversion complete
    pub const DONE: u8 = 1 << 7;
    /// Temperature reached the TH limit
    pub const THF: u8 = 1 << 6;
    /// Temperature reached the TL limit
    pub const TLF: u8 = 1 << 5;
    /// EEPROM write in progress
    pub const NVB: u8 = 1 << 4;
    /// Tout polarity
    pub const POL: u8 = 1 << 1;
    /// One-shot mode
    pub const ONE_SHOT: u8 = 1 << 0;

    /// Wrap a raw register value
    pub fn from_register(value: u8) -> Self {
        Self(value)
    }

    /// Raw register value
    pub fn bits(&self) -> u8 {
        self.0
    }

    /// Check the done-flag
    pub fn is_done(&self) -> bool {
        self.0 & Self::DONE != 0
    }

    /// Check the high-temperature flag
    pub fn high_limit_hit(&self) -> bool {
        self.0 & Self::THF != 0
    }

    /// Check the low-temperature flag
    pub fn low_limit_hit(&self) -> bool {
        self.0 & Self::TLF != 0
    }

    /// Check if the EEPROM is still busy
    pub fn nv_busy(&self) -> bool {
        self.0 & Self::NVB != 0
    }

    /// Check if one-shot mode is active
    pub fn is_one_shot(&self) -> bool {
        self.0 & Self::ONE_SHOT != 0
    }

    /// Check Tout polarity (true = active high)
    pub fn polarity_high(&self) -> bool {
        self.0 & Self::POL != 0
    }
}

/// DS1621 driver over any I2C bus
pub struct Ds1621<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Ds1621<I2C> {
    /// Create a driver for the sensor with the given A2..A0 pin levels
    pub fn new(i2c: I2C, address_pins: u8) -> Self {
        Self {
            i2c,
            address: DS1621_BASE_ADDRESS | (address_pins & 0b111),
        }
    }

    /// 7-bit bus address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Send a command, with its payload byte if it has one
    ///
    /// One transaction: start, address+W, opcode, payload, stop. Any
    /// missing ack aborts it (the bus still gets its stop).
    pub fn write_command(&mut self, command: Command) -> Result<(), I2C::Error> {
        match command.payload() {
            Some(payload) => self.i2c.write(self.address, &[command.opcode(), payload]),
            None => self.i2c.write(self.address, &[command.opcode()]),
        }
    }

    /// Read a register and return its first byte
    ///
    /// Start, address+W, opcode, repeated start, address+R, then every
    /// byte of the register (all but the last acknowledged), stop.
    pub fn read_register(&mut self, register: Register) -> Result<u8, I2C::Error> {
        let mut buf = [0u8; 2];
        let width = register.width();
        self.i2c
            .write_read(self.address, &[register.opcode()], &mut buf[..width])?;
        Ok(buf[0])
    }

    /// Read the configuration/status register
    pub fn status(&mut self) -> Result<StatusRegister, I2C::Error> {
        self.read_register(Register::Config).map(StatusRegister::from_register)
    }

    /// Read the last result in whole degrees Celsius
    ///
    /// The half-degree byte is clocked out and dropped.
    pub fn read_temperature(&mut self) -> Result<i8, I2C::Error> {
        self.read_register(Register::Temperature).map(|msb| msb as i8)
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> OneShotSensor for Ds1621<I2C> {
    type Error = I2C::Error;

    fn configure_one_shot(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::ConfigureOneShot)
    }

    fn start_conversion(&mut self) -> Result<(), Self::Error> {
        self.write_command(Command::StartConvert)
    }

    fn conversion_status(&mut self) -> Result<ConversionStatus, Self::Error> {
        self.status().map(|status| ConversionStatus {
            done: status.is_done(),
            one_shot: status.is_one_shot(),
        })
    }

    fn read_celsius(&mut self) -> Result<i8, Self::Error> {
        self.read_temperature()
    }
}
