//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in thermion-core for the thermometer board:
//!
//! - Open-drain bus line with settle timing
//! - Bit-banged I2C master (also an `embedded_hal::i2c::I2c`)
//! - DS1621 temperature sensor in one-shot mode
//! - Two-digit seven-segment display on chained 74HC595s
//! - The poll loop tying sensor and display together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bus;
pub mod display;
pub mod sensor;
pub mod thermometer;

#[cfg(test)]
mod testing;

pub use thermometer::{PollOutcome, Thermometer};
