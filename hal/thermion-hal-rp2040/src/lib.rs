//! RP2040-specific HAL for the thermometer firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `thermion-hal` traits on top of embassy-rp pins:
//!
//! - Emulated open-drain lines for the bit-banged I2C bus
//! - Push-pull outputs for the shift-register display

#![no_std]

pub mod gpio;

pub use gpio::{OpenDrainLine, PushPullPin};

// Re-export shared traits from thermion-hal for convenience
pub use thermion_hal::{InputPin, OpenDrainPin, OutputPin};
