//! Thermion Hardware Abstraction Layer
//!
//! This crate defines the pin traits the drivers are written against, so
//! the same bus and display code runs on the RP2040 board and against the
//! simulated bus used in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (thermion-firmware)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermion-drivers (bus, sensor, 595s)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  thermion-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ thermion-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::OpenDrainPin`] - Direction-switched open-drain line (I2C SCL/SDA)
//!
//! Delays come from [`embedded_hal::delay::DelayNs`] directly; there is no
//! wrapper trait for them here.
//!
//! [`embedded_hal::delay::DelayNs`]: https://docs.rs/embedded-hal/1.0/embedded_hal/delay/trait.DelayNs.html

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OpenDrainPin, OutputPin};
