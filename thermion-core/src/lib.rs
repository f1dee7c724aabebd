//! Board-agnostic core logic for the thermometer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (one-shot sensor, segment display)
//! - Seven-segment glyph encoding
//! - Logical conversion state machine
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod segment;
pub mod state;
pub mod traits;
