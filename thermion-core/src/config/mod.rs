//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware generates a
//! [`ThermometerConfig`] constant from `thermometer.toml` at build time.

pub mod types;

pub use types::*;
