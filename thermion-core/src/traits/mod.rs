//! Hardware abstraction traits
//!
//! These traits define the interface between the poll loop and the
//! hardware-specific sensor and display implementations.

pub mod display;
pub mod sensor;

pub use display::SegmentDisplay;
pub use sensor::{ConversionStatus, OneShotSensor};
