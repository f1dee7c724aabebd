//! Logical conversion state machine
//!
//! The sensor's own status register is the source of truth. These types
//! describe what a sequence of observations means; nothing here is used
//! to skip asking the sensor.

pub mod events;
pub mod machine;

pub use events::SensorEvent;
pub use machine::ConversionState;
