//! Segment display implementations

pub mod hc595;

pub use hc595::ShiftRegisterDisplay;
