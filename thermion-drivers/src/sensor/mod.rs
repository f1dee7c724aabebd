//! Temperature sensor implementations

pub mod ds1621;

pub use ds1621::{Command, Ds1621, Register, StatusRegister, ONE_SHOT_MODE};
