//! Board configuration
//!
//! `thermometer.toml` is validated by the build script and compiled in
//! as [`BOARD_CONFIG`].

use defmt::*;
use thermion_core::config::ThermometerConfig;

include!(concat!(env!("OUT_DIR"), "/thermometer_config.rs"));

/// Configuration to run with
///
/// The build script already rejects bad values; the check is repeated
/// so a hand-edited generated file cannot slip through.
pub fn load() -> ThermometerConfig {
    match BOARD_CONFIG.validate() {
        Ok(()) => BOARD_CONFIG,
        Err(e) => {
            warn!("Invalid board configuration ({}), using defaults", e);
            ThermometerConfig::DEFAULT
        }
    }
}
