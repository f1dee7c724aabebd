//! GPIO wrappers implementing the `thermion-hal` pin traits
//!
//! The RP2040 pads are push-pull only. Open-drain behaviour is emulated
//! with a [`Flex`] pin whose output latch stays low while the direction
//! bit is flipped, exactly like toggling a DDR bit on an AVR.

use embassy_rp::gpio::{Flex, Level, Output, Pin, Pull};
use embassy_rp::Peri;
use thermion_hal::{InputPin, OpenDrainPin, OutputPin};

/// Bus line backed by a direction-switched GPIO
///
/// The bus relies on external pull-ups (4.7k on the board). The internal
/// pull-up is left disabled so the rise time is set by the board alone.
pub struct OpenDrainLine<'d> {
    pin: Flex<'d>,
    driving_low: bool,
}

impl<'d> OpenDrainLine<'d> {
    /// Create a new line, initially released
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::None);
        // Latch low first so switching to output can only ever pull down
        pin.set_low();
        pin.set_as_input();

        Self {
            pin,
            driving_low: false,
        }
    }
}

impl InputPin for OpenDrainLine<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

impl OpenDrainPin for OpenDrainLine<'_> {
    fn release(&mut self) {
        self.pin.set_as_input();
        self.driving_low = false;
    }

    fn drive_low(&mut self) {
        self.pin.set_as_output();
        self.driving_low = true;
    }

    fn is_driving_low(&self) -> bool {
        self.driving_low
    }
}

/// Push-pull output used for the 74HC595 data, clock and latch lines
pub struct PushPullPin<'d> {
    pin: Output<'d>,
}

impl<'d> PushPullPin<'d> {
    /// Create a new output at the given initial level
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            pin: Output::new(pin, initial),
        }
    }
}

impl OutputPin for PushPullPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
