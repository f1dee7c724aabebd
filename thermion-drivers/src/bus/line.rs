//! Open-drain bus line driver
//!
//! One signal line (clock or data) with two states: released, so the
//! pull-up raises it, or pulled low. Every transition blocks for the
//! settle delay so the line is stable before the next edge or sample.

use embedded_hal::delay::DelayNs;
use thermion_hal::OpenDrainPin;

/// One open-drain line of the bus
pub struct BusLine<P> {
    pin: P,
    /// Delay after every transition (µs)
    settle_us: u32,
}

impl<P: OpenDrainPin> BusLine<P> {
    /// Wrap a pin, releasing it without waiting
    pub fn new(mut pin: P, settle_us: u32) -> Self {
        pin.release();
        Self { pin, settle_us }
    }

    /// Stop driving the line and wait for it to rise
    pub fn release<D: DelayNs>(&mut self, delay: &mut D) {
        self.pin.release();
        delay.delay_us(self.settle_us);
    }

    /// Drive the line low and wait for it to settle
    pub fn pull_low<D: DelayNs>(&mut self, delay: &mut D) {
        self.pin.drive_low();
        delay.delay_us(self.settle_us);
    }

    /// Release for a 1 bit, pull low for a 0 bit
    pub fn set_bit<D: DelayNs>(&mut self, bit: bool, delay: &mut D) {
        if bit {
            self.release(delay);
        } else {
            self.pull_low(delay);
        }
    }

    /// Current level of the line, whoever is driving it
    pub fn sample(&self) -> bool {
        self.pin.is_high()
    }

    /// Check if this side has let go of the line
    pub fn is_released(&self) -> bool {
        !self.pin.is_driving_low()
    }

    /// Settle delay in microseconds
    pub fn settle_us(&self) -> u32 {
        self.settle_us
    }

    /// Give the pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}
