//! GPIO pin abstractions
//!
//! Provides traits for digital input, push-pull output and emulated
//! open-drain pins that can be implemented by chip-specific HALs.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Open-drain line emulated by flipping the pin direction
///
/// The output latch is held low permanently. Switching the pin to output
/// pulls the line low; switching it to input lets the external pull-up
/// raise it. The pin is never driven high, so several devices can share
/// the line without contention.
///
/// Reading the level goes through [`InputPin`], which works in both
/// directions: while released it reports whatever the other devices on
/// the wire are doing.
pub trait OpenDrainPin: InputPin {
    /// Stop driving the line (direction = input)
    fn release(&mut self);

    /// Actively pull the line low (direction = output, latch low)
    fn drive_low(&mut self);

    /// Check if this pin is currently pulling the line low
    fn is_driving_low(&self) -> bool;
}
