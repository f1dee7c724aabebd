//! Two-digit display on daisy-chained 74HC595 shift registers
//!
//! Each register drives the segments of one digit. Bits shift in on the
//! rising clock edge and appear on the outputs on the rising latch edge,
//! so the digits never show a half-shifted pattern.
//!
//! ```text
//!  data ──> [595 #1: ones] ──QH'──> [595 #2: tens]
//! ```
//!
//! The ones glyph is shifted first and ends up in the far register
//! after the tens glyph pushes it along; the board wires that register
//! to the right-hand digit.

use thermion_core::segment;
use thermion_core::traits::SegmentDisplay;
use thermion_hal::OutputPin;

/// Seven-segment display behind two chained 74HC595s
pub struct ShiftRegisterDisplay<DATA, CLK, LATCH> {
    data: DATA,
    clock: CLK,
    latch: LATCH,
    /// Value on the outputs, if anything has been latched yet
    shown: Option<u8>,
}

impl<DATA: OutputPin, CLK: OutputPin, LATCH: OutputPin> ShiftRegisterDisplay<DATA, CLK, LATCH> {
    /// Take the three control pins, parking clock and latch low
    pub fn new(data: DATA, mut clock: CLK, mut latch: LATCH) -> Self {
        clock.set_low();
        latch.set_low();
        Self {
            data,
            clock,
            latch,
            shown: None,
        }
    }

    /// Value currently latched
    pub fn shown(&self) -> Option<u8> {
        self.shown
    }

    /// Shift one glyph, least significant bit first
    fn shift_out(&mut self, glyph: u8) {
        for bit in 0..8 {
            self.data.set_state(glyph & (1 << bit) != 0);
            self.clock.set_low();
            self.clock.set_high();
        }
    }

    /// Move the shifted bits onto the outputs
    fn latch(&mut self) {
        self.latch.set_low();
        self.latch.set_high();
    }

    /// Give the pins back
    pub fn release(self) -> (DATA, CLK, LATCH) {
        (self.data, self.clock, self.latch)
    }
}

impl<DATA: OutputPin, CLK: OutputPin, LATCH: OutputPin> SegmentDisplay
    for ShiftRegisterDisplay<DATA, CLK, LATCH>
{
    fn render(&mut self, value: u8) {
        let [ones, tens] = segment::encode(value);
        self.shift_out(ones);
        self.shift_out(tens);
        self.latch();
        self.shown = Some(value.min(segment::MAX_VALUE));
    }
}
