//! Seven-segment glyph encoding
//!
//! Glyph bit layout (one byte per digit, as wired on the board):
//!
//! ```text
//!  bit:  7   6   5   4   3   2   1   0
//!  seg:  dp  a   b   c   d   e   f   g
//! ```
//!
//! The decimal point is never lit.

/// Segment patterns for the digits 0-9
pub const GLYPHS: [u8; 10] = [
    0b0111_1110, // 0
    0b0011_0000, // 1
    0b0110_1101, // 2
    0b0111_1001, // 3
    0b0011_0011, // 4
    0b0101_1011, // 5
    0b0101_1111, // 6
    0b0111_0000, // 7
    0b0111_1111, // 8
    0b0111_1011, // 9
];

/// All segments off
pub const BLANK: u8 = 0b0000_0000;

/// Largest value a two-digit display can show
pub const MAX_VALUE: u8 = 99;

/// Value shown before the first reading; lights every segment
pub const SELF_TEST_VALUE: u8 = 88;

/// Glyph for a single decimal digit
///
/// Anything above 9 encodes as [`BLANK`].
pub fn glyph(digit: u8) -> u8 {
    GLYPHS.get(digit as usize).copied().unwrap_or(BLANK)
}

/// Encode a value as `[ones, tens]` glyphs, in shift-out order
///
/// A leading zero is blanked, so 7 shows as " 7" and 0 as " 0".
/// Values above [`MAX_VALUE`] saturate.
pub fn encode(value: u8) -> [u8; 2] {
    let value = value.min(MAX_VALUE);
    let ones = value % 10;
    let tens = value / 10;

    let tens_glyph = if tens == 0 { BLANK } else { glyph(tens) };

    [glyph(ones), tens_glyph]
}

/// Map a sensor reading onto the display range
///
/// Below-zero readings show as 0 and anything hotter than 99 °C as 99.
pub fn clamp_celsius(celsius: i8) -> u8 {
    celsius.clamp(0, MAX_VALUE as i8) as u8
}
