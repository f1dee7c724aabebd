//! Display sink trait

/// Numeric display with a fixed number of seven-segment digits
///
/// Rendering is fire-and-forget: the display is a latch chain with no
/// way to report a failure back.
pub trait SegmentDisplay {
    /// Show a value in the display's range (0-99 for two digits)
    fn render(&mut self, value: u8);
}
