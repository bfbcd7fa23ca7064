//! Display driver trait for the rangefinder OLED

/// Errors that can occur with the display hardware
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Bus,
    /// Display not initialized
    NotInitialized,
}

/// Trait for the graphical display
///
/// This trait abstracts a small monochrome framebuffer panel. Buffer
/// operations only touch RAM; `show` transfers the buffer to the
/// hardware. Coordinates outside the panel are clipped, not errors,
/// so callers may draw with virtual coordinates wider than the panel.
pub trait DisplayDriver {
    /// Clear the frame buffer
    fn clear_buffer(&mut self) -> Result<(), DisplayError>;

    /// Draw text with its top-left corner at pixel (x, y)
    ///
    /// - `scale`: integer glyph magnification (1 = 6x8 pixels per char)
    fn draw_string(&mut self, x: u8, y: u8, scale: u8, text: &str) -> Result<(), DisplayError>;

    /// Draw a line from (x0, y0) to (x1, y1)
    fn draw_line(&mut self, x0: u8, y0: u8, x1: u8, y1: u8) -> Result<(), DisplayError>;

    /// Transfer the frame buffer to the panel
    fn show(&mut self) -> Result<(), DisplayError>;
}
