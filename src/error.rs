//! Error types for the OLED display driver.

use display_interface::DisplayError;

/// Errors that can occur during OLED display operations.
///
/// Bus and control-pin failures from either transport are folded into
/// [`DisplayError`], so this enum is non-generic.
#[derive(Debug)]
pub enum OledError {
    /// Transport error (wraps I2C/SPI bus and DC/CS/RST pin failures).
    ///
    /// Never retried by the driver. The in-memory frame buffer is left
    /// untouched, so a repeated [`flush()`](crate::OledDriver::flush) is safe.
    Transport(DisplayError),
    /// The 24-bit key of a wide character is not present in the glyph table.
    ///
    /// Drawing recovers from this locally by skipping the glyph.
    GlyphNotFound(u32),
    /// The requested panel size is not one of the supported geometries.
    InvalidGeometry {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Transport(e)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Transport(_e) => defmt::write!(f, "Transport error"),
            OledError::GlyphNotFound(key) => defmt::write!(f, "Glyph not found: {=u32:#x}", key),
            OledError::InvalidGeometry { width, height } => {
                defmt::write!(f, "Invalid geometry {}x{}", width, height)
            }
        }
    }
}
