//! Panel configuration and derived geometry.
//!
//! [`DisplayConfig`] is the single source of panel geometry. Everything the
//! controller needs to know about the wiring of a particular module (page
//! count, COM pin layout, column offset of narrow panels) is derived from it.

use crate::error::OledError;

/// Default 7-bit I2C address of SSD1306 modules (`0x3D` when SA0 is high).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x3C;

/// Default SPI clock rate, reapplied before every 4-wire transfer.
pub const DEFAULT_SPI_CLOCK_HZ: u32 = 10 * 1024 * 1024;

/// Size of the largest supported frame buffer (128×64, 1 bit per pixel).
pub const MAX_BUFFER_LEN: usize = 128 * 64 / 8;

/// Supported panel widths in pixels.
pub const SUPPORTED_WIDTHS: [u32; 2] = [64, 128];

/// Supported panel heights in pixels.
pub const SUPPORTED_HEIGHTS: [u32; 2] = [32, 64];

/// Horizontal offset of the visible area on 64-column panels.
const NARROW_PANEL_COLUMN_OFFSET: u8 = 32;

/// Construction-time configuration of the display.
///
/// [`DisplayConfig::default()`] describes the common 128×64 module running
/// from its internal charge pump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// Panel width in pixels. Default: 128.
    pub width: u32,
    /// Panel height in pixels. Default: 64.
    pub height: u32,
    /// `true` when VCC is supplied externally. Selects the pre-charge period
    /// and disables the internal charge pump. Default: `false`.
    pub external_vcc: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: 128,
            height: 64,
            external_vcc: false,
        }
    }
}

impl DisplayConfig {
    /// Configuration for a `width`×`height` panel on the internal charge pump.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            external_vcc: false,
        }
    }

    /// Check that the geometry is one the controller driver supports.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InvalidGeometry`] unless the width is 64 or 128
    /// and the height is 32 or 64.
    pub fn validate(&self) -> Result<(), OledError> {
        if SUPPORTED_WIDTHS.contains(&self.width) && SUPPORTED_HEIGHTS.contains(&self.height) {
            Ok(())
        } else {
            Err(OledError::InvalidGeometry {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Number of 8-row pages.
    pub fn pages(&self) -> u32 {
        self.height / 8
    }

    /// Frame buffer size in bytes: `pages * width`.
    pub fn buffer_len(&self) -> usize {
        (self.pages() * self.width) as usize
    }

    /// Argument of `SET_COM_PIN_CFG`: sequential COM layout on 32-row
    /// panels, alternative layout on everything else.
    pub fn com_pin_config(&self) -> u8 {
        if self.height == 32 {
            0x02
        } else {
            0x12
        }
    }

    /// Inclusive column address window `[x0, x1]` used by `flush()`.
    ///
    /// 64-column panels are wired to the middle of the 128-column RAM, so
    /// both ends are shifted by 32.
    pub fn column_window(&self) -> (u8, u8) {
        let last = (self.width - 1) as u8;
        if self.width == 64 {
            (
                NARROW_PANEL_COLUMN_OFFSET,
                last + NARROW_PANEL_COLUMN_OFFSET,
            )
        } else {
            (0, last)
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let c = DisplayConfig::default();
        assert_eq!(c.width, 128);
        assert_eq!(c.height, 64);
        assert!(!c.external_vcc);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn all_supported_geometries_validate() {
        for &w in &SUPPORTED_WIDTHS {
            for &h in &SUPPORTED_HEIGHTS {
                assert!(DisplayConfig::new(w, h).validate().is_ok(), "{}x{}", w, h);
            }
        }
    }

    #[test]
    fn unsupported_geometry_is_rejected() {
        for (w, h) in [(96, 16), (128, 60), (0, 0), (256, 64), (72, 40)] {
            match DisplayConfig::new(w, h).validate() {
                Err(OledError::InvalidGeometry { width, height }) => {
                    assert_eq!((width, height), (w, h));
                }
                other => panic!("{}x{} should be invalid, got {:?}", w, h, other),
            }
        }
    }

    #[test]
    fn buffer_len_is_pages_times_width() {
        assert_eq!(DisplayConfig::new(128, 64).buffer_len(), 1024);
        assert_eq!(DisplayConfig::new(128, 32).buffer_len(), 512);
        assert_eq!(DisplayConfig::new(64, 32).buffer_len(), 256);
        assert_eq!(DisplayConfig::new(64, 64).pages(), 8);
        assert!(DisplayConfig::default().buffer_len() <= MAX_BUFFER_LEN);
    }

    #[test]
    fn com_pin_config_depends_on_height() {
        assert_eq!(DisplayConfig::new(128, 32).com_pin_config(), 0x02);
        assert_eq!(DisplayConfig::new(128, 64).com_pin_config(), 0x12);
    }

    #[test]
    fn narrow_panels_shift_column_window() {
        assert_eq!(DisplayConfig::new(64, 32).column_window(), (32, 95));
        assert_eq!(DisplayConfig::new(64, 64).column_window(), (32, 95));
        assert_eq!(DisplayConfig::new(128, 64).column_window(), (0, 127));
    }
}
