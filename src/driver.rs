//! SSD1306 display controller.
//!
//! [`OledDriver`] owns the frame buffer and the bus transport, sequences the
//! controller's power-on configuration, and turns drawing requests into
//! frame buffer updates. Nothing reaches the panel until
//! [`flush()`](OledDriver::flush) is called.

use embedded_graphics::{
    mono_font::{ascii::FONT_5X8, MonoFont, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::command::*;
use crate::config::DisplayConfig;
use crate::error::OledError;
use crate::framebuffer::Framebuffer;
use crate::glyphs::{glyph_key, GlyphTable, FAST_GLYPHS, GLYPH_SIZE};
use crate::transport::Transport;

/// Number of command bytes written by [`OledDriver::init_sequence()`].
pub const INIT_SEQUENCE_LEN: usize = 25;

/// Side of one text cell in pixels.
pub const TEXT_CELL_SIZE: u32 = 8;

/// 5×8 ASCII font padded so every character advances one 8 px cell.
const CELL_FONT: MonoFont<'static> = MonoFont {
    character_spacing: TEXT_CELL_SIZE - 5,
    ..FONT_5X8
};

/// Contrast level programmed by the init sequence.
const DEFAULT_CONTRAST: u8 = 0xFF;

/// Ordered controller register writes that bring the panel up.
///
/// Only the multiplex ratio and COM pin layout (geometry) and the
/// pre-charge period and charge pump (supply) depend on `config`.
pub fn init_commands(config: &DisplayConfig) -> [u8; INIT_SEQUENCE_LEN] {
    let (precharge, charge_pump) = if config.external_vcc {
        (0x22, 0x10)
    } else {
        (0xF1, 0x14)
    };
    [
        SET_DISP,
        // address setting
        SET_MEM_ADDR,
        0x00, // horizontal
        // resolution and layout
        SET_DISP_START_LINE,
        SET_SEG_REMAP | 0x01,
        SET_MUX_RATIO,
        config.height.saturating_sub(1) as u8,
        SET_COM_OUT_DIR | 0x08,
        SET_DISP_OFFSET,
        0x00,
        SET_COM_PIN_CFG,
        config.com_pin_config(),
        // timing and driving scheme
        SET_DISP_CLK_DIV,
        0x80,
        SET_PRECHARGE,
        precharge,
        SET_VCOM_DESEL,
        0x30, // 0.83 * Vcc
        // display
        SET_CONTRAST,
        DEFAULT_CONTRAST,
        SET_ENTIRE_ON, // follow RAM
        SET_NORM_INV,
        // charge pump
        SET_CHARGE_PUMP,
        charge_pump,
        SET_DISP | 0x01,
    ]
}

/// Blocking driver for an SSD1306 panel.
///
/// Generic over the [`Transport`], which is either an
/// [`I2cTransport`](crate::I2cTransport) or an
/// [`SpiTransport`](crate::SpiTransport).
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`]: validates the geometry, runs the init
///    sequence and pushes the blank frame buffer. The driver is ready when
///    it returns.
/// 2. Draw into the frame buffer ([`draw_text()`](Self::draw_text),
///    [`draw_wide_glyphs()`](Self::draw_wide_glyphs), or any
///    `embedded-graphics` drawable via [`framebuffer_mut()`](Self::framebuffer_mut)).
/// 3. [`OledDriver::flush()`]: transfers the frame buffer to hardware.
///
/// # Example
///
/// ```no_run
/// use oled_display_rs::{DisplayConfig, I2cTransport, OledDriver, DEFAULT_I2C_ADDRESS};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) -> Result<(), oled_display_rs::OledError> {
/// let transport = I2cTransport::new(i2c, DEFAULT_I2C_ADDRESS);
/// let mut oled = OledDriver::new(transport, DisplayConfig::default())?;
/// oled.draw_text("Hello,World", 0, 0);
/// oled.draw_wide_glyphs("天气多云", 0, 1);
/// oled.flush()?;
/// # Ok(())
/// # }
/// ```
pub struct OledDriver<T> {
    transport: T,
    config: DisplayConfig,
    framebuffer: Framebuffer,
    power_on: bool,
    contrast: u8,
    inverted: bool,
}

impl<T> OledDriver<T>
where
    T: Transport,
{
    /// Construct and initialise the driver.
    ///
    /// Sends the init sequence followed by one full (blank) frame.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InvalidGeometry`] before any bus traffic if the
    /// panel size is unsupported, or [`OledError::Transport`] if a transfer
    /// fails.
    pub fn new(transport: T, config: DisplayConfig) -> Result<Self, OledError> {
        config.validate()?;

        let mut driver = Self {
            transport,
            config,
            framebuffer: Framebuffer::new(config.width, config.height),
            power_on: false,
            contrast: DEFAULT_CONTRAST,
            inverted: false,
        };
        driver.init_sequence()?;
        driver.flush()?;

        #[cfg(feature = "defmt")]
        defmt::info!("OLED {}x{} initialised", config.width, config.height);

        Ok(driver)
    }

    /// Send the controller configuration sequence.
    ///
    /// Leaves the panel on, at full contrast and not inverted. The frame
    /// buffer is not touched. Re-running this is the only recovery the
    /// controller offers after a transport failure.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::Transport`] on the first failed command; the
    /// remaining commands are not sent.
    pub fn init_sequence(&mut self) -> Result<(), OledError> {
        for command in init_commands(&self.config) {
            self.transport.send_command(command)?;
        }
        self.power_on = true;
        self.contrast = DEFAULT_CONTRAST;
        self.inverted = false;
        Ok(())
    }

    /// Transfer the whole frame buffer to the display.
    ///
    /// Sets the column window (shifted by 32 on 64-column panels) and the
    /// page window, then streams the buffer as a single data transfer.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::Transport`] on a bus-level failure. The frame
    /// buffer is unchanged, so calling `flush()` again is safe.
    pub fn flush(&mut self) -> Result<(), OledError> {
        let (x0, x1) = self.config.column_window();
        let last_page = self.config.pages().saturating_sub(1) as u8;
        for command in [SET_COL_ADDR, x0, x1, SET_PAGE_ADDR, 0, last_page] {
            self.transport.send_command(command)?;
        }
        self.transport
            .send_data(self.framebuffer.as_bytes())
            .map_err(|e| {
                #[cfg(feature = "defmt")]
                defmt::error!("OLED frame transfer failed");
                OledError::Transport(e)
            })
    }

    /// Turn the panel on. Display RAM is preserved.
    pub fn power_on(&mut self) -> Result<(), OledError> {
        self.transport.send_command(SET_DISP | 0x01)?;
        self.power_on = true;
        Ok(())
    }

    /// Turn the panel off (sleep). Display RAM is preserved.
    pub fn power_off(&mut self) -> Result<(), OledError> {
        self.transport.send_command(SET_DISP)?;
        self.power_on = false;
        Ok(())
    }

    /// Set the contrast level (0–255).
    pub fn set_contrast(&mut self, level: u8) -> Result<(), OledError> {
        self.transport.send_command(SET_CONTRAST)?;
        self.transport.send_command(level)?;
        self.contrast = level;
        Ok(())
    }

    /// Invert (`true`) or restore (`false`) the pixel polarity of the panel.
    ///
    /// Applied by the controller; the frame buffer is unchanged.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), OledError> {
        self.transport
            .send_command(SET_NORM_INV | u8::from(inverted))?;
        self.inverted = inverted;
        Ok(())
    }

    /// Draw ASCII text with its top-left corner in text cell `(col, row)`.
    ///
    /// Cells are 8×8 px; each character advances one cell and `\n` moves
    /// to the next cell row. Characters outside ASCII render as `?`.
    pub fn draw_text(&mut self, text: &str, col: u32, row: u32) {
        let origin = cell_origin(col, row, TEXT_CELL_SIZE);
        let style = MonoTextStyle::new(&CELL_FONT, BinaryColor::On);
        // Drawing into the frame buffer cannot fail.
        let _ = Text::with_baseline(text, origin, style, Baseline::Top).draw(&mut self.framebuffer);
    }

    /// Draw 16×16 wide glyphs from [`FAST_GLYPHS`], left to right, starting
    /// at glyph cell `(col, row)`.
    ///
    /// Returns the number of characters that had no glyph. See
    /// [`draw_wide_glyphs_from()`](Self::draw_wide_glyphs_from).
    pub fn draw_wide_glyphs(&mut self, text: &str, col: u32, row: u32) -> usize {
        self.draw_wide_glyphs_from(&FAST_GLYPHS, text, col, row)
    }

    /// Draw 16×16 wide glyphs from `table`, starting at glyph cell
    /// `(col, row)`.
    ///
    /// Character `i` of `text` lands at pixel
    /// `(col * 16 + 16 * i, row * 16)`. A character missing from the table
    /// leaves its cell untouched and is logged; it still occupies a cell,
    /// and the characters after it are drawn.
    ///
    /// Returns the number of characters that had no glyph.
    pub fn draw_wide_glyphs_from(
        &mut self,
        table: &GlyphTable,
        text: &str,
        col: u32,
        row: u32,
    ) -> usize {
        let origin = cell_origin(col, row, GLYPH_SIZE);
        let mut missing = 0;

        for (index, ch) in text.chars().enumerate() {
            let x = origin.x.saturating_add(offset(index, GLYPH_SIZE));
            let bitmap = glyph_key(ch)
                .ok_or(OledError::GlyphNotFound(u32::from(ch)))
                .and_then(|key| table.row_major(key));

            match bitmap {
                Ok(bitmap) => self
                    .framebuffer
                    .blit(&bitmap, x, origin.y, GLYPH_SIZE, GLYPH_SIZE),
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Skipping glyph: {}", _e);
                    missing += 1;
                }
            }
        }

        missing
    }

    /// The frame buffer.
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.framebuffer
    }

    /// Mutable access to the frame buffer, which is an `embedded-graphics`
    /// [`DrawTarget`].
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    /// Construction-time configuration.
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// `true` unless the panel was turned off with [`power_off()`](Self::power_off).
    pub fn is_on(&self) -> bool {
        self.power_on
    }

    /// Last contrast level written to the controller.
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// `true` if the panel is showing inverted pixels.
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Consume the driver and hand back the transport.
    pub fn release(self) -> T {
        self.transport
    }
}

/// Top-left pixel of cell `(col, row)` in a grid of `cell`-sized squares.
fn cell_origin(col: u32, row: u32, cell: u32) -> Point {
    let to_px = |n: u32| i32::try_from(n.saturating_mul(cell)).unwrap_or(i32::MAX);
    Point::new(to_px(col), to_px(row))
}

/// Horizontal pixel offset of the `index`-th cell.
fn offset(index: usize, cell: u32) -> i32 {
    i32::try_from(index)
        .unwrap_or(i32::MAX)
        .saturating_mul(cell as i32)
}

// ── Tests ────────────────────────────────────────────────────────────────
