//! Blocking SSD1306 OLED driver for I2C and 4-wire SPI panels.
//!
//! This crate provides [`OledDriver`], which owns a page-layout
//! [`Framebuffer`] and one of two bus transports, runs the controller's
//! power-on sequence, and renders ASCII text and 16×16 wide glyphs into the
//! frame buffer. Changes become visible on [`OledDriver::flush()`].
//!
//! # Quick Start
//!
//! ```ignore
//! use oled_display_rs::{
//!     DisplayConfig, OledDriver, SpiTransport, DEFAULT_SPI_CLOCK_HZ,
//! };
//!
//! let transport = SpiTransport::new(spi, dc, rst, cs, DEFAULT_SPI_CLOCK_HZ, &mut delay)?;
//! let mut oled = OledDriver::new(transport, DisplayConfig::default())?;
//!
//! oled.draw_text("Hello,World", 0, 0);
//! oled.draw_wide_glyphs("天气多云", 0, 1);
//! oled.flush()?;
//! ```
//!
//! # Supported panels
//!
//! 128×64, 128×32, 64×64 and 64×32. Any other size is rejected with
//! [`OledError::InvalidGeometry`].
//!
//! # Crate Features
//!
//! - **`defmt`**: structured logging via [`defmt`] and
//!   [`defmt::Format`] implementations on public types.

#![cfg_attr(not(test), no_std)]

pub mod blink;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod glyphs;
pub mod transport;

#[cfg(test)]
mod testing;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use blink::blink;
pub use config::{DisplayConfig, DEFAULT_I2C_ADDRESS, DEFAULT_SPI_CLOCK_HZ};
pub use driver::OledDriver;
pub use error::OledError;
pub use framebuffer::Framebuffer;
pub use glyphs::{glyph_key, GlyphTable, FAST_GLYPHS, LEGACY_GLYPHS};
pub use transport::{I2cTransport, SpiClock, SpiTransport, Transport};
