//! Bus transports between the driver and the SSD1306.
//!
//! The controller distinguishes command bytes from display data. How that
//! distinction is made depends on the wiring, and exactly two wirings are
//! supported:
//!
//! - [`I2cTransport`]: 2-wire bus, a control byte prefixes every transfer.
//! - [`SpiTransport`]: 4-wire bus, a D/C# line selects command or data and
//!   CS# frames every transfer.
//!
//! [`Transport`] is sealed: the set of wirings is closed and the driver is
//! generic over it, so the choice is resolved at compile time.

use display_interface::DisplayError;

mod i2c;
mod spi;

pub use i2c::I2cTransport;
pub use spi::{SpiClock, SpiTransport};

mod sealed {
    pub trait Sealed {}
}

/// Blocking command/data channel to the display controller.
///
/// Every call returns once the underlying bus has completed the transfer.
/// Failures are reported, never retried.
pub trait Transport: sealed::Sealed {
    /// Send a single command (or command argument) byte.
    ///
    /// # Errors
    ///
    /// Returns a [`DisplayError`] if the bus or a control pin fails.
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send a block of display RAM data as one transfer.
    ///
    /// # Errors
    ///
    /// Returns a [`DisplayError`] if the bus or a control pin fails.
    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;
}
