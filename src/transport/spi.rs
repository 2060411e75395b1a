//! 4-wire (SPI + D/C#) transport.

use display_interface::DisplayError;
use embedded_hal::{
    delay::DelayNs,
    digital::OutputPin,
    spi::{ErrorType, SpiBus},
};

use super::{sealed, Transport};

/// Reset line held inactive before the pulse, in milliseconds.
const RESET_SETUP_MS: u32 = 1;

/// Width of the active-low reset pulse, in milliseconds.
const RESET_PULSE_MS: u32 = 10;

/// Runtime clock configuration for an SPI bus.
///
/// `embedded-hal` leaves bus configuration to the HAL. The SSD1306 shares
/// its bus with whatever else the board hangs off it, so the transport
/// reapplies its own clock rate before every transfer; HAL glue implements
/// this trait to make that possible.
pub trait SpiClock: ErrorType {
    /// Reconfigure the bus clock to `hz`.
    fn set_clock_rate(&mut self, hz: u32) -> Result<(), Self::Error>;
}

/// SSD1306 over a 4-wire SPI bus.
///
/// D/C# low selects command mode, high selects data mode. CS# is driven
/// low around each transfer and high between transfers.
pub struct SpiTransport<SPI, DC, RST, CS> {
    spi: SPI,
    dc: DC,
    rst: RST,
    cs: CS,
    clock_hz: u32,
}

impl<SPI, DC, RST, CS> SpiTransport<SPI, DC, RST, CS>
where
    SPI: SpiBus + SpiClock,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
{
    /// Create the transport and hardware-reset the controller.
    ///
    /// Puts D/C# low and CS# high, then pulses RST#: high for 1 ms, low for
    /// 10 ms, high again. The controller latches its power-on configuration
    /// during this window, so the timings must not be shortened.
    ///
    /// # Arguments
    /// * `spi`: SPI bus (takes ownership for exclusive access).
    /// * `dc`, `rst`, `cs`: data/command select, reset and chip-select pins.
    /// * `clock_hz`: bus clock applied before every transfer.
    /// * `delay`: millisecond delay used for the reset pulse.
    ///
    /// # Errors
    ///
    /// Returns [`DisplayError::DCError`], [`DisplayError::CSError`] or
    /// [`DisplayError::RSError`] if driving the respective pin fails.
    pub fn new<D: DelayNs>(
        spi: SPI,
        dc: DC,
        rst: RST,
        cs: CS,
        clock_hz: u32,
        delay: &mut D,
    ) -> Result<Self, DisplayError> {
        let mut transport = Self {
            spi,
            dc,
            rst,
            cs,
            clock_hz,
        };
        transport.dc.set_low().map_err(|_| DisplayError::DCError)?;
        transport.cs.set_high().map_err(|_| DisplayError::CSError)?;
        transport.reset(delay)?;
        Ok(transport)
    }

    /// Pulse the reset line.
    pub fn reset<D: DelayNs>(&mut self, delay: &mut D) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_SETUP_MS);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)
    }

    /// Bus clock applied before every transfer.
    pub fn clock_rate(&self) -> u32 {
        self.clock_hz
    }

    /// Release the bus and pins as `(spi, dc, rst, cs)`.
    pub fn release(self) -> (SPI, DC, RST, CS) {
        (self.spi, self.dc, self.rst, self.cs)
    }

    /// One framed transfer: reclock, select mode, assert CS#, write,
    /// wait for the bus to drain, release CS#.
    fn transfer(&mut self, data_mode: bool, bytes: &[u8]) -> Result<(), DisplayError> {
        self.spi
            .set_clock_rate(self.clock_hz)
            .map_err(|_| DisplayError::BusWriteError)?;
        self.cs.set_high().map_err(|_| DisplayError::CSError)?;
        if data_mode {
            self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        } else {
            self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        }
        self.cs.set_low().map_err(|_| DisplayError::CSError)?;

        let written = self
            .spi
            .write(bytes)
            .and_then(|()| self.spi.flush())
            .map_err(|_| DisplayError::BusWriteError);

        // CS# is released even when the write failed.
        self.cs.set_high().map_err(|_| DisplayError::CSError)?;
        written
    }
}

impl<SPI, DC, RST, CS> sealed::Sealed for SpiTransport<SPI, DC, RST, CS> {}

impl<SPI, DC, RST, CS> Transport for SpiTransport<SPI, DC, RST, CS>
where
    SPI: SpiBus + SpiClock,
    DC: OutputPin,
    RST: OutputPin,
    CS: OutputPin,
{
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.transfer(false, &[command])
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.transfer(true, data)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
