//! 2-wire (I2C) transport.

use display_interface::DisplayError;
use embedded_hal::i2c::{I2c, Operation};

use super::{sealed, Transport};
use crate::command::{I2C_COMMAND_PREFIX, I2C_DATA_PREFIX};

/// SSD1306 over I2C.
///
/// Commands travel as the 2-byte frame `[0x80, command]`. Data travels as
/// `[0x40, data...]` in a single write: the prefix and the block are issued
/// as two write operations of one transaction, which `embedded-hal` requires
/// to be merged without a repeated start, so no copy of the frame buffer is
/// needed.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cTransport<I2C>
where
    I2C: I2c,
{
    /// Create a new I2C transport. No bus traffic is generated.
    ///
    /// # Arguments
    /// * `i2c`: I2C peripheral (takes ownership for exclusive access).
    /// * `address`: 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address this transport talks to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> sealed::Sealed for I2cTransport<I2C> {}

impl<I2C> Transport for I2cTransport<I2C>
where
    I2C: I2c,
{
    fn send_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[I2C_COMMAND_PREFIX, command])
            .map_err(|_| DisplayError::BusWriteError)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[I2C_DATA_PREFIX]), Operation::Write(data)],
            )
            .map_err(|_| DisplayError::BusWriteError)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingI2c;

    #[test]
    fn command_frame_is_prefixed_with_0x80() {
        let bus = RecordingI2c::new();
        let mut transport = I2cTransport::new(bus.clone(), 0x3C);
        transport.send_command(0xAF).unwrap();

        assert_eq!(bus.frames(), vec![(0x3C, vec![0x80, 0xAF])]);
    }

    #[test]
    fn data_block_is_one_frame_prefixed_with_0x40() {
        let bus = RecordingI2c::new();
        let mut transport = I2cTransport::new(bus.clone(), 0x3D);
        transport.send_data(&[1, 2, 3, 4]).unwrap();

        assert_eq!(bus.frames(), vec![(0x3D, vec![0x40, 1, 2, 3, 4])]);
    }

    #[test]
    fn bus_failure_maps_to_bus_write_error() {
        let bus = RecordingI2c::new();
        bus.fail_after(0);
        let mut transport = I2cTransport::new(bus.clone(), 0x3C);

        assert!(matches!(
            transport.send_command(0xAE),
            Err(DisplayError::BusWriteError)
        ));
        assert!(matches!(
            transport.send_data(&[0; 8]),
            Err(DisplayError::BusWriteError)
        ));
        assert!(bus.frames().is_empty());
    }

    #[test]
    fn release_returns_the_bus() {
        let transport = I2cTransport::new(RecordingI2c::new(), 0x3C);
        assert_eq!(transport.address(), 0x3C);
        let bus = transport.release();
        assert!(bus.frames().is_empty());
    }
}
