//! Recording bus fakes for unit tests.
//!
//! The fakes share their state through `Rc<RefCell<..>>`, so a test keeps a
//! clone as a handle and inspects the traffic after the original has been
//! moved into a transport.

use std::{cell::RefCell, rc::Rc};

use embedded_hal::{delay::DelayNs, i2c, spi};

use crate::transport::SpiClock;

// ── I2C ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct I2cLog {
    frames: Vec<(u8, Vec<u8>)>,
    fail_after: Option<usize>,
}

/// I2C bus that records each transaction as one `(address, bytes)` frame.
///
/// Write operations of a transaction are concatenated, which is what the
/// device sees on the wire.
#[derive(Clone, Default)]
pub struct RecordingI2c {
    log: Rc<RefCell<I2cLog>>,
}

impl RecordingI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// All frames recorded so far.
    pub fn frames(&self) -> Vec<(u8, Vec<u8>)> {
        self.log.borrow().frames.clone()
    }

    /// Frame payloads without the address.
    pub fn payloads(&self) -> Vec<Vec<u8>> {
        self.log.borrow().frames.iter().map(|(_, bytes)| bytes.clone()).collect()
    }

    /// Let `frames` more transactions succeed, then fail every later one.
    pub fn fail_after(&self, frames: usize) {
        let mut log = self.log.borrow_mut();
        log.fail_after = Some(log.frames.len() + frames);
    }

    /// Stop injecting failures.
    pub fn recover(&self) {
        self.log.borrow_mut().fail_after = None;
    }

    /// Forget recorded frames.
    pub fn clear(&self) {
        self.log.borrow_mut().frames.clear();
    }
}

impl i2c::ErrorType for RecordingI2c {
    type Error = i2c::ErrorKind;
}

impl i2c::I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [i2c::Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut log = self.log.borrow_mut();
        if log.fail_after.is_some_and(|limit| log.frames.len() >= limit) {
            return Err(i2c::ErrorKind::Other);
        }
        let mut frame = Vec::new();
        for operation in operations.iter() {
            match operation {
                i2c::Operation::Write(bytes) => frame.extend_from_slice(bytes),
                i2c::Operation::Read(_) => return Err(i2c::ErrorKind::Other),
            }
        }
        log.frames.push((address, frame));
        Ok(())
    }
}

// ── SPI ──────────────────────────────────────────────────────────────────

/// One observable action on a [`RecordingSpi`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpiEvent {
    Clock(u32),
    Write(Vec<u8>),
    Flush,
}

#[derive(Default)]
struct SpiLog {
    events: Vec<SpiEvent>,
    fail_writes: bool,
}

/// Write-only SPI bus with a settable clock that records every call.
#[derive(Clone, Default)]
pub struct RecordingSpi {
    log: Rc<RefCell<SpiLog>>,
}

impl RecordingSpi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SpiEvent> {
        self.log.borrow().events.clone()
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self) {
        self.log.borrow_mut().fail_writes = true;
    }
}

impl spi::ErrorType for RecordingSpi {
    type Error = spi::ErrorKind;
}

impl spi::SpiBus for RecordingSpi {
    fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(spi::ErrorKind::Other)
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        let mut log = self.log.borrow_mut();
        if log.fail_writes {
            return Err(spi::ErrorKind::Other);
        }
        log.events.push(SpiEvent::Write(words.to_vec()));
        Ok(())
    }

    fn transfer(&mut self, _read: &mut [u8], _write: &[u8]) -> Result<(), Self::Error> {
        Err(spi::ErrorKind::Other)
    }

    fn transfer_in_place(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
        Err(spi::ErrorKind::Other)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().events.push(SpiEvent::Flush);
        Ok(())
    }
}

impl SpiClock for RecordingSpi {
    fn set_clock_rate(&mut self, hz: u32) -> Result<(), Self::Error> {
        self.log.borrow_mut().events.push(SpiEvent::Clock(hz));
        Ok(())
    }
}

// ── Delay ────────────────────────────────────────────────────────────────

/// Delay that returns immediately and remembers every millisecond request.
#[derive(Default)]
pub struct RecordingDelay {
    pub delays_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {}

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
