//! Weather screen demo
//!
//! Blinks the status LED, brings up a 128×64 SSD1306 over 4-wire SPI and
//! shows a greeting, three rows of weather glyphs and a refresh counter.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes             |
//! |-----------|------------|-------------------|
//! | SPI1 SCK  | GP10       | OLED D0           |
//! | SPI1 MOSI | GP11       | OLED D1           |
//! | OLED DC   | GP12       |                   |
//! | OLED RES  | GP13       | active low        |
//! | OLED CS   | GP9        | active low        |
//! | LED       | GP25       | on-board LED      |

#![no_std]
#![no_main]

use core::fmt::Write;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::peripherals::SPI1;
use embassy_rp::spi::{self, Spi};
use embassy_time::{Delay, Duration, Timer};
use embedded_hal::spi::{ErrorType, SpiBus};
use heapless::String;
use {defmt_rtt as _, panic_probe as _};

use oled_display_rs::{
    blink, DisplayConfig, OledDriver, OledError, SpiClock, SpiTransport, DEFAULT_SPI_CLOCK_HZ,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Blocking SPI1 with a clock that can be changed between transfers.
struct ClockedSpi(Spi<'static, SPI1, spi::Blocking>);

impl ErrorType for ClockedSpi {
    type Error = spi::Error;
}

impl SpiBus for ClockedSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        SpiBus::read(&mut self.0, words)
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        SpiBus::write(&mut self.0, words)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        SpiBus::transfer(&mut self.0, read, write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        SpiBus::transfer_in_place(&mut self.0, words)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        SpiBus::flush(&mut self.0)
    }
}

impl SpiClock for ClockedSpi {
    fn set_clock_rate(&mut self, hz: u32) -> Result<(), Self::Error> {
        self.0.set_frequency(hz);
        Ok(())
    }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Weather demo starting");

    let mut led = Output::new(p.PIN_25, Level::High);
    let mut delay = Delay;
    // GPIO writes on the RP2350 cannot fail.
    blink(&mut led, &mut delay, 10, 50).ok();

    // --- SPI1 (GP10 = SCK, GP11 = MOSI), mode 0 ---
    let mut config = spi::Config::default();
    config.frequency = DEFAULT_SPI_CLOCK_HZ;
    let spi = ClockedSpi(Spi::new_blocking_txonly(p.SPI1, p.PIN_10, p.PIN_11, config));

    let dc = Output::new(p.PIN_12, Level::Low);
    let rst = Output::new(p.PIN_13, Level::Low);
    let cs = Output::new(p.PIN_9, Level::High);

    let transport = unwrap!(SpiTransport::new(
        spi,
        dc,
        rst,
        cs,
        DEFAULT_SPI_CLOCK_HZ,
        &mut delay,
    )
    .map_err(OledError::from));
    let mut oled = unwrap!(OledDriver::new(transport, DisplayConfig::default()));
    info!("OLED initialised");

    let mut refreshes: u32 = 0;
    loop {
        oled.framebuffer_mut().clear(false);
        oled.draw_text("Hello,World", 0, 0);
        for row in 1..3 {
            oled.draw_wide_glyphs("天气多云", 0, row);
        }

        let mut counter: String<16> = String::new();
        // core::fmt::Write: works in no_std without alloc.
        let _ = write!(counter, "#{}", refreshes);
        oled.draw_text(&counter, 0, 7);

        if let Err(e) = oled.flush() {
            error!("Flush failed: {}", e);
        }

        refreshes = refreshes.wrapping_add(1);
        Timer::after(Duration::from_secs(1)).await;
    }
}
