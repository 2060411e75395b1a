//! Blocking status-LED blink.

use embedded_hal::{delay::DelayNs, digital::OutputPin};

/// Blink `led` `count` times, blocking the caller.
///
/// Each cycle drives the pin low for `period_ms`, then high for `period_ms`,
/// so the LED is left high. A `count` of zero does nothing.
///
/// # Errors
///
/// Returns the pin error of the first failed write; the remaining cycles
/// are skipped.
pub fn blink<P, D>(led: &mut P, delay: &mut D, count: u32, period_ms: u32) -> Result<(), P::Error>
where
    P: OutputPin,
    D: DelayNs,
{
    for _ in 0..count {
        led.set_low()?;
        delay.delay_ms(period_ms);
        led.set_high()?;
        delay.delay_ms(period_ms);
    }
    Ok(())
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingDelay;

    use embedded_hal_mock::eh1::delay::NoopDelay;
    use embedded_hal_mock::eh1::digital::{
        Mock as PinMock, State as PinState, Transaction as PinTransaction,
    };

    #[test]
    fn blinks_low_then_high_count_times() {
        let mut led = PinMock::new(&[
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
            PinTransaction::set(PinState::High),
        ]);
        let mut delay = RecordingDelay::default();

        blink(&mut led, &mut delay, 3, 50).unwrap();

        assert_eq!(delay.delays_ms, vec![50; 6]);
        led.done();
    }

    #[test]
    fn zero_count_touches_nothing() {
        let mut led = PinMock::new(&[]);
        blink(&mut led, &mut NoopDelay, 0, 50).unwrap();
        led.done();
    }
}
