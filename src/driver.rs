//! Blocking bit-bang driver for the strip's data line.
//!
//! [`Ws2812`] serializes a [`FrameBuffer`] onto a single GPIO line: every
//! byte in buffer order, every bit MSB-first, each bit as one high/low
//! pulse pair shaped by [`PulseTimings`], then the reset hold that latches
//! the frame. The driver is stateless across calls — each transmission is
//! a complete, self-contained frame.
//!
//! Timing correctness is a contract with the execution environment, not
//! something this layer can check. The [`DelayNs`] implementation must
//! resolve the sub-microsecond holds after its own call overhead, and the
//! transmission must not be preempted; on targets where interrupts can
//! fire, run [`Ws2812::write_frame`] inside a critical section. A violated
//! contract shows up as wrong or flickering colors on the physical strip,
//! never as an error value.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use smart_leds::{RGB8, SmartLedsWrite};

use crate::frame::FrameBuffer;
use crate::timing::PulseTimings;

/// Bit-bang driver for WS2812B-class strips.
///
/// Owns the data pin and the calibrated delay. Pin errors from the HAL
/// propagate out of every transmit operation; infallible pins (the common
/// case) make these operations infallible too.
pub struct Ws2812<P: OutputPin, D: DelayNs> {
    pin: P,
    delay: D,
    timings: PulseTimings,
}

impl<P: OutputPin, D: DelayNs> Ws2812<P, D> {
    /// Creates a driver with [`PulseTimings::WS2812B`].
    ///
    /// The pin must already be configured as a push-pull output; it is
    /// parked low here so the first frame starts from a defined level.
    pub fn new(pin: P, delay: D) -> Self {
        Self::with_timings(pin, delay, PulseTimings::WS2812B)
    }

    /// Creates a driver with caller-provided pulse timings.
    pub fn with_timings(mut pin: P, delay: D, timings: PulseTimings) -> Self {
        pin.set_low().ok();
        Self { pin, delay, timings }
    }

    /// The pulse timings this driver transmits with.
    pub fn timings(&self) -> &PulseTimings {
        &self.timings
    }

    /// Transmits a full frame and latches it.
    ///
    /// Blocks for the whole transmission: 24 bits per LED at the nominal
    /// bit period, plus the reset hold (see
    /// [`PulseTimings::frame_duration_ns`]). Once started it runs to
    /// completion — the strip cannot use a partial frame.
    pub fn write_frame<const N: usize>(&mut self, frame: &FrameBuffer<N>) -> Result<(), P::Error> {
        for &byte in frame.as_bytes() {
            self.write_byte(byte)?;
        }
        self.latch();
        Ok(())
    }

    /// Consumes the driver, handing back the pin and the delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }

    /// Emits one byte as eight pulse pairs, MSB first.
    #[inline]
    fn write_byte(&mut self, byte: u8) -> Result<(), P::Error> {
        let mut data = byte;
        for _ in 0..8 {
            if data & 0x80 != 0 {
                self.pin.set_high()?;
                self.delay.delay_ns(self.timings.t1h);
                self.pin.set_low()?;
                self.delay.delay_ns(self.timings.t1l);
            } else {
                self.pin.set_high()?;
                self.delay.delay_ns(self.timings.t0h);
                self.pin.set_low()?;
                self.delay.delay_ns(self.timings.t0l);
            }
            data <<= 1;
        }
        Ok(())
    }

    /// Holds the line low until the strip latches the frame.
    ///
    /// The line is already low after the final bit's low pulse.
    fn latch(&mut self) {
        self.delay.delay_ns(self.timings.reset);
    }
}

impl<P: OutputPin, D: DelayNs> SmartLedsWrite for Ws2812<P, D> {
    type Error = P::Error;
    type Color = RGB8;

    /// Transmits colors straight from an iterator, green byte first per
    /// LED, then latches.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for item in iterator {
            let color = item.into();
            self.write_byte(color.g)?;
            self.write_byte(color.r)?;
            self.write_byte(color.b)?;
        }
        self.latch();
        Ok(())
    }
}
