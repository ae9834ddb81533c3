//! Ready-made strip animations.
//!
//! Plain blocking loops over the public buffer and driver operations:
//! mutate the frame, transmit it, wait, repeat. Frame pacing uses its own
//! [`DelayNs`] so the driver's calibrated pulse delay stays untouched.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use smart_leds::RGB8;

use crate::driver::Ws2812;
use crate::frame::{FrameBuffer, FrameError};

/// Errors reported by pattern playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternError<E> {
    /// The data pin failed while transmitting a frame.
    Pin(E),
    /// A frame write fell outside the strip.
    Frame(FrameError),
}

impl<E> From<FrameError> for PatternError<E> {
    fn from(err: FrameError) -> Self {
        PatternError::Frame(err)
    }
}

impl<E: core::fmt::Display> core::fmt::Display for PatternError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PatternError::Pin(err) => write!(f, "data pin error: {}", err),
            PatternError::Frame(err) => write!(f, "frame write rejected: {}", err),
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Display + core::fmt::Debug> std::error::Error for PatternError<E> {}

/// Grows a lit band outward from the strip's center, then refills the
/// strip from both edges inward with a second color.
///
/// Each growth step transmits one frame and waits `step_ms`. One cycle is
/// both phases back to back.
pub fn center_sweep<P, D, T, const N: usize>(
    strip: &mut Ws2812<P, D>,
    frame: &mut FrameBuffer<N>,
    outward: RGB8,
    inward: RGB8,
    cycles: u32,
    step_ms: u32,
    pacer: &mut T,
) -> Result<(), PatternError<P::Error>>
where
    P: OutputPin,
    D: DelayNs,
    T: DelayNs,
{
    let led_count = frame.led_count();
    if led_count == 0 {
        return Ok(());
    }
    let mid = led_count / 2;

    for _ in 0..cycles {
        for i in 0..=mid {
            frame.clear();
            fill(frame, outward, mid - i, (mid + i).min(led_count - 1))?;
            strip.write_frame(frame).map_err(PatternError::Pin)?;
            pacer.delay_ms(step_ms);
        }

        for i in 0..=mid {
            frame.clear();
            fill(frame, inward, 0, i)?;
            fill(frame, inward, led_count - 1 - i, led_count - 1)?;
            strip.write_frame(frame).map_err(PatternError::Pin)?;
            pacer.delay_ms(step_ms);
        }
    }
    Ok(())
}

/// Marches a fixed-length lit window from the start of the strip to the
/// end, one LED per step, transmitting each step.
///
/// The window shrinks against the far end of the strip instead of running
/// off it, so every position produces a visible frame.
pub fn scanner<P, D, T, const N: usize>(
    strip: &mut Ws2812<P, D>,
    frame: &mut FrameBuffer<N>,
    color: RGB8,
    window: usize,
    cycles: u32,
    step_ms: u32,
    pacer: &mut T,
) -> Result<(), PatternError<P::Error>>
where
    P: OutputPin,
    D: DelayNs,
    T: DelayNs,
{
    let led_count = frame.led_count();
    if led_count == 0 || window == 0 {
        return Ok(());
    }

    for _ in 0..cycles {
        for start in 0..led_count {
            frame.clear();
            fill(frame, color, start, (start + window - 1).min(led_count - 1))?;
            strip.write_frame(frame).map_err(PatternError::Pin)?;
            pacer.delay_ms(step_ms);
        }
    }
    Ok(())
}

/// Paints the inclusive span `from..=to`.
fn fill<const N: usize>(
    frame: &mut FrameBuffer<N>,
    color: RGB8,
    from: usize,
    to: usize,
) -> Result<(), FrameError> {
    for position in from..=to {
        frame.set_color(color, position)?;
    }
    Ok(())
}
