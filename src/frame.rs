//! Fixed-size pixel buffer with the strip's wire byte order.
//!
//! A WS2812B strip consumes one byte triplet per LED in (green, red, blue)
//! order, green first. [`FrameBuffer`] owns that byte array and keeps the
//! reordering out of sight: callers pass ordinary [`RGB8`] values and LED
//! positions, and every write is bounds-checked against the LED count the
//! buffer was built for.
//!
//! The buffer is plain data. It is created once, cleared and rewritten
//! across animation frames, and only ever borrowed by the driver for the
//! duration of a single transmission.

use smart_leds::RGB8;

/// Number of intensity bytes per LED (green, red, blue).
pub const CHANNELS: usize = 3;

/// Returns the byte length of a frame buffer covering `led_count` LEDs.
///
/// Use this to size a [`FrameBuffer`]:
///
/// ```
/// use ws2812_strip::{frame_len, FrameBuffer};
///
/// let frame = FrameBuffer::<{ frame_len(29) }>::new();
/// assert_eq!(frame.led_count(), 29);
/// ```
pub const fn frame_len(led_count: usize) -> usize {
    led_count * CHANNELS
}

/// Errors reported by frame buffer write operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// LED position is past the end of the strip.
    PositionOutOfBounds {
        /// The rejected position
        position: usize,
        /// Number of LEDs the buffer covers
        led_count: usize,
    },

    /// A span endpoint is past the end of the strip.
    RangeOutOfBounds {
        /// Start endpoint as passed by the caller
        start: usize,
        /// End endpoint as passed by the caller
        end: usize,
        /// Number of LEDs the buffer covers
        led_count: usize,
    },

    /// Both span endpoints are equal, so the span covers nothing.
    EmptyRange {
        /// The coinciding endpoint
        index: usize,
    },
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::PositionOutOfBounds {
                position,
                led_count,
            } => {
                write!(
                    f,
                    "LED position {} is out of bounds for a strip of {} LEDs",
                    position, led_count
                )
            }
            FrameError::RangeOutOfBounds {
                start,
                end,
                led_count,
            } => {
                write!(
                    f,
                    "range {}..{} has an endpoint out of bounds for a strip of {} LEDs",
                    start, end, led_count
                )
            }
            FrameError::EmptyRange { index } => {
                write!(f, "range {}..{} covers no LEDs", index, index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// A frame of pixel data for a strip of `N / 3` LEDs.
///
/// `N` is the byte length of the buffer and must be the LED count times
/// [`CHANNELS`]; compute it with [`frame_len`]. A mismatched `N` fails to
/// compile as soon as any operation on the buffer is used.
///
/// Bytes are laid out in wire order: positions `p*3`, `p*3+1`, `p*3+2`
/// hold the green, red and blue intensities of LED `p`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const N: usize> {
    bytes: [u8; N],
}

impl<const N: usize> FrameBuffer<N> {
    /// Number of LEDs this buffer covers.
    pub const LED_COUNT: usize = {
        assert!(
            N % CHANNELS == 0,
            "frame buffer length must be the LED count times CHANNELS"
        );
        N / CHANNELS
    };

    /// Creates a buffer with every LED off.
    pub const fn new() -> Self {
        Self { bytes: [0; N] }
    }

    /// Number of LEDs this buffer covers.
    pub const fn led_count(&self) -> usize {
        Self::LED_COUNT
    }

    /// Turns every LED off.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Writes one LED's color at `position`.
    ///
    /// Only the three bytes belonging to `position` are touched. An
    /// out-of-range position leaves the buffer unchanged and reports
    /// [`FrameError::PositionOutOfBounds`].
    pub fn set_color(&mut self, color: RGB8, position: usize) -> Result<(), FrameError> {
        if position >= Self::LED_COUNT {
            return Err(FrameError::PositionOutOfBounds {
                position,
                led_count: Self::LED_COUNT,
            });
        }

        let offset = position * CHANNELS;
        self.bytes[offset] = color.g;
        self.bytes[offset + 1] = color.r;
        self.bytes[offset + 2] = color.b;
        Ok(())
    }

    /// Applies `color` to every LED in the span between `start` and `end`.
    ///
    /// The endpoints may be given in either order; they are swapped first
    /// if needed. After normalization the span is half-open: the smaller
    /// endpoint is painted, the larger one is not. Both endpoints must be
    /// valid LED positions, which means the strip's final LED can only be
    /// painted with [`set_color`](Self::set_color).
    ///
    /// A span with `start == end` or with an endpoint past the strip is
    /// rejected without touching the buffer.
    pub fn set_color_range(
        &mut self,
        color: RGB8,
        start: usize,
        end: usize,
    ) -> Result<(), FrameError> {
        if start == end {
            return Err(FrameError::EmptyRange { index: start });
        }
        if start >= Self::LED_COUNT || end >= Self::LED_COUNT {
            return Err(FrameError::RangeOutOfBounds {
                start,
                end,
                led_count: Self::LED_COUNT,
            });
        }

        let (first, last) = if start > end { (end, start) } else { (start, end) };

        for position in first..last {
            self.set_color(color, position)?;
        }
        Ok(())
    }

    /// Returns the color stored at `position`, or `None` past the strip.
    pub fn color_at(&self, position: usize) -> Option<RGB8> {
        if position >= Self::LED_COUNT {
            return None;
        }

        let offset = position * CHANNELS;
        Some(RGB8::new(
            self.bytes[offset + 1],
            self.bytes[offset],
            self.bytes[offset + 2],
        ))
    }

    /// Iterates the stored colors in LED order.
    pub fn colors(&self) -> impl Iterator<Item = RGB8> + '_ {
        self.bytes
            .chunks_exact(CHANNELS)
            .map(|grb| RGB8::new(grb[1], grb[0], grb[2]))
    }

    /// The raw bytes in wire order, ready for transmission.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl<const N: usize> Default for FrameBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
