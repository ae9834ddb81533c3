#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`FrameBuffer`**: fixed-size byte buffer holding one green/red/blue triplet per LED,
//!   in the order the strip's shift registers consume them
//! - **`Ws2812`**: blocking driver that serializes a frame onto one data line, bit by bit,
//!   then holds the line low to latch it
//! - **`PulseTimings`**: the named high/low durations that distinguish a `0` bit from a
//!   `1` bit, plus the end-of-frame reset hold
//! - **`FrameError`**: what went wrong with a buffer write (out-of-range position or span)
//! - **`patterns`**: ready-made animations built on the buffer and driver operations
//!
//! Colors are `smart_leds::RGB8` throughout. The buffer stores them in (G, R, B) wire
//! order regardless of how they were passed in; callers never need to think about that
//! reordering.

// Re-export RGB8 from smart-leds for user convenience
pub use smart_leds::RGB8;

pub mod driver;
pub mod frame;
pub mod patterns;
pub mod timing;

pub use driver::Ws2812;
pub use frame::{CHANNELS, FrameBuffer, FrameError, frame_len};
pub use patterns::PatternError;
pub use timing::PulseTimings;

pub const COLOR_OFF: RGB8 = RGB8::new(0, 0, 0);
