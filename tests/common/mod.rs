//! Shared test infrastructure for ws2812-strip integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use ws2812_strip::PulseTimings;

// ============================================================================
// Simulated data line
// ============================================================================

/// One observable event on the simulated data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// Line driven high
    High,
    /// Line driven low
    Low,
    /// Line held at its current level for this many nanoseconds
    Wait(u32),
}

/// Event log shared between a [`MockPin`] and a [`MockDelay`], so level
/// changes and holds land in one timeline in the order the driver issued
/// them.
#[derive(Clone)]
pub struct LineRecorder {
    events: Rc<RefCell<heapless::Vec<LineEvent, 16384>>>,
}

impl LineRecorder {
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(heapless::Vec::new())),
        }
    }

    /// A pin and a delay wired to this recorder.
    pub fn line(&self) -> (MockPin, MockDelay) {
        (MockPin(self.clone()), MockDelay(self.clone()))
    }

    pub fn events(&self) -> Vec<LineEvent> {
        self.events.borrow().iter().copied().collect()
    }

    fn push(&self, event: LineEvent) {
        self.events
            .borrow_mut()
            .push(event)
            .expect("line recorder capacity exceeded");
    }
}

/// Data pin that records level changes instead of toggling hardware.
pub struct MockPin(LineRecorder);

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.push(LineEvent::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.push(LineEvent::High);
        Ok(())
    }
}

/// Calibrated delay that records requested holds instead of spinning.
pub struct MockDelay(LineRecorder);

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(LineEvent::Wait(ns));
    }
}

/// Frame pacer for pattern playback; waits for nothing and records
/// nothing, keeping the line timeline free of pacing noise.
pub struct NoopDelay;

impl DelayNs for NoopDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

// ============================================================================
// Transmission decoding
// ============================================================================

/// One decoded frame transmission: the (high, low) nanosecond pair of
/// every bit in order, and the trailing reset hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    pub shapes: Vec<(u32, u32)>,
    pub reset_ns: u32,
}

impl Transmission {
    /// Reconstructs the transmitted bytes, MSB-first, by matching every
    /// pulse pair against the `0` and `1` shapes of `timings`.
    pub fn decode_bytes(&self, timings: &PulseTimings) -> Vec<u8> {
        assert!(
            self.shapes.len() % 8 == 0,
            "bit count {} is not a whole number of bytes",
            self.shapes.len()
        );
        self.shapes
            .chunks(8)
            .map(|bits| {
                bits.iter().fold(0u8, |byte, &(high, low)| {
                    let bit = if high == timings.t1h && low == timings.t1l {
                        1
                    } else if high == timings.t0h && low == timings.t0l {
                        0
                    } else {
                        panic!("pulse shape {}ns/{}ns matches neither bit", high, low)
                    };
                    (byte << 1) | bit
                })
            })
            .collect()
    }

    /// Simulated wall-clock duration of this transmission in nanoseconds.
    pub fn duration_ns(&self) -> u64 {
        let bits: u64 = self
            .shapes
            .iter()
            .map(|&(high, low)| u64::from(high) + u64::from(low))
            .sum();
        bits + u64::from(self.reset_ns)
    }
}

/// Splits a recorded line timeline into complete frame transmissions.
///
/// Expects the driver's grammar: an optional leading park-low, then per
/// bit `High, Wait, Low, Wait`, with a bare `Wait` (the reset hold)
/// terminating each frame. Panics on anything else, which doubles as a
/// check that the line never sees a malformed pulse.
pub fn decode_transmissions(events: &[LineEvent]) -> Vec<Transmission> {
    let mut transmissions = Vec::new();
    let mut shapes = Vec::new();
    let mut i = 0;

    // the driver parks the line low on construction
    while matches!(events.get(i), Some(LineEvent::Low)) {
        i += 1;
    }

    while i < events.len() {
        match events[i] {
            LineEvent::High => {
                let high = expect_wait(events, i + 1);
                assert_eq!(
                    events.get(i + 2),
                    Some(&LineEvent::Low),
                    "high pulse at event {} not followed by a falling edge",
                    i
                );
                let low = expect_wait(events, i + 3);
                shapes.push((high, low));
                i += 4;
            }
            LineEvent::Wait(reset_ns) => {
                transmissions.push(Transmission {
                    shapes: core::mem::take(&mut shapes),
                    reset_ns,
                });
                i += 1;
            }
            LineEvent::Low => panic!("unexpected falling edge at event {}", i),
        }
    }

    assert!(
        shapes.is_empty(),
        "transmission ended without a reset hold ({} dangling bits)",
        shapes.len()
    );
    transmissions
}

fn expect_wait(events: &[LineEvent], index: usize) -> u32 {
    match events.get(index) {
        Some(&LineEvent::Wait(ns)) => ns,
        other => panic!("expected a hold at event {}, found {:?}", index, other),
    }
}
