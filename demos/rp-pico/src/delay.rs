//! Cycle-counted delay for ws2812-strip pulse timing.
//!
//! The RP2040's 1 MHz timer peripheral is too coarse for sub-microsecond
//! pulse holds, so the driver's calibrated delay is implemented with the
//! Cortex-M cycle spin loop instead.

use embedded_hal::delay::DelayNs;

/// `DelayNs` backed by `cortex_m::asm::delay`, calibrated from the system
/// clock frequency.
///
/// `asm::delay` spins for at least the requested cycles; loop granularity
/// and call overhead stretch sub-microsecond holds, so verify the pulse
/// widths on a logic analyzer and trim the timings if the strip glitches.
#[derive(Clone, Copy)]
pub struct CycleDelay {
    cycles_per_us: u32,
}

impl CycleDelay {
    pub fn new(sysclk_hz: u32) -> Self {
        Self {
            cycles_per_us: sysclk_hz / 1_000_000,
        }
    }
}

impl DelayNs for CycleDelay {
    fn delay_ns(&mut self, ns: u32) {
        let cycles = (u64::from(ns) * u64::from(self.cycles_per_us)).div_ceil(1_000);
        cortex_m::asm::delay(cycles as u32);
    }
}
