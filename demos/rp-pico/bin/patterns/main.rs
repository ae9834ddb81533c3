#![no_std]
#![no_main]

use embedded_hal::delay::DelayNs;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{Clock, Sio, clocks::init_clocks_and_plls, pac, watchdog::Watchdog};

use rp_pico_demos::delay::CycleDelay;
use ws2812_strip::patterns::{center_sweep, scanner};
use ws2812_strip::{FrameBuffer, RGB8, Ws2812, frame_len};

const LED_COUNT: usize = 29;

#[entry]
fn main() -> ! {
    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    // Set up the Single Cycle IO (for GPIO access)
    let sio = Sio::new(pac.SIO);

    // Set the pins to their default state
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // GPIO2 drives the strip's data input
    let data_pin = pins.gpio2.into_push_pull_output();

    // Pulse holds and frame pacing both spin on the system clock
    let sysclk_hz = clocks.system_clock.freq().to_Hz();
    let mut strip = Ws2812::new(data_pin, CycleDelay::new(sysclk_hz));
    let mut pacer = CycleDelay::new(sysclk_hz);

    let mut frame = FrameBuffer::<{ frame_len(LED_COUNT) }>::new();

    let pink = RGB8::new(235, 6, 124);
    let cyan = RGB8::new(0, 255, 245);

    loop {
        center_sweep(&mut strip, &mut frame, pink, cyan, 4, 60, &mut pacer).unwrap();
        scanner(&mut strip, &mut frame, cyan, 4, 4, 60, &mut pacer).unwrap();

        // blank the strip between repeats
        frame.clear();
        strip.write_frame(&frame).unwrap();
        pacer.delay_ms(500);
    }
}
