//! Dual-channel baud rate clock generator.
//!
//! Six pulled-up inputs on PA0..PA5 select the rate of two free-running
//! square-wave outputs, three bits per channel: TIM2 CH1 on PA15 (channel
//! A) and TIM3 CH1 on PB4 (channel B). After bring-up the firmware does
//! nothing but poll the selector pins and rewrite the timer divisors when
//! the selection changes.

#![no_std]
#![no_main]

use cortex_m_rt::entry; // The runtime

use hal::{self, clocks::Clocks, pac};

use defmt_rtt as _; // global logger
use panic_probe as _;

use baudgen_algo::RateGenerator;
use baudgen_drivers::{
    clock_timer::{ClockA, ClockB},
    selector::SelectorPort,
};

#[entry]
fn main() -> ! {
    // Set up microcontroller peripherals
    let dp = pac::Peripherals::take().unwrap();

    let clock_cfg = Clocks::default();

    // Write the clock configuration to the MCU.
    clock_cfg.setup().unwrap();

    // Selector bank first, then both output clocks. Each channel starts
    // at the default 9600 divisor until the first selection change is
    // polled.
    let selector = SelectorPort::new(dp.GPIOA);
    let channel_a = ClockA::new(dp.TIM2, &clock_cfg);
    let channel_b = ClockB::new(dp.TIM3, &clock_cfg);

    let mut generator = RateGenerator::new(selector, channel_a, channel_b);

    defmt::println!("baud clock generator up, polling selector pins");

    // Sample the selector pins forever. An unchanged selection costs one
    // port read and one compare per pass; register writes only happen on
    // a change. The loop never blocks and never exits.
    loop {
        if let Some((rate_a, rate_b)) = generator.poll() {
            defmt::debug!("selection change: A={} B={}", rate_a, rate_b);
        }
    }
}

// same panicking *behavior* as panic-probe but doesn't print a panic message
// this prevents the panic message being printed *twice* when defmt::panic is invoked
#[defmt::panic_handler]
fn panic() -> ! {
    cortex_m::asm::udf()
}
