use hal::{
    clocks::Clocks,
    pac::{TIM2, TIM3},
    timer::{
        Alignment, CaptureCompareDma, CountDir, OutputCompare, TimChannel, Timer, TimerConfig,
        UpdateReqSrc,
    },
};

use baudgen_algo::{rates::Rate, CompareRegister};

use super::pinout;

// Both counters run from the undivided timer clock in toggle-on-compare
// mode, so the pin period is 2 * (divisor + 1) timer ticks. The divisor
// in the auto-reload register is the only runtime knob.
fn base_config() -> TimerConfig {
    TimerConfig {
        one_pulse_mode: false,
        update_request_source: UpdateReqSrc::Any,
        // ARR is preloaded: a new divisor takes effect at the next counter
        // wrap, never inside a half-period.
        auto_reload_preload: true,
        alignment: Alignment::Edge,
        capture_compare_dma: CaptureCompareDma::Update,
        direction: CountDir::Up,
    }
}

/// Channel A baud clock: TIM2 CH1 toggling PA15.
pub struct ClockA {
    tim: Timer<TIM2>,
}

impl ClockA {
    pub fn new(tim2: TIM2, clock_cfg: &Clocks) -> Self {
        // Frequency argument is a placeholder; PSC and ARR are rewritten
        // with the real divisor setup below.
        let mut timer = Timer::new_tim2(tim2, 1_000., base_config(), clock_cfg);
        timer.enable_pwm_output(TimChannel::C1, OutputCompare::Toggle, 0.);
        pinout::clock::OUT_A.init();

        timer.regs.psc.write(|w| unsafe { w.bits(0) });

        let mut clock = ClockA { tim: timer };
        clock.write(Rate::DEFAULT.divisor());
        clock.tim.regs.egr.write(|w| unsafe { w.bits(1) }); // latch PSC/ARR now
        clock.tim.enable();

        defmt::debug!("clock A: TIM2 running, divisor {}", Rate::DEFAULT.divisor());
        clock
    }
}

impl CompareRegister for ClockA {
    fn write(&mut self, divisor: u8) {
        self.tim.regs.arr.write(|w| unsafe { w.bits(divisor as u32) });
    }
}

/// Channel B baud clock: TIM3 CH1 toggling PB4.
pub struct ClockB {
    tim: Timer<TIM3>,
}

impl ClockB {
    pub fn new(tim3: TIM3, clock_cfg: &Clocks) -> Self {
        let mut timer = Timer::new_tim3(tim3, 1_000., base_config(), clock_cfg);
        timer.enable_pwm_output(TimChannel::C1, OutputCompare::Toggle, 0.);
        pinout::clock::OUT_B.init();

        timer.regs.psc.write(|w| unsafe { w.bits(0) });

        let mut clock = ClockB { tim: timer };
        clock.write(Rate::DEFAULT.divisor());
        clock.tim.regs.egr.write(|w| unsafe { w.bits(1) });
        clock.tim.enable();

        defmt::debug!("clock B: TIM3 running, divisor {}", Rate::DEFAULT.divisor());
        clock
    }
}

impl CompareRegister for ClockB {
    fn write(&mut self, divisor: u8) {
        self.tim.regs.arr.write(|w| unsafe { w.bits(divisor as u32) });
    }
}
