use hal::{
    gpio::{Edge, Pull},
    pac::GPIOA,
};

use baudgen_algo::{rates::SELECT_MASK, SelectorInput};

use super::pinout;

/// The six pulled-up selector inputs, PA0..PA5, sampled as one 6-bit
/// field straight from the port's input data register.
pub struct SelectorPort {
    regs: GPIOA,
}

impl SelectorPort {
    /// Claims the selector bank. Falling-edge detection is wired up for
    /// the event-driven variant, but the EXTI lines are never unmasked in
    /// the NVIC; the selection is polled.
    pub fn new(regs: GPIOA) -> Self {
        for def in &pinout::select::BITS {
            let mut pin = def.init();
            pin.pull(Pull::Up);
            pin.enable_interrupt(Edge::Falling);
        }
        SelectorPort { regs }
    }
}

impl SelectorInput for SelectorPort {
    fn read(&mut self) -> u8 {
        (self.regs.idr.read().bits() as u8) & SELECT_MASK
    }
}
