use super::PinDef;
use super::{PinMode, Port};

/// TIM2 CH1, channel A baud clock output
pub const OUT_A: PinDef = PinDef {
    port: Port::A,
    pin: 15,
    mode: PinMode::Alt(1),
};

/// TIM3 CH1, channel B baud clock output
pub const OUT_B: PinDef = PinDef {
    port: Port::B,
    pin: 4,
    mode: PinMode::Alt(2),
};
