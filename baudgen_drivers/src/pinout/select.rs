use super::PinDef;
use super::{PinMode, Port};

/// Selector bank, read as one 6-bit field: PA0..2 select channel A's
/// rate, PA3..5 channel B's. All six ride the same port so the loop can
/// take its snapshot with a single masked register read.
pub const BITS: [PinDef; 6] = [
    PinDef { port: Port::A, pin: 0, mode: PinMode::Input },
    PinDef { port: Port::A, pin: 1, mode: PinMode::Input },
    PinDef { port: Port::A, pin: 2, mode: PinMode::Input },
    PinDef { port: Port::A, pin: 3, mode: PinMode::Input },
    PinDef { port: Port::A, pin: 4, mode: PinMode::Input },
    PinDef { port: Port::A, pin: 5, mode: PinMode::Input },
];
