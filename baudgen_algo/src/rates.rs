// Baud rate selector codes and their timer divisors.
//
// A 3-bit selector code picks one of six rates. The divisor is the value
// loaded into the channel's compare register; together with the fixed
// timer prescale it sets the output clock frequency. Divisors for the
// first five rates assume a x16 serial clock, 115200 assumes x1.

/// Number of bits in one channel's selector code.
pub const CODE_BITS: u8 = 3;

/// Mask for the combined 6-bit selection read from the input port.
pub const SELECT_MASK: u8 = 0b0011_1111;

/// Prescale family a rate's divisor is calculated for. The timer mode is
/// fixed at bring-up and is not switched at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum RateMode {
    /// Divisor yields 16x the named rate (downstream SIO divides by 16).
    X16,
    /// Divisor yields the named rate directly.
    X1,
}

/// One of the six selectable output rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum Rate {
    B4800,
    B9600,
    B19200,
    B38400,
    B57600,
    B115200,
}

impl Rate {
    /// Rate applied at bring-up and for selector codes with no assigned rate.
    pub const DEFAULT: Rate = Rate::B9600;

    /// Decodes a 3-bit selector code. Codes 6 and 7 have no assigned rate
    /// and alias to [`Rate::DEFAULT`]; selection hardware wired into that
    /// range gets a defined output instead of a fault.
    pub const fn from_code(code: u8) -> Rate {
        match code {
            0 => Rate::B4800,
            1 => Rate::B9600,
            2 => Rate::B19200,
            3 => Rate::B38400,
            4 => Rate::B57600,
            5 => Rate::B115200,
            _ => Rate::DEFAULT,
        }
    }

    /// Compare register value for this rate.
    pub const fn divisor(self) -> u8 {
        match self {
            Rate::B4800 => 23,
            Rate::B9600 => 11,
            Rate::B19200 => 5,
            Rate::B38400 => 2,
            Rate::B57600 => 1,
            Rate::B115200 => 15,
        }
    }

    pub const fn mode(self) -> RateMode {
        match self {
            Rate::B115200 => RateMode::X1,
            _ => RateMode::X16,
        }
    }
}
