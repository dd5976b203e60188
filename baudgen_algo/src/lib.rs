#![no_std]

pub mod rates;

use rates::{Rate, CODE_BITS, SELECT_MASK};

/// Handle for the 6-bit selector input bank. Implementations return the
/// instantaneous pin state; masking to the six selector bits happens in
/// the generator.
pub trait SelectorInput {
    fn read(&mut self) -> u8;
}

/// Handle for one channel's hardware compare register. Writing a divisor
/// retunes that channel's output clock.
pub trait CompareRegister {
    fn write(&mut self, divisor: u8);
}

/// Splits a 6-bit selection into the two channel codes: channel A is the
/// low 3 bits, channel B the next 3.
pub const fn split_selection(selection: u8) -> (u8, u8) {
    (selection & 0b111, (selection >> CODE_BITS) & 0b111)
}

/// Keeps the two channel compare registers in sync with the selector pins.
///
/// Both registers are rewritten together whenever the selection differs
/// from the last applied one, channel A first. The cache starts at 0, so
/// after a reset the first poll with a non-zero selection re-applies it
/// even if the physical pins never moved.
pub struct RateGenerator<S, A, B> {
    selector: S,
    channel_a: A,
    channel_b: B,
    prev_selection: u8,
}

impl<S, A, B> RateGenerator<S, A, B>
where
    S: SelectorInput,
    A: CompareRegister,
    B: CompareRegister,
{
    pub fn new(selector: S, channel_a: A, channel_b: B) -> Self {
        RateGenerator {
            selector,
            channel_a,
            channel_b,
            prev_selection: 0,
        }
    }

    /// One polling iteration: sample the selector pins and, only if the
    /// selection changed, retune both channels. Returns the applied rate
    /// pair, or `None` when nothing was written.
    pub fn poll(&mut self) -> Option<(Rate, Rate)> {
        let selection = self.selector.read() & SELECT_MASK;
        if selection == self.prev_selection {
            return None;
        }

        let (code_a, code_b) = split_selection(selection);
        let rate_a = Rate::from_code(code_a);
        let rate_b = Rate::from_code(code_b);
        self.channel_a.write(rate_a.divisor());
        self.channel_b.write(rate_b.divisor());
        self.prev_selection = selection;

        Some((rate_a, rate_b))
    }

    /// Last applied 6-bit selection.
    pub fn selection(&self) -> u8 {
        self.prev_selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    // Simulated register bank. Traits are implemented on shared
    // references so the tests keep a view of the registers while the
    // generator owns its handles.
    #[derive(Default)]
    struct FakePins(Cell<u8>);

    impl SelectorInput for &FakePins {
        fn read(&mut self) -> u8 {
            self.0.get()
        }
    }

    #[derive(Default)]
    struct FakeCompare {
        divisor: Cell<u8>,
        writes: Cell<u32>,
    }

    impl CompareRegister for &FakeCompare {
        fn write(&mut self, divisor: u8) {
            self.divisor.set(divisor);
            self.writes.set(self.writes.get() + 1);
        }
    }

    fn generator<'a>(
        pins: &'a FakePins,
        ch_a: &'a FakeCompare,
        ch_b: &'a FakeCompare,
    ) -> RateGenerator<&'a FakePins, &'a FakeCompare, &'a FakeCompare> {
        RateGenerator::new(pins, ch_a, ch_b)
    }

    #[test]
    fn splits_low_and_high_codes() {
        assert_eq!(split_selection(0b000001), (1, 0));
        assert_eq!(split_selection(0b101000), (0, 5));
        assert_eq!(split_selection(0b111111), (7, 7));
    }

    #[test]
    fn applies_once_per_change() {
        let pins = FakePins::default();
        let (ch_a, ch_b) = (FakeCompare::default(), FakeCompare::default());
        let mut gen = generator(&pins, &ch_a, &ch_b);

        pins.0.set(0b000001);
        assert!(gen.poll().is_some());
        assert_eq!(ch_a.writes.get(), 1);
        assert_eq!(ch_b.writes.get(), 1);

        // Unchanged selection: no further register traffic.
        for _ in 0..4 {
            assert!(gen.poll().is_none());
        }
        assert_eq!(ch_a.writes.get(), 1);
        assert_eq!(ch_b.writes.get(), 1);
    }

    #[test]
    fn startup_selection_of_zero_is_not_reapplied() {
        let pins = FakePins::default();
        let (ch_a, ch_b) = (FakeCompare::default(), FakeCompare::default());
        let mut gen = generator(&pins, &ch_a, &ch_b);

        // Cache starts at 0, so an all-zero selection matches it and the
        // bring-up divisors are left alone.
        assert!(gen.poll().is_none());
        assert_eq!(ch_a.writes.get(), 0);
        assert_eq!(ch_b.writes.get(), 0);
    }

    #[test]
    fn cache_tracks_masked_snapshot() {
        let pins = FakePins::default();
        let (ch_a, ch_b) = (FakeCompare::default(), FakeCompare::default());
        let mut gen = generator(&pins, &ch_a, &ch_b);

        // Bits above the selector field must not reach the cache.
        pins.0.set(0b1100_0101);
        assert!(gen.poll().is_some());
        assert_eq!(gen.selection(), 0b00_0101);
    }

    #[test]
    fn channels_select_independently() {
        let pins = FakePins::default();
        let (ch_a, ch_b) = (FakeCompare::default(), FakeCompare::default());
        let mut gen = generator(&pins, &ch_a, &ch_b);

        pins.0.set(0b001_010); // A=2 (19200), B=1 (9600)
        gen.poll();
        assert_eq!(ch_a.divisor.get(), 5);
        assert_eq!(ch_b.divisor.get(), 11);

        // Move only channel A's bits; B's divisor value must not move.
        pins.0.set(0b001_011); // A=3 (38400)
        gen.poll();
        assert_eq!(ch_a.divisor.get(), 2);
        assert_eq!(ch_b.divisor.get(), 11);

        // And the other way around.
        pins.0.set(0b100_011); // B=4 (57600)
        gen.poll();
        assert_eq!(ch_a.divisor.get(), 2);
        assert_eq!(ch_b.divisor.get(), 1);
    }

    #[test]
    fn end_to_end_rate_scenarios() {
        let pins = FakePins::default();
        let (ch_a, ch_b) = (FakeCompare::default(), FakeCompare::default());
        let mut gen = generator(&pins, &ch_a, &ch_b);

        pins.0.set(0b000001); // A=9600, B=4800
        assert_eq!(gen.poll(), Some((Rate::B9600, Rate::B4800)));
        assert_eq!(ch_a.divisor.get(), 11);
        assert_eq!(ch_b.divisor.get(), 23);

        pins.0.set(0b101000); // A=4800, B=115200
        assert_eq!(gen.poll(), Some((Rate::B4800, Rate::B115200)));
        assert_eq!(ch_a.divisor.get(), 23);
        assert_eq!(ch_b.divisor.get(), 15);

        pins.0.set(0b111111); // both codes undefined, both fall back
        assert_eq!(gen.poll(), Some((Rate::B9600, Rate::B9600)));
        assert_eq!(ch_a.divisor.get(), 11);
        assert_eq!(ch_b.divisor.get(), 11);
    }

    #[test]
    fn channel_a_is_written_before_channel_b() {
        // Order instrumentation shared by both fake registers.
        struct OrderedCompare<'a> {
            log: &'a Cell<u32>,
            tag: u32,
            seen: Cell<u32>,
        }

        impl CompareRegister for &OrderedCompare<'_> {
            fn write(&mut self, _divisor: u8) {
                self.log.set(self.log.get() + 1);
                self.seen.set(self.log.get() * 10 + self.tag);
            }
        }

        let pins = FakePins::default();
        let log = Cell::new(0);
        let ch_a = OrderedCompare { log: &log, tag: 0, seen: Cell::new(0) };
        let ch_b = OrderedCompare { log: &log, tag: 1, seen: Cell::new(0) };
        let mut gen = RateGenerator::new(&pins, &ch_a, &ch_b);

        pins.0.set(0b000011);
        gen.poll();
        assert_eq!(ch_a.seen.get(), 10); // first write
        assert_eq!(ch_b.seen.get(), 21); // second write
    }
}
