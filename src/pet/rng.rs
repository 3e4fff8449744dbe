use std::ops::RangeInclusive;

/// Source of the small random amounts used by `Pet::tick`.
///
/// Production code passes a `fastrand::Rng`; tests can script exact rolls.
pub trait DecaySource {
    /// Pick a value in `range` (inclusive on both ends).
    fn roll(&mut self, range: RangeInclusive<u8>) -> u8;
}

impl DecaySource for fastrand::Rng {
    fn roll(&mut self, range: RangeInclusive<u8>) -> u8 {
        if range.is_empty() {
            return *range.start();
        }
        self.u8(range)
    }
}

/// Always rolls the low end of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinRoll;

impl DecaySource for MinRoll {
    fn roll(&mut self, range: RangeInclusive<u8>) -> u8 {
        *range.start()
    }
}

/// Always rolls the high end of the range.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxRoll;

impl DecaySource for MaxRoll {
    fn roll(&mut self, range: RangeInclusive<u8>) -> u8 {
        *range.end()
    }
}
