//! Portable Park-Miller random integer stream.
//!
//! The recurrence is `x = 16807 * x mod (2^31 - 1)`, computed with the
//! split-multiply-and-fold arithmetic of the historical generator so that
//! every intermediate fits in 31 + 16 bits. Output must match the reference
//! bit for bit, so the order of draws made by callers is part of the
//! contract.

/// Multiplier of the congruential recurrence (`7^5`).
pub const MULTIPLIER: i64 = 16_807;
/// Modulus of the congruential recurrence (`2^31 - 1`).
pub const MODULUS: i64 = 2_147_483_647;

/// Deterministic single-stream integer generator.
///
/// # Examples
/// ```
/// use netgen_core::RandomStream;
///
/// let mut first = RandomStream::new(17);
/// let mut second = RandomStream::new(17);
/// let a: Vec<i64> = (0..4).map(|_| first.draw(1, 100)).collect();
/// let b: Vec<i64> = (0..4).map(|_| second.draw(1, 100)).collect();
/// assert_eq!(a, b);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomStream {
    register: i64,
}

impl RandomStream {
    /// Creates a stream seeded with `seed`.
    ///
    /// Seed positivity is the caller's responsibility; the generator driver
    /// rejects non-positive seeds before constructing a stream.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { register: seed }
    }

    /// Replaces the live register with `seed`.
    pub const fn reseed(&mut self, seed: i64) {
        self.register = seed;
    }

    /// Advances the register and returns an integer in `[a, b]`.
    ///
    /// When `b <= a` the range is degenerate and `b` is returned. The register
    /// still advances in that case.
    ///
    /// # Examples
    /// ```
    /// use netgen_core::RandomStream;
    ///
    /// let mut stream = RandomStream::new(1);
    /// assert_eq!(stream.draw(5, 5), 5);
    /// assert_eq!(stream.draw(9, 3), 3);
    /// let value = stream.draw(1, 6);
    /// assert!((1..=6).contains(&value));
    /// ```
    pub fn draw(&mut self, a: i64, b: i64) -> i64 {
        self.advance();
        if b <= a {
            return b;
        }
        // The span of an i64 range can exceed i64.
        let span = i128::from(b) - i128::from(a) + 1;
        let value = i128::from(a) + i128::from(self.register) % span;
        i64::try_from(value).unwrap_or(b)
    }

    /// Draws a 1-based position in `[1, upper]`, or `0` when `upper` is zero.
    pub(crate) fn draw_position(&mut self, upper: usize) -> usize {
        // Positions are bounded by the storage limits, far below i64::MAX.
        let drawn = self.draw(1, upper as i64);
        usize::try_from(drawn).unwrap_or(0)
    }

    /// Draws a 0-based offset in `[0, len - 1]`.
    pub(crate) fn draw_offset(&mut self, len: usize) -> usize {
        let upper = (len as i64).saturating_sub(1);
        let drawn = self.draw(0, upper);
        usize::try_from(drawn).unwrap_or(0)
    }

    fn advance(&mut self) {
        let mut hi = MULTIPLIER * (self.register >> 16);
        let mut lo = MULTIPLIER * (self.register & 0xffff);
        hi += lo >> 16;
        lo &= 0xffff;
        lo += hi >> 15;
        hi &= 0x7fff;
        lo -= MODULUS;
        self.register = (hi << 16) + lo;
        if self.register < 0 {
            self.register += MODULUS;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_utils;
    use proptest::prelude::*;
    use rstest::rstest;

    /// Straightforward 64-bit evaluation of the same recurrence.
    fn reference_step(x: i64) -> i64 {
        (x * MULTIPLIER) % MODULUS
    }

    #[rstest]
    #[case(1, 16_807)]
    #[case(16_807, 282_475_249)]
    #[case(282_475_249, 1_622_650_073)]
    fn register_follows_minimal_standard_sequence(#[case] seed: i64, #[case] expected: i64) {
        let mut stream = RandomStream::new(seed);
        stream.advance();
        assert_eq!(stream.register, expected);
    }

    #[test]
    fn ten_thousandth_value_from_seed_one_matches_published_check() {
        let mut stream = RandomStream::new(1);
        for _ in 0..10_000 {
            stream.advance();
        }
        assert_eq!(stream.register, 1_043_618_065);
    }

    #[test]
    fn degenerate_range_returns_upper_bound_and_advances() {
        let mut stream = RandomStream::new(42);
        let before = stream.clone();
        assert_eq!(stream.draw(7, 7), 7);
        assert_eq!(stream.draw(10, -3), -3);
        assert_ne!(stream, before);
    }

    #[test]
    fn adjacent_range_stays_within_bounds() {
        let mut stream = RandomStream::new(12_345);
        let mut seen = [false; 2];
        for _ in 0..10_000 {
            let value = stream.draw(40, 41);
            assert!(value == 40 || value == 41, "value {value} escaped [40, 41]");
            if let Some(slot) = usize::try_from(value - 40).ok().and_then(|i| seen.get_mut(i)) {
                *slot = true;
            }
        }
        assert_eq!(seen, [true, true]);
    }

    #[rstest]
    #[case(i64::MIN, i64::MAX)]
    #[case(i64::MIN, 0)]
    #[case(-1, i64::MAX)]
    fn extreme_ranges_do_not_overflow(#[case] low: i64, #[case] high: i64) {
        let mut stream = RandomStream::new(17);
        for _ in 0..1_000 {
            let value = stream.draw(low, high);
            assert!((low..=high).contains(&value));
        }
    }

    #[test]
    fn full_range_draw_offsets_from_the_lower_bound() {
        let mut stream = RandomStream::new(1);
        let value = stream.draw(i64::MIN, i64::MAX);
        // The span exceeds the register, so the register is the offset.
        assert_eq!(value, i64::MIN + 16_807);
    }

    #[test]
    fn reseeding_replays_the_sequence() {
        let mut stream = RandomStream::new(99);
        let first: Vec<i64> = (1..50).map(|b| stream.draw(0, b)).collect();
        stream.reseed(99);
        let second: Vec<i64> = (1..50).map(|b| stream.draw(0, b)).collect();
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(5, 5)]
    fn draw_position_respects_upper_bound(#[case] upper: usize, #[case] max: usize) {
        let mut stream = RandomStream::new(3);
        for _ in 0..100 {
            let position = stream.draw_position(upper);
            assert!(position <= max);
            if upper > 0 {
                assert!(position >= 1);
            }
        }
    }

    proptest! {
        #![proptest_config(test_utils::suite_proptest_config(256))]

        #[test]
        fn split_arithmetic_matches_wide_multiplication(seed in 1_i64..MODULUS) {
            let mut stream = RandomStream::new(seed);
            stream.advance();
            prop_assert_eq!(stream.register, reference_step(seed));
        }

        #[test]
        fn draws_stay_within_requested_range(
            seed in 1_i64..MODULUS,
            low in -1_000_i64..1_000,
            span in 1_i64..10_000,
        ) {
            let mut stream = RandomStream::new(seed);
            let value = stream.draw(low, low + span);
            prop_assert!(value >= low && value <= low + span);
        }
    }
}
