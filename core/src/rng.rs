//! Deterministic random number generation.
//!
//! RULE: a seeded generation call never touches platform randomness.
//! All seeded randomness flows through a SplitMix32 instance built from
//! fnv1a32(seed). The unseeded path draws a single u32 from the thread-local
//! RNG and then runs the exact same pipeline.
//!
//! Every call builds its own generator. There is no shared or global
//! instance, so concurrent callers cannot perturb each other's streams.

use rand::{RngCore, SeedableRng};

use crate::hash::fnv1a32;

const GOLDEN_GAMMA: u32 = 0x9e37_79b9;
const MIX_MUL_1: u32 = 0x85eb_ca6b;
const MIX_MUL_2: u32 = 0xc2b2_ae35;

/// SplitMix32: a counter-based PRNG with one word of state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix32 {
    state: u32,
}

impl SplitMix32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from a string via FNV-1a.
    pub fn from_seed_str(seed: &str) -> Self {
        Self::new(fnv1a32(seed))
    }

    /// Two's-complement truncation to 32 bits.
    pub fn from_i64(seed: i64) -> Self {
        Self::new(seed as u32)
    }

    /// Truncate toward zero, then reduce modulo 2^32. NaN and infinities
    /// seed with 0.
    pub fn from_f64(seed: f64) -> Self {
        if !seed.is_finite() {
            return Self::new(0);
        }
        let wrapped = seed.trunc() % 4_294_967_296.0;
        Self::new(wrapped as i64 as u32)
    }

    /// Seed from the thread-local, OS-seeded RNG. Never reproducible.
    pub fn from_entropy_source() -> Self {
        Self::new(rand::thread_rng().next_u32())
    }

    /// Draw the next value and advance the state.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 15)).wrapping_mul(MIX_MUL_1);
        z = (z ^ (z >> 13)).wrapping_mul(MIX_MUL_2);
        z ^ (z >> 16)
    }
}

impl RngCore for SplitMix32 {
    fn next_u32(&mut self) -> u32 {
        SplitMix32::next_u32(self)
    }

    /// High word is the earlier draw.
    fn next_u64(&mut self) -> u64 {
        let hi = SplitMix32::next_u32(self);
        let lo = SplitMix32::next_u32(self);
        (u64::from(hi) << 32) | u64::from(lo)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let word = SplitMix32::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for SplitMix32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn draws(rng: &mut SplitMix32, n: usize) -> Vec<u32> {
        (0..n).map(|_| rng.next_u32()).collect()
    }

    #[test]
    fn known_sequence_from_zero() {
        let mut rng = SplitMix32::new(0);
        assert_eq!(
            draws(&mut rng, 4),
            vec![4_079_132_893, 1_926_097_611, 2_141_342_850, 1_573_532_682]
        );
    }

    #[test]
    fn known_sequence_from_seed_string() {
        let mut rng = SplitMix32::from_seed_str("1234");
        assert_eq!(
            draws(&mut rng, 4),
            vec![2_052_735_091, 2_876_981_988, 916_958_275, 4_126_630_274]
        );
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SplitMix32::new(0xDEAD_BEEF);
        let mut b = SplitMix32::new(0xDEAD_BEEF);
        assert_eq!(draws(&mut a, 5_000), draws(&mut b, 5_000));
    }

    #[test]
    fn state_wraps_at_u32_max() {
        let mut rng = SplitMix32::new(u32::MAX);
        assert_eq!(rng.next_u32(), 56_475_751);
    }

    #[test]
    fn spans_full_range_with_balanced_parity() {
        let mut rng = SplitMix32::from_seed_str("1234");
        let xs = draws(&mut rng, 10_000);
        let min = *xs.iter().min().unwrap();
        let max = *xs.iter().max().unwrap();
        assert!(min < 1_000_000, "min draw too high: {min}");
        assert!(max > 4_000_000_000, "max draw too low: {max}");

        let odd = xs.iter().filter(|x| *x % 2 == 1).count();
        assert!((4_500..=5_500).contains(&odd), "parity skewed: {odd} odd of 10000");
    }

    #[test]
    fn no_repeats_in_first_thousand() {
        for seed in [0u32, 42, 0xDEAD_BEEF] {
            let mut rng = SplitMix32::new(seed);
            let unique: HashSet<u32> = draws(&mut rng, 1_000).into_iter().collect();
            assert_eq!(unique.len(), 1_000, "cycle observed for seed {seed}");
        }
    }

    #[test]
    fn signed_and_float_seeds_are_coerced() {
        assert_eq!(SplitMix32::from_i64(-1), SplitMix32::new(u32::MAX));
        assert_eq!(SplitMix32::from_i64(1 << 32), SplitMix32::new(0));
        assert_eq!(SplitMix32::from_f64(3.9), SplitMix32::new(3));
        assert_eq!(SplitMix32::from_f64(-1.5), SplitMix32::new(u32::MAX));
        assert_eq!(SplitMix32::from_f64(4_294_967_297.5), SplitMix32::new(1));
        assert_eq!(SplitMix32::from_f64(f64::NAN), SplitMix32::new(0));
        assert_eq!(SplitMix32::from_f64(f64::INFINITY), SplitMix32::new(0));
    }

    #[test]
    fn rng_core_word_order() {
        let mut rng = SplitMix32::new(7);
        assert_eq!(RngCore::next_u64(&mut rng), 0x43c8_6665_419d_f187);

        let mut rng = SplitMix32::new(7);
        let mut buf = [0u8; 6];
        rng.fill_bytes(&mut buf);
        assert_eq!(buf, [101, 102, 200, 67, 135, 241]);
    }

    #[test]
    fn seedable_rng_matches_new() {
        assert_eq!(SplitMix32::from_seed(42u32.to_le_bytes()), SplitMix32::new(42));
        assert_eq!(SplitMix32::seed_from_u64(0x1_0000_002A), SplitMix32::new(42));
    }
}
