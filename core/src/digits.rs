use rand::RngCore;

/// Build a string of exactly `len` decimal digits, one `next_u32()` draw per
/// digit, reduced with `% 10`. Draws are unsigned, so no sign handling is
/// needed.
pub fn generate_digits<R: RngCore + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + (rng.next_u32() % 10) as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SplitMix32;

    /// Counts draws and replays a fixed script.
    struct Scripted {
        values: Vec<u32>,
        calls: usize,
    }

    impl RngCore for Scripted {
        fn next_u32(&mut self) -> u32 {
            let v = self.values[self.calls % self.values.len()];
            self.calls += 1;
            v
        }
        fn next_u64(&mut self) -> u64 {
            u64::from(self.next_u32())
        }
        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }
        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    #[test]
    fn zero_length_draws_nothing() {
        let mut rng = Scripted { values: vec![1], calls: 0 };
        assert_eq!(generate_digits(&mut rng, 0), "");
        assert_eq!(rng.calls, 0);
    }

    #[test]
    fn one_draw_per_digit() {
        let mut rng = Scripted { values: vec![17, 4_294_967_295, 100, 9], calls: 0 };
        assert_eq!(generate_digits(&mut rng, 4), "7509");
        assert_eq!(rng.calls, 4);
    }

    #[test]
    fn seeded_digits_are_stable() {
        let mut rng = SplitMix32::new(42);
        assert_eq!(generate_digits(&mut rng, 10), "9433053786");

        let mut rng = SplitMix32::from_seed_str("1234");
        assert_eq!(generate_digits(&mut rng, 18), "185482443452538353");
    }

    #[test]
    fn output_is_all_ascii_digits() {
        let mut rng = SplitMix32::new(0xABCD);
        let digits = generate_digits(&mut rng, 500);
        assert_eq!(digits.len(), 500);
        assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    }
}
