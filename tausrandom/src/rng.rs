use crate::taus::Taus88;
use rand_core::{impls, Error, RngCore, SeedableRng};

impl RngCore for Taus88 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Taus88::next_u32(self)
    }

    /// Two consecutive words, low word first.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Taus88 {
    /// Three little-endian seed words, used as-is.
    type Seed = [u8; 12];

    fn from_seed(seed: Self::Seed) -> Self {
        let word = |i: usize| u32::from_le_bytes([seed[i], seed[i + 1], seed[i + 2], seed[i + 3]]);
        Taus88::new(word(0), word(4), word(8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_core_matches_inherent_stream() {
        let mut via_trait = Taus88::new(123456789, 362436069, 521288629);
        let first = RngCore::next_u32(&mut via_trait);
        assert_eq!(first, 231973701);
        assert_eq!(RngCore::next_u32(&mut via_trait), 2450055554);
    }

    #[test]
    fn test_next_u64_low_word_first() {
        let mut rng = Taus88::new(123456789, 362436069, 521288629);
        let x = RngCore::next_u64(&mut rng);
        assert_eq!(x, (2450055554u64 << 32) | 231973701u64);
    }

    #[test]
    fn test_fill_bytes_little_endian() {
        let mut rng = Taus88::new(123456789, 362436069, 521288629);
        let mut bytes = [0u8; 6];
        rng.fill_bytes(&mut bytes);

        let w0 = 231973701u32.to_le_bytes();
        let w1 = 2450055554u32.to_le_bytes();
        assert_eq!(bytes, [w0[0], w0[1], w0[2], w0[3], w1[0], w1[1]]);
    }

    #[test]
    fn test_from_seed_uses_words_verbatim() {
        let mut seed = [0u8; 12];
        seed[0..4].copy_from_slice(&123456789u32.to_le_bytes());
        seed[4..8].copy_from_slice(&362436069u32.to_le_bytes());
        seed[8..12].copy_from_slice(&521288629u32.to_le_bytes());

        let rng = Taus88::from_seed(seed);
        assert_eq!(rng, Taus88::new(123456789, 362436069, 521288629));
    }

    #[test]
    fn test_seed_from_u64_deterministic() {
        let mut rng1 = Taus88::seed_from_u64(42);
        let mut rng2 = Taus88::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }
}
