//! Pseudo-random number generation.
//!
//! One [`SimpleRng`] instance drives every randomized step of a puzzle
//! assembly run, in a fixed order, so a given seed reproduces the same
//! puzzle end to end. Instances are never shared across runs.

/// Simple PCG-style PRNG.
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create an RNG seeded from OS entropy.
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create an RNG from an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }

    /// Uniform draw in `[0, bound)`. `bound` must be positive.
    pub fn next_usize(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }

    /// Shuffle a slice in place using Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_usize(i + 1);
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_sequences_repeat() {
        let mut a = SimpleRng::with_seed(42);
        let mut b = SimpleRng::with_seed(42);
        for _ in 0..32 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SimpleRng::with_seed(1);
        let mut b = SimpleRng::with_seed(2);
        let same = (0..8).filter(|_| a.next_u64() == b.next_u64()).count();
        assert!(same < 8);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = SimpleRng::with_seed(7);
        let mut values: Vec<usize> = (0..50).collect();
        rng.shuffle(&mut values);
        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_next_usize_within_bound() {
        let mut rng = SimpleRng::with_seed(3);
        for _ in 0..100 {
            assert!(rng.next_usize(7) < 7);
        }
    }
}
