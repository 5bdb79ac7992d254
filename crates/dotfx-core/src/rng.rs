//! Deterministic 128-bit-state generator.
//!
//! Rotate/xor/shift generator with a `(s0 + s1) * 9` scrambler. The state is
//! expanded from a single `u64` seed with two steps of the PCG/Knuth LCG, so
//! nearby seeds produce unrelated streams and the all-zero state (a fixed
//! point of the update) can never be reached.
//!
//! # Determinism
//!
//! The stream is a pure function of the seed and the number of draws. Golden
//! vectors in the tests pin it bit-for-bit.

/// LCG multiplier used to expand the seed.
pub const SEED_MULTIPLIER: u64 = 6_364_136_223_846_793_005;

/// LCG increment used to expand the seed (odd, so zero never maps to zero).
pub const SEED_INCREMENT: u64 = 1_442_695_040_888_963_407;

#[inline]
const fn lcg_step(x: u64) -> u64 {
    x.wrapping_mul(SEED_MULTIPLIER).wrapping_add(SEED_INCREMENT)
}

/// Two-word pseudorandom generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotRng {
    s0: u64,
    s1: u64,
}

impl DotRng {
    /// Expand `seed` into a full generator state.
    pub const fn from_seed(seed: u64) -> Self {
        let s0 = lcg_step(seed);
        let s1 = lcg_step(s0);
        Self { s0, s1 }
    }

    /// Next 64-bit output. Never fails, never blocks.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let (s0, s1) = (self.s0, self.s1);
        let result = s0
            .wrapping_add(s1)
            .wrapping_mul(9)
            .rotate_left(29)
            .wrapping_add(s0);

        self.s0 = s0 ^ s1.rotate_left(29);
        self.s1 = s0 ^ (s1 << 9);

        result
    }

    /// Current state words, `[s0, s1]`.
    pub const fn state(&self) -> [u64; 2] {
        [self.s0, self.s1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_one_golden_state() {
        let rng = DotRng::from_seed(1);
        assert_eq!(rng.state(), [0x6c57_6fac_43fd_007c, 0x8268_86b3_864a_1b1b]);
    }

    #[test]
    fn seed_one_golden_stream() {
        let mut rng = DotRng::from_seed(1);
        assert_eq!(rng.next_u64(), 0x2fe7_6eb6_3094_f5a7);
        assert_eq!(rng.next_u64(), 0x2988_dcda_08e7_4cc8);
        assert_eq!(rng.next_u64(), 0x799e_8bb5_a8f0_e00b);
    }

    #[test]
    fn seed_zero_golden_stream() {
        let mut rng = DotRng::from_seed(0);
        assert_eq!(rng.state(), [SEED_INCREMENT, 0x1a08_ee11_84ba_6d32]);
        assert_eq!(rng.next_u64(), 0x9fab_a7d0_2b37_b811);
        assert_eq!(rng.next_u64(), 0x6373_48f0_43df_9dc7);
    }

    #[test]
    fn seed_42_golden_first() {
        let mut rng = DotRng::from_seed(42);
        assert_eq!(rng.next_u64(), 0x497a_498e_2c83_d2b6);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = DotRng::from_seed(0xdead_beef);
        let mut b = DotRng::from_seed(0xdead_beef);
        for _ in 0..1000 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn adjacent_seeds_diverge() {
        let mut a = DotRng::from_seed(7);
        let mut b = DotRng::from_seed(8);
        let same = (0..64).filter(|_| a.next_u64() == b.next_u64()).count();
        assert_eq!(same, 0);
    }
}

#[cfg(test)]
mod rng_proptests {
    use super::DotRng;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn state_is_never_all_zero(seed in any::<u64>()) {
            let mut rng = DotRng::from_seed(seed);
            for _ in 0..32 {
                prop_assert_ne!(rng.state(), [0, 0]);
                rng.next_u64();
            }
        }

        #[test]
        fn clone_replays_stream(seed in any::<u64>(), skip in 0usize..64) {
            let mut rng = DotRng::from_seed(seed);
            for _ in 0..skip {
                rng.next_u64();
            }
            let mut fork = rng.clone();
            for _ in 0..16 {
                prop_assert_eq!(rng.next_u64(), fork.next_u64());
            }
        }
    }
}
