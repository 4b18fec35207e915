//! Random sources for password generation.

mod hw;
mod primes;

use rand::RngCore;
use rand::rand_core::impls;
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use primes::PRIMES;

/// Which generator feeds the password draws.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// `rand`'s thread-local generator, seeded by the OS.
    #[default]
    Os,
    /// [`HwRng`], mixing the CPU cycle counter into its state.
    Hardware,
}

impl Source {
    pub fn name(self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Hardware => hw::COUNTER_NAME,
        }
    }

    pub fn rng(self) -> Box<dyn RngCore> {
        match self {
            Self::Os => Box::new(rand::rng()),
            Self::Hardware => Box::new(HwRng::new()),
        }
    }
}

/// Generator that folds fresh hardware entropy into every step.
///
/// The state is zeroed on drop.
#[derive(Debug)]
pub struct HwRng {
    state: u64,
}

impl HwRng {
    pub fn new() -> Self {
        Self {
            state: hw::counter(),
        }
    }

    /// Start from a fixed state. Later draws still mix in hardware entropy.
    pub fn from_state(state: u64) -> Self {
        Self { state }
    }
}

impl Default for HwRng {
    fn default() -> Self {
        Self::new()
    }
}

impl HwRng {
    /// Fold one counter reading into the state.
    ///
    /// The reading picks which prime scales the rotated state, then is xored in.
    fn advance(&mut self, ticks: u64) {
        let folded = self.state ^ ticks;
        let prime = PRIMES[((folded ^ (folded >> 32)) % PRIMES.len() as u64) as usize];
        self.state = self.state.rotate_left(17).wrapping_mul(prime) ^ ticks;
    }
}

/// SplitMix64 finalizer.
fn scramble(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl RngCore for HwRng {
    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.advance(hw::counter());
        scramble(self.state)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl Drop for HwRng {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn hw_rng_covers_range() {
        let mut rng = HwRng::from_state(1);
        let mut seen = [false; 10];
        for _ in 0..1000 {
            seen[rng.random_range(0..10)] = true;
        }
        assert!(seen.iter().all(|&s| s), "{seen:?}");
    }

    #[test]
    fn hw_rng_fills_bytes() {
        let mut rng = HwRng::new();
        let mut buf = [0u8; 64];
        rng.fill_bytes(&mut buf);
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn advance_depends_on_state_and_ticks() {
        let mut a = HwRng::from_state(7);
        let mut b = HwRng::from_state(7);
        a.advance(1);
        b.advance(1);
        assert_eq!(a.state, b.state);

        b.advance(1);
        assert_ne!(a.state, b.state);
        a.advance(2);
        assert_ne!(a.state, b.state);
    }

    #[test]
    fn scramble_spreads_adjacent_states() {
        let diff = (scramble(1) ^ scramble(2)).count_ones();
        assert!(diff > 16, "{diff} bits differ");
    }

    #[test]
    fn boxed_sources_draw() {
        for source in [Source::Os, Source::Hardware] {
            let mut rng = source.rng();
            let n: u8 = rng.random_range(0..4);
            assert!(n < 4, "{}", source.name());
        }
    }
}
