//! Randomness sources — the seam every shuffle index draw goes through.
//!
//! Production code uses [`SystemSource`] (a fresh permutation per call);
//! `--seed` runs use [`SeededSource`]; tests that need an exact permutation
//! use [`SequenceSource`].

use rand::rngs::ThreadRng;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A uniform source of shuffle indices.
pub trait RandomSource {
    /// Draw a value uniformly in `[0, bound)`. Callers guarantee `bound >= 1`.
    fn pick(&mut self, bound: usize) -> usize;
}

/// Thread-local RNG — the non-reproducible production default.
pub struct SystemSource {
    rng: ThreadRng,
}

impl SystemSource {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemSource {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Seeded ChaCha8 stream — the same seed replays the same permutations.
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn pick(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a scripted list of draws, reducing each modulo its bound.
/// An exhausted script keeps returning 0.
pub struct SequenceSource {
    draws: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    pub fn new(draws: Vec<usize>) -> Self {
        Self { draws, pos: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn pick(&mut self, bound: usize) -> usize {
        let draw = self.draws.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        draw % bound
    }
}
