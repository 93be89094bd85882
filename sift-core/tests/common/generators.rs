//! Stochastic content generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("SIFT_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(|| rand::random());
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// Random word (ASCII letters, never empty)
    pub fn word(&mut self) -> Vec<u8> {
        let len = 1 + self.geometric(0.7);
        (0..len).map(|_| self.rng.gen_range(b'a'..=b'z')).collect()
    }

    /// Random delimiter: 1-3 bytes of punctuation
    pub fn delimiter(&mut self) -> Vec<u8> {
        let punct = b" \t,;:|/#";
        let len = 1 + self.geometric(0.4).min(2);
        (0..len)
            .map(|_| punct[self.rng.gen_range(0..punct.len())])
            .collect()
    }

    /// Random line: words joined by delimiters drawn from `delims`,
    /// occasionally doubled or leading/trailing.
    pub fn line(&mut self, delims: &[Vec<u8>]) -> Vec<u8> {
        let mut out = Vec::new();
        if self.chance(0.2) {
            out.extend(&delims[self.rng.gen_range(0..delims.len())]);
        }
        let words = 1 + self.geometric(0.8);
        for i in 0..words {
            if i > 0 {
                let d = &delims[self.rng.gen_range(0..delims.len())];
                out.extend(d);
                if self.chance(0.2) {
                    out.extend(d);
                }
            }
            out.extend(self.word());
        }
        if self.chance(0.2) {
            out.extend(&delims[self.rng.gen_range(0..delims.len())]);
        }
        out
    }
}
