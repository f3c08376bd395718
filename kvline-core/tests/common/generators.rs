//! Stochastic line generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generated line plus what a parser is expected to see in it.
#[derive(Debug, Clone)]
pub struct Line {
    pub bytes: Vec<u8>,
    /// Every segment in order; `None` marks a malformed one.
    pub segments: Vec<Option<(Vec<u8>, Vec<u8>)>>,
}

impl Line {
    /// Entries expected under the truncating policy.
    pub fn expected_truncated(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.segments.iter().map_while(|s| s.clone()).collect()
    }

    /// Entries expected when malformed segments are skipped.
    pub fn expected_skipped(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.segments.iter().flatten().cloned().collect()
    }
}

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
        let seed = std::env::var("KVLINE_TEST_SEED")
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

    /// Random key, possibly empty
    pub fn key(&mut self) -> Vec<u8> {
        self.token(b"abcdefghijklmnopqrstuvwxyz0123456789-_.", 0.7)
    }

    /// Random value, possibly empty; may contain extra `=`
    pub fn value(&mut self) -> Vec<u8> {
        self.token(b"abcdefghijklmnopqrstuvwxyz0123456789-_./:= ", 0.8)
    }

    /// Text with no separators at all
    pub fn garbage(&mut self) -> Vec<u8> {
        self.token(b"abcdefghijklmnopqrstuvwxyz ", 0.6)
    }

    fn token(&mut self, chars: &[u8], alpha: f64) -> Vec<u8> {
        let len = self.geometric(alpha);
        (0..len)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect()
    }

    /// A line of `1 + geometric(0.8)` segments, each malformed with
    /// probability `p_bad`.
    pub fn line(&mut self, p_bad: f64) -> Line {
        let count = 1 + self.geometric(0.8);
        let mut bytes = Vec::new();
        let mut segments = Vec::with_capacity(count);
        for i in 0..count {
            if i > 0 {
                bytes.push(b';');
            }
            if self.chance(p_bad) {
                bytes.extend(self.garbage());
                segments.push(None);
            } else {
                let key = self.key();
                let value = self.value();
                bytes.extend(&key);
                bytes.push(b'=');
                bytes.extend(&value);
                segments.push(Some((key, value)));
            }
        }
        Line { bytes, segments }
    }
}
