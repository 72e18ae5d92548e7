use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)` driving every random particle choice.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// `true` with probability `p`.
    #[inline]
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }

    /// Uniform in `[min, min + span)`.
    #[inline]
    fn span_from(&mut self, min: f64, span: f64) -> f64 {
        self.next_unit() * span + min
    }

    /// Uniform in `[-span / 2, span / 2)`.
    #[inline]
    fn centered(&mut self, span: f64) -> f64 {
        (self.next_unit() - 0.5) * span
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f64).floor() as usize).min(len.saturating_sub(1))
    }
}

/// Production randomness backed by `StdRng`.
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
