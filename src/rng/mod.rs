use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform randomness for endpoint and palette selection.
///
/// The engine only ever asks for integers in a half-open range and for unit
/// floats, so a deterministic implementation is trivial to substitute in
/// tests ([`SeededRandom`]).
pub trait RandomSource {
    /// Uniform integer in `[min, max)`. An empty or inverted range returns
    /// `min`.
    fn next_int(&mut self, min: u32, max: u32) -> u32;

    /// Uniform float in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Default source backed by the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        rand::thread_rng().gen_range(min..max)
    }

    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}

/// Deterministic source for tests, seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Create a source with a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/rng/source.rs"]
mod tests;
