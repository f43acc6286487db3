//! RNG module - injected randomness for shape selection
//!
//! The engine never touches process-wide randomness. It draws catalog indices
//! from a [`ShapeSource`], which is either backed by a `rand` generator or by a
//! scripted sequence for deterministic tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::ShapeKind;

/// Supplier of catalog indices
pub trait ShapeSource {
    /// Next index in `0..bound`
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<S: ShapeSource + ?Sized> ShapeSource for Box<S> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Uniform choice with replacement from any `rand` generator
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<StdRng> {
    /// Deterministic source; same seed, same piece sequence
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> ShapeSource for RandomSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Scripted source that cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct SequenceSource {
    kinds: Vec<ShapeKind>,
    pos: usize,
}

impl SequenceSource {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: Vec<ShapeKind>) -> Self {
        assert!(!kinds.is_empty(), "sequence must contain at least one kind");
        Self { kinds, pos: 0 }
    }

    /// Source that always yields the same kind
    pub fn repeat(kind: ShapeKind) -> Self {
        Self::new(vec![kind])
    }
}

impl ShapeSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        let kind = self.kinds[self.pos % self.kinds.len()];
        self.pos = (self.pos + 1) % self.kinds.len();
        kind.index() % bound
    }
}
