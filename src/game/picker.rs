//! Target selection
//!
//! Sessions draw their target through a `TargetPicker`, so tests can fix the
//! target while play uses a random one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the index used to sample a target from the dictionary
pub trait TargetPicker {
    /// Pick an index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Uniform random picker
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Picker seeded from the operating system
    #[must_use]
    pub fn from_os() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible picker
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_os()
    }
}

impl TargetPicker for RandomPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Always picks the same index, wrapping if it is out of range
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl TargetPicker for FixedPicker {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0 % len
    }
}
