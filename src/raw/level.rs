use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::node::MAX_LEVEL;

/// Probability that a node reaching level `n` also reaches level `n + 1`.
const PROMOTE: f64 = 0.5;

// Used when no seed is given and the OS cannot be asked for one.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0x5eed_1a9e_5c0f_fee5;

/// Draws node heights from a geometric distribution.
///
/// A single generator is seeded once and reused for every draw.
#[derive(Clone, Debug)]
pub(crate) struct LevelGenerator {
    rng: SmallRng,
}

impl LevelGenerator {
    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[cfg(feature = "std")]
    pub(crate) fn from_entropy() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    #[cfg(not(feature = "std"))]
    pub(crate) fn from_entropy() -> Self {
        Self::seeded(FALLBACK_SEED)
    }

    /// Picks a height in `1..=MAX_LEVEL`.
    ///
    /// The height can exceed `current_max` by at most one, so the index
    /// grows one level at a time.
    pub(crate) fn choose(&mut self, current_max: usize) -> usize {
        let mut height = 1;
        while self.rng.random::<f64>() >= PROMOTE && height <= current_max && height < MAX_LEVEL {
            height += 1;
        }
        height
    }
}
