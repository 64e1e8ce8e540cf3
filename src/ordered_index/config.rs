use crate::raw::LevelGenerator;

/// Construction options for an [`OrderedIndex`](super::OrderedIndex).
///
/// # Examples
///
/// ```
/// use lanes::{IndexConfig, OrderedIndex};
///
/// let config = IndexConfig::new().capacity(1_024).seed(7).trim_levels(true);
/// let mut index = OrderedIndex::with_config(config);
/// index.insert(1, "one");
/// assert_eq!(index.get(&1), Some(&"one"));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct IndexConfig {
    capacity: usize,
    seed: Option<u64>,
    trim_levels: bool,
}

impl IndexConfig {
    /// Default options: no preallocation, an OS-provided seed, levels never trimmed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            capacity: 0,
            seed: None,
            trim_levels: false,
        }
    }

    /// Number of entries to preallocate node slots for.
    #[must_use]
    pub const fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Fixes the seed of the level generator, making node heights reproducible.
    ///
    /// Without a seed the generator is seeded from the operating system when
    /// the `std` feature is enabled, and from a built-in constant otherwise.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// When enabled, every removal drops top levels left with no entries.
    ///
    /// Disabled by default: the number of levels then only ever grows, which
    /// wastes at most a few empty sentinel lanes.
    #[must_use]
    pub const fn trim_levels(mut self, trim_levels: bool) -> Self {
        self.trim_levels = trim_levels;
        self
    }

    pub(crate) const fn initial_capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) const fn trims_levels(&self) -> bool {
        self.trim_levels
    }

    pub(crate) fn level_generator(&self) -> LevelGenerator {
        match self.seed {
            Some(seed) => LevelGenerator::seeded(seed),
            None => LevelGenerator::from_entropy(),
        }
    }
}
