mod arena;
mod handle;
mod level;
mod node;
mod raw_index;

pub(crate) use handle::Handle;
pub(crate) use level::LevelGenerator;
pub use node::MAX_LEVEL;
pub(crate) use raw_index::RawOrderedIndex;
