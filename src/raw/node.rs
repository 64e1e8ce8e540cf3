use smallvec::SmallVec;

use super::handle::Handle;

/// Hard cap on the height of an entry, and so on the number of index levels.
pub const MAX_LEVEL: usize = 32;

// Most entries are one or two levels tall; sentinels spill to the heap.
const INLINE_LINKS: usize = 4;

/// One express lane hop: the neighbours of a node at a single level.
///
/// The head sentinel's `backward` and the tail sentinel's `forward` point at
/// themselves.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Link {
    pub(crate) forward: Handle,
    pub(crate) backward: Handle,
}

/// A node of the skip list: either a sentinel or a live entry.
#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    // `None` only for the head and tail sentinels.
    entry: Option<(K, V)>,
    // Level-0 chain, kept separately from `links[0]`.
    prev: Handle,
    next: Handle,
    // `links[i]` is the lane at level `i`; the length is the node height.
    links: SmallVec<[Link; INLINE_LINKS]>,
}

impl<K, V> Node<K, V> {
    /// Creates a sentinel with no levels.
    pub(crate) fn sentinel(prev: Handle, next: Handle) -> Self {
        Self {
            entry: None,
            prev,
            next,
            links: SmallVec::new(),
        }
    }

    /// Creates an unlinked entry node with room for `height` levels.
    pub(crate) fn new(key: K, value: V, height: usize) -> Self {
        debug_assert!((1..=MAX_LEVEL).contains(&height));
        Self {
            entry: Some((key, value)),
            prev: Handle::HEAD,
            next: Handle::TAIL,
            links: SmallVec::with_capacity(height),
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.entry.as_ref().expect("`Node::key()` - sentinels carry no key!").0
    }

    #[inline]
    pub(crate) fn key_value(&self) -> (&K, &V) {
        let (k, v) = self.entry.as_ref().expect("`Node::key_value()` - sentinels carry no entry!");
        (k, v)
    }

    #[inline]
    pub(crate) fn key_value_mut(&mut self) -> (&K, &mut V) {
        let (k, v) = self.entry.as_mut().expect("`Node::key_value_mut()` - sentinels carry no entry!");
        (k, v)
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        self.entry.expect("`Node::into_entry()` - sentinels carry no entry!")
    }

    /// Number of levels this node participates in.
    #[inline]
    pub(crate) fn height(&self) -> usize {
        self.links.len()
    }

    #[inline]
    pub(crate) fn prev(&self) -> Handle {
        self.prev
    }

    #[inline]
    pub(crate) fn next(&self) -> Handle {
        self.next
    }

    pub(crate) fn set_prev(&mut self, prev: Handle) {
        self.prev = prev;
    }

    pub(crate) fn set_next(&mut self, next: Handle) {
        self.next = next;
    }

    #[inline]
    pub(crate) fn link(&self, level: usize) -> Link {
        self.links[level]
    }

    #[inline]
    pub(crate) fn link_mut(&mut self, level: usize) -> &mut Link {
        &mut self.links[level]
    }

    /// Appends the next level up. Levels are always filled bottom-up.
    pub(crate) fn push_link(&mut self, link: Link) {
        debug_assert!(self.links.len() < MAX_LEVEL);
        self.links.push(link);
    }

    pub(crate) fn pop_link(&mut self) -> Option<Link> {
        self.links.pop()
    }
}
