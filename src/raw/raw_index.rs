use core::borrow::Borrow;
use core::cmp::Ordering;

use tracing::{debug, trace};

use super::arena::Arena;
use super::handle::Handle;
use super::level::LevelGenerator;
use super::node::{Link, Node};

const HEAD: Handle = Handle::HEAD;
const TAIL: Handle = Handle::TAIL;

/// The skip list backing `OrderedIndex`.
///
/// Every node, sentinels included, lives in `nodes`; the head sentinel sits in
/// slot 0 and the tail sentinel in slot 1. Both sentinels carry exactly
/// `max_level` links.
#[derive(Clone, Debug)]
pub(crate) struct RawOrderedIndex<K, V> {
    nodes: Arena<Node<K, V>>,
    levels: LevelGenerator,
    /// Number of live entries.
    len: usize,
    /// Number of active index levels.
    max_level: usize,
    /// Drop empty top levels after removals.
    trim_levels: bool,
}

/// Where a new node goes, decided before any link is touched.
#[derive(Clone, Copy, Debug)]
enum Placement {
    /// In front of every entry (also covers the empty index).
    Front,
    /// Behind every entry.
    Back,
    /// Directly after this level-0 predecessor.
    After(Handle),
}

impl<K, V> RawOrderedIndex<K, V> {
    pub(crate) fn new(capacity: usize, levels: LevelGenerator, trim_levels: bool) -> Self {
        let mut index = Self {
            nodes: Arena::with_capacity(capacity.saturating_add(2)),
            levels,
            len: 0,
            max_level: 0,
            trim_levels,
        };
        index.install_sentinels();
        index
    }

    fn install_sentinels(&mut self) {
        let head = self.nodes.insert(Node::sentinel(HEAD, TAIL));
        let tail = self.nodes.insert(Node::sentinel(HEAD, TAIL));
        assert!(
            head == HEAD && tail == TAIL,
            "`RawOrderedIndex::install_sentinels()` - sentinels must occupy slots 0 and 1!"
        );
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) const fn max_level(&self) -> usize {
        self.max_level
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity().saturating_sub(2)
    }

    pub(crate) fn clear(&mut self) {
        debug!(len = self.len, max_level = self.max_level, "clearing ordered index");
        self.nodes.clear();
        self.len = 0;
        self.max_level = 0;
        self.install_sentinels();
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    #[inline]
    fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// First entry, or `TAIL` when empty.
    pub(crate) fn first(&self) -> Handle {
        self.node(HEAD).next()
    }

    /// Last entry, or `HEAD` when empty.
    pub(crate) fn last(&self) -> Handle {
        self.node(TAIL).prev()
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let first = self.first();
        (first != TAIL).then(|| self.node(first).key_value())
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let last = self.last();
        (last != HEAD).then(|| self.node(last).key_value())
    }

    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let first = self.first();
        (first != TAIL).then(|| self.unlink(first))
    }

    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let last = self.last();
        (last != HEAD).then(|| self.unlink(last))
    }

    /// Removes every entry for which `keep` returns `false`, walking level 0 once.
    pub(crate) fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        let mut current = self.first();
        while current != TAIL {
            let next = self.node(current).next();
            let (key, value) = self.node_mut(current).key_value_mut();
            if !keep(key, value) {
                drop(self.unlink(current));
            }
            current = next;
        }
    }

    /// Empties the index into a vector, in key order.
    pub(crate) fn drain_to_vec(&mut self) -> alloc::vec::Vec<(K, V)> {
        let mut entries = alloc::vec::Vec::with_capacity(self.len);
        let mut current = self.first();
        while current != TAIL {
            let next = self.node(current).next();
            entries.push(self.nodes.remove(current).into_entry());
            current = next;
        }
        self.clear();
        entries
    }

    /// Detaches `handle` from level 0 and from every lane it sits on, then frees it.
    fn unlink(&mut self, handle: Handle) -> (K, V) {
        debug_assert!(!handle.is_sentinel());
        let node = self.nodes.remove(handle);

        let (prev, next) = (node.prev(), node.next());
        self.node_mut(prev).set_next(next);
        self.node_mut(next).set_prev(prev);

        for level in 0..node.height() {
            let Link { forward, backward } = node.link(level);
            self.node_mut(backward).link_mut(level).forward = forward;
            self.node_mut(forward).link_mut(level).backward = backward;
        }

        self.len -= 1;
        if self.trim_levels {
            self.trim_empty_levels();
        }
        node.into_entry()
    }

    /// Drops top levels on which the head links straight to the tail.
    fn trim_empty_levels(&mut self) {
        while self.max_level > 0 && self.node(HEAD).link(self.max_level - 1).forward == TAIL {
            let _ = self.node_mut(HEAD).pop_link();
            let _ = self.node_mut(TAIL).pop_link();
            self.max_level -= 1;
            trace!(max_level = self.max_level, "trimmed empty index level");
        }
    }

    /// Opens a new top level where `handle` is the only member.
    fn raise_level(&mut self, handle: Handle) {
        debug_assert_eq!(self.node(HEAD).height(), self.max_level);
        self.node_mut(HEAD).push_link(Link {
            forward: handle,
            backward: HEAD,
        });
        self.node_mut(TAIL).push_link(Link {
            forward: TAIL,
            backward: handle,
        });
        self.node_mut(handle).push_link(Link {
            forward: TAIL,
            backward: HEAD,
        });
        self.max_level += 1;
        trace!(max_level = self.max_level, "raised index level");
    }

    /// Links `handle` into `level` directly after `prev`.
    fn link_level(&mut self, level: usize, prev: Handle, handle: Handle) {
        let next = self.node(prev).link(level).forward;
        self.node_mut(next).link_mut(level).backward = handle;
        self.node_mut(prev).link_mut(level).forward = handle;
        self.node_mut(handle).push_link(Link {
            forward: next,
            backward: prev,
        });
    }

    /// Splices `handle` into the level-0 chain directly after `prev`.
    fn link_chain(&mut self, prev: Handle, handle: Handle) {
        let next = self.node(prev).next();
        self.node_mut(handle).set_prev(prev);
        self.node_mut(handle).set_next(next);
        self.node_mut(prev).set_next(handle);
        self.node_mut(next).set_prev(handle);
    }

    /// Walks backward from `cursor`, a member of `level - 1`, to the nearest
    /// node that also reaches `level`. Stops at the head sentinel.
    fn tall_predecessor(&self, mut cursor: Handle, level: usize) -> Handle {
        while cursor != HEAD && self.node(cursor).height() <= level {
            cursor = self.node(cursor).link(level - 1).backward;
        }
        cursor
    }

    /// Wires a freshly allocated node into the chain and into each of its levels.
    fn splice(&mut self, handle: Handle, height: usize, placement: Placement) {
        let mut cursor = match placement {
            Placement::Front => HEAD,
            Placement::Back => self.last(),
            Placement::After(prev) => prev,
        };
        self.link_chain(cursor, handle);

        for level in 0..height {
            if level >= self.max_level {
                self.raise_level(handle);
                continue;
            }
            let prev = match placement {
                Placement::Front => HEAD,
                Placement::Back => self.node(TAIL).link(level).backward,
                Placement::After(_) => {
                    cursor = self.tall_predecessor(cursor, level);
                    cursor
                }
            };
            self.link_level(level, prev, handle);
        }
    }

    fn place(&mut self, key: K, value: V, placement: Placement) {
        let height = self.levels.choose(self.max_level);
        let handle = self.nodes.insert(Node::new(key, value, height));
        self.splice(handle, height, placement);
        debug_assert_eq!(self.node(handle).height(), height);
        self.len += 1;
    }
}

impl<K: Ord, V> RawOrderedIndex<K, V> {
    /// Top-down, right-moving descent.
    ///
    /// Returns `Ok(node)` on an exact match, otherwise `Err(prev)` with the
    /// last level-0 node whose key is below `key` (`HEAD` if none).
    pub(crate) fn search<Q>(&self, key: &Q) -> Result<Handle, Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut cursor = HEAD;
        for level in (0..self.max_level).rev() {
            loop {
                let forward = self.node(cursor).link(level).forward;
                if forward == TAIL {
                    break;
                }
                let probe: &Q = self.node(forward).key().borrow();
                match probe.cmp(key) {
                    Ordering::Less => cursor = forward,
                    Ordering::Equal => return Ok(forward),
                    Ordering::Greater => break,
                }
            }
        }
        Err(cursor)
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key).ok()?;
        Some(self.node(handle).key_value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key).ok()?;
        Some(self.node_mut(handle).key_value_mut().1)
    }

    pub(crate) fn height_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key).ok()?;
        Some(self.node(handle).height())
    }

    /// Inserts `key`, or overwrites the value in place when it is already present.
    /// Returns the replaced value.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let placement = if self.is_empty() || key < *self.node(self.first()).key() {
            Placement::Front
        } else if key > *self.node(self.last()).key() {
            Placement::Back
        } else {
            match self.search(&key) {
                Ok(existing) => {
                    let slot = self.node_mut(existing).key_value_mut().1;
                    return Some(core::mem::replace(slot, value));
                }
                Err(prev) => Placement::After(prev),
            }
        };
        self.place(key, value, placement);
        None
    }

    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key).ok()?;
        Some(self.unlink(handle))
    }
}
