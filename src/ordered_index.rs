use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::Index;

use crate::raw::{Handle, RawOrderedIndex};

mod config;

pub use config::IndexConfig;

/// An ordered map based on a doubly-linked [skip list].
///
/// Entries are kept sorted by key on a level-0 chain that runs between a head
/// and a tail sentinel. On top of that chain sit express lanes: every entry is
/// given a random height when it is inserted and takes part in that many
/// lanes. Each lane is linked in both directions, so the structure can be
/// walked front-to-back and back-to-front at every level.
///
/// Lookups, insertions and removals descend from the highest lane to level 0,
/// taking expected O(log n) time. Insertions at either end of the key range
/// skip the descent altogether.
///
/// Inserting a key that is already present replaces its value in place; the
/// structure is not touched and `len` does not change.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the index. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OrderedIndex` that observed the logic error and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use lanes::OrderedIndex;
///
/// let mut index = OrderedIndex::new();
/// index.insert(5, "a");
/// index.insert(1, "b");
/// index.insert(9, "c");
/// index.insert(1, "d"); // updates the value stored under 1
/// index.insert(3, "e");
///
/// let entries: Vec<_> = index.iter().map(|(k, v)| (*k, *v)).collect();
/// assert_eq!(entries, [(1, "d"), (3, "e"), (5, "a"), (9, "c")]);
///
/// assert!(index.delete(&3));
/// assert!(!index.delete(&3));
/// assert_eq!(index.len(), 3);
///
/// // walk backwards
/// let keys: Vec<_> = index.keys().rev().copied().collect();
/// assert_eq!(keys, [9, 5, 1]);
/// ```
///
/// [skip list]: https://en.wikipedia.org/wiki/Skip_list
pub struct OrderedIndex<K, V> {
    raw: RawOrderedIndex<K, V>,
}

/// An iterator over the entries of an `OrderedIndex`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedIndex`].
///
/// # Examples
///
/// ```
/// use lanes::OrderedIndex;
///
/// let index = OrderedIndex::from([(1, "a"), (2, "b")]);
/// let mut iter = index.iter();
/// assert_eq!(iter.next(), Some((&1, &"a")));
/// assert_eq!(iter.next_back(), Some((&2, &"b")));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: OrderedIndex::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    raw: &'a RawOrderedIndex<K, V>,
    front: Handle,
    back: Handle,
    remaining: usize,
}

/// An iterator over the keys of an `OrderedIndex`.
///
/// This `struct` is created by the [`keys`] method on [`OrderedIndex`].
///
/// [`keys`]: OrderedIndex::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over the values of an `OrderedIndex`.
///
/// This `struct` is created by the [`values`] method on [`OrderedIndex`].
///
/// [`values`]: OrderedIndex::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An iterator over `(key, value, height)` triples of an `OrderedIndex`.
///
/// This `struct` is created by the [`iter_levels`] method on [`OrderedIndex`].
///
/// [`iter_levels`]: OrderedIndex::iter_levels
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Levels<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// An owning iterator over the entries of an `OrderedIndex`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedIndex`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: alloc::vec::IntoIter<(K, V)>,
}

impl<K, V> OrderedIndex<K, V> {
    /// Makes a new, empty `OrderedIndex`.
    ///
    /// Only the two sentinels are allocated. Node heights are drawn from a
    /// generator seeded once here; use [`with_seed`](Self::with_seed) for
    /// reproducible layouts.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(1, "a");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(IndexConfig::new())
    }

    /// Makes a new, empty `OrderedIndex` with room for at least `capacity`
    /// entries before reallocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let index: OrderedIndex<u32, u32> = OrderedIndex::with_capacity(100);
    /// assert!(index.capacity() >= 100);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(IndexConfig::new().capacity(capacity))
    }

    /// Makes a new, empty `OrderedIndex` whose node heights are drawn from a
    /// generator seeded with `seed`.
    ///
    /// Two indexes built with the same seed and the same sequence of
    /// operations have identical shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut a = OrderedIndex::with_seed(42);
    /// let mut b = OrderedIndex::with_seed(42);
    /// for key in 0..100 {
    ///     a.insert(key, ());
    ///     b.insert(key, ());
    /// }
    /// assert!(a.iter_levels().map(|(_, _, h)| h).eq(b.iter_levels().map(|(_, _, h)| h)));
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(IndexConfig::new().seed(seed))
    }

    /// Makes a new, empty `OrderedIndex` from explicit [`IndexConfig`] options.
    #[must_use]
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            raw: RawOrderedIndex::new(config.initial_capacity(), config.level_generator(), config.trims_levels()),
        }
    }

    /// Returns the number of entries in the index.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut a = OrderedIndex::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the index contains no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the number of entries the index can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Returns the number of active index levels.
    ///
    /// This is the height of the tallest entry ever inserted. Removals leave
    /// it unchanged unless [`IndexConfig::trim_levels`] is enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// assert_eq!(index.max_level(), 0);
    /// index.insert("k", 1);
    /// assert!(index.max_level() >= 1);
    /// ```
    #[must_use]
    pub const fn max_level(&self) -> usize {
        self.raw.max_level()
    }

    /// Clears the index, removing all entries.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut a = OrderedIndex::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// assert_eq!(a.max_level(), 0);
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the first entry in the index. The key in this pair is the
    /// minimum key in the index.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// assert_eq!(index.first_key_value(), None);
    /// index.insert(1, "b");
    /// index.insert(2, "a");
    /// assert_eq!(index.first_key_value(), Some((&1, &"b")));
    /// ```
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the last entry in the index. The key in this pair is the
    /// maximum key in the index.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Removes and returns the first entry in the index.
    ///
    /// # Complexity
    ///
    /// O(height of the removed entry)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::from([(1, "a"), (2, "b")]);
    /// assert_eq!(index.pop_first(), Some((1, "a")));
    /// assert_eq!(index.pop_first(), Some((2, "b")));
    /// assert_eq!(index.pop_first(), None);
    /// ```
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Removes and returns the last entry in the index.
    ///
    /// # Complexity
    ///
    /// O(height of the removed entry)
    pub fn pop_last(&mut self) -> Option<(K, V)> {
        self.raw.pop_last()
    }

    /// Retains only the entries specified by the predicate.
    ///
    /// In other words, remove all pairs `(k, v)` for which `f(&k, &mut v)`
    /// returns `false`. The entries are visited in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index: OrderedIndex<i32, i32> = (0..8).map(|x| (x, x * 10)).collect();
    /// // Keep only the entries with even-numbered keys.
    /// index.retain(|&k, _| k % 2 == 0);
    /// assert!(index.into_iter().eq(vec![(0, 0), (2, 20), (4, 40), (6, 60)]));
    /// ```
    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&K, &mut V) -> bool,
    {
        self.raw.retain(f);
    }

    /// Gets an iterator over the entries of the index, sorted by key.
    ///
    /// The iterator is double-ended: `iter().rev()` walks the level-0 chain
    /// from the tail sentinel back to the head.
    ///
    /// # Complexity
    ///
    /// O(1) to create the iterator; O(1) per step.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(3, "c");
    /// index.insert(2, "b");
    /// index.insert(1, "a");
    ///
    /// for (key, value) in index.iter() {
    ///     println!("{key}: {value}");
    /// }
    ///
    /// let (first_key, first_value) = index.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            raw: &self.raw,
            front: self.raw.first(),
            back: self.raw.last(),
            remaining: self.raw.len(),
        }
    }

    /// Gets an iterator over `(key, value, height)` for every entry, sorted by
    /// key. The height is the number of index levels the entry takes part in.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let index = OrderedIndex::from([(2, 'b'), (1, 'a')]);
    /// for (key, value, height) in index.iter_levels() {
    ///     assert!(height >= 1 && height <= index.max_level());
    ///     println!("{key} -> {value} on {height} level(s)");
    /// }
    /// ```
    pub fn iter_levels(&self) -> Levels<'_, K, V> {
        Levels { inner: self.iter() }
    }

    /// Gets an iterator over the keys of the index, in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let index = OrderedIndex::from([(2, "b"), (1, "a")]);
    /// let keys: Vec<i32> = index.keys().cloned().collect();
    /// assert_eq!(keys, [1, 2]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Gets an iterator over the values of the index, in order by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let index = OrderedIndex::from([(1, "hello"), (2, "goodbye")]);
    /// let values: Vec<&str> = index.values().cloned().collect();
    /// assert_eq!(values, ["hello", "goodbye"]);
    /// ```
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

impl<K: Ord, V> OrderedIndex<K, V> {
    /// Looks up `key`, returning the stored key and its value.
    ///
    /// The key may be any borrowed form of the index's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(10, "ten");
    /// assert_eq!(index.search(&10), Some((&10, &"ten")));
    /// assert_eq!(index.search(&11), None);
    /// ```
    #[must_use]
    pub fn search<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(1, "a");
    /// assert_eq!(index.get(&1), Some(&"a"));
    /// assert_eq!(index.get(&2), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key).map(|(_, v)| v)
    }

    /// Alias of [`search`](Self::search), matching the `BTreeMap` name.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(1, "a");
    /// if let Some(x) = index.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(index[&1], "b");
    /// ```
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the index contains a value for the specified key.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(key).is_ok()
    }

    /// Returns the number of index levels the entry for `key` takes part in.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert("only", ());
    /// assert_eq!(index.height_of("only"), Some(1));
    /// assert_eq!(index.height_of("missing"), None);
    /// ```
    #[must_use]
    pub fn height_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.height_of(key)
    }

    /// Inserts a key-value pair into the index.
    ///
    /// If the index did not have this key present, a new entry is linked in
    /// and `None` is returned.
    ///
    /// If the index did have this key present, the value is updated in place
    /// and the old value is returned. The key is not updated and no links
    /// change.
    ///
    /// # Complexity
    ///
    /// Expected O(log n); O(height) when `key` is a new minimum or maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// assert_eq!(index.insert(37, "a"), None);
    /// assert_eq!(index.is_empty(), false);
    ///
    /// index.insert(37, "b");
    /// assert_eq!(index.insert(37, "c"), Some("b"));
    /// assert_eq!(index[&37], "c");
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Deletes `key` from the index. Returns `true` if an entry was removed
    /// and `false` if the key was absent, in which case nothing changes.
    ///
    /// # Complexity
    ///
    /// Expected O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(1, "a");
    /// assert!(index.delete(&1));
    /// assert!(!index.delete(&1));
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).is_some()
    }

    /// Removes a key from the index, returning the value at the key if the key
    /// was previously in the index.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let mut index = OrderedIndex::new();
    /// index.insert(1, "a");
    /// assert_eq!(index.remove(&1), Some("a"));
    /// assert_eq!(index.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the index, returning the stored key and value if the
    /// key was previously in the index.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }
}

impl<K: Clone, V: Clone> Clone for OrderedIndex<K, V> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

impl<K: Hash, V: Hash> Hash for OrderedIndex<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (k, v) in self {
            k.hash(state);
            v.hash(state);
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedIndex<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedIndex<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedIndex<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedIndex<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedIndex<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut index = OrderedIndex::new();
        index.extend(iter);
        index
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedIndex<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Ord + Copy, V: Copy> Extend<(&'a K, &'a V)> for OrderedIndex<K, V> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedIndex<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<K, Q, V> Index<&Q> for OrderedIndex<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    /// Returns a reference to the value corresponding to the supplied key.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present in the `OrderedIndex`.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedIndex<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<K, V> IntoIterator for OrderedIndex<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the index, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use lanes::OrderedIndex;
    ///
    /// let index = OrderedIndex::from([(2, "b"), (1, "a")]);
    /// let mut iter = index.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(mut self) -> IntoIter<K, V> {
        IntoIter {
            inner: self.raw.drain_to_vec().into_iter(),
        }
    }
}

impl<'a, K, V> Iter<'a, K, V> {
    fn next_entry(&mut self) -> Option<(&'a K, &'a V, usize)> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.raw.node(self.front);
        self.front = node.next();
        self.remaining -= 1;
        let (k, v) = node.key_value();
        Some((k, v, node.height()))
    }

    fn next_back_entry(&mut self) -> Option<(&'a K, &'a V, usize)> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.raw.node(self.back);
        self.back = node.prev();
        self.remaining -= 1;
        let (k, v) = node.key_value();
        Some((k, v, node.height()))
    }
}

impl<'a, K: 'a, V: 'a> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().map(|(k, v, _)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: 'a, V: 'a> DoubleEndedIterator for Iter<'a, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.next_back_entry().map(|(k, v, _)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            raw: self.raw,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Levels<'a, K, V> {
    type Item = (&'a K, &'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_entry()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Levels<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back_entry()
    }
}

impl<K, V> ExactSizeIterator for Levels<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Levels<'_, K, V> {}

impl<K, V> Clone for Levels<'_, K, V> {
    fn clone(&self) -> Self {
        Levels {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Levels<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, _)| k)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, v)| v)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V: fmt::Debug> fmt::Debug for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice().iter()).finish()
    }
}
