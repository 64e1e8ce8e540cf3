use std::collections::BTreeMap;

use lanes::ordered_index;
use lanes::{IndexConfig, MAX_LEVEL, OrderedIndex};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

/// The number of operations to perform in each proptest case.
const TEST_SIZE: usize = 5_000;

/// Keys are drawn from a range narrower than `TEST_SIZE` so updates and
/// deletes hit existing entries often.
fn key_strategy() -> impl Strategy<Value = i64> {
    -2_000i64..2_000i64
}

fn value_strategy() -> impl Strategy<Value = i64> {
    any::<i64>()
}

fn entries<K: Copy, V: Copy>(index: &OrderedIndex<K, V>) -> Vec<(K, V)> {
    index.iter().map(|(&k, &v)| (k, v)).collect()
}

// ─── Operations enum for driving randomized tests ────────────────────────────

#[derive(Debug, Clone)]
enum IndexOp {
    Insert(i64, i64),
    Delete(i64),
    Search(i64),
    PopFirst,
    PopLast,
}

fn index_op_strategy() -> impl Strategy<Value = IndexOp> {
    prop_oneof![
        6 => (key_strategy(), value_strategy()).prop_map(|(k, v)| IndexOp::Insert(k, v)),
        3 => key_strategy().prop_map(IndexOp::Delete),
        3 => key_strategy().prop_map(IndexOp::Search),
        1 => Just(IndexOp::PopFirst),
        1 => Just(IndexOp::PopLast),
    ]
}

// ─── Model-based properties ──────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    /// Replays a random sequence of operations on both OrderedIndex and
    /// BTreeMap and asserts identical results at every step.
    #[test]
    fn ops_match_btreemap(
        seed in any::<u64>(),
        trim in any::<bool>(),
        ops in proptest::collection::vec(index_op_strategy(), TEST_SIZE),
    ) {
        let mut index: OrderedIndex<i64, i64> =
            OrderedIndex::with_config(IndexConfig::new().seed(seed).trim_levels(trim));
        let mut model: BTreeMap<i64, i64> = BTreeMap::new();

        for op in &ops {
            match *op {
                IndexOp::Insert(k, v) => {
                    prop_assert_eq!(index.insert(k, v), model.insert(k, v), "insert({}, {})", k, v);
                }
                IndexOp::Delete(k) => {
                    prop_assert_eq!(index.delete(&k), model.remove(&k).is_some(), "delete({})", k);
                }
                IndexOp::Search(k) => {
                    prop_assert_eq!(index.search(&k), model.get_key_value(&k), "search({})", k);
                }
                IndexOp::PopFirst => {
                    prop_assert_eq!(index.pop_first(), model.pop_first(), "pop_first");
                }
                IndexOp::PopLast => {
                    prop_assert_eq!(index.pop_last(), model.pop_last(), "pop_last");
                }
            }
            prop_assert_eq!(index.len(), model.len(), "len mismatch after {:?}", op);
            prop_assert_eq!(index.is_empty(), model.is_empty());
            prop_assert!(index.max_level() <= MAX_LEVEL);
        }

        prop_assert_eq!(index.first_key_value(), model.first_key_value());
        prop_assert_eq!(index.last_key_value(), model.last_key_value());
        let expected: Vec<(i64, i64)> = model.iter().map(|(&k, &v)| (k, v)).collect();
        prop_assert_eq!(entries(&index), expected);
    }

    /// Forward traversal is strictly increasing and backward traversal is its
    /// exact reverse.
    #[test]
    fn traversal_is_ordered_both_ways(keys in proptest::collection::vec(key_strategy(), 0..TEST_SIZE)) {
        let mut index = OrderedIndex::new();
        for &k in &keys {
            index.insert(k, k.wrapping_mul(3));
        }

        let forward: Vec<i64> = index.keys().copied().collect();
        prop_assert!(forward.windows(2).all(|w| w[0] < w[1]));

        let mut backward: Vec<i64> = index.keys().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(&forward, &backward);

        prop_assert_eq!(index.iter().count(), index.len());
        prop_assert_eq!(index.iter().len(), index.len());
    }

    /// Every live key returns its most recent value; deleted keys are absent.
    #[test]
    fn search_after_updates_and_deletes(
        writes in proptest::collection::vec((key_strategy(), value_strategy()), 1..1_000),
        deletes in proptest::collection::vec(key_strategy(), 0..500),
    ) {
        let mut index = OrderedIndex::new();
        let mut latest = BTreeMap::new();
        for &(k, v) in &writes {
            index.insert(k, v);
            latest.insert(k, v);
        }
        for k in &deletes {
            index.delete(k);
            latest.remove(k);
        }
        for &(k, _) in &writes {
            prop_assert_eq!(index.get(&k), latest.get(&k));
            prop_assert_eq!(index.contains_key(&k), latest.contains_key(&k));
        }
    }

    /// Heights reported while walking stay within the active level count.
    #[test]
    fn levels_are_bounded(seed in any::<u64>(), n in 1usize..2_000) {
        let mut index = OrderedIndex::with_seed(seed);
        for k in 0..n {
            index.insert(k, ());
        }
        let max_level = index.max_level();
        prop_assert!(max_level >= 1);
        let mut tallest = 0;
        for (k, _, height) in index.iter_levels() {
            prop_assert!((1..=max_level).contains(&height));
            prop_assert_eq!(index.height_of(k), Some(height));
            tallest = tallest.max(height);
        }
        // Nothing was removed, so some entry reaches the top level.
        prop_assert_eq!(tallest, max_level);
    }
}

// ─── Scenarios ───────────────────────────────────────────────────────────────

#[test]
fn update_then_delete_scenario() {
    let mut index = OrderedIndex::new();
    index.insert(5, 'a');
    index.insert(1, 'b');
    index.insert(9, 'c');
    index.insert(1, 'd');
    index.insert(3, 'e');

    assert_eq!(entries(&index), [(1, 'd'), (3, 'e'), (5, 'a'), (9, 'c')]);
    assert_eq!(index.len(), 4);

    assert!(index.delete(&3));
    assert_eq!(entries(&index), [(1, 'd'), (5, 'a'), (9, 'c')]);
    assert!(!index.delete(&3));
    assert_eq!(index.len(), 3);
}

#[test]
fn single_entry_lifecycle() {
    let mut index = OrderedIndex::new();
    index.insert(42, "answer");
    assert_eq!(index.search(&42), Some((&42, &"answer")));

    assert!(index.delete(&42));
    assert_eq!(index.len(), 0);
    assert_eq!(index.iter().next(), None);
    assert_eq!(index.iter().next_back(), None);
    assert_eq!(index.search(&42), None);

    // The emptied index takes new entries on the lanes it kept.
    index.insert(7, "again");
    assert_eq!(entries(&index), [(7, "again")]);
}

#[test]
fn operations_on_empty_index() {
    let mut index: OrderedIndex<i32, i32> = OrderedIndex::default();
    assert!(!index.delete(&1));
    assert_eq!(index.remove(&1), None);
    assert_eq!(index.search(&1), None);
    assert_eq!(index.pop_first(), None);
    assert_eq!(index.pop_last(), None);
    assert_eq!(index.first_key_value(), None);
    assert_eq!(index.last_key_value(), None);
    assert_eq!(index.max_level(), 0);
    assert_eq!(index.iter_levels().len(), 0);
}

#[test]
fn monotonic_inserts_both_directions() {
    let mut ascending = OrderedIndex::with_seed(1);
    let mut descending = OrderedIndex::with_seed(1);
    for k in 0..10_000 {
        ascending.insert(k, k);
        descending.insert(10_000 - k, k);
    }
    assert_eq!(ascending.len(), 10_000);
    assert_eq!(descending.len(), 10_000);
    assert!(ascending.keys().copied().eq(0..10_000));
    assert!(descending.keys().copied().eq(1..=10_000));
    assert!(ascending.max_level() > 4);
}

#[test]
fn interleaved_middle_inserts() {
    let mut index = OrderedIndex::with_seed(99);
    for k in (0..2_000).step_by(2) {
        index.insert(k, ());
    }
    for k in (1..2_000).step_by(2).rev() {
        index.insert(k, ());
    }
    assert!(index.keys().copied().eq(0..2_000));
    for k in (0..2_000).step_by(3) {
        assert!(index.delete(&k));
    }
    assert!(index.keys().all(|k| k % 3 != 0));
    assert_eq!(index.len(), 2_000 - 667);
}

#[test]
fn trimmed_index_shrinks_back_to_zero_levels() {
    let mut index = OrderedIndex::with_config(IndexConfig::new().seed(3).trim_levels(true));
    let mut untrimmed = OrderedIndex::with_seed(3);
    for k in 0..1_000 {
        index.insert(k, ());
        untrimmed.insert(k, ());
    }
    let peak = untrimmed.max_level();
    assert_eq!(index.max_level(), peak);

    for k in 0..1_000 {
        index.delete(&k);
        untrimmed.delete(&k);
    }
    assert_eq!(index.max_level(), 0);
    assert_eq!(untrimmed.max_level(), peak);
}

#[test]
fn borrowed_key_lookups() {
    let mut index: OrderedIndex<String, usize> = OrderedIndex::new();
    for word in ["pear", "apple", "fig"] {
        index.insert(word.to_owned(), word.len());
    }
    assert_eq!(index.get("fig"), Some(&3));
    assert_eq!(index["apple"], 5);
    assert!(index.delete("pear"));
    assert_eq!(index.remove_entry("apple"), Some(("apple".to_owned(), 5)));
    assert_eq!(index.keys().collect::<Vec<_>>(), ["fig"]);
}

#[test]
#[should_panic(expected = "no entry found for key")]
fn index_missing_key_panics() {
    let index = OrderedIndex::from([(1, "a")]);
    let _ = index[&2];
}

#[test]
fn trait_impls() {
    let a: OrderedIndex<i32, i32> = (0..5).map(|k| (k, k * k)).collect();
    let mut b: OrderedIndex<i32, i32> = OrderedIndex::with_seed(123);
    b.extend([(&4, &16), (&3, &9)]);
    b.extend((0..3).map(|k| (k, k * k)));
    assert_eq!(a, b);
    assert_eq!(format!("{a:?}"), "{0: 0, 1: 1, 2: 4, 3: 9, 4: 16}");

    let c = a.clone();
    assert_eq!(a, c);
    b.insert(9, 81);
    assert_ne!(a, b);

    let owned: Vec<(i32, i32)> = c.into_iter().rev().collect();
    assert_eq!(owned, [(4, 16), (3, 9), (2, 4), (1, 1), (0, 0)]);

    assert_eq!(a.values().copied().collect::<Vec<_>>(), [0, 1, 4, 9, 16]);
    assert_eq!(a.values().last(), Some(&16));
    assert_eq!(format!("{:?}", a.keys()), "[0, 1, 2, 3, 4]");
}

#[test]
fn get_mut_and_retain() {
    let mut index: OrderedIndex<u32, u32> = (1..=10).map(|k| (k, 0)).collect();
    if let Some(v) = index.get_mut(&4) {
        *v = 40;
    }
    assert_eq!(index[&4], 40);
    index.retain(|k, v| {
        *v += 1;
        k % 2 == 0
    });
    assert_eq!(entries(&index), [(2, 1), (4, 41), (6, 1), (8, 1), (10, 1)]);
    index.clear();
    assert!(index.is_empty());
    assert_eq!(index.max_level(), 0);
}

#[test]
fn iterator_meets_in_the_middle() {
    let index: OrderedIndex<i32, ()> = (0..6).map(|k| (k, ())).collect();
    let mut iter = index.iter();
    assert_eq!(iter.next().map(|(k, _)| *k), Some(0));
    assert_eq!(iter.next_back().map(|(k, _)| *k), Some(5));
    assert_eq!(iter.len(), 4);
    let rest: Vec<i32> = iter.clone().map(|(k, _)| *k).collect();
    assert_eq!(rest, [1, 2, 3, 4]);
    assert_eq!(iter.by_ref().rev().count(), 4);
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

// ─── Thread-safety and drop semantics ────────────────────────────────────────

/// Compile-time assertions: the index has no interior mutability and borrows
/// like a std collection.
mod send_sync_tests {
    use super::ordered_index::{IntoIter, Iter, Keys, Levels, Values};
    use super::OrderedIndex;

    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    #[test]
    fn index_and_iterators_are_send_sync() {
        assert_send::<OrderedIndex<i64, i64>>();
        assert_sync::<OrderedIndex<i64, i64>>();
        assert_send::<Iter<'_, i64, i64>>();
        assert_sync::<Iter<'_, i64, i64>>();
        assert_send::<Keys<'_, i64, i64>>();
        assert_send::<Values<'_, i64, i64>>();
        assert_send::<Levels<'_, i64, i64>>();
        assert_send::<IntoIter<i64, i64>>();
        assert_sync::<IntoIter<i64, i64>>();
    }
}

mod drop_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use lanes::OrderedIndex;

    struct Droppable {
        drops: Rc<Cell<usize>>,
    }

    impl Drop for Droppable {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    fn droppable(drops: &Rc<Cell<usize>>) -> Droppable {
        Droppable { drops: Rc::clone(drops) }
    }

    #[test]
    fn values_drop_exactly_once() {
        let drops = Rc::new(Cell::new(0));
        {
            let mut index = OrderedIndex::new();
            for k in 0..100 {
                index.insert(k, droppable(&drops));
            }
            // Updating drops the replaced value.
            drop(index.insert(7, droppable(&drops)));
            assert_eq!(drops.get(), 1);

            assert!(index.delete(&8));
            assert_eq!(drops.get(), 2);

            // Drops the 50 odd keys, 7 included.
            index.retain(|k, _| k % 2 == 0);
            assert_eq!(drops.get(), 2 + 50);
        }
        // 101 values were created in total.
        assert_eq!(drops.get(), 101);
    }

    #[test]
    fn into_iter_hands_over_ownership() {
        let drops = Rc::new(Cell::new(0));
        let index: OrderedIndex<u8, Droppable> = (0..10).map(|k| (k, droppable(&drops))).collect();
        let mut owned = index.into_iter();
        let first = owned.next();
        assert_eq!(drops.get(), 0);
        drop(owned);
        assert_eq!(drops.get(), 9);
        drop(first);
        assert_eq!(drops.get(), 10);
    }
}
