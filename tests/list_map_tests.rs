//! Unit tests for ListMap.

use std::cell::Cell;
use std::cmp::Ordering;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use listmap::{Comparator, ListMap, NaturalOrder, ReverseOrder};
use rstest::rstest;

fn keys_of<C>(map: &ListMap<i32, &str, C>) -> Vec<i32> {
    map.keys().copied().collect()
}

// Pins the comparator parameter to `NaturalOrder`, which a bare
// `ListMap::from(...)` in expression position would leave unconstrained.
fn map_from<K: Ord, V, const N: usize>(entries: [(K, V); N]) -> ListMap<K, V> {
    ListMap::from(entries)
}

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map: ListMap<i32, String> = ListMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[rstest]
fn test_default_creates_empty_map() {
    let map: ListMap<i32, String> = ListMap::default();
    assert!(map.is_empty());
}

#[rstest]
fn test_singleton_creates_map_with_one_entry() {
    let map = ListMap::singleton(42, "answer");
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&42), Some(&"answer"));
}

#[rstest]
fn test_from_array_of_entries() {
    let map = ListMap::<i32, &str>::from([(2, "two"), (1, "one")]);
    assert_eq!(keys_of(&map), vec![1, 2]);
}

// =============================================================================
// Empty-Map Edge Cases
// =============================================================================

#[rstest]
fn test_empty_map_negative_results() {
    let mut map: ListMap<i32, &str> = ListMap::new();
    assert_eq!(map.len(), 0);
    assert!(!map.contains_key(&1));
    assert_eq!(map.get(&1), None);
    assert_eq!(map.first(), None);
    assert_eq!(map.last(), None);
    assert_eq!(map.iter().next(), None);
    assert_eq!(map.remove(&1), None);
}

// =============================================================================
// Insert and Get Tests
// =============================================================================

#[rstest]
fn test_insert_returns_none_for_new_key() {
    let mut map = ListMap::new();
    assert_eq!(map.insert(1, "one"), None);
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_insert_existing_key_updates_in_place() {
    let mut map = ListMap::new();
    map.insert(1, "one");
    assert_eq!(map.insert(1, "ONE"), Some("one"));
    assert_eq!(map.len(), 1);
    assert_eq!(map.get(&1), Some(&"ONE"));
}

#[rstest]
fn test_insert_keeps_keys_sorted_regardless_of_order() {
    let mut map = ListMap::new();
    for key in [5, 1, 4, 2, 3] {
        map.insert(key, "x");
    }
    assert_eq!(keys_of(&map), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_insert_before_current_minimum() {
    let mut map = ListMap::new();
    map.insert(5, "five");
    map.insert(1, "one");
    assert_eq!(map.first(), Some((&1, &"one")));
}

#[rstest]
fn test_get_returns_stored_value_reference() {
    let mut map = ListMap::new();
    map.insert(1, "one".to_string());
    assert_eq!(map.get(&1), Some(&"one".to_string()));
    assert_eq!(map.get(&2), None);
}

#[rstest]
fn test_get_mut_updates_value_in_place() {
    let mut map = ListMap::new();
    map.insert(1, 10);
    if let Some(value) = map.get_mut(&1) {
        *value += 5;
    }
    assert_eq!(map.get(&1), Some(&15));
}

#[rstest]
fn test_contains_key() {
    let mut map = ListMap::new();
    map.insert(1, "one");
    assert!(map.contains_key(&1));
    assert!(!map.contains_key(&2));
}

// =============================================================================
// Comparator-Identity Tests
// =============================================================================

// Keys that carry a label the comparator never looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TaggedKey {
    id: i32,
    label: &'static str,
}

fn by_id(left: &TaggedKey, right: &TaggedKey) -> Ordering {
    left.id.cmp(&right.id)
}

#[rstest]
fn test_comparator_equal_keys_are_the_same_key() {
    let mut map = ListMap::with_comparator(by_id as fn(&TaggedKey, &TaggedKey) -> Ordering);
    map.insert(TaggedKey { id: 1, label: "first" }, 10);
    map.insert(TaggedKey { id: 1, label: "second" }, 20);

    assert_eq!(map.len(), 1);
    let (stored_key, stored_value) = map
        .get_key_value(&TaggedKey { id: 1, label: "anything" })
        .expect("key must be present");
    // The update replaced the stored key as well as the value.
    assert_eq!(stored_key.label, "second");
    assert_eq!(stored_value, &20);
}

#[rstest]
fn test_closure_comparator_orders_descending() {
    let mut map = ListMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    map.insert(1, "one");
    map.insert(3, "three");
    map.insert(2, "two");

    let keys: Vec<i32> = map.keys().copied().collect();
    assert_eq!(keys, vec![3, 2, 1]);
    assert_eq!(map.get(&2), Some(&"two"));
}

#[rstest]
fn test_reverse_order_flips_natural_order() {
    let mut map = ListMap::with_comparator(ReverseOrder(NaturalOrder));
    map.insert(1, "one");
    map.insert(9, "nine");
    assert_eq!(map.first(), Some((&9, &"nine")));
    assert_eq!(map.last(), Some((&1, &"one")));
}

#[rstest]
fn test_comparator_accessor_exposes_the_ordering_in_use() {
    let reversed: ListMap<i32, &str, ReverseOrder> =
        ListMap::with_comparator(ReverseOrder(NaturalOrder));
    assert_eq!(reversed.comparator().compare(&1, &2), Ordering::Greater);

    let natural: ListMap<i32, &str> = ListMap::new();
    assert_eq!(natural.comparator().compare(&1, &2), Ordering::Less);
    assert_eq!(natural.comparator().compare(&2, &2), Ordering::Equal);
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_smallest_key() {
    let mut map = map_from([(1, "one"), (2, "two"), (3, "three")]);
    assert_eq!(map.remove(&1), Some("one"));
    assert_eq!(keys_of(&map), vec![2, 3]);
}

#[rstest]
fn test_remove_middle_key() {
    let mut map = map_from([(1, "one"), (2, "two"), (3, "three")]);
    assert_eq!(map.remove(&2), Some("two"));
    assert_eq!(keys_of(&map), vec![1, 3]);
}

#[rstest]
fn test_remove_only_entry_leaves_usable_empty_map() {
    let mut map = ListMap::new();
    map.insert(1, "one");
    assert_eq!(map.remove(&1), Some("one"));
    assert!(map.is_empty());

    map.insert(2, "two");
    assert_eq!(map.get(&2), Some(&"two"));
}

#[rstest]
fn test_remove_missing_key_is_an_ordinary_negative_result() {
    let mut map = map_from([(1, "one")]);
    assert_eq!(map.remove(&9), None);
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_remove_entry_returns_stored_key() {
    let mut map = ListMap::new();
    map.insert(1, "one");
    assert_eq!(map.remove_entry(&1), Some((1, "one")));
}

#[rstest]
fn test_insert_then_remove_restores_previous_traversal() {
    let mut map = map_from([(1, "one"), (3, "three")]);
    let before: Vec<i32> = keys_of(&map);

    map.insert(2, "two");
    map.remove(&2);

    assert_eq!(keys_of(&map), before);
    assert_eq!(map.len(), 2);
}

// =============================================================================
// Concrete Scenario (integer keys, ascending comparator)
// =============================================================================

#[rstest]
fn test_put_get_remove_scenario() {
    let mut map = ListMap::new();
    map.insert(5, "e");
    map.insert(2, "b");
    map.insert(8, "h");
    map.insert(2, "B");

    assert_eq!(map.len(), 3);
    assert_eq!(keys_of(&map), vec![2, 5, 8]);
    assert_eq!(map.get(&2), Some(&"B"));

    assert_eq!(map.remove(&5), Some("e"));
    assert_eq!(map.len(), 2);
    assert_eq!(keys_of(&map), vec![2, 8]);

    assert_eq!(map.remove(&5), None);
}

// =============================================================================
// Iteration Tests
// =============================================================================

#[rstest]
fn test_iter_yields_entries_in_key_order() {
    let map = map_from([(3, "three"), (1, "one"), (2, "two")]);
    let entries: Vec<(i32, &str)> = map.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(entries, vec![(1, "one"), (2, "two"), (3, "three")]);
}

#[rstest]
fn test_iter_is_exact_size() {
    let map = map_from([(1, "one"), (2, "two")]);
    let mut iterator = map.iter();
    assert_eq!(iterator.len(), 2);
    iterator.next();
    assert_eq!(iterator.len(), 1);
}

#[rstest]
fn test_nested_traversals_are_independent() {
    let map = map_from([(1, "one"), (2, "two"), (3, "three")]);
    for (outer_key, _) in map.iter() {
        // Each inner traversal starts from the beginning, whatever the
        // outer traversal is doing.
        let first_inner_key = map.iter().next().map(|(key, _)| *key);
        assert_eq!(first_inner_key, Some(1));
        assert!(map.contains_key(outer_key));
    }
}

#[rstest]
fn test_iter_mut_mutates_values_and_preserves_order() {
    let mut map = map_from([(1, 10), (2, 20)]);
    for (_, value) in map.iter_mut() {
        *value += 1;
    }
    assert_eq!(map.get(&1), Some(&11));
    assert_eq!(map.get(&2), Some(&21));
    assert_eq!(map.keys().copied().collect::<Vec<i32>>(), vec![1, 2]);
}

#[rstest]
fn test_values_follow_key_order() {
    let map = map_from([(2, "two"), (1, "one")]);
    let values: Vec<&str> = map.values().copied().collect();
    assert_eq!(values, vec!["one", "two"]);
}

#[rstest]
fn test_values_mut() {
    let mut map = map_from([(1, 1), (2, 2)]);
    for value in map.values_mut() {
        *value *= 100;
    }
    assert_eq!(map.get(&1), Some(&100));
    assert_eq!(map.get(&2), Some(&200));
}

#[rstest]
fn test_into_iter_consumes_in_key_order() {
    let map = map_from([(2, "two"), (1, "one")]);
    let entries: Vec<(i32, &str)> = map.into_iter().collect();
    assert_eq!(entries, vec![(1, "one"), (2, "two")]);
}

#[rstest]
fn test_into_keys_and_into_values() {
    let map = map_from([(2, "two"), (1, "one")]);
    let keys: Vec<i32> = map.clone().into_keys().collect();
    let values: Vec<&str> = map.into_values().collect();
    assert_eq!(keys, vec![1, 2]);
    assert_eq!(values, vec!["one", "two"]);
}

// =============================================================================
// Copy and Clear Tests
// =============================================================================

#[rstest]
fn test_clone_round_trip_produces_identical_traversal() {
    let original = map_from([(1, "one"), (2, "two"), (3, "three")]);
    let copy = original.clone();

    let original_entries: Vec<(i32, &str)> =
        original.iter().map(|(key, value)| (*key, *value)).collect();
    let copy_entries: Vec<(i32, &str)> = copy.iter().map(|(key, value)| (*key, *value)).collect();
    assert_eq!(original_entries, copy_entries);
}

#[rstest]
fn test_clone_is_fully_independent() {
    let original = map_from([(1, "one"), (2, "two")]);
    let mut copy = original.clone();

    copy.insert(3, "three");
    copy.insert(1, "ONE");
    copy.remove(&2);

    assert_eq!(original.get(&1), Some(&"one"));
    assert_eq!(original.get(&2), Some(&"two"));
    assert_eq!(original.get(&3), None);
    assert_eq!(original.len(), 2);
}

// A value whose clone panics once a shared budget runs out; the live count
// tracks constructions against drops.
#[derive(Debug)]
struct BudgetedClone {
    amount: i32,
    clones_left: Rc<Cell<usize>>,
    live: Rc<Cell<usize>>,
}

impl BudgetedClone {
    fn new(amount: i32, clones_left: &Rc<Cell<usize>>, live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self {
            amount,
            clones_left: Rc::clone(clones_left),
            live: Rc::clone(live),
        }
    }
}

impl Clone for BudgetedClone {
    fn clone(&self) -> Self {
        let left = self.clones_left.get();
        assert!(left > 0, "clone budget exhausted");
        self.clones_left.set(left - 1);
        Self::new(self.amount, &self.clones_left, &self.live)
    }
}

impl Drop for BudgetedClone {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[rstest]
fn test_clone_panic_mid_copy_drops_the_partial_copy_and_keeps_the_source() {
    let clones_left = Rc::new(Cell::new(1));
    let live = Rc::new(Cell::new(0));
    let mut map: ListMap<i32, BudgetedClone> = ListMap::new();
    for key in [1, 2, 3] {
        map.insert(key, BudgetedClone::new(key * 10, &clones_left, &live));
    }
    assert_eq!(live.get(), 3);

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| map.clone()));
    assert!(outcome.is_err());

    // The partially built copy was dropped during unwinding: only the three
    // source values remain live, and the source still traverses in full.
    assert_eq!(live.get(), 3);
    let entries: Vec<(i32, i32)> = map
        .iter()
        .map(|(key, value)| (*key, value.amount))
        .collect();
    assert_eq!(entries, vec![(1, 10), (2, 20), (3, 30)]);
}

#[rstest]
fn test_clear_empties_and_map_is_reusable() {
    let mut map = map_from([(1, "one"), (2, "two")]);
    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.iter().next(), None);

    map.insert(9, "nine");
    assert_eq!(map.len(), 1);
}

#[rstest]
fn test_clear_keeps_the_comparator() {
    let mut map = ListMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    map.insert(1, "one");
    map.clear();

    map.insert(1, "one");
    map.insert(5, "five");
    assert_eq!(map.first(), Some((&5, &"five")));
}

// =============================================================================
// Collection Trait Tests
// =============================================================================

#[rstest]
fn test_from_iterator_later_duplicates_win() {
    let map: ListMap<i32, &str> = [(1, "one"), (2, "two"), (1, "ONE")].into_iter().collect();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&1), Some(&"ONE"));
}

#[rstest]
fn test_extend_inserts_in_order() {
    let mut map = map_from([(5, "five")]);
    map.extend([(1, "one"), (9, "nine")]);
    assert_eq!(keys_of(&map), vec![1, 5, 9]);
}

#[rstest]
fn test_equality_ignores_insertion_history() {
    let left = map_from([(1, "one"), (2, "two")]);
    let right = map_from([(2, "two"), (1, "one")]);
    assert_eq!(left, right);
}

#[rstest]
fn test_inequality_on_differing_values() {
    let left = map_from([(1, "one")]);
    let right = map_from([(1, "ONE")]);
    assert_ne!(left, right);
}

#[rstest]
fn test_map_usable_as_hash_key() {
    use std::collections::HashMap;

    let mut outer: HashMap<ListMap<i32, i32>, &str> = HashMap::new();
    let key = map_from([(1, 10), (2, 20)]);
    outer.insert(key.clone(), "value");
    assert_eq!(outer.get(&key), Some(&"value"));
}

#[rstest]
fn test_debug_renders_like_a_map() {
    let map = map_from([(2, "two"), (1, "one")]);
    assert_eq!(format!("{map:?}"), r#"{1: "one", 2: "two"}"#);
}

// =============================================================================
// Long Map Tests
// =============================================================================

#[rstest]
fn test_long_map_keyed_operations_do_not_overflow_the_stack() {
    // Descending keys each land at the front in constant time, so the build
    // stays cheap; the operations on the largest key then walk the full
    // chain, which must happen on the heap rather than the call stack.
    let mut map: ListMap<u64, u64> = ListMap::new();
    for key in (0..200_000u64).rev() {
        map.insert(key, key * 2);
    }
    assert_eq!(map.len(), 200_000);

    assert_eq!(map.insert(1_000_000, 7), None);
    assert_eq!(map.last(), Some((&1_000_000, &7)));
    assert_eq!(map.get(&1_000_000), Some(&7));
    assert_eq!(map.remove(&1_000_000), Some(7));
    assert_eq!(map.len(), 200_000);
}
