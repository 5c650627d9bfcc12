//! Ordered map backed by a singly linked list.
//!
//! This module provides [`ListMap`], a mutable associative container that
//! keeps its entries sorted ascending by key under an injected three-way
//! [`Comparator`]. Entries live in a [`LinkedList`] of [`Pair`] cells; every
//! keyed operation is a linear scan driven by the comparator.
//!
//! # Overview
//!
//! `ListMap` trades asymptotic speed for simplicity. All keyed operations are
//! O(n); there is no tree, no hashing, and no rebalancing to reason about.
//! The intended use is small collections where a scan over a handful of cells
//! is cheap and the ordering rule may be domain-specific (numeric id order,
//! score-then-tiebreak order, and so on):
//!
//! - O(n) insert (ordered), get, remove, `contains_key`
//! - O(1) len, `is_empty`, first
//! - O(n) deep copy
//!
//! The comparator is the single source of truth for ordering *and* for key
//! identity: two keys that compare equal are the same key, even if fields the
//! comparator ignores differ.
//!
//! # Examples
//!
//! ```rust
//! use listmap::ListMap;
//!
//! let mut map = ListMap::new();
//! map.insert(5, "e");
//! map.insert(2, "b");
//! map.insert(8, "h");
//! map.insert(2, "B"); // same key: update, not duplicate
//!
//! assert_eq!(map.len(), 3);
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&2, &5, &8]);
//! assert_eq!(map.get(&2), Some(&"B"));
//! ```
//!
//! # Custom ordering
//!
//! ```rust
//! use listmap::ListMap;
//!
//! // Descending numeric order via a closure comparator.
//! let mut map = ListMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! map.insert(1, "one");
//! map.insert(3, "three");
//! map.insert(2, "two");
//!
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&3, &2, &1]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::list::{LinkedList, LinkedListIntoIterator, LinkedListIterator, LinkedListMutIterator};
use crate::pair::Pair;

// =============================================================================
// Comparator
// =============================================================================

/// A three-way ordering rule over keys.
///
/// A `ListMap` stores one comparator by value and consults it for every
/// ordering and identity decision. Implementors must provide a total order:
/// `compare` is expected to be consistent (antisymmetric and transitive)
/// across all keys the map will ever hold.
///
/// Any `Fn(&K, &K) -> Ordering` closure is a comparator, and [`NaturalOrder`]
/// adapts types that already implement [`Ord`].
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use listmap::Comparator;
///
/// let by_length = |a: &String, b: &String| a.len().cmp(&b.len());
/// assert_eq!(
///     by_length.compare(&"ab".to_string(), &"abc".to_string()),
///     Ordering::Less
/// );
/// ```
pub trait Comparator<K> {
    /// Compares two keys, returning their relative order.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

/// The comparator that delegates to a key type's own [`Ord`].
///
/// This is the default comparator parameter of [`ListMap`], so
/// `ListMap::new()` orders keys exactly like `BTreeMap` would.
///
/// # Examples
///
/// ```rust
/// use std::cmp::Ordering;
/// use listmap::{Comparator, NaturalOrder};
///
/// assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// A comparator adapter that flips the order of another comparator.
///
/// # Examples
///
/// ```rust
/// use listmap::{ListMap, ReverseOrder};
///
/// let mut map = ListMap::with_comparator(ReverseOrder::<listmap::NaturalOrder>::default());
/// map.insert(1, "one");
/// map.insert(3, "three");
///
/// let keys: Vec<&i32> = map.keys().collect();
/// assert_eq!(keys, vec![&3, &1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReverseOrder<C = NaturalOrder>(pub C);

impl<K, C: Comparator<K>> Comparator<K> for ReverseOrder<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.0.compare(left, right).reverse()
    }
}

// =============================================================================
// ListMap Definition
// =============================================================================

/// A mutable ordered map on a singly linked list, with a pluggable key
/// comparator.
///
/// Entries are kept sorted ascending under the comparator at all times, and
/// keys are unique under comparator equality. Iteration therefore always
/// yields entries in non-decreasing key order, with no sorting pass.
///
/// Every iterator handed out is an independent value borrowing the map, so
/// nested or repeated traversals cannot interfere with one another, and
/// structural mutation during a traversal is rejected at compile time.
///
/// # Time Complexity
///
/// | Operation      | Complexity |
/// |----------------|------------|
/// | `new`          | O(1)       |
/// | `insert`       | O(n)       |
/// | `get`          | O(n)       |
/// | `remove`       | O(n)       |
/// | `contains_key` | O(n)       |
/// | `first`        | O(1)       |
/// | `last`         | O(n)       |
/// | `len`          | O(1)       |
/// | `clone`        | O(n)       |
///
/// The linear scans are deliberate: see the [module docs](self).
///
/// # Examples
///
/// ```rust
/// use listmap::ListMap;
///
/// let mut map = ListMap::new();
/// map.insert("b", 2);
/// map.insert("a", 1);
///
/// assert_eq!(map.first(), Some((&"a", &1)));
/// assert_eq!(map.remove(&"a"), Some(1));
/// assert_eq!(map.remove(&"a"), None);
/// ```
pub struct ListMap<K, V, C = NaturalOrder> {
    /// Backing list of pairs, sorted ascending under `comparator`.
    entries: LinkedList<Pair<K, V>>,
    /// The injected ordering rule.
    comparator: C,
}

impl<K, V> ListMap<K, V, NaturalOrder> {
    /// Creates a new empty map ordered by the key type's own [`Ord`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let map: ListMap<i32, String> = ListMap::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: LinkedList::new(),
            comparator: NaturalOrder,
        }
    }

    /// Creates a map containing a single entry, ordered naturally.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let map = ListMap::singleton(42, "answer");
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&42), Some(&"answer"));
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(key: K, value: V) -> Self
    where
        K: Ord,
    {
        let mut map = Self::new();
        map.insert(key, value);
        map
    }
}

impl<K, V, C> ListMap<K, V, C> {
    /// Creates a new empty map ordered by an explicit comparator.
    ///
    /// The comparator may be a named type or any
    /// `Fn(&K, &K) -> Ordering` closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// map.insert(1, ());
    /// map.insert(9, ());
    /// assert_eq!(map.first().map(|(key, _)| *key), Some(9));
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_comparator(comparator: C) -> Self {
        Self {
            entries: LinkedList::new(),
            comparator,
        }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, "one");
    /// map.insert(2, "two");
    /// assert_eq!(map.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns a reference to the comparator the map orders by.
    #[inline]
    #[must_use]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the entry with the smallest key, or `None` if the map is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(1) — the smallest entry is always at the front of the backing list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(3, "three");
    /// map.insert(1, "one");
    /// assert_eq!(map.first(), Some((&1, &"one")));
    /// ```
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<(&K, &V)> {
        self.entries.front().map(Pair::as_parts)
    }

    /// Returns the entry with the largest key, or `None` if the map is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(3, "three");
    /// map.insert(1, "one");
    /// assert_eq!(map.last(), Some((&3, &"three")));
    /// ```
    #[must_use]
    pub fn last(&self) -> Option<(&K, &V)> {
        self.entries.iter().last().map(Pair::as_parts)
    }

    /// Removes all entries from the map. The comparator is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, "one");
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries in ascending key order.
    ///
    /// Each call returns an independent iterator value; traversals never
    /// share state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    ///
    /// let entries: Vec<(&i32, &&str)> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &"one"), (&2, &"two")]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> ListMapIterator<'_, K, V> {
        ListMapIterator {
            inner: self.entries.iter(),
        }
    }

    /// Returns an iterator over the entries in ascending key order, with
    /// mutable access to the values.
    ///
    /// Keys stay shared: mutating a stored key could break the sort order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, 10);
    /// map.insert(2, 20);
    /// for (_, value) in map.iter_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&1), Some(&11));
    /// assert_eq!(map.get(&2), Some(&21));
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_mut(&mut self) -> ListMapMutIterator<'_, K, V> {
        ListMapMutIterator {
            inner: self.entries.iter_mut(),
        }
    }

    /// Returns an iterator over the keys in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    /// let keys: Vec<&i32> = map.keys().collect();
    /// assert_eq!(keys, vec![&1, &2]);
    /// ```
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(2, "two");
    /// map.insert(1, "one");
    /// let values: Vec<&&str> = map.values().collect();
    /// assert_eq!(values, vec![&"one", &"two"]);
    /// ```
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable references to the values, in
    /// ascending key order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.iter_mut().map(|(_, value)| value)
    }

    /// Consumes the map, returning an iterator over its keys in ascending
    /// order.
    pub fn into_keys(self) -> impl Iterator<Item = K> {
        self.into_iter().map(|(key, _)| key)
    }

    /// Consumes the map, returning an iterator over its values in ascending
    /// key order.
    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.into_iter().map(|(_, value)| value)
    }
}

impl<K, V, C: Comparator<K>> ListMap<K, V, C> {
    /// Inserts a key-value entry, keeping the map sorted. Returns the
    /// previous value if the key was already present.
    ///
    /// If an existing key compares equal to `key`, the entry is updated in
    /// place — both the stored key and the stored value are replaced, since
    /// comparator-equal keys may still differ in fields the comparator
    /// ignores. Otherwise the new entry is spliced in before the first
    /// strictly greater key, preserving total order. Equal-comparing keys are
    /// the same key: an insert is always an update, never a duplicate.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// assert_eq!(map.insert(1, "one"), None);
    /// assert_eq!(map.insert(1, "ONE"), Some("one"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let comparator = &self.comparator;
        // Entries are sorted, so the first key not less than the new one is
        // the only possible equal match; the scan stops there.
        if let Some(pair) = self
            .entries
            .find_mut(|pair| comparator.compare(pair.key(), &key) != Ordering::Less)
        {
            if comparator.compare(pair.key(), &key) == Ordering::Equal {
                let (_, previous_value) = pair.replace(key, value);
                return Some(previous_value);
            }
        }
        self.entries
            .insert_before(Pair::new(key, value), |new, existing| {
                comparator.compare(existing.key(), new.key()) == Ordering::Greater
            });
        None
    }

    /// Returns a reference to the value stored for `key`, or `None` if the
    /// key is not present.
    ///
    /// This is the stored value itself, not a copy. The key parameter is
    /// `&K` rather than a borrowed form because the comparator is defined
    /// over `K` only.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let comparator = &self.comparator;
        self.entries
            .find(|pair| comparator.compare(pair.key(), key) == Ordering::Equal)
            .map(Pair::value)
    }

    /// Returns a mutable reference to the value stored for `key`, or `None`
    /// if the key is not present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, 10);
    /// if let Some(value) = map.get_mut(&1) {
    ///     *value += 5;
    /// }
    /// assert_eq!(map.get(&1), Some(&15));
    /// ```
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let comparator = &self.comparator;
        self.entries
            .find_mut(|pair| comparator.compare(pair.key(), key) == Ordering::Equal)
            .map(Pair::value_mut)
    }

    /// Returns the stored key and value for `key`, or `None` if the key is
    /// not present.
    ///
    /// Useful when comparator-equal keys can differ in ignored fields and
    /// the caller wants the key actually stored.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        let comparator = &self.comparator;
        self.entries
            .find(|pair| comparator.compare(pair.key(), key) == Ordering::Equal)
            .map(Pair::as_parts)
    }

    /// Returns `true` if the map stores a value for `key`.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, "one");
    /// assert!(map.contains_key(&1));
    /// assert!(!map.contains_key(&2));
    /// ```
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry for `key`, returning its value. Returns `None` if
    /// the key is not present — an ordinary negative result, not a fault.
    ///
    /// Removal detaches exactly one cell from the backing list, wherever the
    /// match sits; the remaining entries keep their order and their single
    /// owned copy each.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for `key`, returning the stored key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::ListMap;
    ///
    /// let mut map = ListMap::new();
    /// map.insert(1, "one");
    /// assert_eq!(map.remove_entry(&1), Some((1, "one")));
    /// ```
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let comparator = &self.comparator;
        self.entries
            .remove_first(|pair| comparator.compare(pair.key(), key) == Ordering::Equal)
            .map(Pair::into_parts)
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over the entries of a [`ListMap`], in ascending key order.
pub struct ListMapIterator<'a, K, V> {
    inner: LinkedListIterator<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for ListMapIterator<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::as_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ListMapIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An iterator over the entries of a [`ListMap`] with mutable values, in
/// ascending key order.
pub struct ListMapMutIterator<'a, K, V> {
    inner: LinkedListMutIterator<'a, Pair<K, V>>,
}

impl<'a, K, V> Iterator for ListMapMutIterator<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::as_parts_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ListMapMutIterator<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

/// An owning iterator over the entries of a [`ListMap`], in ascending key
/// order.
pub struct ListMapIntoIterator<K, V> {
    inner: LinkedListIntoIterator<Pair<K, V>>,
}

impl<K, V> Iterator for ListMapIntoIterator<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Pair::into_parts)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for ListMapIntoIterator<K, V> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V, C: Default> Default for ListMap<K, V, C> {
    #[inline]
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for ListMap<K, V, C> {
    /// Deep-copies every entry into a fully independent map sharing nothing
    /// with the source; mutating one afterwards never changes the other.
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<K, V, C> IntoIterator for ListMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = ListMapIntoIterator<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        ListMapIntoIterator {
            inner: self.entries.into_iter(),
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a ListMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = ListMapIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut ListMap<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = ListMapMutIterator<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, C> FromIterator<(K, V)> for ListMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    /// Builds a map by inserting each entry in turn; for duplicate keys the
    /// later entry wins, as with repeated `insert` calls.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for ListMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C, const N: usize> From<[(K, V); N]> for ListMap<K, V, C>
where
    C: Comparator<K> + Default,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for ListMap<K, V, C> {
    /// Two maps are equal when they hold equal entries in the same order;
    /// the comparators themselves are not compared.
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq, C> Eq for ListMap<K, V, C> {}

impl<K: Hash, V: Hash, C> Hash for ListMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish maps of different sizes
        self.len().hash(state);
        for entry in self {
            entry.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for ListMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

// Static assertions to verify the container stays usable across threads when
// its contents are.
static_assertions::assert_impl_all!(ListMap<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(crate::LinkedList<i32>: Send, Sync);

// =============================================================================
// Serde Implementations
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, C> serde::Serialize for ListMap<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ListMapVisitor<K, V, C> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
    comparator_marker: std::marker::PhantomData<C>,
}

#[cfg(feature = "serde")]
impl<K, V, C> ListMapVisitor<K, V, C> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
            comparator_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::de::Visitor<'de> for ListMapVisitor<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    type Value = ListMap<K, V, C>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = ListMap::default();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V, C> serde::Deserialize<'de> for ListMap<K, V, C>
where
    K: serde::Deserialize<'de>,
    V: serde::Deserialize<'de>,
    C: Comparator<K> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ListMapVisitor::new())
    }
}
