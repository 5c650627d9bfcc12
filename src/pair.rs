//! Key/value cell owned by the container.
//!
//! This module provides [`Pair`], the cell type a [`ListMap`] stores in its
//! backing [`LinkedList`]. A pair owns exactly one key and one value; it
//! carries no ordering logic of its own. Ordering decisions belong to the
//! map's comparator, and the pair deliberately exposes no mutable access to
//! its key so that a stored pair cannot be reordered behind its owner's back.
//!
//! [`ListMap`]: crate::ListMap
//! [`LinkedList`]: crate::LinkedList
//!
//! # Examples
//!
//! ```rust
//! use listmap::Pair;
//!
//! let mut pair = Pair::new(7, "seven".to_string());
//! assert_eq!(pair.key(), &7);
//!
//! let previous = pair.set_value("SEVEN".to_string());
//! assert_eq!(previous, "seven");
//! assert_eq!(pair.value(), "SEVEN");
//! ```

use std::fmt;

/// A cell owning one key and one value.
///
/// The key and value are always both present: a `Pair` is constructed from a
/// complete `(key, value)` and only ever exchanges its contents wholesale
/// (via [`replace`]) or by value only (via [`set_value`]). Replaced contents
/// are returned to the caller rather than dropped in place, so ownership of
/// the outgoing data is never ambiguous.
///
/// [`replace`]: Pair::replace
/// [`set_value`]: Pair::set_value
///
/// # Examples
///
/// ```rust
/// use listmap::Pair;
///
/// let pair = Pair::new("id", 42);
/// let (key, value) = pair.into_parts();
/// assert_eq!(key, "id");
/// assert_eq!(value, 42);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pair<K, V> {
    /// The key. Immutable while stored so an owning map's order cannot break.
    key: K,
    /// The value.
    value: V,
}

impl<K, V> Pair<K, V> {
    /// Creates a pair from a key and a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::Pair;
    ///
    /// let pair = Pair::new(1, "one");
    /// assert_eq!(pair.key(), &1);
    /// assert_eq!(pair.value(), &"one");
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns a reference to the key.
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the value.
    ///
    /// There is no `key_mut` counterpart: mutating a stored key could
    /// invalidate the order an owning container maintains.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::Pair;
    ///
    /// let mut pair = Pair::new(1, 10);
    /// *pair.value_mut() += 5;
    /// assert_eq!(pair.value(), &15);
    /// ```
    #[inline]
    #[must_use]
    pub const fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces both the key and the value, returning the previous pair of
    /// contents.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::Pair;
    ///
    /// let mut pair = Pair::new(1, "one");
    /// let (old_key, old_value) = pair.replace(2, "two");
    /// assert_eq!((old_key, old_value), (1, "one"));
    /// assert_eq!(pair.key(), &2);
    /// ```
    #[inline]
    pub const fn replace(&mut self, key: K, value: V) -> (K, V) {
        let previous_key = std::mem::replace(&mut self.key, key);
        let previous_value = std::mem::replace(&mut self.value, value);
        (previous_key, previous_value)
    }

    /// Replaces only the value, returning the previous one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::Pair;
    ///
    /// let mut pair = Pair::new(1, "one");
    /// assert_eq!(pair.set_value("ONE"), "one");
    /// assert_eq!(pair.value(), &"ONE");
    /// ```
    #[inline]
    pub const fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Consumes the pair and returns its key and value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::Pair;
    ///
    /// let pair = Pair::new(1, "one");
    /// assert_eq!(pair.into_parts(), (1, "one"));
    /// ```
    #[inline]
    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }

    /// Borrows the key and value together.
    #[inline]
    #[must_use]
    pub const fn as_parts(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    /// Borrows the key, and the value mutably, together.
    ///
    /// The key side stays shared for the same reason there is no `key_mut`.
    #[inline]
    #[must_use]
    pub const fn as_parts_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }
}

impl<K, V> From<(K, V)> for Pair<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Pair<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Pair")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}
