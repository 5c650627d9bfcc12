//! Hand-rolled singly linked list.
//!
//! This module provides [`LinkedList`], the mutable singly linked sequence a
//! [`ListMap`] uses as its backing store. The list is deliberately oblivious
//! to payload semantics: it never compares, orders, or otherwise inspects its
//! elements on its own. Every positional decision is delegated to a closure
//! supplied by the caller ([`insert_before`], [`find`], [`remove_first`]),
//! which is what lets the map keep all ordering logic on its side of the
//! boundary.
//!
//! [`ListMap`]: crate::ListMap
//! [`insert_before`]: LinkedList::insert_before
//! [`find`]: LinkedList::find
//! [`remove_first`]: LinkedList::remove_first
//!
//! # Overview
//!
//! `LinkedList` is a chain of heap-allocated cells with forward links:
//!
//! - O(1) prepend (`push_front`) and head removal (`pop_front`)
//! - O(1) length query (cached)
//! - O(n) predicate-driven insert, lookup, and removal
//! - O(n) deep copy
//!
//! The linear operations are an explicit design choice: this list exists to
//! back small collections where a scan is cheaper to reason about than a
//! balanced structure. It is not a general-purpose replacement for `Vec` or
//! `std::collections::LinkedList`.
//!
//! # Examples
//!
//! ```rust
//! use listmap::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_front(3);
//! list.push_front(1);
//!
//! // Splice 2 in before the first element greater than it.
//! list.insert_before(2, |new, existing| existing > new);
//!
//! let elements: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(elements, vec![1, 2, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// A forward link: either the next cell or the end of the chain.
type Link<T> = Option<Box<Node<T>>>;

/// Internal cell structure: one payload plus a forward link.
struct Node<T> {
    /// The payload stored in this cell.
    element: T,
    /// The next cell in the chain (if any).
    next: Link<T>,
}

/// A mutable singly linked list with predicate-driven positional operations.
///
/// An empty list is simply `head: None`; there is no always-present sentinel
/// cell, so `len` counts real elements and insertion has a single code path
/// whether or not the list already holds anything.
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `new`           | O(1)       |
/// | `push_front`    | O(1)       |
/// | `pop_front`     | O(1)       |
/// | `front`         | O(1)       |
/// | `len`           | O(1)       |
/// | `insert_before` | O(n)       |
/// | `find`          | O(n)       |
/// | `remove_first`  | O(n)       |
/// | `append`        | O(n)       |
/// | `clone`         | O(n)       |
///
/// # Examples
///
/// ```rust
/// use listmap::LinkedList;
///
/// let list = LinkedList::singleton(42);
/// assert_eq!(list.front(), Some(&42));
/// assert_eq!(list.len(), 1);
/// ```
pub struct LinkedList<T> {
    /// Reference to the head cell (if any).
    head: Link<T>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new empty list without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            length: 0,
        }
    }

    /// Creates a list containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let list = LinkedList::singleton(42);
    /// assert_eq!(list.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        let mut list = Self::new();
        list.push_front(element);
        list
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let list = LinkedList::singleton("head");
    /// assert_eq!(list.front(), Some(&"head"));
    /// ```
    #[inline]
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.element)
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// list is empty.
    #[inline]
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.element)
    }

    /// Prepends an element to the front of the list.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut list = LinkedList::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, element: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node { element, next }));
        self.length += 1;
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut list = LinkedList::singleton(1);
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            self.head = node.next;
            self.length -= 1;
            node.element
        })
    }

    /// Splices `element` in immediately before the first existing element for
    /// which `place_before` returns `true`, or at the end of the list if none
    /// does.
    ///
    /// The predicate receives `(new, existing)` so the caller can position
    /// the incoming element relative to what is already stored; the list
    /// itself makes no positional decision. A caller maintaining sort order
    /// passes an "existing is strictly greater than new" predicate.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 3, 5].into_iter().collect();
    /// list.insert_before(4, |new, existing| existing > new);
    /// let elements: Vec<i32> = list.iter().copied().collect();
    /// assert_eq!(elements, vec![1, 3, 4, 5]);
    /// ```
    pub fn insert_before<F>(&mut self, element: T, mut place_before: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        // Walk link slots iteratively; a chain is as deep as it is long, so
        // recursing here would exhaust the stack on long lists.
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| !place_before(&element, &node.element))
        {
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        let next = cursor.take();
        *cursor = Some(Box::new(Node { element, next }));
        self.length += 1;
    }

    /// Returns a reference to the first element satisfying `predicate`, or
    /// `None` if no element does.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.find(|element| element % 2 == 0), Some(&2));
    /// assert_eq!(list.find(|element| *element > 9), None);
    /// ```
    #[must_use]
    pub fn find<F>(&self, mut predicate: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head.as_deref();
        while let Some(node) = current {
            if predicate(&node.element) {
                return Some(&node.element);
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Returns a mutable reference to the first element satisfying
    /// `predicate`, or `None` if no element does.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// if let Some(element) = list.find_mut(|element| *element == 2) {
    ///     *element = 20;
    /// }
    /// let elements: Vec<i32> = list.iter().copied().collect();
    /// assert_eq!(elements, vec![1, 20, 3]);
    /// ```
    #[must_use]
    pub fn find_mut<F>(&mut self, mut predicate: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut current = self.head.as_deref_mut();
        while let Some(node) = current {
            if predicate(&node.element) {
                return Some(&mut node.element);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Splices out and returns the first element satisfying `predicate`, or
    /// `None` if no element does.
    ///
    /// Removal detaches exactly one cell: its payload is returned and the
    /// surrounding links are joined, whether the match sits at the head or in
    /// the middle of the chain.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.remove_first(|element| *element == 2), Some(2));
    /// assert_eq!(list.remove_first(|element| *element == 2), None);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn remove_first<F>(&mut self, mut predicate: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        // Iterative slot walk, as in `insert_before`: `cursor` ends on the
        // matching link (or the terminal one if nothing matched).
        let mut cursor = &mut self.head;
        while cursor
            .as_ref()
            .is_some_and(|node| !predicate(&node.element))
        {
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        let node = cursor.take()?;
        *cursor = node.next;
        self.length -= 1;
        Some(node.element)
    }

    /// Moves all elements of `other` to the end of this list, leaving `other`
    /// empty.
    ///
    /// # Complexity
    ///
    /// O(n) in the length of `self`; the spliced chain itself is reused, not
    /// copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut left: LinkedList<i32> = [1, 2].into_iter().collect();
    /// let mut right: LinkedList<i32> = [3, 4].into_iter().collect();
    /// left.append(&mut right);
    ///
    /// let elements: Vec<i32> = left.iter().copied().collect();
    /// assert_eq!(elements, vec![1, 2, 3, 4]);
    /// assert!(right.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        let chain = other.head.take();
        self.length += other.length;
        other.length = 0;

        // Iterative walk to the terminal link, matching the depth-safe
        // traversal used everywhere else in this module.
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = chain;
    }

    /// Removes all elements from the list.
    ///
    /// Teardown is iterative so that arbitrarily long chains cannot overflow
    /// the stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// list.clear();
    /// assert!(list.is_empty());
    /// ```
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = node.next;
        }
        self.length = 0;
    }

    /// Returns an iterator over references to the elements, front to back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// assert_eq!(list.iter().sum::<i32>(), 6);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            current: self.head.as_deref(),
            remaining: self.length,
        }
    }

    /// Returns an iterator over mutable references to the elements, front to
    /// back.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use listmap::LinkedList;
    ///
    /// let mut list: LinkedList<i32> = [1, 2, 3].into_iter().collect();
    /// for element in list.iter_mut() {
    ///     *element *= 10;
    /// }
    /// let elements: Vec<i32> = list.iter().copied().collect();
    /// assert_eq!(elements, vec![10, 20, 30]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter_mut(&mut self) -> LinkedListMutIterator<'_, T> {
        LinkedListMutIterator {
            current: self.head.as_deref_mut(),
            remaining: self.length,
        }
    }

    /// Builds a list from a `Vec`, preserving element order.
    ///
    /// Consumes the `Vec` from the back with `pop`, prepending as it goes, so
    /// no reverse pass or tail pointer is needed.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let length = elements.len();
        let mut head: Link<T> = None;
        while let Some(element) = elements.pop() {
            head = Some(Box::new(Node {
                element,
                next: head,
            }));
        }
        Self { head, length }
    }
}

// =============================================================================
// Iterator Implementations
// =============================================================================

/// An iterator over references to elements of a [`LinkedList`].
pub struct LinkedListIterator<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An iterator over mutable references to elements of a [`LinkedList`].
pub struct LinkedListMutIterator<'a, T> {
    current: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListMutIterator<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListMutIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator over elements of a [`LinkedList`].
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    /// Iterative drop: the derived drop would recurse once per cell through
    /// the `Box` links and could overflow the stack on long chains.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    /// Deep-copies every element into a fully independent chain.
    ///
    /// If an element's `clone` panics mid-copy, the partially built list is
    /// dropped during unwinding and the source is left untouched.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> From<&[T]> for LinkedList<T> {
    fn from(elements: &[T]) -> Self {
        Self::build_from_vec(elements.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for LinkedList<T> {
    fn from(elements: [T; N]) -> Self {
        Self::build_from_vec(elements.into())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let elements: Vec<T> = iter.into_iter().collect();
        Self::build_from_vec(elements)
    }
}

impl<T> Extend<T> for LinkedList<T> {
    /// Appends the new elements at the back, preserving their order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut addition: Self = iter.into_iter().collect();
        self.append(&mut addition);
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = LinkedListMutIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash the length first to distinguish lists of different lengths
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}
