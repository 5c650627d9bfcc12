//! # listmap
//!
//! An ordered associative container built on a hand-rolled singly linked
//! list, with pluggable key comparators.
//!
//! ## Overview
//!
//! The crate is three small cooperating pieces, leaves first:
//!
//! - [`Pair`]: a key/value cell owning exactly one key and one value. No
//!   ordering logic.
//! - [`LinkedList`]: a singly linked sequence of heap cells, oblivious to
//!   payload semantics; positional decisions are delegated to caller-supplied
//!   closures.
//! - [`ListMap`]: a map keeping `Pair` cells sorted ascending under an
//!   injected [`Comparator`], with insert-or-update, lookup, removal, and
//!   ordered iteration.
//!
//! Every keyed map operation is a deliberate O(n) linear scan: the container
//! targets small collections where a scan over a handful of cells is cheap
//! and the ordering rule is domain-specific. It is not a balanced tree or a
//! hash map, and it is not thread-safe for shared mutation (it is `Send` and
//! `Sync` exactly when its contents are, like any other owned container).
//!
//! ## Example
//!
//! ```rust
//! use listmap::ListMap;
//!
//! let mut standings = ListMap::new();
//! standings.insert(5, "e");
//! standings.insert(2, "b");
//! standings.insert(8, "h");
//! standings.insert(2, "B");
//!
//! assert_eq!(standings.len(), 3);
//! let keys: Vec<&i32> = standings.keys().collect();
//! assert_eq!(keys, vec![&2, &5, &8]);
//!
//! standings.remove(&5);
//! let keys: Vec<&i32> = standings.keys().collect();
//! assert_eq!(keys, vec![&2, &8]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`ListMap`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod list;
pub mod map;
pub mod pair;

pub use list::LinkedList;
pub use list::LinkedListIntoIterator;
pub use list::LinkedListIterator;
pub use list::LinkedListMutIterator;
pub use map::Comparator;
pub use map::ListMap;
pub use map::ListMapIntoIterator;
pub use map::ListMapIterator;
pub use map::ListMapMutIterator;
pub use map::NaturalOrder;
pub use map::ReverseOrder;
pub use pair::Pair;
