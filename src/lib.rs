//! Intrusive ordered containers with stable node handles.
//!
//! This crate provides two independently useful ordered multisets built on a
//! shared low-level primitive:
//!
//! - [`ConicalList`]: a skip list whose per-level neighbourhoods are
//!   *circular* doubly-linked rings, so the largest element is always one
//!   back-link away from the smallest. Insertion is probabilistic (a
//!   deterministic generator samples each node's height) and all operations
//!   run in `O(log(n))` on average.
//! - [`RbTree`]: a red-black tree with parent links, offering deterministic
//!   `O(log(n))` insertion and removal, ordered neighbour traversal, and
//!   value lookup.
//!
//! Conceptually, the conical list is arranged as follows, with each node
//! spanning a random number of levels and each level's ring wrapping from
//! its largest element back to its smallest:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------+
//! <head> ----------> [2] ------------------> [7] --------------------+
//! <head> --> [1] --> [2] --> [4] --> [6] --> [7] --> [9] --> [10] ---+
//!            ^-------------------------------------------------------+
//! ```
//!
//! Both containers hand out stable node handles on insertion: a handle
//! identifies its node until that node is removed, no matter what happens to
//! the rest of the container, and removal is *by handle* rather than by
//! search. Both store each element exactly once and never copy or clone
//! values.
//!
//! The node storage is built on [`FlexBlock`], a single-allocation header
//! block: a conical-list node is one allocation holding its value, its
//! height, and exactly `height` ring links.
//!
//! The containers are single-owner, single-threaded structures. Teardown is
//! deterministic: [`ConicalList::clear`] / [`RbTree::clear`] release every
//! node eagerly, and dropping a container does the same.
//!
//! # Safety
//!
//! Handle-consuming operations trust the caller: passing a handle that does
//! not refer to a live node of that container is undefined behavior, which
//! is why those operations are `unsafe fn`s. The same applies to the
//! comparison function supplied to `with_comp`; see the container docs.

// In this library, the 'height' of a conical-list node is the number of
// levels it participates in (so the minimum height is 1). 'Level' refers to
// one ring layer, with level 0 holding every node.

#![warn(missing_docs)]

pub mod conical_list;
pub mod flex;
pub mod height;
pub mod rb_tree;

pub use crate::conical_list::ConicalList;
pub use crate::flex::FlexBlock;
pub use crate::rb_tree::RbTree;
