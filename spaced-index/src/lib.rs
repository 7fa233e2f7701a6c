#![no_std]
#![forbid(
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    unsafe_op_in_unsafe_fn,
    missing_docs,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]

//! # spaced-index
//!
//! Stable handles into dense, contiguously packed arrays.
//!
//! A [`SpacedIndex`](index::SpacedIndex) maps [`Handle`](handle::Handle)s to
//! positions ("slots") in one or more arrays that you own. The arrays stay
//! packed: removing an element swaps the last element into its place, and the
//! index follows the move so every other handle still points at its element.
//!
//! ```
//! use spaced_index::index::SpacedIndex;
//!
//! let mut index = SpacedIndex::<usize>::with_capacity(16);
//! let mut names = Vec::new();
//!
//! names.push("hello");
//! let hello = index.add();
//! names.push("world");
//! let world = index.add();
//! names.push("!");
//! let bang = index.add();
//!
//! // swap-remove the payload, then tell the index
//! let slot = index.slot(hello);
//! names.swap_remove(slot);
//! index.remove(hello);
//!
//! assert_eq!(names[index.slot(world)], "world");
//! assert_eq!(names[index.slot(bang)], "!");
//! ```
//!
//! ## Tables
//!
//! The index keeps three tables
//!
//! * a forward table: handle -> slot, with holes for removed handles
//! * a reverse table: slot -> handle, always exactly as long as your arrays
//! * a free list: handles which were removed and can be handed out again
//!
//! For every live handle `h`, `reverse[forward[h]] == h`. Every mutating
//! operation restores this, as long as you mirror each operation on your own
//! arrays. See [`index`] for the contract of each operation.
//!
//! ## Sorting
//!
//! The [`sort`] module drives comparison sorts through the [`Sortable`](sort::Sortable)
//! trait. Wrapping your own [`Sortable`](sort::Sortable) in a [`Sorter`](sort::Sorter)
//! mirrors every swap the algorithm performs into the index, so handles survive
//! reordering.
//!
//! ## Checked access
//!
//! [`SpacedIndex`](index::SpacedIndex) doesn't track which handles are live, it
//! only panics when a handle or slot is out of bounds of its tables.
//! [`CheckedIndex`](checked::CheckedIndex) validates every handle and slot and
//! reports an [`IndexError`](error::IndexError) instead.
//!
//! ## Payload
//!
//! [`IndexedVec`](indexed_vec::IndexedVec) is the canonical pairing of a
//! [`SpacedIndex`](index::SpacedIndex) with a single [`Vec`](alloc::vec::Vec).
//! It is a good template for building structure-of-arrays containers.

extern crate alloc;

#[macro_use]
mod polyfill;

pub mod checked;
pub mod error;
pub mod handle;
pub mod index;
pub mod indexed_vec;
pub mod internal_index;
pub mod sort;

mod seal {
    pub trait Seal {}
}
