//! A [`SpacedIndex`] which validates every handle and slot
//!
//! [`CheckedIndex`] has the same operations as [`SpacedIndex`], but any handle
//! that isn't live and any slot that is out of range is rejected with an
//! [`IndexError`] before the tables are touched. Each check is O(1), and the
//! wrapped [`SpacedIndex`] is unaffected, so you can validate in tests and debug
//! builds, then [`into_inner`](CheckedIndex::into_inner) for the fast path.
//!
//! ```
//! use spaced_index::{checked::CheckedIndex, error::IndexError};
//!
//! let mut index = CheckedIndex::<usize>::default();
//! let a = index.add();
//! index.add();
//!
//! assert_eq!(index.remove(a), Ok(0));
//! assert_eq!(index.remove(a), Err(IndexError::StaleHandle { handle: a.index() }));
//! ```

use crate::{
    error::IndexError,
    handle::Handle,
    index::SpacedIndex,
    internal_index::InternalIndex,
    sort::{Sortable, Sorter},
};

/// A [`SpacedIndex`] that reports contract violations as [`IndexError`]s
#[derive(Clone, Debug, Default)]
pub struct CheckedIndex<I: InternalIndex = usize> {
    index: SpacedIndex<I>,
}

impl<I: InternalIndex> CheckedIndex<I> {
    /// Wrap an existing [`SpacedIndex`]
    pub const fn new(index: SpacedIndex<I>) -> Self {
        Self { index }
    }

    /// Create a new [`CheckedIndex`] with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(SpacedIndex::with_capacity(capacity))
    }

    /// Unwrap the [`SpacedIndex`]
    pub fn into_inner(self) -> SpacedIndex<I> {
        self.index
    }

    /// The wrapped [`SpacedIndex`]
    pub const fn as_index(&self) -> &SpacedIndex<I> {
        &self.index
    }

    /// see [`SpacedIndex::init_size`]
    pub fn init_size(&mut self, capacity: usize) {
        log::debug!("reinitializing index with capacity {capacity}");
        self.index.init_size(capacity)
    }

    /// see [`SpacedIndex::len`]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// see [`SpacedIndex::is_empty`]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// see [`SpacedIndex::add`]
    pub fn add(&mut self) -> Handle<I> {
        self.index.add()
    }

    /// see [`SpacedIndex::clear`]
    pub fn clear(&mut self) {
        log::debug!("clearing {} handles", self.index.len());
        self.index.clear()
    }

    fn live(&self, handle: Handle<I>) -> Result<usize, IndexError> {
        self.index.get(handle).ok_or_else(|| {
            log::warn!("rejected stale handle {handle:?}");
            IndexError::StaleHandle {
                handle: handle.index(),
            }
        })
    }

    fn in_range(&self, position: usize) -> Result<(), IndexError> {
        let len = self.index.len();
        if position < len {
            Ok(())
        } else {
            log::warn!("rejected position {position}, only {len} elements are live");
            Err(IndexError::PositionOutOfRange { position, len })
        }
    }

    /// see [`SpacedIndex::slot`]
    pub fn slot(&self, handle: Handle<I>) -> Result<usize, IndexError> {
        self.live(handle)
    }

    /// see [`SpacedIndex::handle_at`]
    pub fn handle_at(&self, position: usize) -> Result<Handle<I>, IndexError> {
        self.in_range(position)?;
        Ok(self.index.handle_at(position))
    }

    /// see [`SpacedIndex::remove`]
    pub fn remove(&mut self, handle: Handle<I>) -> Result<usize, IndexError> {
        self.live(handle)?;
        // SAFETY: we just checked that the handle is live
        Ok(unsafe { self.index.remove_unchecked(handle) })
    }

    /// see [`SpacedIndex::swap`]
    pub fn swap(&mut self, a: Handle<I>, b: Handle<I>) -> Result<(), IndexError> {
        self.live(a)?;
        self.live(b)?;
        self.index.swap(a, b);
        Ok(())
    }

    /// see [`SpacedIndex::swap_slots`]
    pub fn swap_slots(&mut self, i: usize, j: usize) -> Result<(), IndexError> {
        self.in_range(i)?;
        self.in_range(j)?;
        self.index.swap_slots(i, j);
        Ok(())
    }

    /// see [`SpacedIndex::sorter`]
    ///
    /// # Panics
    ///
    /// If `data` doesn't have exactly one element per live handle
    pub fn sorter<'a, S: Sortable + ?Sized>(&'a mut self, data: &'a mut S) -> Sorter<'a, S, I> {
        assert_eq!(
            data.len(),
            self.index.len(),
            "the payload and the index disagree on the number of elements"
        );
        self.index.sorter(data)
    }

    /// see [`SpacedIndex::verify`]
    pub fn verify(&self) -> Result<(), IndexError> {
        self.index.verify().inspect_err(|err| log::warn!("{err}"))
    }
}

impl<I: InternalIndex> From<SpacedIndex<I>> for CheckedIndex<I> {
    fn from(index: SpacedIndex<I>) -> Self {
        Self::new(index)
    }
}
