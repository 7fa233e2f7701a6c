//! A packed vector addressed by stable handles
//!
//! see [`IndexedVec`] for details

use core::{cmp::Ordering, ops};

use alloc::vec::Vec;

use crate::{
    handle::Handle,
    index::{self, SpacedIndex},
    internal_index::InternalIndex,
};

/// [`IndexedVec`] is the canonical way to use a [`SpacedIndex`]
///
/// It pairs a [`SpacedIndex`] with a [`Vec<T>`], and mirrors every operation on
/// the index onto the vector. The values are always packed, so iterating over
/// [`IndexedVec::values`] is as fast as iterating over a slice.
///
/// If you need a structure-of-arrays, copy this type and replace the single
/// vector with one vector per field.
#[derive(Clone, Debug)]
pub struct IndexedVec<T, I: InternalIndex = usize> {
    values: Vec<T>,
    index: SpacedIndex<I>,
}

/// A vacant slot into an [`IndexedVec`], created by [`IndexedVec::vacant_slot`]
pub struct VacantSlot<'a, T, I: InternalIndex = usize> {
    slot: index::VacantSlot<'a, I>,
    values: &'a mut Vec<T>,
}

impl<T, I: InternalIndex> VacantSlot<'_, T, I> {
    /// Get the handle that will be associated with this slot once it is filled
    pub fn handle(&self) -> Handle<I> {
        self.slot.handle()
    }

    /// Fill this slot, and return its handle
    pub fn insert(self, value: T) -> Handle<I> {
        debug_assert_eq!(self.slot.position(), self.values.len());
        self.values.push(value);
        self.slot.insert()
    }
}

// sorts the values by an arbitrary comparison, for use with a `Sorter`
struct SortBy<'a, T, F> {
    values: &'a mut [T],
    compare: F,
}

impl<T, F: Fn(&T, &T) -> Ordering> crate::sort::Sortable for SortBy<'_, T, F> {
    #[inline]
    fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        (self.compare)(&self.values[i], &self.values[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j)
    }
}

impl<T, I: InternalIndex> IndexedVec<T, I> {
    /// Create a new, unallocated [`IndexedVec`]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            index: SpacedIndex::new(),
        }
    }

    /// Create a new [`IndexedVec`] with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            index: SpacedIndex::with_capacity(capacity),
        }
    }

    /// The number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Access a vacant slot
    pub fn vacant_slot(&mut self) -> VacantSlot<'_, T, I> {
        VacantSlot {
            slot: self.index.vacant_slot(),
            values: &mut self.values,
        }
    }

    /// Insert a value, and return its handle
    #[inline]
    pub fn insert(&mut self, value: T) -> Handle<I> {
        self.vacant_slot().insert(value)
    }

    /// Insert a value that depends on its own handle
    pub fn insert_with(&mut self, value: impl FnOnce(Handle<I>) -> T) -> Handle<I> {
        let slot = self.vacant_slot();
        let handle = slot.handle();
        slot.insert(value(handle))
    }

    /// Get a reference to the value associated with the handle
    ///
    /// Returns None if the handle isn't live
    #[inline]
    pub fn get(&self, handle: Handle<I>) -> Option<&T> {
        let slot = self.index.get(handle)?;
        self.values.get(slot)
    }

    /// Get a mutable reference to the value associated with the handle
    ///
    /// Returns None if the handle isn't live
    #[inline]
    pub fn get_mut(&mut self, handle: Handle<I>) -> Option<&mut T> {
        let slot = self.index.get(handle)?;
        self.values.get_mut(slot)
    }

    /// Remove the value associated with the handle
    ///
    /// The last value moves into its slot
    ///
    /// # Panics
    ///
    /// If the handle isn't live
    pub fn remove(&mut self, handle: Handle<I>) -> T {
        match self.try_remove(handle) {
            Some(value) => value,
            None => stale_handle(handle.index()),
        }
    }

    /// Try to remove the value associated with the handle
    ///
    /// Returns None if the handle isn't live
    pub fn try_remove(&mut self, handle: Handle<I>) -> Option<T> {
        self.index.get(handle)?;
        // SAFETY: we just checked that the handle is live
        let slot = unsafe { self.index.remove_unchecked(handle) };
        Some(self.values.swap_remove(slot))
    }

    /// Exchange the slots of two values
    ///
    /// # Panics
    ///
    /// If either handle isn't live
    pub fn swap(&mut self, a: Handle<I>, b: Handle<I>) {
        let (Some(slot_a), Some(slot_b)) = (self.index.get(a), self.index.get(b)) else {
            stale_handle(if self.index.contains(a) { b } else { a }.index())
        };

        self.values.swap(slot_a, slot_b);
        self.index.swap(a, b);
    }

    /// Remove every value, keeping the allocations
    pub fn clear(&mut self) {
        self.values.clear();
        self.index.clear();
    }

    /// Sort the values, keeping every handle pointed at its value
    ///
    /// see [`sort`](crate::sort::sort)
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sort the values with a comparison function, keeping every handle pointed at its value
    ///
    /// see [`sort`](crate::sort::sort)
    pub fn sort_by(&mut self, compare: impl Fn(&T, &T) -> Ordering) {
        let mut by = SortBy {
            values: &mut self.values,
            compare,
        };
        self.index.sorter(&mut by).sort();
    }

    /// Sort the values by a key, keeping every handle pointed at its value
    ///
    /// see [`sort`](crate::sort::sort)
    pub fn sort_by_key<K: Ord>(&mut self, key: impl Fn(&T) -> K) {
        self.sort_by(|a, b| key(a).cmp(&key(b)))
    }

    /// Stable sort the values with a comparison function, keeping every handle
    /// pointed at its value
    ///
    /// see [`sort_stable`](crate::sort::sort_stable)
    pub fn sort_stable_by(&mut self, compare: impl Fn(&T, &T) -> Ordering) {
        let mut by = SortBy {
            values: &mut self.values,
            compare,
        };
        self.index.sorter(&mut by).sort_stable();
    }

    /// The packed slice of values, in slot order
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// The packed mutable slice of values, in slot order
    #[inline]
    pub fn values_mut(&mut self) -> &mut [T] {
        &mut self.values
    }

    /// The handles of the values, in slot order
    #[inline]
    pub fn handles(&self) -> &[Handle<I>] {
        self.index.handles()
    }

    /// The [`SpacedIndex`] that this [`IndexedVec`] uses
    #[inline]
    pub fn index(&self) -> &SpacedIndex<I> {
        &self.index
    }

    /// An iterator over handles and values, in slot order
    pub fn iter(&self) -> Iter<'_, T, I> {
        Iter {
            handles: self.index.handles().iter(),
            values: self.values.iter(),
        }
    }
}

impl<T, I: InternalIndex> Default for IndexedVec<T, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cold]
#[inline(never)]
fn stale_handle(handle: usize) -> ! {
    panic!("Tried to access stale handle: {handle}")
}

impl<T, I: InternalIndex> ops::Index<Handle<I>> for IndexedVec<T, I> {
    type Output = T;

    fn index(&self, handle: Handle<I>) -> &Self::Output {
        match self.get(handle) {
            Some(value) => value,
            None => stale_handle(handle.index()),
        }
    }
}

impl<T, I: InternalIndex> ops::IndexMut<Handle<I>> for IndexedVec<T, I> {
    fn index_mut(&mut self, handle: Handle<I>) -> &mut Self::Output {
        match self.get_mut(handle) {
            Some(value) => value,
            None => stale_handle(handle.index()),
        }
    }
}

/// An iterator over the handles and values of an [`IndexedVec`], created by
/// [`IndexedVec::iter`]
pub struct Iter<'a, T, I: InternalIndex = usize> {
    handles: core::slice::Iter<'a, Handle<I>>,
    values: core::slice::Iter<'a, T>,
}

impl<'a, T, I: InternalIndex> Iterator for Iter<'a, T, I> {
    type Item = (Handle<I>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.handles.next()?, self.values.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T, I: InternalIndex> ExactSizeIterator for Iter<'_, T, I> {}

impl<T, I: InternalIndex> DoubleEndedIterator for Iter<'_, T, I> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((*self.handles.next_back()?, self.values.next_back()?))
    }
}

impl<'a, T, I: InternalIndex> IntoIterator for &'a IndexedVec<T, I> {
    type Item = (Handle<I>, &'a T);
    type IntoIter = Iter<'a, T, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
