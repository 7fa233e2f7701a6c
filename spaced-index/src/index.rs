//! The core handle tracker
//!
//! A [`SpacedIndex`] should be associated with an array (or set of arrays) that
//! you own, which we call the payload. The index never touches the payload, so
//! you must mirror every operation on it yourself:
//!
//! * before calling [`SpacedIndex::add`], push the new element onto the payload
//!   (or use [`SpacedIndex::vacant_slot`] to learn the handle first)
//! * around [`SpacedIndex::remove`], [`swap_remove`](alloc::vec::Vec::swap_remove)
//!   the element at [`SpacedIndex::slot`] out of the payload
//! * alongside [`SpacedIndex::swap`], swap the payload at both handles' slots
//! * alongside [`SpacedIndex::swap_slots`], swap the payload at both slots
//! * alongside [`SpacedIndex::clear`], clear the payload
//!
//! If you do these things, then [`SpacedIndex::slot`] always gives the position
//! of a live handle's element in the payload.
//!
//! None of these operations check that a handle is live. Passing a removed or
//! made-up handle is memory safe, but leaves the index in an unspecified state.
//! Use [`CheckedIndex`](crate::checked::CheckedIndex) if you need validation.

use alloc::vec::Vec;

use crate::{
    error::IndexError,
    handle::Handle,
    internal_index::InternalIndex,
    sort::Sorter,
};

/// The capacity reserved by [`SpacedIndex::init`]
pub const DEFAULT_CAPACITY: usize = 1024;

/// Maps stable [`Handle`]s to slots in a packed payload and back
///
/// This structure should be paired with arrays that store the actual data
#[derive(Clone, Debug)]
pub struct SpacedIndex<I: InternalIndex = usize> {
    // forward table, holed: handle -> slot
    slots: Vec<I>,
    // reverse table, compact: slot -> handle
    handles: Vec<Handle<I>>,
    // handles which may be reused, used as a stack
    free: Vec<Handle<I>>,
}

/// A vacant slot in a [`SpacedIndex`], created by [`SpacedIndex::vacant_slot`]
pub struct VacantSlot<'a, I: InternalIndex = usize> {
    index: &'a mut SpacedIndex<I>,
    handle: Handle<I>,
}

impl<I: InternalIndex> SpacedIndex<I> {
    /// Create a new, unallocated [`SpacedIndex`]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            handles: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Create a new [`SpacedIndex`] with room for `capacity` elements
    ///
    /// The free list gets an eighth of that, since it only grows after removals
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            handles: Vec::with_capacity(capacity),
            free: Vec::with_capacity(capacity / 8),
        }
    }

    /// Reset the index in-place to an empty index with [`DEFAULT_CAPACITY`]
    pub fn init(&mut self) {
        self.init_size(DEFAULT_CAPACITY)
    }

    /// Reset the index in-place to an empty index with room for `capacity` elements
    ///
    /// All handles are invalidated, and the old allocations are released
    pub fn init_size(&mut self, capacity: usize) {
        *self = Self::with_capacity(capacity)
    }

    /// The number of live elements, which is the length your payload must have
    #[inline]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns true if there are no live elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// The number of elements the index can hold without reallocating
    #[inline]
    pub fn capacity(&self) -> usize {
        self.handles.capacity().min(self.slots.capacity())
    }

    /// Reserve room for at least `additional` more elements
    pub fn reserve(&mut self, additional: usize) {
        self.handles.reserve(additional);
        self.slots
            .reserve((self.handles.len() + additional).saturating_sub(self.slots.len()));
    }

    /// Access a vacant slot in the index
    ///
    /// This lets you see the handle before the element is added, for example to
    /// store the handle inside the element itself.
    pub fn vacant_slot(&mut self) -> VacantSlot<'_, I> {
        let handle = match self.free.last() {
            Some(&handle) => handle,
            None => Handle::from_usize(self.slots.len()),
        };

        VacantSlot {
            index: self,
            handle,
        }
    }

    /// Track the element just pushed onto the end of the payload
    ///
    /// The element must be at position `self.len()` of the payload, i.e. you
    /// pushed it before calling this.
    #[inline]
    pub fn add(&mut self) -> Handle<I> {
        self.vacant_slot().insert()
    }

    /// Stop tracking the element associated with the handle, and return its slot
    ///
    /// The element at the returned slot must be [`swap_remove`](Vec::swap_remove)d
    /// from the payload (before or after this call), so that the last element of
    /// the payload moves into the slot just like its handle does.
    ///
    /// # Panics
    ///
    /// If the handle or its slot is out of bounds.
    /// If the handle isn't live the index is left in an unspecified state
    #[inline]
    pub fn remove(&mut self, handle: Handle<I>) -> usize {
        debug_assert!(self.contains(handle), "removed {handle:?}, which isn't live");

        let slot = self.slots[handle.index()];
        self.free.push(handle);
        self.remove_at(slot)
    }

    fn remove_at(&mut self, slot: I) -> usize {
        let position = slot.to_usize();
        self.handles.swap_remove(position);

        // If we removed the end of the list, then nothing moved
        if let Some(&moved) = self.handles.get(position) {
            self.slots[moved.index()] = slot;
        }

        position
    }

    /// Stop tracking the element associated with the handle without checking any
    /// bounds, and return its slot
    ///
    /// see [`SpacedIndex::remove`] for what you need to do with the payload
    ///
    /// # Safety
    ///
    /// The handle must be live
    ///
    /// i.e. [`SpacedIndex::get`] would have returned [`Some`]
    #[inline]
    pub unsafe fn remove_unchecked(&mut self, handle: Handle<I>) -> usize {
        // SAFETY: the caller ensures that the handle is live, so it is in bounds of the
        // forward table
        let slot = unsafe { *self.slots.get_unchecked(handle.index()) };
        let position = slot.to_usize();
        // SAFETY: live handles always point into the reverse table
        unsafe { assert_unchecked!(position < self.handles.len()) };

        self.free.push(handle);
        self.handles.swap_remove(position);

        if let Some(&moved) = self.handles.get(position) {
            // SAFETY: all handles in the reverse table are live, so they are in bounds of the
            // forward table
            unsafe { *self.slots.get_unchecked_mut(moved.index()) = slot }
        }

        position
    }

    /// Exchange the slots of two handles
    ///
    /// The payload at `self.slot(a)` and `self.slot(b)` must be swapped as well
    /// (before or after this call)
    ///
    /// # Panics
    ///
    /// If either handle or its slot is out of bounds
    #[inline]
    pub fn swap(&mut self, a: Handle<I>, b: Handle<I>) {
        debug_assert!(self.contains(a), "swapped {a:?}, which isn't live");
        debug_assert!(self.contains(b), "swapped {b:?}, which isn't live");

        let slot_a = self.slots[a.index()].to_usize();
        let slot_b = self.slots[b.index()].to_usize();
        self.handles.swap(slot_a, slot_b);
        self.slots.swap(a.index(), b.index());
    }

    /// Exchange the handles of two slots
    ///
    /// The payload at `i` and `j` must be swapped as well (before or after this call).
    /// This is what [`Sorter`] calls for every swap a sort makes.
    ///
    /// # Panics
    ///
    /// If either slot is out of bounds
    #[inline]
    pub fn swap_slots(&mut self, i: usize, j: usize) {
        let a = self.handles[i];
        let b = self.handles[j];
        self.handles.swap(i, j);
        // a pointed at i and b at j, so swapping their entries is enough
        self.slots.swap(a.index(), b.index());
    }

    /// Stop tracking every element, keeping the allocations
    ///
    /// Every handle is invalidated, and handle integers start over from zero
    pub fn clear(&mut self) {
        self.slots.clear();
        self.handles.clear();
        self.free.clear();
    }

    /// Get the slot of the handle in the payload
    ///
    /// # Panics
    ///
    /// If the handle is out of bounds of the forward table.
    /// If the handle isn't live, then the returned value is meaningless
    #[inline]
    pub fn slot(&self, handle: Handle<I>) -> usize {
        self.slots[handle.index()].to_usize()
    }

    /// Get the slot of the handle in the payload without checking any bounds
    ///
    /// # Safety
    ///
    /// The handle must be live
    ///
    /// i.e. [`SpacedIndex::get`] would have returned [`Some`]
    #[inline]
    pub unsafe fn slot_unchecked(&self, handle: Handle<I>) -> usize {
        // SAFETY: the caller ensures that the handle is live
        unsafe { self.slots.get_unchecked(handle.index()) }.to_usize()
    }

    /// Get the slot of the handle in the payload
    ///
    /// Returns None if the handle isn't live
    #[inline]
    pub fn get(&self, handle: Handle<I>) -> Option<usize> {
        let slot = self.slots.get(handle.index())?.to_usize();
        // stale forward entries can point anywhere, the reverse table has the final say
        (*self.handles.get(slot)? == handle).then_some(slot)
    }

    /// Returns true if the handle is live
    #[inline]
    pub fn contains(&self, handle: Handle<I>) -> bool {
        self.get(handle).is_some()
    }

    /// Get the handle of the element in the given slot
    ///
    /// # Panics
    ///
    /// If the slot is out of bounds
    #[inline]
    pub fn handle_at(&self, slot: usize) -> Handle<I> {
        self.handles[slot]
    }

    /// Get the handle of the element in the given slot
    ///
    /// Returns None if the slot is out of bounds
    #[inline]
    pub fn try_handle_at(&self, slot: usize) -> Option<Handle<I>> {
        self.handles.get(slot).copied()
    }

    /// All live handles, in slot order
    #[inline]
    pub fn handles(&self) -> &[Handle<I>] {
        &self.handles
    }

    /// Wrap `data` in a [`Sorter`], so that sorting it keeps this index in sync
    pub fn sorter<'a, S: crate::sort::Sortable + ?Sized>(
        &'a mut self,
        data: &'a mut S,
    ) -> Sorter<'a, S, I> {
        Sorter::new(self, data)
    }

    /// Check that every live handle maps to the slot which holds it, and that no
    /// free handle is live
    ///
    /// This walks every table, so it is O(n)
    pub fn verify(&self) -> Result<(), IndexError> {
        for (slot, &handle) in self.handles.iter().enumerate() {
            match self.slots.get(handle.index()) {
                Some(&s) if s.to_usize() == slot => {}
                _ => {
                    return Err(IndexError::BrokenMapping {
                        slot,
                        handle: handle.index(),
                    })
                }
            }
        }

        if let Some(&handle) = self.free.iter().find(|&&handle| self.contains(handle)) {
            return Err(IndexError::FreedHandleLive {
                handle: handle.index(),
            });
        }

        Ok(())
    }
}

impl<I: InternalIndex> Default for SpacedIndex<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: InternalIndex> VacantSlot<'_, I> {
    /// Get the handle that will be associated with this slot once it is filled
    #[inline]
    pub fn handle(&self) -> Handle<I> {
        self.handle
    }

    /// Get the position of the slot in the payload once it is filled
    #[inline]
    pub fn position(&self) -> usize {
        self.index.handles.len()
    }

    /// Fill this slot, and return its handle
    ///
    /// The element must already be at `self.position()` in the payload
    #[inline]
    pub fn insert(self) -> Handle<I> {
        let index = self.index;
        // SAFETY: the reverse table is never longer than the forward table, and the
        // handle for this slot fit in `I`, so every position up to the new one does too
        let position = unsafe { I::from_usize_unchecked(index.handles.len()) };

        match index.free.pop() {
            Some(handle) => {
                debug_assert_eq!(handle, self.handle);
                index.slots[handle.index()] = position;
            }
            None => index.slots.push(position),
        }

        index.handles.push(self.handle);
        self.handle
    }
}
