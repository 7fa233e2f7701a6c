//! see [`Handle`]

use core::fmt;

use crate::internal_index::InternalIndex;

/// A stable reference to an element tracked by a [`SpacedIndex`](crate::index::SpacedIndex)
///
/// A handle stays valid until it is removed, no matter how the slots of other
/// elements move around. Two live handles of the same index are never equal.
///
/// Once a handle is removed, its integer may be handed out again by a later
/// [`add`](crate::index::SpacedIndex::add), and from then on it denotes the new
/// element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Handle<I = usize> {
    raw: I,
}

impl<I: InternalIndex> Handle<I> {
    /// Create a handle from its raw integer
    ///
    /// The handle is only meaningful to the index which produced the integer
    #[inline]
    pub const fn from_raw(raw: I) -> Self {
        Self { raw }
    }

    /// The raw integer of this handle
    #[inline]
    pub fn raw(self) -> I {
        self.raw
    }

    /// The position of this handle in the forward table
    #[inline]
    pub fn index(self) -> usize {
        self.raw.to_usize()
    }

    #[inline]
    pub(crate) fn from_usize(x: usize) -> Self {
        Self::from_raw(I::from_usize(x))
    }
}

impl<I: fmt::Debug> fmt::Debug for Handle<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:?})", self.raw)
    }
}

impl<I: fmt::Display> fmt::Display for Handle<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.raw)
    }
}
