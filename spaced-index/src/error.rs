//! Errors reported by [`CheckedIndex`](crate::checked::CheckedIndex) and
//! [`SpacedIndex::verify`](crate::index::SpacedIndex::verify)

/// A violated contract of a [`SpacedIndex`](crate::index::SpacedIndex)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    /// The handle was never allocated, or has been removed since
    #[error("handle {handle} is not live")]
    StaleHandle {
        /// the raw integer of the offending handle
        handle: usize,
    },
    /// The slot is outside `0..len`
    #[error("position {position} is out of range for {len} live elements")]
    PositionOutOfRange {
        /// the offending slot
        position: usize,
        /// the number of live elements at the time
        len: usize,
    },
    /// The forward table doesn't point back at the slot holding this handle
    #[error("slot {slot} holds handle {handle}, but the handle maps elsewhere")]
    BrokenMapping {
        /// the slot in the reverse table
        slot: usize,
        /// the handle stored at that slot
        handle: usize,
    },
    /// A handle is both on the free list and in the reverse table
    #[error("handle {handle} is free but still occupies a slot")]
    FreedHandleLive {
        /// the raw integer of the offending handle
        handle: usize,
    },
}
