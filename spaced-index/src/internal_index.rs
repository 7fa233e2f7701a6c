//! see [`InternalIndex`]

/// The integer type stored in the tables of a [`SpacedIndex`](crate::index::SpacedIndex)
///
/// Both handles and slots are stored as `Self`, so picking a smaller type
/// shrinks the forward table, the reverse table and the free list alike.
///
/// # Safety
///
/// to_usize must give the exact usize that was passed to from_usize or from_usize_unchecked
pub unsafe trait InternalIndex:
    Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug + crate::seal::Seal
{
    /// Converts a usize to Self
    ///
    /// # Panics
    ///
    /// if x doesn't fit in Self
    fn from_usize(x: usize) -> Self;

    /// Casts from usize to Self without checking if it fits
    ///
    /// # Safety
    ///
    /// `from_usize(x)` must not panic
    unsafe fn from_usize_unchecked(x: usize) -> Self;

    /// converts self to a usize, preserving any value passed to [`InternalIndex::from_usize`] or
    /// [`InternalIndex::from_usize_unchecked`]
    fn to_usize(self) -> usize;
}

#[cold]
#[inline(never)]
fn too_many_handles(x: usize, ty: &str) -> ! {
    panic!("tried to track too many handles: {x} doesn't fit in {ty}")
}

macro_rules! prim {
    ($ty:ident) => {
        impl crate::seal::Seal for $ty {}
        // SAFETY: TryFrom ensures that the usize is in bounds of Self
        unsafe impl InternalIndex for $ty {
            #[inline]
            fn from_usize(x: usize) -> Self {
                Self::try_from(x).unwrap_or_else(|_| too_many_handles(x, stringify!($ty)))
            }

            #[inline]
            unsafe fn from_usize_unchecked(x: usize) -> Self {
                debug_assert!(Self::try_from(x).is_ok());
                x as Self
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }
        }
    };
}

prim!(u8);
prim!(u16);
prim!(u32);
prim!(u64);
prim!(usize);

#[cfg(test)]
mod tests {
    use super::InternalIndex;

    #[test]
    fn round_trip_in_range() {
        assert_eq!(u8::from_usize(255).to_usize(), 255);
        assert_eq!(u16::from_usize(1024).to_usize(), 1024);
        assert_eq!(usize::from_usize(usize::MAX).to_usize(), usize::MAX);
    }

    #[test]
    #[should_panic = "too many handles"]
    fn overflow_panics() {
        u8::from_usize(256);
    }
}
