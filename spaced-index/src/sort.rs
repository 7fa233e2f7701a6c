//! Sorting payloads without losing track of handles
//!
//! A sort algorithm only needs three things from a sequence: its length, a way
//! to compare two positions, and a way to swap two positions. That is the
//! [`Sortable`] trait. The algorithms in this module ([`sort`], [`sort_stable`])
//! reorder a sequence using nothing but [`Sortable::swap`].
//!
//! Wrapping your payload in a [`Sorter`] mirrors each of those swaps into a
//! [`SpacedIndex`] via [`SpacedIndex::swap_slots`], so every handle still
//! points at its element once the sort is done.
//!
//! ```
//! use core::cmp::Ordering;
//! use spaced_index::{index::SpacedIndex, sort::Sortable};
//!
//! struct Columns {
//!     names: Vec<&'static str>,
//!     values: Vec<i32>,
//! }
//!
//! impl Sortable for Columns {
//!     fn len(&self) -> usize {
//!         self.values.len()
//!     }
//!
//!     fn compare(&self, i: usize, j: usize) -> Ordering {
//!         self.values[i].cmp(&self.values[j])
//!     }
//!
//!     fn swap(&mut self, i: usize, j: usize) {
//!         self.names.swap(i, j);
//!         self.values.swap(i, j);
//!     }
//! }
//!
//! let mut index = SpacedIndex::<usize>::new();
//! let mut columns = Columns { names: Vec::new(), values: Vec::new() };
//!
//! let mut handles = Vec::new();
//! for (name, value) in [("c", 3), ("a", 1), ("b", 2)] {
//!     columns.names.push(name);
//!     columns.values.push(value);
//!     handles.push(index.add());
//! }
//!
//! index.sorter(&mut columns).sort();
//!
//! assert_eq!(columns.names, ["a", "b", "c"]);
//! assert_eq!(columns.names[index.slot(handles[0])], "c");
//! ```

use core::cmp::Ordering;

use alloc::vec::Vec;

use crate::{index::SpacedIndex, internal_index::InternalIndex};

mod stable;
mod unstable;

/// A sequence which can be sorted by comparing and swapping positions
pub trait Sortable {
    /// The number of elements in the sequence
    fn len(&self) -> usize;

    /// Compare the elements at positions `i` and `j`
    fn compare(&self, i: usize, j: usize) -> Ordering;

    /// Swap the elements at positions `i` and `j`
    fn swap(&mut self, i: usize, j: usize);

    /// Returns true if the element at `i` must sort before the element at `j`
    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.compare(i, j) == Ordering::Less
    }

    /// Returns true if the sequence has no elements
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Ord> Sortable for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        <[T]>::swap(self, i, j)
    }
}

impl<T: Ord> Sortable for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self[i].cmp(&self[j])
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.as_mut_slice().swap(i, j)
    }
}

/// Keeps a [`SpacedIndex`] in sync with a [`Sortable`] payload while it is sorted
///
/// [`Sorter`] is itself [`Sortable`]: it forwards [`len`](Sortable::len) and
/// [`compare`](Sortable::compare), and every [`swap`](Sortable::swap) is applied to the
/// payload and then to the index. Any algorithm which reorders purely by swapping can
/// drive it.
pub struct Sorter<'a, S: ?Sized, I: InternalIndex = usize> {
    index: &'a mut SpacedIndex<I>,
    data: &'a mut S,
}

impl<'a, S: Sortable + ?Sized, I: InternalIndex> Sorter<'a, S, I> {
    /// Pair a payload with the index which tracks it
    ///
    /// The payload must have exactly one element per live handle, in slot order
    pub fn new(index: &'a mut SpacedIndex<I>, data: &'a mut S) -> Self {
        debug_assert_eq!(
            data.len(),
            index.len(),
            "the payload and the index disagree on the number of elements"
        );
        Self { index, data }
    }

    /// The index being kept in sync
    pub fn index(&self) -> &SpacedIndex<I> {
        &*self.index
    }

    /// The payload being sorted
    pub fn data(&self) -> &S {
        &*self.data
    }

    /// Sort the payload with [`sort`], updating the index along the way
    pub fn sort(mut self) {
        sort(&mut self);
        log::trace!("sorted {} elements", self.data.len());
    }

    /// Sort the payload with [`sort_stable`], updating the index along the way
    pub fn sort_stable(mut self) {
        sort_stable(&mut self);
        log::trace!("stable sorted {} elements", self.data.len());
    }
}

impl<S: Sortable + ?Sized, I: InternalIndex> Sortable for Sorter<'_, S, I> {
    #[inline]
    fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    fn compare(&self, i: usize, j: usize) -> Ordering {
        self.data.compare(i, j)
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.data.less(i, j)
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.data.swap(i, j);
        self.index.swap_slots(i, j);
    }
}

/// Sort `data` in ascending order
///
/// This sort is not stable: equal elements may be reordered. It performs
/// O(n log n) comparisons and swaps in the worst case.
pub fn sort<S: Sortable + ?Sized>(data: &mut S) {
    unstable::sort(data)
}

/// Sort `data` in ascending order, keeping equal elements in their original order
///
/// This performs O(n log n) comparisons and O(n log² n) swaps, without allocating
pub fn sort_stable<S: Sortable + ?Sized>(data: &mut S) {
    stable::sort(data)
}

/// Returns true if `data` is in ascending order
pub fn is_sorted<S: Sortable + ?Sized>(data: &S) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    // a payload with a key and the position it was inserted at
    struct Keyed {
        keys: Vec<u32>,
        origin: Vec<usize>,
    }

    impl Keyed {
        fn new(keys: &[u32]) -> Self {
            Self {
                keys: keys.to_vec(),
                origin: (0..keys.len()).collect(),
            }
        }
    }

    impl Sortable for Keyed {
        fn len(&self) -> usize {
            self.keys.len()
        }

        fn compare(&self, i: usize, j: usize) -> Ordering {
            self.keys[i].cmp(&self.keys[j])
        }

        fn swap(&mut self, i: usize, j: usize) {
            self.keys.swap(i, j);
            self.origin.swap(i, j);
        }
    }

    // deterministic scramble, no need for an rng here
    fn scrambled(n: u32, modulus: u32) -> Vec<u32> {
        (0..n).map(|i| i.wrapping_mul(2_654_435_761) % modulus).collect()
    }

    #[test]
    fn sorts_slices() {
        for n in [0, 1, 2, 3, 11, 12, 13, 50, 1000] {
            let mut data = scrambled(n, 97);
            let mut expected = data.clone();
            expected.sort();

            sort(data.as_mut_slice());
            assert_eq!(data, expected, "n = {n}");
            assert!(is_sorted(data.as_slice()));
        }
    }

    #[test]
    fn sorts_adversarial_inputs() {
        let inputs: [Vec<u32>; 4] = [
            (0..500).collect(),
            (0..500).rev().collect(),
            core::iter::repeat_n(7, 500).collect(),
            (0..500).map(|i| i % 2).collect(),
        ];

        for mut data in inputs {
            let mut expected = data.clone();
            expected.sort();
            sort(&mut data);
            assert_eq!(data, expected);
        }
    }

    #[test]
    fn stable_sort_keeps_equal_elements_in_order() {
        for n in [0, 1, 19, 20, 21, 40, 41, 333] {
            let mut keyed = Keyed::new(&scrambled(n, 5));
            sort_stable(&mut keyed);

            assert!(is_sorted(&keyed));
            for pair in keyed.keys.iter().zip(&keyed.origin).collect::<Vec<_>>().windows(2) {
                if pair[0].0 == pair[1].0 {
                    assert!(pair[0].1 < pair[1].1, "n = {n}");
                }
            }
        }
    }

    #[test]
    fn sorter_keeps_handles() {
        for stable in [false, true] {
            let keys = scrambled(200, 1000);
            let mut keyed = Keyed::new(&keys);
            let mut index = SpacedIndex::<u32>::with_capacity(keys.len());
            let handles: Vec<_> = keys.iter().map(|_| index.add()).collect();

            let sorter = index.sorter(&mut keyed);
            if stable {
                sorter.sort_stable();
            } else {
                sorter.sort();
            }

            assert!(is_sorted(&keyed));
            index.verify().unwrap();
            for (origin, &handle) in handles.iter().enumerate() {
                let slot = index.slot(handle);
                assert_eq!(keyed.origin[slot], origin);
                assert_eq!(keyed.keys[slot], keys[origin]);
            }
        }
    }

    #[test]
    fn is_sorted_rejects_descents() {
        assert!(is_sorted(&[1, 2, 2, 3][..]));
        assert!(!is_sorted(&[1, 3, 2][..]));
        assert!(is_sorted(&Vec::<u8>::new()));
    }
}
