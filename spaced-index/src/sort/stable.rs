//! in-place merge sort built from swaps
//!
//! Blocks of [`BLOCK_SIZE`] elements are insertion sorted, then merged pairwise
//! with symmerge (Kim & Kutzner, "Stable Minimum Storage Merging by Symmetric
//! Comparisons"), which only needs rotations and so never allocates.

use super::{unstable::insertion_sort, Sortable};

const BLOCK_SIZE: usize = 20;

pub(super) fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    if n < 2 {
        return;
    }

    let mut block_size = BLOCK_SIZE;
    let (mut a, mut b) = (0, block_size);
    while b <= n {
        insertion_sort(data, a, b);
        a = b;
        b += block_size;
    }
    insertion_sort(data, a, n);

    while block_size < n {
        (a, b) = (0, 2 * block_size);
        while b <= n {
            sym_merge(data, a, a + block_size, b);
            a = b;
            b += 2 * block_size;
        }

        let m = a + block_size;
        if m < n {
            sym_merge(data, a, m, n);
        }

        block_size *= 2;
    }
}

// merges the sorted runs a..m and m..b
fn sym_merge<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    // a single element on the left: binary search its place and bubble it there
    if m - a == 1 {
        let (mut i, mut j) = (m, b);
        while i < j {
            let h = i + (j - i) / 2;
            if data.less(h, a) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in a..i - 1 {
            data.swap(k, k + 1);
        }
        return;
    }

    // a single element on the right
    if b - m == 1 {
        let (mut i, mut j) = (a, m);
        while i < j {
            let h = i + (j - i) / 2;
            if !data.less(m, h) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in (i + 1..=m).rev() {
            data.swap(k, k - 1);
        }
        return;
    }

    let mid = a + (b - a) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;

    while start < r {
        let c = start + (r - start) / 2;
        if !data.less(p - c, c) {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        rotate(data, start, m, end);
    }
    if a < start && start < mid {
        sym_merge(data, a, start, mid);
    }
    if mid < end && end < b {
        sym_merge(data, mid, end, b);
    }
}

fn swap_range<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize, n: usize) {
    for i in 0..n {
        data.swap(a + i, b + i);
    }
}

// rotates a..b so that m..b comes before a..m, by block swaps
fn rotate<S: Sortable + ?Sized>(data: &mut S, a: usize, m: usize, b: usize) {
    let mut i = m - a;
    let mut j = b - m;

    while i != j {
        if i > j {
            swap_range(data, m - i, m, j);
            i -= j;
        } else {
            swap_range(data, m - i, m + j - i, i);
            j -= i;
        }
    }

    swap_range(data, m - i, m, i);
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn rotate_moves_tail_to_front() {
        let mut data: Vec<u8> = (0..10).collect();
        rotate(data.as_mut_slice(), 1, 4, 9);
        assert_eq!(data, [0, 4, 5, 6, 7, 8, 1, 2, 3, 9]);
    }

    #[test]
    fn sym_merge_merges_runs() {
        let mut data: Vec<u8> = [1, 4, 6, 9, 2, 3, 5, 7, 8].to_vec();
        sym_merge(data.as_mut_slice(), 0, 4, 9);
        assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8, 9]);

        let mut data: Vec<u8> = [5, 1, 2, 3, 6].to_vec();
        sym_merge(data.as_mut_slice(), 0, 1, 5);
        assert_eq!(data, [1, 2, 3, 5, 6]);

        let mut data: Vec<u8> = [1, 2, 4, 5, 3].to_vec();
        sym_merge(data.as_mut_slice(), 0, 4, 5);
        assert_eq!(data, [1, 2, 3, 4, 5]);
    }
}
