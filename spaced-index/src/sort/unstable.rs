//! introsort: quicksort with a heapsort fallback and insertion sort for short runs

use super::Sortable;

// ranges at most this long are insertion sorted
const INSERTION_THRESHOLD: usize = 12;

pub(super) fn sort<S: Sortable + ?Sized>(data: &mut S) {
    let n = data.len();
    if n > 1 {
        let max_depth = 2 * (usize::BITS - n.leading_zeros()) as usize;
        quick_sort(data, 0, n, max_depth);
    }
}

pub(super) fn insertion_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    for i in a + 1..b {
        let mut j = i;
        while j > a && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn quick_sort<S: Sortable + ?Sized>(data: &mut S, mut lo: usize, mut hi: usize, mut depth: usize) {
    while hi - lo > INSERTION_THRESHOLD {
        if depth == 0 {
            heap_sort(data, lo, hi);
            return;
        }
        depth -= 1;

        let p = partition(data, lo, hi);

        // recurse into the smaller half, loop on the larger one
        if p - lo < hi - p {
            quick_sort(data, lo, p, depth);
            lo = p + 1;
        } else {
            quick_sort(data, p + 1, hi, depth);
            hi = p;
        }
    }

    insertion_sort(data, lo, hi);
}

// orders the three positions so that data[m0] <= data[m1] <= data[m2]
fn median_of_three<S: Sortable + ?Sized>(data: &mut S, m1: usize, m0: usize, m2: usize) {
    if data.less(m1, m0) {
        data.swap(m1, m0);
    }
    if data.less(m2, m1) {
        data.swap(m2, m1);
        if data.less(m1, m0) {
            data.swap(m1, m0);
        }
    }
}

// partitions lo..hi around a pivot, returns the pivot's final position
//
// everything before the pivot is <= it, and everything after is >= it
fn partition<S: Sortable + ?Sized>(data: &mut S, lo: usize, hi: usize) -> usize {
    debug_assert!(hi - lo > 2);

    let mid = lo + (hi - lo) / 2;
    median_of_three(data, lo, mid, hi - 1);

    // the pivot sits at lo
    let mut i = lo;
    let mut j = hi;
    loop {
        i += 1;
        while data.less(i, lo) {
            if i == hi - 1 {
                break;
            }
            i += 1;
        }

        j -= 1;
        while data.less(lo, j) {
            j -= 1;
        }

        if i >= j {
            break;
        }
        data.swap(i, j);
    }

    data.swap(lo, j);
    j
}

fn sift_down<S: Sortable + ?Sized>(data: &mut S, mut root: usize, hi: usize, first: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= hi {
            return;
        }
        if child + 1 < hi && data.less(first + child, first + child + 1) {
            child += 1;
        }
        if !data.less(first + root, first + child) {
            return;
        }
        data.swap(first + root, first + child);
        root = child;
    }
}

fn heap_sort<S: Sortable + ?Sized>(data: &mut S, a: usize, b: usize) {
    let first = a;
    let hi = b - a;

    for i in (0..=(hi - 1) / 2).rev() {
        sift_down(data, i, hi, first);
    }

    for i in (0..hi).rev() {
        data.swap(first, first + i);
        sift_down(data, 0, i, first);
    }
}
