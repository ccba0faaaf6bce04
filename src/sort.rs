// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Interchangeable comparison sorts.
//!
//! [`DateTimeList`](crate::DateTimeList) orders its records through any
//! [`SortStrategy`]. Nothing here is calendar specific: every strategy works
//! on a mutable slice and a comparator.
//!
//! | Strategy | Stable | Notes |
//! |----------|--------|-------|
//! | [`StdSort`] | yes | `slice::sort_by`, the default |
//! | [`InsertionSort`] | yes | adjacent swaps, `O(n²)` |
//! | [`MergeSort`] | yes | top-down, clones into scratch buffers |
//! | [`QuickSort`] | no | Lomuto partition, last element as pivot |

use std::cmp::Ordering;

/// A comparison sort usable as an ordering provider.
pub trait SortStrategy {
    /// Sorts `items` in ascending order according to `compare`.
    fn sort_by<T, F>(&self, items: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering;

    /// Whether equal elements keep their relative order.
    fn is_stable(&self) -> bool;

    /// Sorts by the natural order of `T`.
    fn sort<T>(&self, items: &mut [T])
    where
        T: Ord + Clone,
    {
        self.sort_by(items, T::cmp);
    }
}

/// The standard library's stable sort.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct StdSort;

impl SortStrategy for StdSort {
    #[inline]
    fn sort_by<T, F>(&self, items: &mut [T], compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        items.sort_by(compare);
    }

    fn is_stable(&self) -> bool {
        true
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct InsertionSort;

impl SortStrategy for InsertionSort {
    fn sort_by<T, F>(&self, items: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        for i in 1..items.len() {
            let mut j = i;
            while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
                items.swap(j - 1, j);
                j -= 1;
            }
        }
    }

    fn is_stable(&self) -> bool {
        true
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct MergeSort;

impl SortStrategy for MergeSort {
    fn sort_by<T, F>(&self, items: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(items, &mut compare);
    }

    fn is_stable(&self) -> bool {
        true
    }
}

fn merge_sort<T, F>(items: &mut [T], compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let mid = items.len() / 2;
    merge_sort(&mut items[..mid], compare);
    merge_sort(&mut items[mid..], compare);

    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // Ties take from the left run.
        let take_left = j == right.len()
            || (i < left.len() && compare(&right[j], &left[i]) != Ordering::Less);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Lomuto quicksort. Recurses into the smaller partition, so stack depth stays
/// logarithmic even on already-sorted input (time does not).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct QuickSort;

impl SortStrategy for QuickSort {
    fn sort_by<T, F>(&self, items: &mut [T], mut compare: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        quick_sort(items, &mut compare);
    }

    fn is_stable(&self) -> bool {
        false
    }
}

fn quick_sort<T, F>(mut items: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while items.len() > 1 {
        let pivot = partition(items, compare);
        let (left, rest) = std::mem::take(&mut items).split_at_mut(pivot);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quick_sort(left, compare);
            items = right;
        } else {
            quick_sort(right, compare);
            items = left;
        }
    }
}

fn partition<T, F>(items: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if compare(&items[j], &items[high]) == Ordering::Less {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}
