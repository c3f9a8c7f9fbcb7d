//! Ford-Johnson merge-insertion sort.
//!
//! Merge-insertion sorts with close to the information theoretic minimum of
//! comparisons, at the price of quadratic element moves. It is the algorithm
//! of choice when comparisons are much more expensive than anything else.

use std::cmp::Ordering;
use std::collections::VecDeque;

mod chain;
pub mod error;
pub mod input;
mod jacobsthal;
mod merge_insertion;
pub mod report;

pub use chain::MainChain;
pub use jacobsthal::{probe_order, Jacobsthal};

/// Main chain backed by a contiguous buffer.
pub type VecChain = Vec<usize>;

/// Main chain backed by a ring buffer.
pub type DequeChain = VecDeque<usize>;

#[inline(always)]
pub fn sort<T: Ord>(v: &mut [T]) {
    merge_insertion_sort::<VecChain, T, _>(v, |a, b| a.lt(b));
}

#[inline(always)]
pub fn sort_by<T, F: FnMut(&T, &T) -> Ordering>(v: &mut [T], mut compare: F) {
    merge_insertion_sort::<VecChain, T, _>(v, |a, b| compare(a, b) == Ordering::Less);
}

#[inline(always)]
pub fn sort_by_key<T, K: Ord, F: FnMut(&T) -> K>(v: &mut [T], mut f: F) {
    merge_insertion_sort::<VecChain, T, _>(v, |a, b| f(a).lt(&f(b)));
}

/// Like [`sort`], with the main chain stored in `C`.
#[inline(always)]
pub fn sort_in<C: MainChain, T: Ord>(v: &mut [T]) {
    merge_insertion_sort::<C, T, _>(v, |a, b| a.lt(b));
}

/// Like [`sort_by`], with the main chain stored in `C`.
#[inline(always)]
pub fn sort_by_in<C, T, F>(v: &mut [T], mut compare: F)
where
    C: MainChain,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_insertion_sort::<C, T, _>(v, |a, b| compare(a, b) == Ordering::Less);
}

// The elements never move while `is_less` runs. The algorithm sorts indices
// into `v` and the resulting permutation is applied once all comparisons are
// done. A panic in `is_less` therefore leaves `v` untouched, and an `is_less`
// that is not a total order still leaves `v` a permutation of its input.
#[inline(never)]
fn merge_insertion_sort<C, T, F>(v: &mut [T], mut is_less: F)
where
    C: MainChain,
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 || std::mem::size_of::<T>() == 0 {
        return;
    }

    log::debug!("merge-insertion sort of {len} elements, main chain in {}", C::NAME);

    // Equal elements are ordered by index, so no two keys ever compare equal
    // and every recursion level sees the same strict order. This costs no
    // extra comparisons: `a < b` asks for `v[a] <= v[b]`, i.e. `!(v[b] < v[a])`.
    let mut is_less_key = |a: usize, b: usize| {
        if a < b {
            !is_less(&v[b], &v[a])
        } else {
            is_less(&v[a], &v[b])
        }
    };

    let keys: Vec<usize> = (0..len).collect();
    let mut order = merge_insertion::sort_keys::<C, _>(&keys, &mut is_less_key);

    apply_permutation(v, &mut order);
}

/// Rearranges `v` so that `v[i]` becomes the old `v[order[i]]`, using swaps
/// only. `order` must be a permutation of `0..v.len()` and is reset to the
/// identity.
fn apply_permutation<T>(v: &mut [T], order: &mut [usize]) {
    debug_assert_eq!(v.len(), order.len());

    // Walk every cycle once. A visited slot is marked by pointing at itself.
    for start in 0..order.len() {
        let mut hole = start;
        loop {
            let src = std::mem::replace(&mut order[hole], hole);
            if src == start {
                break;
            }
            v.swap(hole, src);
            hole = src;
        }
    }
}
