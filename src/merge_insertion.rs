use crate::chain::MainChain;
use crate::jacobsthal::probe_order;

/// Two adjacent elements of one level, as local positions into that level's
/// keys, with `!is_less(big, small)`.
#[derive(Copy, Clone, Debug)]
struct Pair {
    small: usize,
    big: usize,
}

// Ford-Johnson merge-insertion, from "A Tournament Problem" by Lester R. Ford
// and Selmer M. Johnson, as described in TAOCP volume 3, section 5.3.1.
//
// Every level works on a slice of keys. A key is an opaque index into the
// caller's data, compared only through `is_less`. The result is the list of
// local positions into `keys` in ascending key order, so a level never needs
// to know which keys its caller handed it, and the caller can map positions
// back to its own pairs without searching.
//
// The level pairs up adjacent keys with one comparison each and recursively
// sorts the bigger halves. The main chain then holds the sorted bigs
// `b0 <= b1 <= ... <= b(m-1)`. Every small `a(i)` is known to be `<= b(i)`,
// so it only has to be searched for in the part of the chain in front of
// `b(i)`. `a0` has nothing in front of `b0` and is placed without comparing.
// The remaining smalls follow `probe_order`, which keeps each of those prefixes
// at `2^k - 1` elements, the sizes a binary search handles without wasting a
// comparison. An odd key out has no big to bound it and is searched in the
// whole chain when its turn comes, taking index `m` in the probe order.
//
// The depth of recursion is `ceil(log2(len))` as every level halves the keys.
pub(crate) fn sort_keys<C, F>(keys: &[usize], is_less: &mut F) -> Vec<usize>
where
    C: MainChain,
    F: FnMut(usize, usize) -> bool,
{
    let len = keys.len();
    if len < 2 {
        return (0..len).collect();
    }

    let (pairs, straggler) = make_pairs(keys, is_less);

    log::trace!(
        "merge-insertion level: {len} keys, {} pairs, straggler: {}",
        pairs.len(),
        straggler.is_some()
    );

    // Recursively sort the pairs by their big key. The recursive call returns
    // pair indices, which reorders the pairs so that `pairs[i].big` is the
    // i-th smallest big.
    let bigs: Vec<usize> = pairs.iter().map(|pair| keys[pair.big]).collect();
    let pairs: Vec<Pair> = sort_keys::<C, F>(&bigs, is_less)
        .into_iter()
        .map(|rank| pairs[rank])
        .collect();

    let mut chain = C::with_capacity(len);
    chain.push(pairs[0].small);
    for pair in &pairs {
        chain.push(pair.big);
    }

    // Current chain position of every big, ascending by pair index.
    let mut big_positions: Vec<usize> = (1..=pairs.len()).collect();

    let pending = pairs.len() + usize::from(straggler.is_some());
    for idx in probe_order(pending) {
        if idx == 0 {
            // a0 was seeded in front of b0 above.
            continue;
        }

        let (small, bound) = match straggler {
            Some(straggler) if idx == pairs.len() => (straggler, chain.len()),
            _ => (pairs[idx].small, big_positions[idx]),
        };

        let at = bounded_search(&chain, keys, small, bound, is_less);
        chain.insert(at, small);
        shift_positions(&mut big_positions, at);
    }

    debug_assert_eq!(chain.len(), len);
    chain.into_vec()
}

/// Pairs `keys[2i]` with `keys[2i + 1]`, one comparison per pair. If the second
/// key is not less than the first the first one becomes `small`, so equal keys
/// keep their input order within a pair. Returns the odd key out as well.
fn make_pairs<F>(keys: &[usize], is_less: &mut F) -> (Vec<Pair>, Option<usize>)
where
    F: FnMut(usize, usize) -> bool,
{
    let len = keys.len();
    let pairs = (0..len / 2)
        .map(|i| {
            let (first, second) = (2 * i, 2 * i + 1);
            if is_less(keys[second], keys[first]) {
                Pair {
                    small: second,
                    big: first,
                }
            } else {
                Pair {
                    small: first,
                    big: second,
                }
            }
        })
        .collect();
    let straggler = (len % 2 == 1).then(|| len - 1);

    (pairs, straggler)
}

/// Finds the insertion point of `item` among the first `bound` elements of
/// `chain`, which must be sorted. Returns the first position whose element is
/// not less than `item`, so `item` lands in front of equal keys.
///
/// Searching `bound` elements costs at most `ceil(log2(bound + 1))`
/// comparisons.
#[inline]
fn bounded_search<C, F>(
    chain: &C,
    keys: &[usize],
    item: usize,
    bound: usize,
    is_less: &mut F,
) -> usize
where
    C: MainChain,
    F: FnMut(usize, usize) -> bool,
{
    debug_assert!(bound <= chain.len());

    // Candidate range is `left..right`.
    let (mut left, mut right) = (0, bound);
    while left < right {
        let mid = left + (right - left) / 2;
        if is_less(keys[chain.get(mid)], keys[item]) {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    left
}

/// Accounts for an insertion at chain position `at`: every big at or after
/// `at` moved one position towards the end.
#[inline]
fn shift_positions(big_positions: &mut [usize], at: usize) {
    // Bigs sit in the chain in pair order, so the affected ones form a suffix.
    let first = big_positions.partition_point(|&pos| pos < at);
    for pos in &mut big_positions[first..] {
        *pos += 1;
    }
}
