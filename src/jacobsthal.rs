use core::iter;

/// Iterator over the Jacobsthal numbers `0, 1, 1, 3, 5, 11, 21, 43, ...`,
/// defined by `J(0) = 0`, `J(1) = 1` and `J(k) = J(k - 1) + 2 * J(k - 2)`.
///
/// Iteration ends once the next term no longer fits in a `usize`.
#[derive(Clone, Debug)]
pub struct Jacobsthal {
    state: Option<(usize, usize)>,
}

impl Jacobsthal {
    pub const fn new() -> Self {
        Self {
            state: Some((0, 1)),
        }
    }
}

impl Default for Jacobsthal {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Jacobsthal {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        let (curr, next) = self.state?;
        self.state = curr
            .checked_mul(2)
            .and_then(|double| double.checked_add(next))
            .map(|after| (next, after));
        Some(curr)
    }
}

/// Returns the order in which the `n` pending elements of one merge-insertion
/// level are inserted into the main chain.
///
/// Consecutive Jacobsthal numbers `J(i - 1) < J(i)` delimit blocks of pair
/// indices `J(i - 1)..J(i)`, which are emitted from highest to lowest. The
/// blocks themselves are emitted in increasing order, and the last one is
/// clamped to `n`. For `n = 5` this gives `0, 2, 1, 4, 3`.
///
/// Inserting the highest index of a block first means every element of the
/// block is searched in a prefix of at most `J(i) + J(i - 1) - 1 = 2^(i-1) - 1`
/// elements, which a binary search resolves in exactly `i - 1` comparisons.
/// Index 0 is always first; its bound is the single element it was paired
/// with, so callers place it without comparing.
pub fn probe_order(n: usize) -> impl Iterator<Item = usize> {
    // Chaining `n` covers counts beyond the last representable Jacobsthal
    // number.
    let uppers = Jacobsthal::new()
        .skip(1)
        .map(move |j| j.min(n))
        .chain(iter::once(n));

    uppers
        .scan(0, move |lower, upper| {
            if *lower == n {
                return None;
            }
            let block = *lower..upper;
            *lower = upper;
            Some(block.rev())
        })
        .flatten()
}
