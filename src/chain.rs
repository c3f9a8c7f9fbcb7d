use std::collections::VecDeque;

/// Ordered, indexable, insertable storage for the main chain of a
/// merge-insertion level.
///
/// The chain only ever holds element indices, never the elements themselves,
/// so positions stay meaningful across reallocations of the backing buffer.
/// The algorithm is identical for every implementation, only the cost of
/// `insert` differs: `Vec` shifts the whole tail, `VecDeque` shifts whichever
/// side of the insertion point is shorter.
pub trait MainChain {
    /// Name used when reporting timings per backing structure.
    const NAME: &'static str;

    fn with_capacity(capacity: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element index stored at `position`.
    fn get(&self, position: usize) -> usize;

    fn push(&mut self, index: usize);

    /// Inserts `index` at `position`, shifting everything at or after
    /// `position` one place towards the end.
    fn insert(&mut self, position: usize, index: usize);

    fn into_vec(self) -> Vec<usize>;
}

impl MainChain for Vec<usize> {
    const NAME: &'static str = "Vec";

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Vec::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, position: usize) -> usize {
        self[position]
    }

    #[inline]
    fn push(&mut self, index: usize) {
        Vec::push(self, index);
    }

    #[inline]
    fn insert(&mut self, position: usize, index: usize) {
        Vec::insert(self, position, index);
    }

    #[inline]
    fn into_vec(self) -> Vec<usize> {
        self
    }
}

impl MainChain for VecDeque<usize> {
    const NAME: &'static str = "VecDeque";

    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, position: usize) -> usize {
        self[position]
    }

    #[inline]
    fn push(&mut self, index: usize) {
        self.push_back(index);
    }

    #[inline]
    fn insert(&mut self, position: usize, index: usize) {
        VecDeque::insert(self, position, index);
    }

    #[inline]
    fn into_vec(self) -> Vec<usize> {
        Vec::from(self)
    }
}
