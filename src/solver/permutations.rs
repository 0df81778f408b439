//! Indexed permutations
//!
//! Permutation `k` of `n` items is decoded from `k` written in the factorial
//! number system, so index order is lexicographic order of item positions.
//! Any permutation can be produced independently of the others, which lets
//! the parallel search split the index range without materialising `n!`
//! lists up front.

/// All orderings of a slice, addressable by index
#[derive(Debug, Clone)]
pub struct Permutations<'a, T> {
    items: &'a [T],
    /// `factorials[k] == k!`
    factorials: Vec<usize>,
}

impl<'a, T: Clone> Permutations<'a, T> {
    /// Returns `None` if `items.len()!` overflows `usize`
    #[must_use]
    pub fn new(items: &'a [T]) -> Option<Self> {
        let mut factorials = Vec::with_capacity(items.len() + 1);
        factorials.push(1_usize);
        for k in 1..=items.len() {
            let next = factorials[k - 1].checked_mul(k)?;
            factorials.push(next);
        }
        Some(Self { items, factorials })
    }

    /// Number of permutations, `n!`
    #[must_use]
    pub fn total(&self) -> usize {
        self.factorials[self.items.len()]
    }

    /// The `index`-th permutation in lexicographic order of positions
    ///
    /// # Panics
    /// Panics in debug mode if `index >= self.total()`
    #[must_use]
    pub fn nth(&self, mut index: usize) -> Vec<T> {
        debug_assert!(index < self.total(), "permutation index out of range");

        let mut pool: Vec<&T> = self.items.iter().collect();
        let mut order = Vec::with_capacity(pool.len());
        while !pool.is_empty() {
            let block = self.factorials[pool.len() - 1];
            let pick = index / block;
            index %= block;
            order.push(pool.remove(pick).clone());
        }
        order
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec<T>> + '_ {
        (0..self.total()).map(|i| self.nth(i))
    }
}
