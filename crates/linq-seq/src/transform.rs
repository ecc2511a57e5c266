//! Whole-sequence transforms: `reverse`, `distinct` and `sequence_equal`.

use std::collections::HashSet;
use std::hash::Hash;

use crate::sequence::Sequence;

impl<T: Clone> Sequence<T> {
    /// Returns a new sequence with the element order inverted.
    pub fn reverse(&self) -> Sequence<T> {
        self.items.iter().rev().cloned().collect()
    }
}

impl<T: Clone + Eq + Hash> Sequence<T> {
    /// Returns the first occurrence of each distinct element, in first-seen
    /// order.
    ///
    /// ```
    /// use linq_seq::Sequence;
    ///
    /// let seq = Sequence::from(vec![3, 1, 3, 2, 1]);
    /// assert_eq!(seq.distinct().to_vec(), vec![3, 1, 2]);
    /// ```
    pub fn distinct(&self) -> Sequence<T> {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items
            .iter()
            .filter(|v| seen.insert(*v))
            .cloned()
            .collect()
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if both sequences have the same length and equal
    /// elements at every position.
    pub fn sequence_equal(&self, other: &Sequence<T>) -> bool {
        self.items.len() == other.items.len()
            && self.items.iter().zip(&other.items).all(|(a, b)| a == b)
    }
}
