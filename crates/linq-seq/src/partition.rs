//! Sub-sequence extraction: `skip`, `take` and their predicate forms.
//!
//! Counts are clamped into `[0, len]`; these operations never fail.

use crate::position::Position;
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Consuming form of [`skip`](Self::skip); places no bound on `T`.
    pub fn into_skip<N: Position>(mut self, n: N) -> Sequence<T> {
        let n = n.clamp_count(self.items.len());
        self.items.drain(..n);
        self
    }

    /// Consuming form of [`take`](Self::take); places no bound on `T`.
    pub fn into_take<N: Position>(mut self, n: N) -> Sequence<T> {
        let n = n.clamp_count(self.items.len());
        self.items.truncate(n);
        self
    }
}

impl<T: Clone> Sequence<T> {
    /// Drops the first `n` elements.
    ///
    /// Negative counts behave as 0 and counts past the end yield an empty
    /// sequence.
    ///
    /// ```
    /// use linq_seq::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(seq.skip(2).to_vec(), vec![3, 4, 5]);
    /// assert_eq!(seq.skip(-1).to_vec(), vec![1, 2, 3, 4, 5]);
    /// assert!(seq.skip(5).is_empty());
    /// ```
    pub fn skip<N: Position>(&self, n: N) -> Sequence<T> {
        let n = n.clamp_count(self.items.len());
        Sequence::new(self.items[n..].to_vec())
    }

    /// Drops elements from the start while `predicate` holds.
    pub fn skip_while<P>(&self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        let start = self
            .items
            .iter()
            .enumerate()
            .position(|(i, v)| !predicate(v, i))
            .unwrap_or(self.items.len());
        Sequence::new(self.items[start..].to_vec())
    }

    /// Keeps the first `n` elements, clamped like [`skip`](Self::skip).
    pub fn take<N: Position>(&self, n: N) -> Sequence<T> {
        let n = n.clamp_count(self.items.len());
        Sequence::new(self.items[..n].to_vec())
    }

    /// Keeps elements from the start while `predicate` holds.
    pub fn take_while<P>(&self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        let end = self
            .items
            .iter()
            .enumerate()
            .position(|(i, v)| !predicate(v, i))
            .unwrap_or(self.items.len());
        Sequence::new(self.items[..end].to_vec())
    }

    /// Returns a copy of this sequence, or a single `T::default()` if empty.
    pub fn default_if_empty(&self) -> Sequence<T>
    where
        T: Default,
    {
        self.default_if_empty_with(T::default())
    }

    /// Returns a copy of this sequence, or a single `value` if empty.
    pub fn default_if_empty_with(&self, value: T) -> Sequence<T> {
        if self.items.is_empty() {
            Sequence::new(vec![value])
        } else {
            self.clone()
        }
    }
}
