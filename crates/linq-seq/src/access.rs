//! Element access: `first`, `last` and `at`.
//!
//! Every accessor comes in three tiers:
//!
//! | Tier | Example | On failure |
//! |------|---------|------------|
//! | Fallible | [`Sequence::first`] | returns [`SequenceError`] |
//! | Panicking | [`Sequence::must_first`] | panics with the error message |
//! | Defaulting | [`Sequence::first_or_default`] | returns `T::default()` |
//!
//! Predicates receive each element together with its index in the
//! sequence. [`Sequence::last_where`] scans from the end but still passes
//! the original index.

use crate::error::{Result, SequenceError};
use crate::position::Position;
use crate::sequence::Sequence;

impl<T> Sequence<T> {
    // ========================================================================
    // Fallible
    // ========================================================================

    /// Returns the first element.
    ///
    /// Fails with [`SequenceError::Empty`] on an empty sequence.
    ///
    /// ```
    /// use linq_seq::{Sequence, SequenceError};
    ///
    /// assert_eq!(Sequence::from(vec![1, 2, 3]).first(), Ok(&1));
    /// assert_eq!(Sequence::<i32>::default().first(), Err(SequenceError::Empty));
    /// ```
    pub fn first(&self) -> Result<&T> {
        self.items.first().ok_or(SequenceError::Empty)
    }

    /// Returns the first element matching `predicate`.
    ///
    /// Emptiness is checked before the predicate runs, so an empty sequence
    /// fails with [`SequenceError::Empty`] rather than
    /// [`SequenceError::NotFound`].
    pub fn first_where<P>(&self, mut predicate: P) -> Result<&T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        if self.items.is_empty() {
            return Err(SequenceError::Empty);
        }
        self.items
            .iter()
            .enumerate()
            .find(|(i, v)| predicate(*v, *i))
            .map(|(_, v)| v)
            .ok_or(SequenceError::NotFound)
    }

    /// Returns the last element.
    pub fn last(&self) -> Result<&T> {
        self.items.last().ok_or(SequenceError::Empty)
    }

    /// Returns the last element matching `predicate`.
    pub fn last_where<P>(&self, mut predicate: P) -> Result<&T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        if self.items.is_empty() {
            return Err(SequenceError::Empty);
        }
        self.items
            .iter()
            .enumerate()
            .rev()
            .find(|(i, v)| predicate(*v, *i))
            .map(|(_, v)| v)
            .ok_or(SequenceError::NotFound)
    }

    /// Returns the element at `index`.
    ///
    /// Fails with [`SequenceError::IndexOutOfRange`] if `index` is negative
    /// or not less than the length.
    pub fn at<I: Position>(&self, index: I) -> Result<&T> {
        index
            .checked_index(self.items.len())
            .map(|i| &self.items[i])
            .ok_or_else(|| SequenceError::IndexOutOfRange {
                index: index.to_i128(),
                len: self.items.len(),
            })
    }

    // ========================================================================
    // Panicking
    // ========================================================================

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn must_first(&self) -> &T {
        must("first", self.first())
    }

    /// Returns the first element matching `predicate`.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty or nothing matches.
    pub fn must_first_where<P>(&self, predicate: P) -> &T
    where
        P: FnMut(&T, usize) -> bool,
    {
        must("first_where", self.first_where(predicate))
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty.
    pub fn must_last(&self) -> &T {
        must("last", self.last())
    }

    /// Returns the last element matching `predicate`.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is empty or nothing matches.
    pub fn must_last_where<P>(&self, predicate: P) -> &T
    where
        P: FnMut(&T, usize) -> bool,
    {
        must("last_where", self.last_where(predicate))
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn must_at<I: Position>(&self, index: I) -> &T {
        must("at", self.at(index))
    }
}

impl<T: Clone + Default> Sequence<T> {
    // ========================================================================
    // Defaulting
    // ========================================================================

    /// Returns the first element, or `T::default()` if the sequence is empty.
    pub fn first_or_default(&self) -> T {
        or_default("first", self.first())
    }

    /// Returns the first element matching `predicate`, or `T::default()`.
    pub fn first_where_or_default<P>(&self, predicate: P) -> T
    where
        P: FnMut(&T, usize) -> bool,
    {
        or_default("first_where", self.first_where(predicate))
    }

    /// Returns the last element, or `T::default()` if the sequence is empty.
    pub fn last_or_default(&self) -> T {
        or_default("last", self.last())
    }

    /// Returns the last element matching `predicate`, or `T::default()`.
    pub fn last_where_or_default<P>(&self, predicate: P) -> T
    where
        P: FnMut(&T, usize) -> bool,
    {
        or_default("last_where", self.last_where(predicate))
    }

    /// Returns the element at `index`, or `T::default()` if out of range.
    pub fn at_or_default<I: Position>(&self, index: I) -> T {
        or_default("at", self.at(index))
    }
}

fn must<'a, T>(op: &'static str, result: Result<&'a T>) -> &'a T {
    match result {
        Ok(value) => value,
        Err(err) => {
            log::debug!("must_{op} failed: {err}");
            panic!("{err}")
        }
    }
}

fn or_default<T: Clone + Default>(op: &'static str, result: Result<&T>) -> T {
    match result {
        Ok(value) => value.clone(),
        Err(err) => {
            log::trace!("{op}_or_default substituting default: {err}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Sequence<i32> {
        Sequence::from(vec![1, 2, 3, 4, 5])
    }

    fn empty() -> Sequence<i32> {
        Sequence::default()
    }

    #[test]
    fn first_and_last() {
        assert_eq!(sample().first(), Ok(&1));
        assert_eq!(sample().last(), Ok(&5));
    }

    #[test]
    fn first_last_empty() {
        assert_eq!(empty().first(), Err(SequenceError::Empty));
        assert_eq!(empty().last(), Err(SequenceError::Empty));
    }

    #[test]
    fn first_where_matches() {
        assert_eq!(sample().first_where(|v, _| *v > 2), Ok(&3));
        assert_eq!(sample().first_where(|_, i| i == 1), Ok(&2));
    }

    #[test]
    fn first_where_not_found() {
        assert_eq!(
            sample().first_where(|v, _| *v > 10),
            Err(SequenceError::NotFound)
        );
    }

    #[test]
    fn empty_checked_before_predicate() {
        let mut calls = 0;
        let seq = empty();
        let result = seq.first_where(|_, _| {
            calls += 1;
            true
        });
        assert_eq!(result, Err(SequenceError::Empty));
        assert_eq!(calls, 0);
        assert_eq!(empty().last_where(|_, _| true), Err(SequenceError::Empty));
    }

    #[test]
    fn last_where_sees_original_index() {
        let mut seen = Vec::new();
        let seq = sample();
        let found = seq.last_where(|v, i| {
            seen.push(i);
            *v < 4
        });
        assert_eq!(found, Ok(&3));
        assert_eq!(seen, vec![4, 3, 2]);
    }

    #[test]
    fn last_where_not_found() {
        assert_eq!(
            sample().last_where(|v, _| *v == 0),
            Err(SequenceError::NotFound)
        );
    }

    #[test]
    fn at_in_range() {
        assert_eq!(sample().at(0), Ok(&1));
        assert_eq!(sample().at(2i32), Ok(&3));
        assert_eq!(sample().at(4u8), Ok(&5));
    }

    #[test]
    fn at_out_of_range() {
        assert_eq!(
            sample().at(5),
            Err(SequenceError::IndexOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(
            sample().at(-1),
            Err(SequenceError::IndexOutOfRange { index: -1, len: 5 })
        );
        assert_eq!(
            empty().at(0usize),
            Err(SequenceError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn must_variants_return_values() {
        let seq = sample();
        assert_eq!(*seq.must_first(), 1);
        assert_eq!(*seq.must_last(), 5);
        assert_eq!(*seq.must_at(2), 3);
        assert_eq!(*seq.must_first_where(|v, _| v % 2 == 0), 2);
        assert_eq!(*seq.must_last_where(|v, _| v % 2 == 0), 4);
    }

    #[test]
    #[should_panic(expected = "sequence is empty")]
    fn must_first_panics_on_empty() {
        empty().must_first();
    }

    #[test]
    #[should_panic(expected = "sequence is empty")]
    fn must_last_panics_on_empty() {
        empty().must_last();
    }

    #[test]
    #[should_panic(expected = "no element matches the predicate")]
    fn must_first_where_panics_when_not_found() {
        sample().must_first_where(|v, _| *v > 100);
    }

    #[test]
    #[should_panic(expected = "no element matches the predicate")]
    fn must_last_where_panics_when_not_found() {
        sample().must_last_where(|v, _| *v > 100);
    }

    #[test]
    #[should_panic(expected = "index 7 out of range")]
    fn must_at_panics_out_of_range() {
        sample().must_at(7);
    }

    #[test]
    fn default_variants() {
        assert_eq!(empty().first_or_default(), 0);
        assert_eq!(empty().last_or_default(), 0);
        assert_eq!(sample().first_or_default(), 1);
        assert_eq!(sample().last_or_default(), 5);
        assert_eq!(sample().first_where_or_default(|v, _| *v > 3), 4);
        assert_eq!(sample().first_where_or_default(|v, _| *v > 30), 0);
        assert_eq!(sample().last_where_or_default(|v, _| *v < 3), 2);
        assert_eq!(sample().last_where_or_default(|v, _| *v < 0), 0);
        assert_eq!(sample().at_or_default(1), 2);
        assert_eq!(sample().at_or_default(-3), 0);
        assert_eq!(sample().at_or_default(99), 0);
    }

    #[test]
    fn default_variant_for_structs() {
        #[derive(Debug, Clone, Default, PartialEq)]
        struct Record {
            n: i32,
        }

        let seq = Sequence::from(vec![Record { n: 1 }, Record { n: 2 }]);
        assert_eq!(seq.at_or_default(1), Record { n: 2 });
        assert_eq!(seq.at_or_default(2), Record::default());
    }
}
