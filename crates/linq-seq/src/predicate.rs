//! Predicate evaluation: `filter`, `all`, `any`, `contains` and `count`.

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` on an empty sequence.
    pub fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.items.iter().enumerate().all(|(i, v)| predicate(v, i))
    }

    /// Returns `true` if the sequence has at least one element.
    pub fn any(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns `true` if at least one element satisfies `predicate`.
    pub fn any_where<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.items.iter().enumerate().any(|(i, v)| predicate(v, i))
    }

    /// Returns the number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Consuming form of [`filter`](Self::filter); places no bound on `T`.
    pub fn into_filter<P>(self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.items
            .into_iter()
            .enumerate()
            .filter(|(i, v)| predicate(v, *i))
            .map(|(_, v)| v)
            .collect()
    }

    /// Returns the number of elements satisfying `predicate`.
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, v)| predicate(*v, *i))
            .count()
    }
}

impl<T: Clone> Sequence<T> {
    /// Returns the elements satisfying `predicate`, in their original order.
    ///
    /// ```
    /// use linq_seq::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(seq.filter(|v, _| v % 2 == 0).to_vec(), vec![2, 4]);
    /// ```
    #[doc(alias = "where")]
    pub fn filter<P>(&self, mut predicate: P) -> Sequence<T>
    where
        P: FnMut(&T, usize) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(i, v)| predicate(*v, *i))
            .map(|(_, v)| v.clone())
            .collect()
    }
}

impl<T: PartialEq> Sequence<T> {
    /// Returns `true` if some element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}
