//! Numeric aggregation over a caller-supplied projection.
//!
//! Each operation takes a selector mapping `(element, index)` to an `f64`.
//! [`Sequence::max`] and [`Sequence::min`] return the *element* that
//! produced the extreme projection, not the projected number.

use std::cmp::Ordering;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Sums the projected values. Returns `0.0` for an empty sequence.
    pub fn sum<S>(&self, mut selector: S) -> f64
    where
        S: FnMut(&T, usize) -> f64,
    {
        self.items
            .iter()
            .enumerate()
            .map(|(i, v)| selector(v, i))
            .fold(0.0, |acc, x| acc + x)
    }

    /// Averages the projected values. Returns `0.0` for an empty sequence.
    ///
    /// ```
    /// use linq_seq::Sequence;
    ///
    /// let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
    /// assert_eq!(seq.average(|v, _| *v as f64), 3.0);
    /// assert_eq!(Sequence::<i32>::default().average(|v, _| *v as f64), 0.0);
    /// ```
    pub fn average<S>(&self, selector: S) -> f64
    where
        S: FnMut(&T, usize) -> f64,
    {
        if self.items.is_empty() {
            return 0.0;
        }
        self.sum(selector) / self.items.len() as f64
    }

    /// Index of the element whose projection compares as `wins` against all
    /// others.
    ///
    /// The first non-NaN projection seeds the extreme; later elements replace
    /// it only when their projection compares strictly as `wins`, so ties keep
    /// the earliest element. If every projection is NaN the first element is
    /// returned.
    fn extreme_index<S>(&self, mut selector: S, wins: Ordering) -> Option<usize>
    where
        S: FnMut(&T, usize) -> f64,
    {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.items.iter().enumerate() {
            let projected = selector(v, i);
            let replace = match best {
                None => true,
                Some((_, current)) if current.is_nan() => !projected.is_nan(),
                Some((_, current)) => projected.partial_cmp(&current) == Some(wins),
            };
            if replace {
                best = Some((i, projected));
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<T: Clone + Default> Sequence<T> {
    /// Returns the element with the largest projection.
    ///
    /// Ties resolve to the earliest element. Returns `T::default()` for an
    /// empty sequence.
    ///
    /// ```
    /// use linq_seq::Sequence;
    ///
    /// let words = Sequence::from(vec!["kiwi", "banana", "cherry"]);
    /// assert_eq!(words.max(|w, _| w.len() as f64), "banana");
    /// ```
    pub fn max<S>(&self, selector: S) -> T
    where
        S: FnMut(&T, usize) -> f64,
    {
        self.extreme_index(selector, Ordering::Greater)
            .map(|i| self.items[i].clone())
            .unwrap_or_default()
    }

    /// Returns the element with the smallest projection.
    ///
    /// Ties resolve to the earliest element. Returns `T::default()` for an
    /// empty sequence.
    pub fn min<S>(&self, selector: S) -> T
    where
        S: FnMut(&T, usize) -> f64,
    {
        self.extreme_index(selector, Ordering::Less)
            .map(|i| self.items[i].clone())
            .unwrap_or_default()
    }
}
