//! The [`Sequence`] wrapper type: construction, introspection and conversion.
//!
//! Query operations are implemented in sibling modules, each adding an
//! `impl` block grouped by the capability it needs from `T`.

/// An ordered, eagerly evaluated sequence of elements.
///
/// A `Sequence` owns its elements and never mutates them in place: every
/// transforming operation returns a new, independent `Sequence`.
///
/// # Example
///
/// ```
/// use linq_seq::Sequence;
///
/// let seq = Sequence::from(vec![1, 2, 3, 4, 5]);
/// let evens = seq.filter(|v, _| v % 2 == 0);
///
/// assert_eq!(evens.to_vec(), vec![2, 4]);
/// assert_eq!(seq.len(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Wraps an existing vector without copying.
    pub fn new(items: Vec<T>) -> Self {
        Sequence { items }
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the elements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the underlying ordered collection.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the sequence into its underlying vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Returns a copy of the underlying ordered collection.
    #[doc(alias = "to_collection")]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence::new(items)
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Sequence::new(items.to_vec())
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Sequence::new(Vec::from(items))
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(seq: Sequence<T>) -> Self {
        seq.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}
