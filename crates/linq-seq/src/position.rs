//! Integer positions for indexing and counting.
//!
//! [`Position`] lets [`Sequence::at`](crate::Sequence::at),
//! [`Sequence::skip`](crate::Sequence::skip) and
//! [`Sequence::take`](crate::Sequence::take) accept any primitive integer,
//! including negative signed values, which are out of range for `at` and
//! clamp to zero for `skip`/`take`.

/// A primitive integer usable as an index or element count.
pub trait Position: Copy {
    /// Widens this value losslessly.
    fn to_i128(self) -> i128;

    /// Returns the index as `usize` if it lies in `[0, len)`.
    fn checked_index(self, len: usize) -> Option<usize> {
        let index = self.to_i128();
        if index < 0 || index >= len as i128 {
            None
        } else {
            Some(index as usize)
        }
    }

    /// Clamps this value into `[0, len]`.
    fn clamp_count(self, len: usize) -> usize {
        self.to_i128().clamp(0, len as i128) as usize
    }
}

impl Position for i8 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for i16 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for i32 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for i64 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for isize {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for u8 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for u16 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for u32 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for u64 {
    fn to_i128(self) -> i128 {
        self as i128
    }
}

impl Position for usize {
    fn to_i128(self) -> i128 {
        self as i128
    }
}
