//! Canonical packed truth tables
//!
//! A [`Fingerprint`] is the `2^n`-bit integer whose bit `2^n - 1 - i` holds the
//! function's value at input `i`. Two functions over the same variable count are
//! equal iff their fingerprints are equal.

use std::fmt;

const WORD_BITS: usize = 64;

/// Packed truth table of a boolean function
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    /// Number of rows (`2^n`)
    len: usize,
    /// Little-endian words; bit `k` of the integer is bit `k % 64` of word `k / 64`
    words: Vec<u64>,
}

impl Fingerprint {
    /// Pack a sequence of row values, row 0 first
    ///
    /// Row 0 lands in the most significant bit.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = bool>,
    {
        let values: Vec<bool> = rows.into_iter().collect();
        let len = values.len();
        let mut words = vec![0u64; len.div_ceil(WORD_BITS)];
        for (i, value) in values.into_iter().enumerate() {
            if value {
                let bit = len - 1 - i;
                words[bit / WORD_BITS] |= 1u64 << (bit % WORD_BITS);
            }
        }
        Fingerprint { len, words }
    }

    /// Number of rows in the packed table
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Value of the function at input `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`len`](Self::len).
    pub fn row(&self, index: usize) -> bool {
        assert!(index < self.len, "row {} out of range 0..{}", index, self.len);
        let bit = self.len - 1 - index;
        (self.words[bit / WORD_BITS] >> (bit % WORD_BITS)) & 1 == 1
    }

    /// Iterate over row values, row 0 first
    pub fn rows(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.row(i))
    }

    /// The packed integer, if it fits in 64 bits (functions of up to 6 variables)
    pub fn to_u64(&self) -> Option<u64> {
        match self.words.as_slice() {
            [] => Some(0),
            [word] => Some(*word),
            _ => None,
        }
    }

    /// Number of rows where the function is 1
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl fmt::Display for Fingerprint {
    /// Binary digits, most significant first (row 0 first)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.rows() {
            write!(f, "{}", if value { '1' } else { '0' })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_zero_is_most_significant() {
        let fp = Fingerprint::from_rows([true, false, false, false]);
        assert_eq!(fp.to_u64(), Some(0b1000));
        assert!(fp.row(0));
        assert!(!fp.row(3));
    }

    #[test]
    fn test_display_matches_column() {
        let column = [true, false, true, true, true, false, true, false];
        let fp = Fingerprint::from_rows(column);
        assert_eq!(fp.to_string(), "10111010");
        assert_eq!(fp.to_u64(), Some(0b1011_1010));
        assert_eq!(fp.count_ones(), 5);
    }

    #[test]
    fn test_wide_table_spans_words() {
        let mut column = vec![false; 128];
        column[0] = true;
        column[127] = true;
        let fp = Fingerprint::from_rows(column);
        assert_eq!(fp.len(), 128);
        assert_eq!(fp.to_u64(), None);
        assert!(fp.row(0));
        assert!(fp.row(127));
        assert!(!fp.row(64));
        assert_eq!(fp.count_ones(), 2);
    }
}
