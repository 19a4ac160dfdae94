//! Trit and product term types for boolean function covers
//!
//! This module provides the atomic data types used by covers:
//! - [`Trit`]: A single literal position (0, 1, or don't-care)
//! - [`ProductTerm`]: A fixed-width conjunction of trits

use std::fmt;

/// One position of a product term
///
/// The derived ordering (`Zero < One < DontCare`) is the ordering used when
/// terms are kept in sorted sets, so it determines the iteration order of
/// every cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Trit {
    /// The variable must be 0
    Zero,
    /// The variable must be 1
    One,
    /// The variable may be 0 or 1
    DontCare,
}

impl Trit {
    /// Check whether this trit accepts the given input bit
    #[inline]
    pub fn matches(self, bit: bool) -> bool {
        match self {
            Trit::Zero => !bit,
            Trit::One => bit,
            Trit::DontCare => true,
        }
    }

    /// Check whether this trit is a literal (not a don't-care)
    #[inline]
    pub fn is_literal(self) -> bool {
        self != Trit::DontCare
    }

    /// Character used when printing terms: `0`, `1` or `X`
    pub fn as_char(self) -> char {
        match self {
            Trit::Zero => '0',
            Trit::One => '1',
            Trit::DontCare => 'X',
        }
    }
}

impl From<bool> for Trit {
    fn from(bit: bool) -> Self {
        if bit {
            Trit::One
        } else {
            Trit::Zero
        }
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A product term: one trit per variable, most-significant variable first
///
/// Terms compare lexicographically by position, so they can be used as keys
/// in ordered sets and maps.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductTerm(Vec<Trit>);

impl ProductTerm {
    /// Create a term from its trits
    pub fn new(trits: Vec<Trit>) -> Self {
        ProductTerm(trits)
    }

    /// Create the fully specified term for `index` over `width` variables
    ///
    /// # Examples
    ///
    /// ```
    /// use truthmin::{ProductTerm, Trit};
    ///
    /// let term = ProductTerm::from_index(6, 3);
    /// assert_eq!(term.trits(), &[Trit::One, Trit::One, Trit::Zero]);
    /// ```
    pub fn from_index(index: usize, width: usize) -> Self {
        ProductTerm(
            index_to_bits(index, width)
                .into_iter()
                .map(Trit::from)
                .collect(),
        )
    }

    /// Number of variables covered by this term
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Get the trits of this term
    pub fn trits(&self) -> &[Trit] {
        &self.0
    }

    pub(crate) fn trits_mut(&mut self) -> &mut [Trit] {
        &mut self.0
    }

    /// Number of non-don't-care positions
    pub fn literal_count(&self) -> usize {
        self.0.iter().filter(|t| t.is_literal()).count()
    }

    /// Check whether the term has no don't-care positions
    pub fn is_fully_specified(&self) -> bool {
        self.0.iter().all(|t| t.is_literal())
    }

    /// Check whether this term accepts the given input vector
    ///
    /// Every non-don't-care position must agree with the input.
    pub fn matches(&self, input: &[bool]) -> bool {
        debug_assert_eq!(self.0.len(), input.len());
        self.0.iter().zip(input).all(|(t, &bit)| t.matches(bit))
    }
}

impl From<Vec<Trit>> for ProductTerm {
    fn from(trits: Vec<Trit>) -> Self {
        ProductTerm(trits)
    }
}

impl From<&[bool]> for ProductTerm {
    fn from(bits: &[bool]) -> Self {
        ProductTerm(bits.iter().copied().map(Trit::from).collect())
    }
}

impl fmt::Display for ProductTerm {
    /// Renders as `{1^X^0}`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, trit) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "^")?;
            }
            write!(f, "{}", trit)?;
        }
        write!(f, "}}")
    }
}

/// Expand `index` into `width` bits, most-significant first
///
/// Bits above `width` are ignored.
pub fn index_to_bits(index: usize, width: usize) -> Vec<bool> {
    (0..width)
        .rev()
        .map(|pos| pos < usize::BITS as usize && (index >> pos) & 1 == 1)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_to_bits_msb_first() {
        assert_eq!(index_to_bits(6, 3), vec![true, true, false]);
        assert_eq!(index_to_bits(1, 4), vec![false, false, false, true]);
        assert_eq!(index_to_bits(5, 0), Vec::<bool>::new());
    }

    #[test]
    fn test_trit_ordering() {
        assert!(Trit::Zero < Trit::One);
        assert!(Trit::One < Trit::DontCare);
    }

    #[test]
    fn test_term_ordering_is_lexicographic() {
        let a = ProductTerm::new(vec![Trit::Zero, Trit::DontCare]);
        let b = ProductTerm::new(vec![Trit::One, Trit::Zero]);
        let c = ProductTerm::new(vec![Trit::One, Trit::DontCare]);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_term_matches() {
        let term = ProductTerm::new(vec![Trit::One, Trit::DontCare, Trit::Zero]);
        assert!(term.matches(&[true, false, false]));
        assert!(term.matches(&[true, true, false]));
        assert!(!term.matches(&[false, true, false]));
        assert!(!term.matches(&[true, true, true]));
    }

    #[test]
    fn test_literal_count() {
        let term = ProductTerm::new(vec![Trit::One, Trit::DontCare, Trit::Zero]);
        assert_eq!(term.literal_count(), 2);
        assert!(!term.is_fully_specified());
        assert!(ProductTerm::from_index(3, 2).is_fully_specified());
    }

    #[test]
    fn test_term_display() {
        let term = ProductTerm::new(vec![Trit::One, Trit::DontCare, Trit::Zero]);
        assert_eq!(term.to_string(), "{1^X^0}");
    }
}
