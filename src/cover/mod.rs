//! Cover types for boolean function minimization
//!
//! This module provides [`BooleanFunction`], a boolean function over a fixed number
//! of variables represented as a cover (sum of product terms). The cover is always
//! kept as a sorted set of unique terms; that ordering is the order in which the
//! generalization pass and the redundancy filter visit terms.

// Module declarations
mod expanded;
mod fingerprint;
mod minimize;
mod redundancy;
mod terms;


// Public re-exports - core types
pub use expanded::ExpandedTermSet;
pub use fingerprint::Fingerprint;
pub use minimize::Minimizable;
pub use redundancy::remove_redundant;
pub use terms::{index_to_bits, ProductTerm, Trit};

use std::collections::BTreeSet;

/// A boolean function given as a cover of product terms
///
/// The function is 1 on an input iff at least one term matches it.
///
/// # Examples
///
/// ```
/// use truthmin::{BooleanFunction, Minimizable};
///
/// // f(a, b, c) = 1 on rows 0, 2, 3, 4, 6
/// let column = [true, false, true, true, true, false, true, false];
/// let f = BooleanFunction::from_column(&column, 3);
/// assert_eq!(f.fingerprint().to_string(), "10111010");
///
/// let minimized = f.minimize();
/// assert_eq!(minimized.fingerprint(), f.fingerprint());
/// assert!(minimized.literal_pin_count() < f.literal_pin_count());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanFunction {
    /// Number of input variables
    num_vars: usize,
    /// Sorted, de-duplicated cover
    terms: Vec<ProductTerm>,
}

impl BooleanFunction {
    /// Create the constant-0 function over `num_vars` variables
    pub fn new(num_vars: usize) -> Self {
        BooleanFunction {
            num_vars,
            terms: Vec::new(),
        }
    }

    /// Build a function from an output column
    ///
    /// Row `i` of the column becomes the fully specified term for `i` when it
    /// is 1. The column may be shorter than `2^num_vars`; missing rows are 0.
    ///
    /// # Panics
    ///
    /// Panics if the column has more than `2^num_vars` rows.
    pub fn from_column(column: &[bool], num_vars: usize) -> Self {
        assert!(
            num_vars < usize::BITS as usize && column.len() <= 1 << num_vars,
            "column of {} rows does not fit {} variables",
            column.len(),
            num_vars
        );
        let terms = column
            .iter()
            .enumerate()
            .filter(|(_, &value)| value)
            .map(|(i, _)| ProductTerm::from_index(i, num_vars))
            .collect();
        BooleanFunction { num_vars, terms }
    }

    /// Build a function from explicit terms
    ///
    /// Duplicate terms are merged.
    ///
    /// # Panics
    ///
    /// Panics if any term's width differs from `num_vars`.
    pub fn from_terms<I>(num_vars: usize, terms: I) -> Self
    where
        I: IntoIterator<Item = ProductTerm>,
    {
        let set: BTreeSet<ProductTerm> = terms.into_iter().collect();
        for term in &set {
            assert_eq!(
                term.width(),
                num_vars,
                "term {} does not have {} variables",
                term,
                num_vars
            );
        }
        BooleanFunction {
            num_vars,
            terms: set.into_iter().collect(),
        }
    }

    /// Get the number of input variables
    pub fn variable_count(&self) -> usize {
        self.num_vars
    }

    /// Get the number of rows in the full truth table (`2^n`)
    pub fn row_count(&self) -> usize {
        1 << self.num_vars
    }

    /// Get the number of terms in the cover
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// Iterate over the cover in its natural order
    pub fn terms(&self) -> impl Iterator<Item = &ProductTerm> {
        self.terms.iter()
    }

    /// Snapshot of the current cover
    pub fn cover(&self) -> BTreeSet<ProductTerm> {
        self.terms.iter().cloned().collect()
    }

    /// Total number of non-don't-care positions over all terms
    pub fn literal_pin_count(&self) -> usize {
        self.terms.iter().map(ProductTerm::literal_count).sum()
    }

    /// Evaluate the function on an input vector, most-significant variable first
    ///
    /// # Panics
    ///
    /// Panics if the input width differs from the variable count.
    pub fn evaluate(&self, input: &[bool]) -> bool {
        assert_eq!(
            input.len(),
            self.num_vars,
            "input width does not match variable count"
        );
        self.terms.iter().any(|term| term.matches(input))
    }

    /// Evaluate the function at row `index` of its truth table
    pub fn evaluate_index(&self, index: usize) -> bool {
        self.evaluate(&index_to_bits(index, self.num_vars))
    }

    /// Compute the canonical fingerprint (packed truth table)
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::from_rows((0..self.row_count()).map(|i| self.evaluate_index(i)))
    }

    /// Check functional equality with another function
    pub fn is_equivalent(&self, other: &BooleanFunction) -> bool {
        self.num_vars == other.num_vars && self.fingerprint() == other.fingerprint()
    }

    /// Restore the sorted-set invariant after terms were edited in place
    pub(crate) fn normalize(&mut self) {
        self.terms.sort();
        self.terms.dedup();
    }
}
