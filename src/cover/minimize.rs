//! Per-term generalization pass
//!
//! This module implements the [`Minimizable`] trait for [`BooleanFunction`].
//! The pass is a local greedy heuristic: each term is widened one position at
//! a time and a change is kept only when the function's truth table is
//! unchanged. No consensus between terms is attempted.

use log::{debug, trace};

use super::{BooleanFunction, Trit};

/// Types whose covers can be generalized without changing the function
///
/// ```
/// use truthmin::{BooleanFunction, Minimizable};
///
/// let f = BooleanFunction::from_column(&[true, true, false, false], 2);
/// let g = f.minimize();
/// assert_eq!(g.num_terms(), 1);
/// assert_eq!(g.literal_pin_count(), 1);
/// // Input is unchanged
/// assert_eq!(f.literal_pin_count(), 4);
/// ```
pub trait Minimizable {
    /// Generalize the cover in place
    fn minimize_in_place(&mut self);

    /// Return a generalized copy, leaving `self` untouched
    fn minimize(&self) -> Self
    where
        Self: Clone,
    {
        let mut result = self.clone();
        result.minimize_in_place();
        result
    }
}

impl Minimizable for BooleanFunction {
    /// Visit terms in cover order and positions from the last variable to the
    /// first, replacing each literal with a don't-care when the fingerprint
    /// captured before the pass still holds.
    fn minimize_in_place(&mut self) {
        self.generalize_with(|_| {});
    }
}

impl BooleanFunction {
    /// Run the generalization pass, calling `on_step` after every position
    /// has been tried (whether the don't-care was kept or undone)
    pub(crate) fn generalize_with<F>(&mut self, mut on_step: F)
    where
        F: FnMut(&BooleanFunction),
    {
        let target = self.fingerprint();
        let pins_before = self.literal_pin_count();
        debug!(
            "generalizing {} terms over {} variables ({} pins)",
            self.terms.len(),
            self.num_vars,
            pins_before
        );

        for t in 0..self.terms.len() {
            for pos in (0..self.num_vars).rev() {
                let original = self.terms[t].trits()[pos];
                if original == Trit::DontCare {
                    continue;
                }
                self.terms[t].trits_mut()[pos] = Trit::DontCare;
                if self.fingerprint() != target {
                    self.terms[t].trits_mut()[pos] = original;
                } else {
                    trace!("term {} widened at position {}", t, pos);
                }
                on_step(self);
            }
        }

        self.normalize();
        debug!(
            "generalized to {} terms ({} -> {} pins)",
            self.terms.len(),
            pins_before,
            self.literal_pin_count()
        );
    }
}
