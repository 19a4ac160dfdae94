//! Removal of terms implied by the rest of a cover
//!
//! The filter is a single forward pass in cover order. A term found redundant
//! is excluded from every later check, so when two terms imply each other the
//! one visited first survives.

use log::debug;
use std::collections::BTreeSet;

use super::{BooleanFunction, ExpandedTermSet, ProductTerm};

/// Return a copy of `function` without terms implied by the remaining cover
///
/// # Examples
///
/// ```
/// use truthmin::{remove_redundant, BooleanFunction, ProductTerm, Trit};
///
/// let wide = ProductTerm::new(vec![Trit::DontCare, Trit::One]);
/// let narrow = ProductTerm::new(vec![Trit::One, Trit::One]);
/// let f = BooleanFunction::from_terms(2, [wide.clone(), narrow]);
///
/// let g = remove_redundant(&f);
/// assert_eq!(g.terms().collect::<Vec<_>>(), vec![&wide]);
/// ```
pub fn remove_redundant(function: &BooleanFunction) -> BooleanFunction {
    let mut good: Vec<ProductTerm> = Vec::new();
    let mut bad: BTreeSet<&ProductTerm> = BTreeSet::new();

    for checked in function.terms() {
        let others: ExpandedTermSet = function
            .terms()
            .filter(|other| *other != checked && !bad.contains(other))
            .collect();
        if others.contains_all(checked) {
            debug!("dropping redundant term {}", checked);
            bad.insert(checked);
        } else {
            good.push(checked.clone());
        }
    }

    BooleanFunction::from_terms(function.variable_count(), good)
}
