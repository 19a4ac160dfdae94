//! Sets of fully specified terms
//!
//! [`ExpandedTermSet`] stores every fully specified term subsumed by the terms
//! inserted into it, which turns "is this term implied by those terms" into a
//! set-containment check.

use std::collections::BTreeSet;

use super::{ProductTerm, Trit};

/// A set of fully specified product terms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedTermSet {
    terms: BTreeSet<ProductTerm>,
}

impl ExpandedTermSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert every expansion of `term`, returning how many were new
    pub fn insert(&mut self, term: &ProductTerm) -> usize {
        expand(term)
            .into_iter()
            .filter(|t| self.terms.insert(t.clone()))
            .count()
    }

    /// Remove every expansion of `term`, returning how many were present
    pub fn remove(&mut self, term: &ProductTerm) -> usize {
        expand(term)
            .iter()
            .filter(|t| self.terms.remove(*t))
            .count()
    }

    /// Check whether every expansion of `term` is in the set
    pub fn contains_all(&self, term: &ProductTerm) -> bool {
        expand(term).iter().all(|t| self.terms.contains(t))
    }

    /// Number of fully specified terms in the set
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over the stored terms in order
    pub fn iter(&self) -> impl Iterator<Item = &ProductTerm> {
        self.terms.iter()
    }
}

impl<'a> FromIterator<&'a ProductTerm> for ExpandedTermSet {
    fn from_iter<I: IntoIterator<Item = &'a ProductTerm>>(iter: I) -> Self {
        let mut set = ExpandedTermSet::new();
        for term in iter {
            set.insert(term);
        }
        set
    }
}

/// All fully specified terms subsumed by `term`
///
/// Uses an explicit worklist, so stack use does not grow with the number of
/// don't-care positions.
pub(crate) fn expand(term: &ProductTerm) -> Vec<ProductTerm> {
    let mut done = Vec::new();
    let mut pending = vec![term.clone()];
    while let Some(mut current) = pending.pop() {
        match current.trits().iter().position(|&t| t == Trit::DontCare) {
            None => done.push(current),
            Some(pos) => {
                let mut one = current.clone();
                one.trits_mut()[pos] = Trit::One;
                current.trits_mut()[pos] = Trit::Zero;
                pending.push(one);
                pending.push(current);
            }
        }
    }
    done
}
