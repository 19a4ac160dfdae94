//! Build-and-extend minimization of output columns
//!
//! An output column of length `L` describes a function over
//! `n = max(1, ceil(log2 L))` variables whose last `2^n - L` rows were never
//! observed. The minimizer tries every assignment to those rows, generalizes
//! each candidate, and keeps the one with the fewest literal pins.
//!
//! The search is exponential in the number of missing rows. Inputs are
//! expected to leave only a handful of rows unobserved.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::debug;
use rayon::prelude::*;

use crate::cover::{index_to_bits, remove_redundant, BooleanFunction, Minimizable};
use crate::truth_table::{TruthTable, TruthTableError};

/// Configuration for column minimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Drop terms implied by the rest of the cover after generalization
    pub remove_redundant: bool,
    /// Evaluate extension candidates on the rayon thread pool
    pub parallel_extension: bool,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            remove_redundant: true,
            parallel_extension: false,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }
}

/// Outcome of minimizing one output column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimized {
    /// The cheapest cover found
    pub function: BooleanFunction,
    /// Number of rows supplied in the column
    pub observed_rows: usize,
    /// Number of build-and-generalize runs performed
    pub candidates_evaluated: usize,
    /// Assignment chosen for the unobserved rows (0 = all zeros)
    pub extension: usize,
}

impl Minimized {
    /// Number of variables of the minimized function
    pub fn variable_count(&self) -> usize {
        self.function.variable_count()
    }

    /// Number of rows that were filled in by the extension search
    pub fn missing_rows(&self) -> usize {
        self.function.row_count() - self.observed_rows
    }
}

/// Number of variables needed for a column of `rows` rows
///
/// This is `ceil(log2 rows)`, but never less than 1.
///
/// ```
/// use truthmin::variable_count_for;
///
/// assert_eq!(variable_count_for(1), 1);
/// assert_eq!(variable_count_for(4), 2);
/// assert_eq!(variable_count_for(5), 3);
/// ```
pub fn variable_count_for(rows: usize) -> usize {
    if rows <= 2 {
        1
    } else {
        (usize::BITS - (rows - 1).leading_zeros()) as usize
    }
}

/// Minimize a column over `num_vars` variables, then apply the configured filters
///
/// # Panics
///
/// Panics if the column has more than `2^num_vars` rows.
///
/// # Examples
///
/// ```
/// use truthmin::{minimize_column, MinimizerConfig};
///
/// // Rows 0..=2 observed, row 3 free
/// let result = minimize_column(&[true, true, false], 2, &MinimizerConfig::default());
/// assert_eq!(result.candidates_evaluated, 2);
/// assert_eq!(result.function.literal_pin_count(), 1);
/// ```
pub fn minimize_column(column: &[bool], num_vars: usize, config: &MinimizerConfig) -> Minimized {
    let mut result = extend_and_minimize(column, num_vars, config);
    if config.remove_redundant {
        result.function = remove_redundant(&result.function);
    }
    result
}

/// Minimize a column with the variable count derived from its length
pub fn minimize_output(column: &[bool], config: &MinimizerConfig) -> Minimized {
    minimize_column(column, variable_count_for(column.len()), config)
}

/// Minimize every output function of a truth table, in column order
///
/// # Errors
///
/// Returns an error when the table cannot be transposed into columns.
pub fn minimize_table(
    table: &TruthTable,
    config: &MinimizerConfig,
) -> Result<Vec<Minimized>, TruthTableError> {
    Ok(table
        .columns()?
        .iter()
        .map(|column| minimize_output(column, config))
        .collect())
}

/// Build, extend and generalize a column without the redundancy filter
///
/// Candidate 0 is the column with unobserved rows set to 0. Candidate `i`
/// appends the `2^n - L` bit expansion of `i`, most significant bit first.
/// A candidate replaces the best so far only with strictly fewer pins, so
/// ties go to the lowest index in both the serial and parallel searches.
///
/// # Panics
///
/// Panics if the column has more than `2^num_vars` rows.
pub fn extend_and_minimize(
    column: &[bool],
    num_vars: usize,
    config: &MinimizerConfig,
) -> Minimized {
    assert!(
        num_vars < usize::BITS as usize && column.len() <= 1 << num_vars,
        "column of {} rows does not fit {} variables",
        column.len(),
        num_vars
    );
    let missing = (1usize << num_vars) - column.len();
    assert!(
        missing < usize::BITS as usize,
        "{} unobserved rows is too many to search",
        missing
    );
    let candidates = 1usize << missing;
    debug!(
        "column of {} rows over {} variables: {} unobserved, {} candidates",
        column.len(),
        num_vars,
        missing,
        candidates
    );

    let builds = AtomicUsize::new(0);
    let build = |extension: usize| -> (usize, BooleanFunction) {
        builds.fetch_add(1, Ordering::Relaxed);
        let mut rows = column.to_vec();
        if extension != 0 {
            rows.extend(index_to_bits(extension, missing));
        }
        let mut function = BooleanFunction::from_column(&rows, num_vars);
        function.minimize_in_place();
        (extension, function)
    };

    let (extension, function) = if config.parallel_extension && candidates > 1 {
        (0..candidates)
            .into_par_iter()
            .map(&build)
            .min_by_key(|(index, f)| (f.literal_pin_count(), *index))
            .unwrap_or_else(|| build(0))
    } else {
        let mut best = build(0);
        let mut best_pins = best.1.literal_pin_count();
        for index in 1..candidates {
            let candidate = build(index);
            let pins = candidate.1.literal_pin_count();
            if pins < best_pins {
                debug!(
                    "extension {} improves cover: {} -> {} pins",
                    index, best_pins, pins
                );
                best_pins = pins;
                best = candidate;
            }
        }
        best
    };

    Minimized {
        function,
        observed_rows: column.len(),
        candidates_evaluated: builds.into_inner(),
        extension,
    }
}
