//! # truthmin
//!
//! Minimization of incompletely specified boolean functions given as truth
//! tables, and Karnaugh map rendering of a selected output.
//!
//! ## Overview
//!
//! A function is held as a cover of product terms ([`BooleanFunction`]). The
//! minimizer is a greedy per-term heuristic, not an exact two-level minimizer:
//!
//! 1. Build a cover from the 1-rows of an output column.
//! 2. Widen each term towards don't-cares while the function's
//!    [`Fingerprint`] stays the same ([`Minimizable`]).
//! 3. When the column length is not a power of two, try every assignment of
//!    the unobserved rows and keep the cover with the fewest literal pins.
//! 4. Drop terms implied by the rest of the cover ([`remove_redundant`]).
//!
//! ```
//! use truthmin::{minimize_table, MinimizerConfig, TruthTable, TruthTableReader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = TruthTable::from_string("00\n01\n10\n11\n")?;
//! let results = minimize_table(&table, &MinimizerConfig::default())?;
//!
//! for result in &results {
//!     let f = &result.function;
//!     println!("{} terms, {} pins", f.num_terms(), f.literal_pin_count());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Karnaugh maps
//!
//! [`karnaugh::KarnaughMap`] lays out one output of a five-variable table on a
//! fixed 8×4 Gray-coded grid:
//!
//! ```
//! use truthmin::karnaugh::KarnaughMap;
//! use truthmin::{TruthTable, TruthTableReader};
//!
//! let table = TruthTable::from_string("1\n0\n1\n1\n").unwrap();
//! let map = KarnaughMap::from_table(&table, 0);
//! print!("{}", map.to_string_with_header("  "));
//! ```
//!
//! ## Logging
//!
//! Progress is reported through the [`log`] facade at `debug` and `trace`
//! level. The command-line tools (feature `cli`) install `env_logger`, so
//! `RUST_LOG=truthmin=debug` shows the search.

// Public modules
pub mod cover;
pub mod error;
pub mod karnaugh;
pub mod minimizer;
pub mod report;
pub mod truth_table;

// Re-export high-level public API
pub use cover::{
    index_to_bits, remove_redundant, BooleanFunction, ExpandedTermSet, Fingerprint, Minimizable,
    ProductTerm, Trit,
};
pub use error::{TruthTableError, TruthTableReadError};
pub use minimizer::{
    extend_and_minimize, minimize_column, minimize_output, minimize_table, variable_count_for,
    Minimized, MinimizerConfig,
};
pub use truth_table::{TruthTable, TruthTableReader};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = MinimizerConfig::new();
        assert!(config.remove_redundant);
        assert!(!config.parallel_extension);
    }

    #[test]
    fn test_column_scenario_round_trips() {
        let column = [true, false, true, true, true, false, true, false];
        let f = BooleanFunction::from_column(&column, 3);
        let rows: Vec<bool> = (0..8).map(|i| f.evaluate_index(i)).collect();
        assert_eq!(rows, column);
    }
}
