//! Error types for truthmin
//!
//! Minimization itself cannot fail; errors come from reading truth tables and
//! from tables whose rows disagree on the number of outputs.

pub use crate::truth_table::error::{TruthTableError, TruthTableReadError};
