//! Text output for minimization results
//!
//! One line per output function:
//!
//! ```text
//! <terms>/<pins>\t<truth table> {t^e^r^m}...
//! ```
//!
//! The truth table lists `f(0)..f(2^n - 1)`; when some rows were filled in by
//! the extension search, a space separates them from the observed rows.

use std::collections::BTreeMap;
use std::io::{self, Write};

use crate::cover::ProductTerm;
use crate::minimizer::Minimized;

/// Write the summary line for one minimized output function
///
/// # Examples
///
/// ```
/// use truthmin::{minimize_output, report, MinimizerConfig};
///
/// let result = minimize_output(&[true, true, false], &MinimizerConfig::default());
/// let mut out = Vec::new();
/// report::write_function_line(&mut out, &result).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1/1\t110 0 {0^X}\n");
/// ```
pub fn write_function_line<W: Write>(writer: &mut W, result: &Minimized) -> io::Result<()> {
    let function = &result.function;
    write!(
        writer,
        "{}/{}\t",
        function.num_terms(),
        function.literal_pin_count()
    )?;
    for (i, value) in function.fingerprint().rows().enumerate() {
        if i == result.observed_rows {
            write!(writer, " ")?;
        }
        write!(writer, "{}", if value { '1' } else { '0' })?;
    }
    for term in function.terms() {
        write!(writer, " {}", term)?;
    }
    writeln!(writer)
}

/// How many output functions use each surviving term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermUsage {
    counts: BTreeMap<ProductTerm, usize>,
}

impl TermUsage {
    /// Create an empty tally
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every term of a minimized function once
    pub fn record(&mut self, result: &Minimized) {
        for term in result.function.terms() {
            *self.counts.entry(term.clone()).or_insert(0) += 1;
        }
    }

    /// Number of functions using `term`
    pub fn count(&self, term: &ProductTerm) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms seen
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check whether no terms were recorded
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(term, count)` pairs in term order
    pub fn iter(&self) -> impl Iterator<Item = (&ProductTerm, usize)> {
        self.counts.iter().map(|(term, &count)| (term, count))
    }

    /// Write the tally, five entries per line
    pub fn write<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer)?;
        for (i, (term, count)) in self.iter().enumerate() {
            write!(writer, " {} {} ", term, count)?;
            if (i + 1) % 5 == 0 {
                writeln!(writer)?;
            }
        }
        writeln!(writer)
    }
}
