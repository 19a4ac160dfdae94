//! Truth-table input
//!
//! A truth table is a text file with one line per input combination and one
//! `0`/`1` character per output function. Any other character is ignored, so
//! separators and carriage returns are harmless.
//!
//! The minimizer works on output columns, obtained with
//! [`TruthTable::columns`]; the Karnaugh renderer reads cells directly with
//! [`TruthTable::get`].

pub mod error;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

pub use error::{TruthTableError, TruthTableReadError};

/// Rows of output bits, row `i` holding the outputs for input combination `i`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TruthTable {
    rows: Vec<Vec<bool>>,
}

impl TruthTable {
    /// Create a table from rows
    pub fn new(rows: Vec<Vec<bool>>) -> Self {
        TruthTable { rows }
    }

    /// Get all rows
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Number of rows (input combinations)
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of outputs, taken from the first row
    pub fn num_outputs(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Get the value of `output` at `row`, if the table has it
    pub fn get(&self, row: usize, output: usize) -> Option<bool> {
        self.rows.get(row).and_then(|r| r.get(output)).copied()
    }

    /// Transpose the table into one column per output function
    ///
    /// # Errors
    ///
    /// Returns [`TruthTableError::Empty`] for a table without rows and
    /// [`TruthTableError::RaggedRow`] when a row is narrower or wider than the
    /// first one.
    ///
    /// # Examples
    ///
    /// ```
    /// use truthmin::{TruthTable, TruthTableReader};
    ///
    /// let table = TruthTable::from_string("00\n01\n10\n11\n").unwrap();
    /// let columns = table.columns().unwrap();
    /// assert_eq!(columns[0], vec![false, false, true, true]);
    /// assert_eq!(columns[1], vec![false, true, false, true]);
    /// ```
    pub fn columns(&self) -> Result<Vec<Vec<bool>>, TruthTableError> {
        let width = match self.rows.first() {
            Some(first) => first.len(),
            None => return Err(TruthTableError::Empty),
        };
        if let Some((row, r)) = self
            .rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != width)
        {
            return Err(TruthTableError::RaggedRow {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        Ok((0..width)
            .map(|col| self.rows.iter().map(|r| r[col]).collect())
            .collect())
    }
}

/// Reading truth tables from text
///
/// Every newline-terminated line is a row, blank lines included; a trailing
/// line without a newline is a row if it holds at least one bit. Blank lines
/// at the end of the input are not rows.
pub trait TruthTableReader: Sized {
    /// Parse a table from any `BufRead` implementation
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, TruthTableReadError>;

    /// Parse a table from a string
    fn from_string(s: &str) -> Result<Self, TruthTableReadError> {
        Self::from_reader(Cursor::new(s.as_bytes()))
    }

    /// Load a table from a file
    ///
    /// ```no_run
    /// use truthmin::{TruthTable, TruthTableReader};
    ///
    /// let table = TruthTable::from_file("table.txt").unwrap();
    /// println!("{} rows, {} outputs", table.num_rows(), table.num_outputs());
    /// ```
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TruthTableReadError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl TruthTableReader for TruthTable {
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, TruthTableReadError> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;

        let mut rows = Vec::new();
        let mut line = Vec::new();
        for byte in bytes {
            match byte {
                b'\n' => rows.push(std::mem::take(&mut line)),
                b'0' => line.push(false),
                b'1' => line.push(true),
                _ => {}
            }
        }
        if !line.is_empty() {
            rows.push(line);
        }
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        Ok(TruthTable { rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_rows() {
        let table = TruthTable::from_string("00\n01\n10\n11\n").unwrap();
        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.num_outputs(), 2);
        assert_eq!(table.get(2, 0), Some(true));
        assert_eq!(table.get(2, 1), Some(false));
    }

    #[test]
    fn test_other_characters_are_ignored() {
        let table = TruthTable::from_string("0 1\r\n1-0\r\n").unwrap();
        assert_eq!(table.rows(), &[vec![false, true], vec![true, false]]);
    }

    #[test]
    fn test_trailing_line_without_newline() {
        let table = TruthTable::from_string("01\n10").unwrap();
        assert_eq!(table.num_rows(), 2);
    }

    #[test]
    fn test_blank_lines_are_rows() {
        let table = TruthTable::from_string("1\n\n0\n").unwrap();
        assert_eq!(table.num_rows(), 3);
        assert_eq!(table.get(1, 0), None);
    }

    #[test]
    fn test_trailing_blank_lines_are_dropped() {
        let table = TruthTable::from_string("00\n01\n10\n11\n\n\r\n").unwrap();
        assert_eq!(table.num_rows(), 4);
        assert_eq!(table.columns().unwrap().len(), 2);

        let blank = TruthTable::from_string("\n\n").unwrap();
        assert_eq!(blank.columns(), Err(TruthTableError::Empty));
    }

    #[test]
    fn test_get_out_of_range() {
        let table = TruthTable::from_string("01\n").unwrap();
        assert_eq!(table.get(0, 2), None);
        assert_eq!(table.get(5, 0), None);
    }

    #[test]
    fn test_columns_transpose() {
        let table = TruthTable::from_string("00\n01\n10\n11\n").unwrap();
        let columns = table.columns().unwrap();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0], vec![false, false, true, true]);
        assert_eq!(columns[1], vec![false, true, false, true]);
    }

    #[test]
    fn test_columns_empty_table() {
        let table = TruthTable::from_string("").unwrap();
        assert_eq!(table.columns(), Err(TruthTableError::Empty));
    }

    #[test]
    fn test_columns_ragged_row() {
        let table = TruthTable::from_string("01\n1\n").unwrap();
        assert_eq!(
            table.columns(),
            Err(TruthTableError::RaggedRow {
                row: 1,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TruthTable::from_file("/nonexistent/truth/table.txt");
        assert!(matches!(result, Err(TruthTableReadError::Io(_))));
    }
}
