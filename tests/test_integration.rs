//! Integration tests for truthmin
//!
//! These tests verify end-to-end functionality: reading truth-table files,
//! minimizing every output, and producing the report and Karnaugh output.

use std::io::Write;
use tempfile::NamedTempFile;
use truthmin::karnaugh::{normalize_header, KarnaughMap};
use truthmin::report::{self, TermUsage};
use truthmin::*;

fn table_file(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::new().expect("Failed to create temp file");
    temp.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

fn report_lines(content: &str, config: &MinimizerConfig) -> String {
    let temp = table_file(content);
    let table = TruthTable::from_file(temp.path()).expect("Failed to read table");
    let results = minimize_table(&table, config).expect("Failed to minimize");
    let mut out = Vec::new();
    for result in &results {
        report::write_function_line(&mut out, result).unwrap();
    }
    String::from_utf8(out).unwrap()
}

// Truth-table files

#[test]
fn test_two_output_table() {
    let temp = table_file("00\n01\n10\n11\n");
    let table = TruthTable::from_file(temp.path()).unwrap();
    let columns = table.columns().unwrap();
    assert_eq!(columns, vec![vec![false, false, true, true], vec![false, true, false, true]]);

    for column in &columns {
        assert_eq!(variable_count_for(column.len()), 2);
    }

    let results = minimize_table(&table, &MinimizerConfig::default()).unwrap();
    for result in &results {
        assert_eq!(result.missing_rows(), 0);
        assert_eq!(result.candidates_evaluated, 1);
    }
}

#[test]
fn test_report_for_two_output_table() {
    let text = report_lines("00\n01\n10\n11\n", &MinimizerConfig::default());
    assert_eq!(text, "1/1\t0011 {1^X}\n1/1\t0101 {X^1}\n");
}

#[test]
fn test_report_for_eight_row_column() {
    let text = report_lines("1\n0\n1\n1\n1\n0\n1\n0\n", &MinimizerConfig::default());
    assert_eq!(text, "2/3\t10111010 {0^1^X} {X^X^0}\n");
}

#[test]
fn test_report_marks_extended_rows() {
    let text = report_lines("1\n1\n1\n", &MinimizerConfig::default());
    assert_eq!(text, "1/0\t111 1 {X^X}\n");
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = table_file("01\n");
    let path = temp.path().to_path_buf();
    drop(temp);
    let result = TruthTable::from_file(&path);
    assert!(matches!(result, Err(TruthTableReadError::Io(_))));
}

#[test]
fn test_ragged_table_is_reported() {
    let temp = table_file("01\n1\n10\n");
    let table = TruthTable::from_file(temp.path()).unwrap();
    let err = minimize_table(&table, &MinimizerConfig::default()).unwrap_err();
    assert!(matches!(err, TruthTableError::RaggedRow { row: 1, .. }));
}

#[test]
fn test_verbose_term_usage() {
    let temp = table_file("01\n01\n11\n11\n");
    let table = TruthTable::from_file(temp.path()).unwrap();
    let results = minimize_table(&table, &MinimizerConfig::default()).unwrap();

    let mut usage = TermUsage::new();
    for result in &results {
        usage.record(result);
    }
    // Output 0 is 1X, output 1 is constant 1.
    assert_eq!(usage.len(), 2);
    let one_x = ProductTerm::new(vec![Trit::One, Trit::DontCare]);
    assert_eq!(usage.count(&one_x), 1);
}

// Properties over every small function

fn column_of(index: usize, len: usize) -> Vec<bool> {
    (0..len).map(|i| (index >> (len - 1 - i)) & 1 == 1).collect()
}

#[test]
fn test_every_three_variable_function_keeps_its_truth_table() {
    let config = MinimizerConfig::default();
    for index in 0..256 {
        let column = column_of(index, 8);
        let original = BooleanFunction::from_column(&column, 3);
        let result = minimize_output(&column, &config);
        assert_eq!(
            result.function.fingerprint(),
            original.fingerprint(),
            "column {:08b}",
            index
        );
        assert!(result.function.literal_pin_count() <= original.literal_pin_count());
    }
}

#[test]
fn test_redundancy_filter_keeps_function() {
    for index in 0..256 {
        let column = column_of(index, 8);
        let minimized = BooleanFunction::from_column(&column, 3).minimize();
        let filtered = remove_redundant(&minimized);
        for row in 0..8 {
            assert_eq!(
                filtered.evaluate_index(row),
                minimized.evaluate_index(row),
                "column {:08b}, row {}",
                index,
                row
            );
        }
        assert!(filtered.num_terms() <= minimized.num_terms());
    }
}

#[test]
fn test_incomplete_columns_keep_observed_rows() {
    let config = MinimizerConfig::default();
    for len in 5..8 {
        for index in 0..(1usize << len) {
            let column = column_of(index, len);
            let result = minimize_output(&column, &config);
            assert_eq!(result.variable_count(), 3);
            assert_eq!(result.candidates_evaluated, 1usize << (8 - len));
            for (row, &value) in column.iter().enumerate() {
                assert_eq!(result.function.evaluate_index(row), value);
            }
        }
    }
}

#[test]
fn test_parallel_search_matches_serial() {
    let serial = MinimizerConfig::default();
    let parallel = MinimizerConfig {
        parallel_extension: true,
        ..Default::default()
    };
    for index in 0..(1usize << 5) {
        let column = column_of(index, 5);
        assert_eq!(
            minimize_output(&column, &serial),
            minimize_output(&column, &parallel),
            "column {:05b}",
            index
        );
    }
}

// Karnaugh maps

#[test]
fn test_karnaugh_from_file() {
    let content: String = (0..32)
        .map(|i| if i % 3 == 0 { "10\n" } else { "01\n" })
        .collect();
    let temp = table_file(&content);
    let table = TruthTable::from_file(temp.path()).unwrap();

    let map = KarnaughMap::from_table(&table, 0);
    assert_eq!(map.cell(0, 0), Trit::One); // minterm 0
    assert_eq!(map.cell(1, 0), Trit::Zero); // minterm 1
    assert_eq!(map.cell(2, 0), Trit::One); // minterm 3

    let text = map.to_string_with_header(&normalize_header(""));
    assert_eq!(text.lines().count(), 7);
    assert!(!text.contains(" X "));
}

#[test]
fn test_karnaugh_out_of_range_column() {
    let temp = table_file("01\n10\n");
    let table = TruthTable::from_file(temp.path()).unwrap();
    let map = KarnaughMap::from_table(&table, 7);
    let text = map.to_string_with_header("  ");
    assert_eq!(text.matches("  X  ").count(), 32);
}
