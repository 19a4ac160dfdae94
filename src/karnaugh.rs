//! Karnaugh map rendering for five-variable truth tables
//!
//! The map is a fixed 8×4 grid: columns follow the 3-bit Gray code of
//! variables X3..X5, rows the 2-bit Gray code of X1..X2. Cells whose minterm
//! or output is missing from the table show a don't-care marker.

use std::io::{self, Write};

use crate::cover::Trit;
use crate::truth_table::TruthTable;

/// Column labels, in grid order
pub const GRAY_COLUMNS: [&str; 8] = ["000", "001", "011", "010", "110", "111", "101", "100"];

/// Row labels, in grid order
pub const GRAY_ROWS: [&str; 4] = ["00", "01", "11", "10"];

/// Minterm index shown in each grid cell
pub const CELL_MINTERMS: [[usize; 8]; 4] = [
    [0, 4, 12, 8, 24, 28, 20, 16],
    [1, 5, 13, 9, 25, 29, 21, 17],
    [3, 7, 15, 11, 27, 31, 23, 19],
    [2, 6, 14, 10, 26, 30, 22, 18],
];

/// Header that switches the renderer to plain text
pub const PLAIN_HEADER: &str = "  ";

/// Terminal escape sequences used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Cells holding 1 and don't-care markers
    pub accent: &'static str,
    /// Header and row labels
    pub label: &'static str,
    /// Single-variable group brackets
    pub group: &'static str,
    /// Two-variable group brackets
    pub pair: &'static str,
    /// Reset to default attributes
    pub reset: &'static str,
}

impl Palette {
    /// ANSI colours
    pub const fn ansi() -> Self {
        Palette {
            accent: "\x1b[1;31m",
            label: "\x1b[1;37m",
            group: "\x1b[1;33;44m",
            pair: "\x1b[1;33;45m",
            reset: "\x1b[0m",
        }
    }

    /// No escape sequences at all
    pub const fn plain() -> Self {
        Palette {
            accent: "",
            label: "",
            group: "",
            pair: "",
            reset: "",
        }
    }

    /// Plain for the blank header, ANSI otherwise
    pub fn for_header(header: &str) -> Self {
        if header == PLAIN_HEADER {
            Palette::plain()
        } else {
            Palette::ansi()
        }
    }
}

/// Fit a header label to exactly two characters
///
/// Short labels are padded with spaces, long ones truncated.
///
/// ```
/// use truthmin::karnaugh::normalize_header;
///
/// assert_eq!(normalize_header("F"), "F ");
/// assert_eq!(normalize_header("F12"), "F1");
/// ```
pub fn normalize_header(header: &str) -> String {
    let mut label: String = header.chars().take(2).collect();
    while label.chars().count() < 2 {
        label.push(' ');
    }
    label
}

/// Values of one output function laid out on the Karnaugh grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KarnaughMap {
    cells: [[Trit; 8]; 4],
}

impl KarnaughMap {
    /// Lay out output `output` of `table` on the grid
    ///
    /// Missing rows or outputs become [`Trit::DontCare`].
    pub fn from_table(table: &TruthTable, output: usize) -> Self {
        let mut cells = [[Trit::DontCare; 8]; 4];
        for (row, minterms) in CELL_MINTERMS.iter().enumerate() {
            for (col, &minterm) in minterms.iter().enumerate() {
                cells[row][col] = table
                    .get(minterm, output)
                    .map_or(Trit::DontCare, Trit::from);
            }
        }
        KarnaughMap { cells }
    }

    /// Value shown at grid position (`row`, `col`)
    ///
    /// # Panics
    ///
    /// Panics if `row >= 4` or `col >= 8`.
    pub fn cell(&self, row: usize, col: usize) -> Trit {
        self.cells[row][col]
    }

    /// Write the framed map
    ///
    /// `header` should already be two characters long; see [`normalize_header`].
    pub fn render<W: Write>(&self, writer: &mut W, header: &str) -> io::Result<()> {
        let p = Palette::for_header(header);

        write!(writer, "{}{} | ", p.label, header)?;
        for label in GRAY_COLUMNS {
            write!(writer, " {} ", label)?;
        }
        writeln!(writer)?;
        writeln!(
            writer,
            "---+-----------{}[---X4----{}[=X5==X4=]{}----X5---]{}",
            p.group, p.pair, p.group, p.reset
        )?;

        for (i, row) in self.cells.iter().enumerate() {
            write!(writer, "{}{} |{} ", p.label, GRAY_ROWS[i], p.reset)?;
            for cell in row {
                match cell {
                    Trit::One => write!(writer, "  {}1{}  ", p.accent, p.reset)?,
                    Trit::Zero => write!(writer, "  0  ")?,
                    Trit::DontCare => write!(writer, "  {}X{}  ", p.accent, p.reset)?,
                }
            }
            match i {
                1 => write!(writer, "{}X1  {}", p.group, p.reset)?,
                2 => write!(writer, "{}X1X2{}", p.pair, p.reset)?,
                3 => write!(writer, "{}  X2{}", p.group, p.reset)?,
                _ => {}
            }
            writeln!(writer)?;
        }

        writeln!(
            writer,
            "---+------{}[---X3---]{}----------{}[---X3---]{}-----",
            p.group, p.reset, p.group, p.reset
        )
    }

    /// Render into a string
    pub fn to_string_with_header(&self, header: &str) -> String {
        let mut buffer = Vec::new();
        // Writing to a Vec cannot fail
        let _ = self.render(&mut buffer, header);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}
