//! Karnaugh map viewer - Command Line Interface
//!
//! Draws one output column of a five-variable truth table on an 8×4 grid.

use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use truthmin::karnaugh::{normalize_header, KarnaughMap};
use truthmin::{TruthTable, TruthTableReader};

/// Exit code when arguments are missing or invalid
const EXIT_USAGE: i32 = 1;
/// Exit code when the truth table cannot be read
const EXIT_INPUT: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "karnaugh")]
#[command(about = "Print one output of a truth table as a Karnaugh map", long_about = None)]
#[command(version)]
struct Args {
    /// Truth-table file: one line per input combination, one 0/1 per output
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Two-character label for the corner cell; two spaces disable colour
    #[arg(value_name = "HEADER", allow_hyphen_values = true)]
    header: String,

    /// Zero-based output column to draw
    #[arg(value_name = "COLUMN")]
    column: usize,
}

fn main() {
    let _ = env_logger::builder().try_init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            process::exit(EXIT_USAGE);
        }
    };

    let table = match TruthTable::from_file(&args.input) {
        Ok(table) => table,
        Err(e) => {
            eprintln!(
                "Error reading truth table '{}': {}",
                args.input.display(),
                e
            );
            process::exit(EXIT_INPUT);
        }
    };

    let header = normalize_header(&args.header);
    let map = KarnaughMap::from_table(&table, args.column);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = map.render(&mut out, &header).and_then(|_| out.flush()) {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(EXIT_USAGE);
    }
}
