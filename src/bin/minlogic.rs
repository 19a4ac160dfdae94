//! Truth-table minimizer - Command Line Interface
//!
//! Prints one line per output function of the table, and optionally how many
//! functions share each surviving product term.

use clap::error::ErrorKind;
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process;
use truthmin::report::{self, TermUsage};
use truthmin::{minimize_table, Minimized, MinimizerConfig, TruthTable, TruthTableReader};

/// Exit code when arguments are missing or invalid
const EXIT_USAGE: i32 = 1;
/// Exit code when the truth table cannot be read
const EXIT_INPUT: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "minlogic")]
#[command(about = "Greedy minimizer for truth-table boolean functions", long_about = None)]
#[command(version)]
struct Args {
    /// Truth-table file: one line per input combination, one 0/1 per output
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print how many functions use each product term
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Search extensions of incomplete tables on all cores
    #[arg(long = "parallel")]
    parallel: bool,

    /// Keep terms implied by the rest of the cover
    #[arg(long = "keep-redundant")]
    keep_redundant: bool,
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

    let config = MinimizerConfig {
        remove_redundant: !args.keep_redundant,
        parallel_extension: args.parallel,
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
    log::debug!(
        "read {} rows with {} outputs from {}",
        table.num_rows(),
        table.num_outputs(),
        args.input.display()
    );

    let results = match minimize_table(&table, &config) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Malformed truth table '{}': {}", args.input.display(), e);
            process::exit(EXIT_INPUT);
        }
    };

    if let Err(e) = write_results(&results, args.verbose) {
        eprintln!("Error writing to stdout: {}", e);
        process::exit(EXIT_USAGE);
    }
}

fn write_results(results: &[Minimized], verbose: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut usage = TermUsage::new();
    for result in results {
        usage.record(result);
        report::write_function_line(&mut out, result)?;
    }
    if verbose {
        usage.write(&mut out)?;
    }
    out.flush()
}
