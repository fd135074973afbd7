//! Audit a CSV bank statement supplied on standard input.
//!
//! ```text
//! cargo run --example audit_statement < statement.csv
//! ```
//!
//! Diagnostics and the closing tally print to standard output. A statement
//! that cannot be parsed at all exits non-zero.

use std::io;
use std::process;

use statement_core::{audit_reader, Diagnostics};

fn main() {
    let mut diagnostics = Diagnostics::new();
    if let Err(err) = audit_reader(io::stdin(), &mut diagnostics) {
        eprintln!("failed to audit statement: {err}");
        process::exit(1);
    }
}
