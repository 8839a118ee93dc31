//! Stackless CLI
//!
//! Runs the demonstration algorithms natively and on the trampoline so their
//! results, output order and depth limits can be compared.

use stackless_core::cli;

fn main() {
    if let Err(e) = cli::run_cli() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
