//! Checkout Validator CLI
//!
//! Command-line interface for validating self-checkout transactions.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.txt
//! cargo run < input.txt
//! cargo run -- --show-index --numeric-policy lenient input.txt
//! RUST_LOG=debug cargo run -- input.txt
//! ```
//!
//! The program reads the product catalog and the scanner event stream from the
//! input, and prints one line per completed transaction to stdout: the total
//! price, or a staff call with its reason codes. Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, invalid catalog, I/O failure, etc.)

use checkout_validator::cli;
use checkout_validator::io::open_input;
use checkout_validator::strategy::{ProcessingStrategy, SyncProcessingStrategy};
use std::process;

fn main() {
    let args = cli::parse_args();
    cli::init_logging(args.verbose);

    let strategy = SyncProcessingStrategy::new(args.to_config());

    let result = open_input(args.input_file.as_deref()).and_then(|mut input| {
        let stdout = std::io::stdout();
        let mut output = stdout.lock();
        strategy.process(&mut input, &mut output)
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
