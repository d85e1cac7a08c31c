use crate::strategy::ValidatorConfig;
use crate::types::NumericPolicy;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Validate self-checkout transactions against a product catalog
#[derive(Parser, Debug)]
#[command(name = "checkout-validator")]
#[command(about = "Validate self-checkout transactions against a product catalog", long_about = None)]
pub struct CliArgs {
    /// Input file containing the catalog followed by scanner events
    #[arg(
        value_name = "INPUT",
        help = "Path to the input file (reads standard input when omitted or '-')"
    )]
    pub input_file: Option<PathBuf>,

    /// Treatment of malformed numeric fields
    #[arg(
        long = "numeric-policy",
        value_name = "POLICY",
        default_value = "strict",
        help = "Malformed numbers: 'strict' rejects the record, 'lenient' reads them as zero"
    )]
    pub numeric_policy: NumericPolicy,

    /// Print an `account: <n>` line before each verdict
    #[arg(long = "show-index", help = "Print an 'account: <n>' line before each verdict")]
    pub show_index: bool,

    /// Increase log verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug); RUST_LOG overrides"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Create a ValidatorConfig from CLI arguments
    pub fn to_config(&self) -> ValidatorConfig {
        ValidatorConfig {
            numeric_policy: self.numeric_policy,
            show_index: self.show_index,
        }
    }
}
