//! Benchmark suite for the validation pipeline
//!
//! Measures the complete pipeline (tokenizing, reconstruction, evaluation
//! and verdict output) using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Inputs
//!
//! Inputs are generated in memory, so no fixture files are needed. Each input
//! has a catalog of regular and quantitative products followed by the given
//! number of transactions, mixing valid purchases with bad check digits,
//! unknown products and weights out of tolerance.

use checkout_validator::strategy::{ProcessingStrategy, SyncProcessingStrategy, ValidatorConfig};
use checkout_validator::types::NumericPolicy;
use std::fmt::Write;

fn main() {
    divan::main();
}

/// Append the check digit to a 12-digit barcode body
fn with_check_digit(body: &str) -> String {
    let sum: u32 = body.chars().filter_map(|c| c.to_digit(10)).sum();
    format!("{}{}", body, sum % 10)
}

/// Build an input with `products` catalog entries of each kind and
/// `transactions` transactions of five scans each
fn generate_input(products: usize, transactions: usize) -> String {
    let mut input = String::new();
    writeln!(input, "{}", products * 2).unwrap();

    for i in 0..products {
        writeln!(input, "49{:010} {} 500 10", i, 100 + i % 50).unwrap();
        writeln!(input, "{:05} 2.0 50 5", 10000 + i).unwrap();
    }

    for t in 0..transactions {
        writeln!(input, "start").unwrap();
        let mut reading = 0u64;

        for s in 0..5 {
            let i = (t * 5 + s) % products;
            let (barcode, weight) = if s % 2 == 0 {
                (with_check_digit(&format!("49{:010}", i)), 500)
            } else {
                // Declared price 300: expected weight 2.0 * 300 / 100 + 50
                (with_check_digit(&format!("02{:05}00300", 10000 + i)), 56)
            };

            let barcode = match t % 10 {
                7 if s == 0 => format!("{}x", &barcode[..12]),
                8 if s == 1 => with_check_digit(&format!("49{:010}", products + i)),
                _ => barcode,
            };

            writeln!(input, "{} {}", barcode, reading).unwrap();
            reading += if t % 10 == 9 && s == 4 { weight + 40 } else { weight };
        }

        writeln!(input, "end {}", reading).unwrap();
    }

    input
}

fn run(input: &str, numeric_policy: NumericPolicy) {
    let strategy = SyncProcessingStrategy::new(ValidatorConfig {
        numeric_policy,
        ..ValidatorConfig::default()
    });
    let mut output = Vec::new();

    strategy
        .process(&mut input.as_bytes(), &mut output)
        .expect("Processing failed");
}

/// Benchmark the strict pipeline (100 transactions)
#[divan::bench]
fn strict_small(bencher: divan::Bencher) {
    let input = generate_input(50, 100);
    bencher.bench(|| run(divan::black_box(&input), NumericPolicy::Strict));
}

/// Benchmark the strict pipeline (10,000 transactions)
#[divan::bench]
fn strict_medium(bencher: divan::Bencher) {
    let input = generate_input(500, 10_000);
    bencher.bench(|| run(divan::black_box(&input), NumericPolicy::Strict));
}

/// Benchmark the lenient pipeline (10,000 transactions)
#[divan::bench]
fn lenient_medium(bencher: divan::Bencher) {
    let input = generate_input(500, 10_000);
    bencher.bench(|| run(divan::black_box(&input), NumericPolicy::Lenient));
}

/// Benchmark the strict pipeline (100,000 transactions)
#[divan::bench(sample_count = 10)]
fn strict_large(bencher: divan::Bencher) {
    let input = generate_input(5_000, 100_000);
    bencher.bench(|| run(divan::black_box(&input), NumericPolicy::Strict));
}
