//! DiskLens — disk usage snapshot analyser.
//!
//! Thin binary entry point. All logic lives in the `disklens-core` and
//! `disklens-cli` crates.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Structured logging goes to stderr so stdout stays pure JSON for
    // machine consumers.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    disklens_cli::run()
}
