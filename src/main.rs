//! Compares JSON and protobuf encodings of a Person record
//!
//! Prints the encoded size of a sample record, then the time taken to
//! encode and decode 100000 random records in each format.
//!
//! ```bash
//! cargo run --release
//!
//! # Show pass timings as log events on stderr
//! RUST_LOG=codec_bench=info cargo run --release
//! ```

use codec_bench::Driver;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let driver = Driver::new();
    let stdout = std::io::stdout();

    match driver.run(&mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Aborted passes are already logged by the driver; this line is
            // printed regardless of RUST_LOG
            eprintln!("benchmark failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
