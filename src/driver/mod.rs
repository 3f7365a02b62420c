//! Benchmark driver
//!
//! Runs the size comparison on the sample record and the throughput
//! comparison over a batch of generated records, writing human-readable
//! results to any [`std::io::Write`] sink.
//!
//! # Examples
//!
//! ```
//! use codec_bench::driver::Driver;
//! use codec_bench::generator::RecordGenerator;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = Driver::new();
//! let mut out = Vec::new();
//!
//! let sizes = driver.compare_size(&mut out)?;
//! assert!(sizes.binary.len() <= sizes.text.len());
//!
//! let mut generator = RecordGenerator::from_seed(1);
//! let timing = driver.compare_throughput(100, &mut generator, &mut out)?;
//! assert_eq!(timing.text.iterations, 100);
//! # Ok(())
//! # }
//! ```

pub mod report;

pub use report::{PassReport, SizeComparison, SizeReport, ThroughputComparison};

use crate::codec::{BinaryCodec, Codec, Format, TextCodec};
use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::generator::RecordGenerator;
use crate::person::Person;
use rand::Rng;
use std::io::Write;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Orchestrates both comparisons across a text and a binary codec
#[derive(Debug, Clone)]
pub struct Driver<T = TextCodec, B = BinaryCodec> {
    text: T,
    binary: B,
    config: BenchConfig,
}

impl Driver {
    /// Create a driver over the JSON and protobuf adapters with default settings
    pub fn new() -> Self {
        Self::with_codecs(TextCodec, BinaryCodec)
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Codec, B: Codec> Driver<T, B> {
    /// Create a driver over arbitrary adapters
    pub fn with_codecs(text: T, binary: B) -> Self {
        Driver {
            text,
            binary,
            config: BenchConfig::default(),
        }
    }

    /// Replace the configuration
    pub fn with_config(mut self, config: BenchConfig) -> Self {
        self.config = config;
        self
    }

    /// Settings used by [`Driver::run`] and the throughput passes
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn text_codec(&self) -> &T {
        &self.text
    }

    pub fn binary_codec(&self) -> &B {
        &self.binary
    }

    /// Encode the sample record in both formats and report the sizes
    ///
    /// Each encoding is decoded back and must equal the sample record.
    pub fn compare_size<W: Write>(&self, out: &mut W) -> Result<SizeComparison> {
        let person = Person::sample();

        let text = measure_size(&self.text, &person)?;
        writeln!(out, "{}", text)?;
        let binary = measure_size(&self.binary, &person)?;
        writeln!(out, "{}", binary)?;

        let comparison = SizeComparison { text, binary };
        if let Some(summary) = comparison.summary() {
            writeln!(out, "{}", summary)?;
        }
        Ok(comparison)
    }

    /// Time `n` encode+decode cycles per codec over freshly generated records
    ///
    /// All records are generated before either timer starts. The text pass
    /// runs to completion before the binary pass begins.
    pub fn compare_throughput<R: Rng, W: Write>(
        &self,
        n: usize,
        generator: &mut RecordGenerator<R>,
        out: &mut W,
    ) -> Result<ThroughputComparison> {
        let records = generator.generate_batch(n);
        let verify = self.config.verify_round_trip;

        // Reported per pass: an aborted binary pass leaves the text timing in `out`
        let text = run_pass(&self.text, &records, verify)?;
        writeln!(out, "{}", text)?;
        let binary = run_pass(&self.binary, &records, verify)?;
        writeln!(out, "{}", binary)?;

        let comparison = ThroughputComparison { text, binary };
        if let Some(summary) = comparison.summary() {
            writeln!(out, "{}", summary)?;
        }
        Ok(comparison)
    }

    /// Run the size comparison, then the throughput comparison
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        self.compare_size(out)?;
        writeln!(out)?;

        let mut generator = match self.config.seed {
            Some(seed) => RecordGenerator::from_seed(seed),
            None => RecordGenerator::from_entropy(),
        };
        self.compare_throughput(self.config.iterations, &mut generator, out)?;
        out.flush()?;
        Ok(())
    }
}

fn measure_size<C: Codec>(codec: &C, person: &Person) -> Result<SizeReport> {
    let format = codec.format();
    let encoded = codec.encode(person)?;

    if codec.decode(&encoded)? != *person {
        return Err(BenchError::RoundTripMismatch { format });
    }

    debug!(format = %format, bytes = encoded.len(), "Measured encoded size");
    Ok(SizeReport { format, encoded })
}

/// Time one encode+decode pass of `codec` over `records`
///
/// Decoded records are discarded unless `verify_round_trip` is set, in which
/// case each must equal its input. The first error aborts the pass.
pub fn run_pass<C: Codec + ?Sized>(
    codec: &C,
    records: &[Person],
    verify_round_trip: bool,
) -> Result<PassReport> {
    let format = codec.format();
    if records.is_empty() {
        return Ok(PassReport {
            format,
            iterations: 0,
            elapsed: Duration::ZERO,
        });
    }

    info!(format = %format, iterations = records.len(), "Starting throughput pass");

    let start = Instant::now();
    for (index, person) in records.iter().enumerate() {
        let decoded = codec
            .encode(person)
            .and_then(|data| codec.decode(&data))
            .map_err(|e| abort(format, index, e))?;

        if verify_round_trip && decoded != *person {
            return Err(abort(format, index, BenchError::RoundTripMismatch { format }));
        }
        std::hint::black_box(decoded);
    }
    let elapsed = start.elapsed();

    info!(
        format = %format,
        iterations = records.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Throughput pass completed"
    );

    Ok(PassReport {
        format,
        iterations: records.len(),
        elapsed,
    })
}

fn abort(format: Format, record: usize, source: BenchError) -> BenchError {
    error!(format = %format, record, error = %source, "Throughput pass aborted");
    BenchError::PassAborted {
        format,
        record,
        source: Box::new(source),
    }
}
