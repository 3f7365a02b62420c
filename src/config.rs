//! Benchmark configuration

/// Default number of records per throughput pass
pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Settings for a benchmark run
///
/// # Examples
///
/// ```
/// use codec_bench::config::BenchConfig;
///
/// let config = BenchConfig::default()
///     .with_iterations(1_000)
///     .with_seed(42)
///     .with_round_trip_verification(true);
///
/// assert_eq!(config.iterations, 1_000);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Records encoded and decoded per throughput pass
    pub iterations: usize,
    /// Seed for the record generator; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Compare every decoded record with its input during throughput passes
    ///
    /// Off by default so the timed loop measures only the codecs.
    pub verify_round_trip: bool,
}

impl BenchConfig {
    /// Set the number of records per pass
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Use a fixed generator seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enable or disable per-record round-trip checks
    pub fn with_round_trip_verification(mut self, enabled: bool) -> Self {
        self.verify_round_trip = enabled;
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            verify_round_trip: false,
        }
    }
}
