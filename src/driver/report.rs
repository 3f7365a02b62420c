//! Benchmark result types

use crate::codec::Format;
use bytes::Bytes;
use std::fmt;
use std::time::Duration;

/// Encoded size of the sample record in one format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeReport {
    pub format: Format,
    /// The encoding itself
    pub encoded: Bytes,
}

impl SizeReport {
    /// Encoded length in bytes
    pub fn len(&self) -> usize {
        self.encoded.len()
    }

    /// Check if the encoding is empty
    pub fn is_empty(&self) -> bool {
        self.encoded.is_empty()
    }
}

impl fmt::Display for SizeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} len: {}", self.format, self.len())?;
        writeln!(f, "{} data:", self.format)?;
        if self.format.is_textual() {
            write!(f, "{}", String::from_utf8_lossy(&self.encoded))
        } else {
            write!(f, "{}", self.encoded.escape_ascii())
        }
    }
}

/// Size comparison of both formats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeComparison {
    pub text: SizeReport,
    pub binary: SizeReport,
}

impl SizeComparison {
    /// Bytes saved by the binary format, as a percentage of the text size
    ///
    /// Negative when the binary encoding is larger. `None` if the text
    /// encoding is empty.
    pub fn space_savings_percent(&self) -> Option<f64> {
        if self.text.is_empty() {
            return None;
        }
        Some((1.0 - self.binary.len() as f64 / self.text.len() as f64) * 100.0)
    }

    /// Closing line comparing both sizes, if one can be computed
    pub fn summary(&self) -> Option<String> {
        self.space_savings_percent()
            .map(|savings| format!("space savings: {:.1}%", savings))
    }
}

impl fmt::Display for SizeComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        writeln!(f, "{}", self.binary)?;
        if let Some(summary) = self.summary() {
            writeln!(f, "{}", summary)?;
        }
        Ok(())
    }
}

/// Timing of one throughput pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassReport {
    pub format: Format,
    /// Encode+decode cycles performed
    pub iterations: usize,
    /// Wall-clock time of the whole pass
    pub elapsed: Duration,
}

impl PassReport {
    /// Encode+decode cycles per second, zero when nothing was timed
    pub fn ops_per_sec(&self) -> f64 {
        if self.elapsed.is_zero() {
            return 0.0;
        }
        self.iterations as f64 / self.elapsed.as_secs_f64()
    }

    /// Mean microseconds per encode+decode cycle
    pub fn micros_per_op(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1_000_000.0 / self.iterations as f64
    }
}

impl fmt::Display for PassReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} times takes {:?}",
            self.format, self.iterations, self.elapsed
        )?;
        writeln!(f, "   Throughput: {:.0} ops/s", self.ops_per_sec())?;
        write!(f, "   Latency: {:.3} µs/op", self.micros_per_op())
    }
}

/// Throughput comparison of both formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThroughputComparison {
    pub text: PassReport,
    pub binary: PassReport,
}

impl ThroughputComparison {
    /// How many times faster the binary pass ran than the text pass
    ///
    /// `None` if either pass took no measurable time.
    pub fn speedup(&self) -> Option<f64> {
        if self.text.elapsed.is_zero() || self.binary.elapsed.is_zero() {
            return None;
        }
        Some(self.text.elapsed.as_secs_f64() / self.binary.elapsed.as_secs_f64())
    }

    /// Closing line comparing both passes, if one can be computed
    pub fn summary(&self) -> Option<String> {
        self.speedup().map(|speedup| {
            format!(
                "{} speedup over {}: {:.2}x",
                self.binary.format, self.text.format, speedup
            )
        })
    }
}

impl fmt::Display for ThroughputComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        writeln!(f, "{}", self.binary)?;
        if let Some(summary) = self.summary() {
            writeln!(f, "{}", summary)?;
        }
        Ok(())
    }
}
