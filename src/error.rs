//! Error types for benchmark operations
//!
//! This module defines all errors that can occur while encoding, decoding,
//! timing a throughput pass, or writing the report.

use crate::codec::Format;
use thiserror::Error;

/// Benchmark error types
///
/// All operations in this library return `Result<T, BenchError>`. Codec
/// adapters hand errors back to the caller; the driver never discards them.
#[derive(Error, Debug)]
pub enum BenchError {
    /// A record could not be serialized
    ///
    /// Not expected for the fixed Person shape, but both codec libraries
    /// report it as a possible outcome.
    ///
    /// # Example
    /// ```no_run
    /// # use codec_bench::error::BenchError;
    /// # use codec_bench::codec::Format;
    /// let err = BenchError::Encode {
    ///     format: Format::Binary,
    ///     message: "buffer too small".to_string(),
    /// };
    /// ```
    #[error("{format} encode error: {message}")]
    Encode {
        /// Format whose encoder failed
        format: Format,
        /// Diagnostic from the codec library
        message: String,
    },

    /// A byte sequence is not well-formed for the format
    ///
    /// This error occurs when:
    /// - JSON input is malformed, has a field of the wrong type, or lacks a field
    /// - Protobuf input has an invalid tag, a wrong wire type, or a
    ///   truncated length prefix
    /// - A string field holds invalid UTF-8
    #[error("{format} decode error: {message}")]
    Decode {
        /// Format whose decoder failed
        format: Format,
        /// Diagnostic from the codec library
        message: String,
    },

    /// Decoding an encoding did not reproduce the original record
    #[error("{format} round trip produced a different record")]
    RoundTripMismatch {
        /// Format that failed the round trip
        format: Format,
    },

    /// A throughput pass stopped because of a codec error
    ///
    /// The pass is abandoned at the first failing record; remaining records
    /// and any later pass are not processed.
    #[error("{format} pass aborted at record {record}: {source}")]
    PassAborted {
        /// Format of the aborted pass
        format: Format,
        /// Zero-based index of the failing record
        record: usize,
        /// Underlying codec error
        #[source]
        source: Box<BenchError>,
    },

    /// Writing the report failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;
