//! JSON vs Protocol Buffers micro-benchmark
//!
//! This library compares a self-describing textual encoding (JSON, via
//! `serde_json`) with a compact schema-based binary encoding (Protocol
//! Buffers, via `prost`) on a fixed record shape: a [`Person`] with a name,
//! an age and an email address.
//!
//! Two comparisons are provided:
//!
//! - **Size** - the encoded length and raw bytes of one sample record
//! - **Throughput** - wall-clock time of encoding and decoding a batch of
//!   randomly generated records, one timed pass per format
//!
//! # Quick Start
//!
//! ```
//! use codec_bench::config::BenchConfig;
//! use codec_bench::driver::Driver;
//!
//! let config = BenchConfig::default().with_iterations(1_000).with_seed(7);
//! let mut out = Vec::new();
//! Driver::new().with_config(config).run(&mut out)?;
//!
//! println!("{}", String::from_utf8_lossy(&out));
//! # Ok::<(), codec_bench::BenchError>(())
//! ```
//!
//! # Using the codecs directly
//!
//! ```
//! use codec_bench::codec::{decode_binary, decode_text, encode_binary, encode_text};
//!
//! let json = encode_text("John Doe", 30, "johndoe@example.com")?;
//! let proto = encode_binary("John Doe", 30, "johndoe@example.com")?;
//! assert!(proto.len() < json.len());
//!
//! assert_eq!(decode_text(&json)?, decode_binary(&proto)?);
//! # Ok::<(), codec_bench::BenchError>(())
//! ```
//!
//! # Module Structure
//!
//! - **`person`** - The benchmarked record
//! - **`generator`** - Seedable random record generation
//! - **`codec`** - `Codec` trait with the JSON (`text`) and protobuf
//!   (`binary`) adapters
//! - **`driver`** - Size and throughput comparisons plus their reports
//! - **`config`** - Iteration count, seed and verification settings
//! - **`error`** - `BenchError` and the `Result<T>` alias
//!
//! # Error Handling
//!
//! All operations return `Result<T, BenchError>`. A codec failure during a
//! throughput pass aborts that pass with [`BenchError::PassAborted`]; it is
//! never silently dropped.
//!
//! # Logging
//!
//! The library emits `tracing` events (pass start and finish at `info`,
//! measured sizes at `debug`, aborted passes at `error`). Install any
//! subscriber to see them; the `codec-bench` binary honours `RUST_LOG`.

pub mod codec;
pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod person;

// Re-export commonly used types
pub use codec::{BinaryCodec, Codec, Format, TextCodec};
pub use config::BenchConfig;
pub use driver::Driver;
pub use error::{BenchError, Result};
pub use generator::RecordGenerator;
pub use person::Person;
