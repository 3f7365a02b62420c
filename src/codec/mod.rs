//! Codec adapters for the two benchmarked formats
//!
//! Each adapter is a pair of free functions (`encode_*` / `decode_*`) plus a
//! unit struct implementing [`Codec`], which is what the driver times.

pub mod binary;
pub mod text;

use crate::error::Result;
use crate::person::Person;
use bytes::Bytes;
use std::fmt;

pub use binary::{decode_binary, encode_binary, BinaryCodec, PersonRecord};
pub use text::{decode_text, encode_text, TextCodec};

/// Serialization format under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Self-describing textual encoding (JSON)
    Text,
    /// Schema-based binary encoding (Protocol Buffers)
    Binary,
}

impl Format {
    /// Get the format name as printed in reports
    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "json",
            Self::Binary => "protobuf",
        }
    }

    /// Check if encodings in this format are human-readable text
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Text)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common interface for codec adapters
///
/// Implementations must be pure with respect to the record: `decode` of the
/// output of `encode` yields an equal [`Person`].
pub trait Codec {
    /// Format this adapter produces
    fn format(&self) -> Format;

    /// Encode a record to bytes
    fn encode(&self, person: &Person) -> Result<Bytes>;

    /// Decode a record from bytes
    fn decode(&self, data: &[u8]) -> Result<Person>;
}
