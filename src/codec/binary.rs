//! Protocol Buffers codec adapter
//!
//! The wire schema is fixed and pre-agreed by both sides:
//!
//! ```text
//! message Person {
//!   string name  = 1;
//!   int32  age   = 2;
//!   string email = 3;
//! }
//! ```
//!
//! Field names never appear on the wire; each field is a numeric tag plus
//! wire type, followed by a varint or a length-prefixed payload. Proto3
//! default values (empty strings, zero age) are omitted entirely.

use crate::codec::{Codec, Format};
use crate::error::{BenchError, Result};
use crate::person::Person;
use bytes::{Bytes, BytesMut};
use prost::Message;

/// Wire representation of [`Person`]
#[derive(Clone, PartialEq, Message)]
pub struct PersonRecord {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub age: i32,
    #[prost(string, tag = "3")]
    pub email: String,
}

impl From<PersonRecord> for Person {
    fn from(record: PersonRecord) -> Self {
        Person {
            name: record.name,
            age: record.age,
            email: record.email,
        }
    }
}

impl From<&Person> for PersonRecord {
    fn from(person: &Person) -> Self {
        PersonRecord {
            name: person.name.clone(),
            age: person.age,
            email: person.email.clone(),
        }
    }
}

/// Encode record fields as a protobuf message
///
/// # Examples
///
/// ```
/// use codec_bench::codec::encode_binary;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = encode_binary("John Doe", 30, "johndoe@example.com")?;
/// assert_eq!(data.len(), 33);
/// assert_eq!(&data[..2], &[0x0a, 8]); // field 1, length-delimited, 8 bytes
/// # Ok(())
/// # }
/// ```
pub fn encode_binary(name: &str, age: i32, email: &str) -> Result<Bytes> {
    let record = PersonRecord {
        name: name.to_owned(),
        age,
        email: email.to_owned(),
    };
    encode_record(&record)
}

fn encode_record(record: &PersonRecord) -> Result<Bytes> {
    let mut buf = BytesMut::with_capacity(record.encoded_len());
    record.encode(&mut buf).map_err(|e| BenchError::Encode {
        format: Format::Binary,
        message: e.to_string(),
    })?;
    Ok(buf.freeze())
}

/// Decode a record from protobuf bytes
pub fn decode_binary(data: &[u8]) -> Result<Person> {
    PersonRecord::decode(data)
        .map(Person::from)
        .map_err(|e| BenchError::Decode {
            format: Format::Binary,
            message: e.to_string(),
        })
}

/// [`Codec`] implementation over [`encode_binary`] / [`decode_binary`]
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryCodec;

impl Codec for BinaryCodec {
    fn format(&self) -> Format {
        Format::Binary
    }

    fn encode(&self, person: &Person) -> Result<Bytes> {
        encode_record(&PersonRecord::from(person))
    }

    fn decode(&self, data: &[u8]) -> Result<Person> {
        decode_binary(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sample_layout() {
        let data = encode_binary("John Doe", 30, "johndoe@example.com").unwrap();

        let mut expected = vec![0x0a, 8];
        expected.extend_from_slice(b"John Doe");
        expected.extend_from_slice(&[0x10, 30]);
        expected.extend_from_slice(&[0x1a, 19]);
        expected.extend_from_slice(b"johndoe@example.com");

        assert_eq!(&data[..], &expected[..]);
    }

    #[test]
    fn test_roundtrip() {
        let person = Person::new("Jane", 42, "jane@example.com");
        let data = BinaryCodec.encode(&person).unwrap();
        assert_eq!(BinaryCodec.decode(&data).unwrap(), person);
    }

    #[test]
    fn test_defaults_omitted() {
        let data = encode_binary("", 0, "").unwrap();
        assert!(data.is_empty());
        assert_eq!(decode_binary(&data).unwrap(), Person::new("", 0, ""));
    }

    #[test]
    fn test_negative_age_roundtrip() {
        let data = encode_binary("n", -5, "e").unwrap();
        assert_eq!(decode_binary(&data).unwrap().age, -5);
    }

    #[test]
    fn test_decode_truncated_length() {
        // Field 1 declares 5 bytes but only 1 follows
        let err = decode_binary(&[0x0a, 0x05, b'a']).unwrap_err();
        assert!(matches!(
            err,
            BenchError::Decode {
                format: Format::Binary,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_wrong_wire_type() {
        // Field 1 sent as a varint instead of length-delimited
        assert!(decode_binary(&[0x08, 0x01]).is_err());
    }

    #[test]
    fn test_decode_invalid_utf8() {
        assert!(decode_binary(&[0x0a, 0x01, 0xff]).is_err());
    }

    #[test]
    fn test_decode_invalid_tag() {
        // Tag 0 is reserved
        assert!(decode_binary(&[0x00, 0x00]).is_err());
    }

    #[test]
    fn test_record_conversion() {
        let person = Person::sample();
        let record = PersonRecord::from(&person);
        assert_eq!(record.name, "John Doe");
        assert_eq!(Person::from(record), person);
    }
}
