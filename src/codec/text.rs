//! JSON codec adapter
//!
//! Encodes a Person as a compact JSON object with inline field names:
//! `{"name":"John Doe","age":30,"email":"johndoe@example.com"}`.
//! Unknown fields are ignored on decode; missing fields are an error.

use crate::codec::{Codec, Format};
use crate::error::{BenchError, Result};
use crate::person::Person;
use bytes::{BufMut, Bytes, BytesMut};
use serde::Serialize;

// Field order here fixes the key order on the wire.
#[derive(Serialize)]
struct PersonRef<'a> {
    name: &'a str,
    age: i32,
    email: &'a str,
}

/// Encode record fields as JSON
///
/// # Examples
///
/// ```
/// use codec_bench::codec::encode_text;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let data = encode_text("John Doe", 30, "johndoe@example.com")?;
/// assert_eq!(&data[..], br#"{"name":"John Doe","age":30,"email":"johndoe@example.com"}"#);
/// # Ok(())
/// # }
/// ```
pub fn encode_text(name: &str, age: i32, email: &str) -> Result<Bytes> {
    let record = PersonRef { name, age, email };

    let mut writer = BytesMut::with_capacity(32 + name.len() + email.len()).writer();
    serde_json::to_writer(&mut writer, &record).map_err(|e| BenchError::Encode {
        format: Format::Text,
        message: e.to_string(),
    })?;

    Ok(writer.into_inner().freeze())
}

/// Decode a record from JSON bytes
pub fn decode_text(data: &[u8]) -> Result<Person> {
    serde_json::from_slice(data).map_err(|e| BenchError::Decode {
        format: Format::Text,
        message: e.to_string(),
    })
}

/// [`Codec`] implementation over [`encode_text`] / [`decode_text`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl Codec for TextCodec {
    fn format(&self) -> Format {
        Format::Text
    }

    fn encode(&self, person: &Person) -> Result<Bytes> {
        encode_text(&person.name, person.age, &person.email)
    }

    fn decode(&self, data: &[u8]) -> Result<Person> {
        decode_text(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_sample() {
        let data = encode_text("John Doe", 30, "johndoe@example.com").unwrap();
        assert_eq!(
            std::str::from_utf8(&data).unwrap(),
            r#"{"name":"John Doe","age":30,"email":"johndoe@example.com"}"#
        );
        assert_eq!(data.len(), 58);
    }

    #[test]
    fn test_roundtrip() {
        let person = Person::new("Zoë \"Q\" Smith", 99, "zoe@example.com");
        let data = TextCodec.encode(&person).unwrap();
        assert_eq!(TextCodec.decode(&data).unwrap(), person);
    }

    #[test]
    fn test_negative_age_roundtrip() {
        let data = encode_text("n", -1, "e").unwrap();
        assert_eq!(decode_text(&data).unwrap().age, -1);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let data = br#"{"name":"a","age":1,"email":"b","phone":"555"}"#;
        assert_eq!(decode_text(data).unwrap(), Person::new("a", 1, "b"));
    }

    #[test]
    fn test_decode_malformed() {
        let err = decode_text(b"{\"name\":").unwrap_err();
        assert!(matches!(
            err,
            BenchError::Decode {
                format: Format::Text,
                ..
            }
        ));
    }

    #[test]
    fn test_decode_type_mismatch() {
        let data = br#"{"name":"a","age":"thirty","email":"b"}"#;
        assert!(matches!(decode_text(data), Err(BenchError::Decode { .. })));
    }

    #[test]
    fn test_decode_missing_field() {
        let data = br#"{"name":"a","age":1}"#;
        assert!(matches!(decode_text(data), Err(BenchError::Decode { .. })));
    }

    #[test]
    fn test_decode_age_out_of_i32_range() {
        let data = br#"{"name":"a","age":4294967296,"email":"b"}"#;
        assert!(decode_text(data).is_err());
    }
}
