use core::fmt::{Formatter, Result as FmtResult};

use serde::{
    de::{Error, Visitor},
    Deserializer, Serializer,
};

use crate::{error::HexError, shared};

/// Encodes `bytes` as `0x` followed by two lowercase digits per byte.
///
/// The empty slice encodes to `0x`.
#[must_use]
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    const_hex::encode_prefixed(bytes)
}

pub fn decode(string: &str) -> Result<Vec<u8>, HexError> {
    let digits = shared::strip_hex_prefix(string)?;

    shared::check_lowercase_digits(digits)?;

    if digits.len() % 2 == 1 {
        return Err(HexError::OddLength {
            digits: digits.len(),
        });
    }

    const_hex::decode(digits).map_err(HexError::Decode)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
    struct BytesVisitor {
        human_readable: bool,
    }

    impl Visitor<'_> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str(shared::expecting_prefixed_hex_or_bytes(self.human_readable))
        }

        fn visit_byte_buf<E>(self, bytes: Vec<u8>) -> Result<Self::Value, E> {
            Ok(bytes)
        }

        fn visit_bytes<E>(self, bytes: &[u8]) -> Result<Self::Value, E> {
            Ok(bytes.to_owned())
        }

        fn visit_str<E: Error>(self, string: &str) -> Result<Self::Value, E> {
            decode(string).map_err(E::custom)
        }
    }

    let human_readable = deserializer.is_human_readable();
    let visitor = BytesVisitor { human_readable };

    if human_readable {
        deserializer.deserialize_str(visitor)
    } else {
        deserializer.deserialize_byte_buf(visitor)
    }
}

pub fn serialize<S: Serializer>(bytes: impl AsRef<[u8]>, serializer: S) -> Result<S::Ok, S::Error> {
    if serializer.is_human_readable() {
        serializer.serialize_str(encode(bytes).as_str())
    } else {
        serializer.serialize_bytes(bytes.as_ref())
    }
}
