// Nullable byte strings such as `latestValidHash` in `PayloadStatusV1`.
// `None` is represented as `null` rather than by omitting the field.

use core::fmt::{Formatter, Result as FmtResult};

use serde::{de::Visitor, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
#[serde(bound = "T: AsRef<[u8]>")]
struct Wrapper<T>(#[serde(serialize_with = "crate::prefixed_hex_bytes::serialize")] T);

pub fn deserialize<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Vec<u8>>, D::Error> {
    struct OptionVisitor;

    impl<'de> Visitor<'de> for OptionVisitor {
        type Value = Option<Vec<u8>>;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str("null or a string of hexadecimal digits prefixed with 0x")
        }

        fn visit_none<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(
            self,
            deserializer: D,
        ) -> Result<Self::Value, D::Error> {
            crate::prefixed_hex_bytes::deserialize(deserializer).map(Some)
        }
    }

    deserializer.deserialize_option(OptionVisitor)
}

pub fn serialize<S: Serializer>(
    bytes: &Option<impl AsRef<[u8]>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match bytes {
        Some(bytes) => serializer.serialize_some(&Wrapper(bytes)),
        None => serializer.serialize_none(),
    }
}
