// This is used for lists of opaque byte strings like `transactions` in `ExecutionPayloadV1`.
// Order and duplicates are preserved. An empty list is distinct from a missing one.

use core::fmt::{Formatter, Result as FmtResult};

use serde::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

#[derive(Serialize)]
#[serde(bound = "T: AsRef<[u8]>")]
struct Wrapper<T>(#[serde(serialize_with = "crate::prefixed_hex_bytes::serialize")] T);

#[derive(Deserialize)]
struct Item(#[serde(deserialize_with = "crate::prefixed_hex_bytes::deserialize")] Vec<u8>);

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error> {
    struct SequenceVisitor;

    impl<'de> Visitor<'de> for SequenceVisitor {
        type Value = Vec<Vec<u8>>;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str("a sequence of strings of hexadecimal digits prefixed with 0x")
        }

        fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());

            while let Some(Item(item)) = seq.next_element()? {
                items.push(item);
            }

            Ok(items)
        }
    }

    deserializer.deserialize_seq(SequenceVisitor)
}

pub fn serialize<S: Serializer>(
    items: impl IntoIterator<Item = impl AsRef<[u8]>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(items.into_iter().map(Wrapper))
}
