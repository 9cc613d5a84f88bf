use serde::Serialize;
use serde_json::Value;

use crate::{
    config::DecodeConfig,
    error::Error,
    fields::{FieldReader, ReadFields},
};

/// Conversion between Engine API messages and their JSON representation.
///
/// Encoding cannot fail. Decoding reports the first field that violates its grammar.
pub trait Message: ReadFields + Serialize {
    #[must_use]
    fn encode(&self) -> Value {
        // Messages contain no maps with non-string keys and their fields never fail to serialize.
        serde_json::to_value(self).expect("Engine API messages should always serialize to JSON")
    }

    #[must_use]
    fn encode_to_string(&self) -> String {
        self.encode().to_string()
    }

    fn decode(json: Value) -> Result<Self, Error> {
        Self::decode_with(json, DecodeConfig::default())
    }

    fn decode_with(json: Value, config: DecodeConfig) -> Result<Self, Error> {
        FieldReader::read(String::new(), json, config)
    }
}

impl<M: ReadFields + Serialize> Message for M {}
