use core::str::FromStr;

use log::debug;
use serde_json::{Map, Value};
use serde_utils::{prefixed_hex_bytes, prefixed_hex_quantity};

use crate::{config::DecodeConfig, error::Error};

const EXPECTING_OBJECT: &str = "an object";
const EXPECTING_STRING: &str = "a string";
const EXPECTING_ARRAY: &str = "an array";

/// Protocol widths of byte string fields.
///
/// Only checked if [`DecodeConfig::enforce_fixed_widths`] is set.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Width {
    Unbounded,
    Hash,
    Address,
    LogsBloom,
    PayloadId,
    ExtraData,
}

impl Width {
    const fn admits(self, length: usize) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Hash => length == 32,
            Self::Address => length == 20,
            Self::LogsBloom => length == 256,
            Self::PayloadId => length == 8,
            Self::ExtraData => length <= 32,
        }
    }

    const fn description(self) -> &'static str {
        match self {
            Self::Unbounded => "any number of bytes",
            Self::Hash => "32 bytes",
            Self::Address => "20 bytes",
            Self::LogsBloom => "256 bytes",
            Self::PayloadId => "8 bytes",
            Self::ExtraData => "at most 32 bytes",
        }
    }
}

/// Implemented by every message that can be read from a JSON object.
///
/// Fields must be read in declaration order so that the first violation is the one reported.
pub trait ReadFields: Sized {
    const NAME: &'static str;

    fn read_fields(fields: &mut FieldReader) -> Result<Self, Error>;
}

/// Consumes the fields of a single JSON object.
///
/// Anything left over when the message has been read is an unknown field.
pub struct FieldReader {
    message: &'static str,
    path: String,
    fields: Map<String, Value>,
    config: DecodeConfig,
}

impl FieldReader {
    pub(crate) fn read<M: ReadFields>(
        path: String,
        json: Value,
        config: DecodeConfig,
    ) -> Result<M, Error> {
        let Value::Object(fields) = json else {
            return Err(Error::UnexpectedType {
                field: path,
                expected: EXPECTING_OBJECT,
            });
        };

        let mut reader = Self {
            message: M::NAME,
            path,
            fields,
            config,
        };

        let message = M::read_fields(&mut reader)?;

        reader.finish()?;

        Ok(message)
    }

    pub fn bytes(&mut self, name: &str, width: Width) -> Result<Vec<u8>, Error> {
        let field = self.path(name);
        let json = self.required(name)?;
        self.decode_bytes(&field, &json, width)
    }

    pub fn optional_bytes(&mut self, name: &str, width: Width) -> Result<Option<Vec<u8>>, Error> {
        let field = self.path(name);

        self.optional(name)
            .map(|json| self.decode_bytes(&field, &json, width))
            .transpose()
    }

    pub fn bytes_sequence(&mut self, name: &str) -> Result<Vec<Vec<u8>>, Error> {
        let field = self.path(name);

        let Value::Array(items) = self.required(name)? else {
            return Err(Error::UnexpectedType {
                field,
                expected: EXPECTING_ARRAY,
            });
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.decode_bytes(&format!("{field}[{index}]"), item, Width::Unbounded)
            })
            .collect()
    }

    pub fn quantity(&mut self, name: &str) -> Result<u64, Error> {
        let field = self.path(name);
        let json = self.required(name)?;
        let string = as_str(&field, &json)?;

        prefixed_hex_quantity::decode(string).map_err(|source| Error::scalar(field, source))
    }

    pub fn optional_string(&mut self, name: &str) -> Result<Option<String>, Error> {
        let field = self.path(name);

        match self.optional(name) {
            Some(Value::String(string)) => Ok(Some(string)),
            Some(_) => Err(Error::UnexpectedType {
                field,
                expected: EXPECTING_STRING,
            }),
            None => Ok(None),
        }
    }

    pub fn variant<T: FromStr>(&mut self, name: &str) -> Result<T, Error> {
        let field = self.path(name);
        let json = self.required(name)?;
        let string = as_str(&field, &json)?;

        string.parse().map_err(|_| Error::UnknownEnum {
            field,
            value: string.to_owned(),
        })
    }

    pub fn message<M: ReadFields>(&mut self, name: &str) -> Result<M, Error> {
        let field = self.path(name);
        let json = self.required(name)?;
        FieldReader::read(field, json, self.config)
    }

    fn decode_bytes(&self, field: &str, json: &Value, width: Width) -> Result<Vec<u8>, Error> {
        let string = as_str(field, json)?;

        let bytes = prefixed_hex_bytes::decode(string)
            .map_err(|source| Error::scalar(field.to_owned(), source))?;

        if self.config.enforce_fixed_widths && !width.admits(bytes.len()) {
            return Err(Error::InvalidLength {
                field: field.to_owned(),
                expected: width.description(),
                actual: bytes.len(),
            });
        }

        Ok(bytes)
    }

    // `null` is treated the same as a missing field.
    fn optional(&mut self, name: &str) -> Option<Value> {
        self.fields.remove(name).filter(|json| !json.is_null())
    }

    fn required(&mut self, name: &str) -> Result<Value, Error> {
        self.optional(name).ok_or_else(|| Error::MissingField {
            field: self.path(name),
        })
    }

    fn finish(self) -> Result<(), Error> {
        for name in self.fields.keys() {
            let field = self.path(name);

            if self.config.reject_unknown_fields {
                return Err(Error::UnknownField {
                    field,
                    message: self.message,
                });
            }

            debug!("ignoring unknown field {field} in {}", self.message);
        }

        Ok(())
    }

    fn path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_owned()
        } else {
            format!("{}.{name}", self.path)
        }
    }
}

fn as_str<'json>(field: &str, json: &'json Value) -> Result<&'json str, Error> {
    json.as_str().ok_or_else(|| Error::UnexpectedType {
        field: field.to_owned(),
        expected: EXPECTING_STRING,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serde_utils::HexError;
    use test_case::test_case;

    use super::*;

    struct Sample {
        hash: Vec<u8>,
        number: u64,
        note: Option<String>,
    }

    impl ReadFields for Sample {
        const NAME: &'static str = "Sample";

        fn read_fields(fields: &mut FieldReader) -> Result<Self, Error> {
            Ok(Self {
                hash: fields.bytes("hash", Width::Hash)?,
                number: fields.quantity("number")?,
                note: fields.optional_string("note")?,
            })
        }
    }

    fn read(json: Value, config: DecodeConfig) -> Result<Sample, Error> {
        FieldReader::read(String::new(), json, config)
    }

    #[test_case(Width::Hash, 32, true)]
    #[test_case(Width::Hash, 31, false)]
    #[test_case(Width::Address, 20, true)]
    #[test_case(Width::Address, 32, false)]
    #[test_case(Width::LogsBloom, 256, true)]
    #[test_case(Width::PayloadId, 8, true)]
    #[test_case(Width::PayloadId, 0, false)]
    #[test_case(Width::ExtraData, 0, true)]
    #[test_case(Width::ExtraData, 32, true)]
    #[test_case(Width::ExtraData, 33, false)]
    #[test_case(Width::Unbounded, 1000, true)]
    fn width_admits(width: Width, length: usize, expected: bool) {
        assert_eq!(width.admits(length), expected);
    }

    #[test]
    fn reads_fields_in_declaration_order() {
        let json = json!({
            "number": "0x01",
            "hash": 1,
        });

        let error = read(json, DecodeConfig::default()).err();

        assert_eq!(
            error,
            Some(Error::UnexpectedType {
                field: "hash".to_owned(),
                expected: EXPECTING_STRING,
            }),
        );
    }

    #[test]
    fn null_required_field_is_missing() {
        let json = json!({ "hash": null, "number": "0x1" });

        assert_eq!(
            read(json, DecodeConfig::default()).err(),
            Some(Error::MissingField {
                field: "hash".to_owned(),
            }),
        );
    }

    #[test]
    fn null_optional_field_is_absent() -> Result<(), Error> {
        let json = json!({ "hash": "0x", "number": "0x1", "note": null });
        let sample = read(json, DecodeConfig::default())?;

        assert!(sample.hash.is_empty());
        assert_eq!(sample.number, 1);
        assert_eq!(sample.note, None);

        Ok(())
    }

    #[test]
    fn widths_are_only_checked_when_enabled() {
        let json = json!({ "hash": "0x0102", "number": "0x1" });

        assert!(read(json.clone(), DecodeConfig::default()).is_ok());

        let config = DecodeConfig {
            enforce_fixed_widths: true,
            ..DecodeConfig::default()
        };

        assert_eq!(
            read(json, config).err(),
            Some(Error::InvalidLength {
                field: "hash".to_owned(),
                expected: "32 bytes",
                actual: 2,
            }),
        );
    }

    #[test]
    fn non_object_is_rejected_with_empty_path() {
        assert_eq!(
            read(json!(["0x"]), DecodeConfig::default()).err(),
            Some(Error::UnexpectedType {
                field: String::new(),
                expected: EXPECTING_OBJECT,
            }),
        );
    }

    #[test]
    fn unknown_fields_are_logged_and_ignored_by_default() -> Result<(), Error> {
        testing_logger::setup();

        let json = json!({ "hash": "0x", "number": "0x1", "withdrawals": null });

        read(json, DecodeConfig::default())?;

        testing_logger::validate(|logs| {
            assert_eq!(logs.len(), 1);
            assert_eq!(logs[0].level, log::Level::Debug);
            assert_eq!(logs[0].body, "ignoring unknown field withdrawals in Sample");
        });

        Ok(())
    }

    #[test]
    fn unknown_fields_are_rejected_when_configured() {
        let json = json!({ "hash": "0x", "number": "0x1", "extra": "0x" });

        let config = DecodeConfig {
            reject_unknown_fields: true,
            ..DecodeConfig::default()
        };

        assert_eq!(
            read(json, config).err(),
            Some(Error::UnknownField {
                field: "extra".to_owned(),
                message: "Sample",
            }),
        );
    }

    #[test]
    fn sequence_errors_carry_element_index() {
        let mut reader = FieldReader {
            message: "Sample",
            path: "payload".to_owned(),
            fields: json!({ "transactions": ["0x00", "0x0"] })
                .as_object()
                .cloned()
                .unwrap_or_default(),
            config: DecodeConfig::default(),
        };

        assert_eq!(
            reader.bytes_sequence("transactions"),
            Err(Error::Format {
                field: "payload.transactions[1]".to_owned(),
                source: HexError::OddLength { digits: 1 },
            }),
        );
    }
}
