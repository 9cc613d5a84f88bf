use core::fmt::{Formatter, LowerHex, Result as FmtResult};

use serde::{
    de::{Error as DeserializeError, Visitor},
    Deserializer, Serializer,
};

use crate::{error::HexError, shared};

const MAX_DIGITS: usize = (u64::BITS / 4) as usize;

/// Encodes `number` with the minimal number of lowercase digits.
///
/// Zero is encoded as `0x0`.
#[must_use]
pub fn encode(number: u64) -> String {
    format!("{number:#x}")
}

/// Decodes a canonical `QUANTITY`.
///
/// Decoding is strict: input that [`encode`] would never produce is rejected rather than
/// normalized. In particular, `0x05` and `0x` are errors.
pub fn decode(string: &str) -> Result<u64, HexError> {
    let digits = shared::strip_hex_prefix(string)?;

    if digits.is_empty() {
        return Err(HexError::MissingDigits);
    }

    shared::check_lowercase_digits(digits)?;

    if digits == "0" {
        return Ok(0);
    }

    // Values of type `QUANTITY` in the Engine API must not have leading zeros after the
    // hexadecimal prefix (except for the number 0). See:
    // <https://github.com/ethereum/execution-apis/blob/b7c5d3420e00648f456744d121ffbd929862924d/src/engine/common.md#encoding>
    if digits.starts_with('0') {
        return Err(HexError::LeadingZeros);
    }

    if digits.len() > MAX_DIGITS {
        return Err(HexError::Overflow { bits: u64::BITS });
    }

    u64::from_str_radix(digits, 16).map_err(|_| HexError::Overflow { bits: u64::BITS })
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    struct HexVisitor;

    impl Visitor<'_> for HexVisitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut Formatter) -> FmtResult {
            formatter.write_str(shared::expecting_prefixed_hex_or_bytes(true))
        }

        fn visit_str<E: DeserializeError>(self, string: &str) -> Result<Self::Value, E> {
            decode(string).map_err(E::custom)
        }
    }

    deserializer.deserialize_str(HexVisitor)
}

pub fn serialize<S: Serializer>(number: impl LowerHex, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{number:#x}"))
}

#[cfg(test)]
mod tests {
    use serde_json::{value::Serializer, Result, Value};
    use test_case::test_case;

    use super::*;

    #[test_case(0, "0x0")]
    #[test_case(1, "0x1")]
    #[test_case(5, "0x5")]
    #[test_case(0x10, "0x10")]
    #[test_case(1_000_000_000_000, "0xe8d4a51000")]
    #[test_case(u64::MAX, "0xffffffffffffffff")]
    fn u64_string_round_trip(number: u64, string: &str) -> Result<()> {
        let json = Value::from(string);

        assert_eq!(encode(number), string);
        assert_eq!(decode(string), Ok(number));
        assert_eq!(deserialize(json.clone())?, number);
        assert_eq!(serialize(number, Serializer)?, json);

        Ok(())
    }

    #[test_case("",                    HexError::MissingPrefix;                                "empty string")]
    #[test_case("0",                   HexError::MissingPrefix;                                "missing hexadecimal prefix")]
    #[test_case("5",                   HexError::MissingPrefix;                                "bare digit")]
    #[test_case("0x",                  HexError::MissingDigits;                                "missing hexadecimal digits")]
    #[test_case("0x05",                HexError::LeadingZeros;                                 "single leading zero")]
    #[test_case("0x00",                HexError::LeadingZeros;                                 "zero with leading zero")]
    #[test_case("0x000034",            HexError::LeadingZeros;                                 "leading zeros after hexadecimal prefix")]
    #[test_case("0xA",                 HexError::InvalidDigit { character: 'A', position: 0 }; "uppercase digit")]
    #[test_case("0x+5",                HexError::InvalidDigit { character: '+', position: 0 }; "sign")]
    #[test_case("0xzz",                HexError::InvalidDigit { character: 'z', position: 0 }; "invalid digits")]
    #[test_case("0x10000000000000000", HexError::Overflow { bits: 64 };                        "one more than u64::MAX")]
    #[test_case("0xfffffffffffffffff", HexError::Overflow { bits: 64 };                        "one digit too many for u64")]
    fn decode_fails_on(string: &str, expected: HexError) {
        assert_eq!(decode(string), Err(expected));
    }

    #[test]
    fn overflow_is_distinguishable_from_malformed_input() {
        assert!(decode("0x10000000000000000").is_err_and(HexError::is_overflow));
        assert!(decode("0x05").is_err_and(|error| !error.is_overflow()));
    }

    #[test]
    fn every_power_of_two_round_trips() {
        for shift in 0..u64::BITS {
            let number = 1 << shift;

            assert_eq!(decode(&encode(number)), Ok(number));
            assert_eq!(decode(&encode(number - 1)), Ok(number - 1));
        }
    }

    #[test]
    fn deserialize_rejects_json_numbers() {
        deserialize(Value::from(5)).expect_err("quantities must be strings");
    }
}
