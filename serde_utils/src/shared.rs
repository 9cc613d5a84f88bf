use crate::error::HexError;

pub(crate) const HEX_PREFIX: &str = "0x";

pub(crate) const fn expecting_prefixed_hex_or_bytes(human_readable: bool) -> &'static str {
    if human_readable {
        "a string of hexadecimal digits prefixed with 0x"
    } else {
        "a byte array"
    }
}

pub(crate) fn strip_hex_prefix(string: &str) -> Result<&str, HexError> {
    string
        .strip_prefix(HEX_PREFIX)
        .ok_or(HexError::MissingPrefix)
}

// Both `const_hex::decode` and `u64::from_str_radix` accept uppercase digits.
// The latter also accepts a leading `+`. Neither is valid on the wire.
pub(crate) fn check_lowercase_digits(digits: &str) -> Result<(), HexError> {
    match digits
        .char_indices()
        .find(|&(_, character)| !matches!(character, '0'..='9' | 'a'..='f'))
    {
        Some((position, character)) => Err(HexError::InvalidDigit {
            character,
            position,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("", Ok(()))]
    #[test_case("0123456789abcdef", Ok(()))]
    #[test_case("0A", Err(HexError::InvalidDigit { character: 'A', position: 1 }))]
    #[test_case("zz", Err(HexError::InvalidDigit { character: 'z', position: 0 }))]
    #[test_case("+5", Err(HexError::InvalidDigit { character: '+', position: 0 }))]
    #[test_case("ab é", Err(HexError::InvalidDigit { character: ' ', position: 2 }))]
    fn lowercase_digit_check(digits: &str, expected: Result<(), HexError>) {
        assert_eq!(check_lowercase_digits(digits), expected);
    }

    #[test]
    fn prefix_is_case_sensitive() {
        assert_eq!(strip_hex_prefix("0X12"), Err(HexError::MissingPrefix));
        assert_eq!(strip_hex_prefix("0x12"), Ok("12"));
    }
}
