use thiserror::Error;

/// A violation of the `0x`-prefixed hexadecimal grammars used by the Engine API.
///
/// All variants except [`HexError::Overflow`] describe malformed input.
/// [`HexError::Overflow`] describes well-formed input whose value does not fit.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum HexError {
    #[error("string does not have hexadecimal prefix")]
    MissingPrefix,
    #[error("string contains no hexadecimal digits")]
    MissingDigits,
    #[error("string contains an odd number of hexadecimal digits ({digits})")]
    OddLength { digits: usize },
    #[error("string contains invalid hexadecimal digit {character:?} at position {position}")]
    InvalidDigit { character: char, position: usize },
    #[error("string contains leading zeros after hexadecimal prefix")]
    LeadingZeros,
    #[error("value does not fit in {bits} bits")]
    Overflow { bits: u32 },
    // Only produced if the grammar checks let malformed digits through.
    #[error(transparent)]
    Decode(const_hex::FromHexError),
}

impl HexError {
    #[must_use]
    pub const fn is_overflow(self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
