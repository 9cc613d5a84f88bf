use serde_utils::HexError;
use thiserror::Error;

/// The classes of decoding failures distinguished by callers.
///
/// Several [`Error`] variants map to the same kind.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ErrorKind {
    Format,
    Range,
    MissingField,
    UnknownEnum,
}

/// Fields are identified by their path from the root of the decoded object.
/// An empty path refers to the root itself.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum Error {
    #[error("field {field} is malformed: {source}")]
    Format { field: String, source: HexError },
    #[error("field {field} is out of range: {source}")]
    Range { field: String, source: HexError },
    #[error("field {field} is missing")]
    MissingField { field: String },
    #[error("field {field} contains unknown variant {value:?}")]
    UnknownEnum { field: String, value: String },
    #[error("field {field} has unexpected type (expected {expected})")]
    UnexpectedType {
        field: String,
        expected: &'static str,
    },
    #[error("field {field} has length {actual} (expected {expected})")]
    InvalidLength {
        field: String,
        expected: &'static str,
        actual: usize,
    },
    #[error("field {field} is not part of {message}")]
    UnknownField {
        field: String,
        message: &'static str,
    },
}

impl Error {
    pub(crate) fn scalar(field: String, source: HexError) -> Self {
        if source.is_overflow() {
            Self::Range { field, source }
        } else {
            Self::Format { field, source }
        }
    }

    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Format { .. }
            | Self::UnexpectedType { .. }
            | Self::InvalidLength { .. }
            | Self::UnknownField { .. } => ErrorKind::Format,
            Self::Range { .. } => ErrorKind::Range,
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::UnknownEnum { .. } => ErrorKind::UnknownEnum,
        }
    }

    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Format { field, .. }
            | Self::Range { field, .. }
            | Self::MissingField { field }
            | Self::UnknownEnum { field, .. }
            | Self::UnexpectedType { field, .. }
            | Self::InvalidLength { field, .. }
            | Self::UnknownField { field, .. } => field,
        }
    }
}
