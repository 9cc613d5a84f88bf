use serde::Deserialize;

/// Controls how strictly messages are decoded.
///
/// The scalar grammars are always enforced. The switches here add checks that go beyond them.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeConfig {
    /// Require hashes, addresses, the logs bloom and payload IDs to have their protocol widths.
    pub enforce_fixed_widths: bool,
    /// Fail on fields that do not belong to the message instead of ignoring them.
    pub reject_unknown_fields: bool,
}

impl DecodeConfig {
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            enforce_fixed_widths: true,
            reject_unknown_fields: true,
        }
    }
}
