use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{AsRefStr, Display, EnumString};

use crate::{
    binary,
    error::Error,
    fields::{FieldReader, ReadFields, Width},
    message::Message as _,
};

pub type ExecutionBlockNumber = u64;
pub type Gas = u64;
pub type UnixSeconds = u64;

/// [`PayloadAttributesV1`](https://github.com/ethereum/execution-apis/blob/v1.0.0-alpha.6/src/engine/specification.md#payloadattributesv1)
///
/// `random` was later renamed to `prevRandao`. This codec uses the older name.
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadAttributes {
    #[serde(with = "serde_utils::prefixed_hex_quantity")]
    pub timestamp: UnixSeconds,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub random: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub suggested_fee_recipient: Vec<u8>,
}

impl ReadFields for PayloadAttributes {
    const NAME: &'static str = "PayloadAttributes";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, Error> {
        Ok(Self {
            timestamp: fields.quantity("timestamp")?,
            random: fields.bytes("random", Width::Hash)?,
            suggested_fee_recipient: fields.bytes("suggestedFeeRecipient", Width::Address)?,
        })
    }
}

/// [`PayloadStatusV1`](https://github.com/ethereum/execution-apis/blob/v1.0.0-alpha.6/src/engine/specification.md#payloadstatusv1)
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadStatus {
    pub status: PayloadValidationStatus,
    #[serde(with = "serde_utils::prefixed_hex_bytes_option")]
    pub latest_valid_hash: Option<Vec<u8>>,
    pub validation_error: Option<String>,
}

impl ReadFields for PayloadStatus {
    const NAME: &'static str = "PayloadStatus";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, Error> {
        Ok(Self {
            status: fields.variant("status")?,
            latest_valid_hash: fields.optional_bytes("latestValidHash", Width::Hash)?,
            validation_error: fields.optional_string("validationError")?,
        })
    }
}

// Matching is case-sensitive. `valid` is an unknown variant, not `VALID`.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Debug,
    AsRefStr,
    Display,
    EnumString,
    DeserializeFromStr,
    SerializeDisplay,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(test, derive(enum_iterator::Sequence))]
pub enum PayloadValidationStatus {
    Valid,
    Invalid,
    Syncing,
    Accepted,
    InvalidBlockHash,
}

impl PayloadValidationStatus {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Self::Invalid | Self::InvalidBlockHash)
    }

    #[must_use]
    pub const fn is_syncing(self) -> bool {
        matches!(self, Self::Syncing)
    }
}

/// [`ForkchoiceStateV1`](https://github.com/ethereum/execution-apis/blob/v1.0.0-alpha.6/src/engine/specification.md#forkchoicestatev1)
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkchoiceState {
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub head_block_hash: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub safe_block_hash: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub finalized_block_hash: Vec<u8>,
}

impl ReadFields for ForkchoiceState {
    const NAME: &'static str = "ForkchoiceState";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, Error> {
        Ok(Self {
            head_block_hash: fields.bytes("headBlockHash", Width::Hash)?,
            safe_block_hash: fields.bytes("safeBlockHash", Width::Hash)?,
            finalized_block_hash: fields.bytes("finalizedBlockHash", Width::Hash)?,
        })
    }
}

/// [`ExecutionPayloadV1`](https://github.com/ethereum/execution-apis/blob/v1.0.0-alpha.6/src/engine/specification.md#executionpayloadv1)
///
/// `base_fee_per_gas` is kept as the 32 byte little-endian encoding of the base fee.
/// Each transaction is an opaque RLP-encoded blob.
#[derive(Clone, PartialEq, Eq, Default, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPayload {
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub parent_hash: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub fee_recipient: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub state_root: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub receipts_root: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub logs_bloom: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub random: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_quantity")]
    pub block_number: ExecutionBlockNumber,
    #[serde(with = "serde_utils::prefixed_hex_quantity")]
    pub gas_limit: Gas,
    #[serde(with = "serde_utils::prefixed_hex_quantity")]
    pub gas_used: Gas,
    #[serde(with = "serde_utils::prefixed_hex_quantity")]
    pub timestamp: UnixSeconds,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub extra_data: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub base_fee_per_gas: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes")]
    pub block_hash: Vec<u8>,
    #[serde(with = "serde_utils::prefixed_hex_bytes_sequence")]
    pub transactions: Vec<Vec<u8>>,
}

impl ReadFields for ExecutionPayload {
    const NAME: &'static str = "ExecutionPayload";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, Error> {
        Ok(Self {
            parent_hash: fields.bytes("parentHash", Width::Hash)?,
            fee_recipient: fields.bytes("feeRecipient", Width::Address)?,
            state_root: fields.bytes("stateRoot", Width::Hash)?,
            receipts_root: fields.bytes("receiptsRoot", Width::Hash)?,
            logs_bloom: fields.bytes("logsBloom", Width::LogsBloom)?,
            random: fields.bytes("random", Width::Hash)?,
            block_number: fields.quantity("blockNumber")?,
            gas_limit: fields.quantity("gasLimit")?,
            gas_used: fields.quantity("gasUsed")?,
            timestamp: fields.quantity("timestamp")?,
            extra_data: fields.bytes("extraData", Width::ExtraData)?,
            base_fee_per_gas: fields.bytes("baseFeePerGas", Width::Hash)?,
            block_hash: fields.bytes("blockHash", Width::Hash)?,
            transactions: fields.bytes_sequence("transactions")?,
        })
    }
}

/// [`engine_forkchoiceUpdatedV1` response](https://github.com/ethereum/execution-apis/blob/v1.0.0-alpha.6/src/engine/specification.md#response-1)
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkchoiceUpdatedResponse {
    pub payload_status: PayloadStatus,
    #[serde(with = "serde_utils::prefixed_hex_bytes_option")]
    pub payload_id: Option<Vec<u8>>,
}

impl ReadFields for ForkchoiceUpdatedResponse {
    const NAME: &'static str = "ForkchoiceUpdatedResponse";

    fn read_fields(fields: &mut FieldReader) -> Result<Self, Error> {
        Ok(Self {
            payload_status: fields.message("payloadStatus")?,
            payload_id: fields.optional_bytes("payloadId", Width::PayloadId)?,
        })
    }
}

// Human-readable formats go through `Message::decode` so that the grammar checks are the same
// regardless of how a message is decoded. Other formats are read field by field.
macro_rules! deserialize_via_decode {
    ($($message: ident),+ $(,)?) => {
        $(
            impl<'de> Deserialize<'de> for $message {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    if deserializer.is_human_readable() {
                        let json = Value::deserialize(deserializer)?;
                        Self::decode(json).map_err(D::Error::custom)
                    } else {
                        binary::$message::deserialize(deserializer).map(Into::into)
                    }
                }
            }
        )+
    };
}

deserialize_via_decode! {
    PayloadAttributes,
    PayloadStatus,
    ForkchoiceState,
    ExecutionPayload,
    ForkchoiceUpdatedResponse,
}
