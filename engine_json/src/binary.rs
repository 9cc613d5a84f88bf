// Field-wise representations of messages for formats that are not human-readable.
// Byte strings are stored as raw bytes in those formats, which `Message::decode` cannot read.

use serde::Deserialize;

use crate::types::{self, ExecutionBlockNumber, Gas, PayloadValidationStatus, UnixSeconds};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadAttributes {
    #[serde(deserialize_with = "serde_utils::prefixed_hex_quantity::deserialize")]
    timestamp: UnixSeconds,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    random: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    suggested_fee_recipient: Vec<u8>,
}

impl From<PayloadAttributes> for types::PayloadAttributes {
    fn from(attributes: PayloadAttributes) -> Self {
        let PayloadAttributes {
            timestamp,
            random,
            suggested_fee_recipient,
        } = attributes;

        Self {
            timestamp,
            random,
            suggested_fee_recipient,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayloadStatus {
    status: PayloadValidationStatus,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes_option::deserialize")]
    latest_valid_hash: Option<Vec<u8>>,
    validation_error: Option<String>,
}

impl From<PayloadStatus> for types::PayloadStatus {
    fn from(status: PayloadStatus) -> Self {
        let PayloadStatus {
            status,
            latest_valid_hash,
            validation_error,
        } = status;

        Self {
            status,
            latest_valid_hash,
            validation_error,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkchoiceState {
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    head_block_hash: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    safe_block_hash: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    finalized_block_hash: Vec<u8>,
}

impl From<ForkchoiceState> for types::ForkchoiceState {
    fn from(state: ForkchoiceState) -> Self {
        let ForkchoiceState {
            head_block_hash,
            safe_block_hash,
            finalized_block_hash,
        } = state;

        Self {
            head_block_hash,
            safe_block_hash,
            finalized_block_hash,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionPayload {
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    parent_hash: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    fee_recipient: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    state_root: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    receipts_root: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    logs_bloom: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    random: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_quantity::deserialize")]
    block_number: ExecutionBlockNumber,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_quantity::deserialize")]
    gas_limit: Gas,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_quantity::deserialize")]
    gas_used: Gas,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_quantity::deserialize")]
    timestamp: UnixSeconds,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    extra_data: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    base_fee_per_gas: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes::deserialize")]
    block_hash: Vec<u8>,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes_sequence::deserialize")]
    transactions: Vec<Vec<u8>>,
}

impl From<ExecutionPayload> for types::ExecutionPayload {
    fn from(payload: ExecutionPayload) -> Self {
        let ExecutionPayload {
            parent_hash,
            fee_recipient,
            state_root,
            receipts_root,
            logs_bloom,
            random,
            block_number,
            gas_limit,
            gas_used,
            timestamp,
            extra_data,
            base_fee_per_gas,
            block_hash,
            transactions,
        } = payload;

        Self {
            parent_hash,
            fee_recipient,
            state_root,
            receipts_root,
            logs_bloom,
            random,
            block_number,
            gas_limit,
            gas_used,
            timestamp,
            extra_data,
            base_fee_per_gas,
            block_hash,
            transactions,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForkchoiceUpdatedResponse {
    payload_status: types::PayloadStatus,
    #[serde(deserialize_with = "serde_utils::prefixed_hex_bytes_option::deserialize")]
    payload_id: Option<Vec<u8>>,
}

impl From<ForkchoiceUpdatedResponse> for types::ForkchoiceUpdatedResponse {
    fn from(response: ForkchoiceUpdatedResponse) -> Self {
        let ForkchoiceUpdatedResponse {
            payload_status,
            payload_id,
        } = response;

        Self {
            payload_status,
            payload_id,
        }
    }
}
