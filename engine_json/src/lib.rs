//! JSON codec for the messages exchanged over the Engine API.
//!
//! Byte strings and quantities are encoded with [`serde_utils`]. Decoding is strict:
//! quantities must be canonical and hexadecimal digits must be lowercase.

pub use crate::{
    config::DecodeConfig,
    error::{Error, ErrorKind},
    message::Message,
    types::{
        ExecutionBlockNumber, ExecutionPayload, ForkchoiceState, ForkchoiceUpdatedResponse, Gas,
        PayloadAttributes, PayloadStatus, PayloadValidationStatus, UnixSeconds,
    },
};

mod binary;
mod config;
mod error;
mod fields;
mod message;
mod types;
