//! `0x`-prefixed hexadecimal encodings used by the Engine API.
//!
//! Each module can be used directly through `encode` and `decode` or as a
//! [`#[serde(with = "...")]`](https://serde.rs/field-attrs.html#with) module.

pub use crate::error::HexError;

pub mod prefixed_hex_bytes;
pub mod prefixed_hex_bytes_option;
pub mod prefixed_hex_bytes_sequence;
pub mod prefixed_hex_quantity;

mod error;
mod shared;
