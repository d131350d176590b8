#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod decoder;
pub mod error;
pub mod kind;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use decoder::payload::{CAUSE_KEY, CODE_KEY, ErrorRecord, Field, MESSAGE_KEY, Payload};
pub use decoder::{DecodeOptions, decode, decode_json, decode_with};
pub use error::Error;
pub use kind::{CODE_TABLE, ErrorKind, UNKNOWN_CODE};
pub use types::{DecodedError, GenericError, StructuredError};
