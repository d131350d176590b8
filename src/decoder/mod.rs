pub mod payload;

use std::num::NonZeroUsize;

use serde_json::Value;

use crate::error::Error;
use crate::types::{DecodedError, GenericError, StructuredError};
use payload::Payload;

/// Caller-supplied decoding limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Maximum number of errors materialised in a cause chain. Deeper
    /// `"error"` values are dropped. `None` follows the payload all the way
    /// down, which recurses once per nesting level.
    pub max_depth: Option<NonZeroUsize>,
}

impl DecodeOptions {
    fn allows(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth <= max.get())
    }
}

/// Decode a remote error payload.
///
/// Text becomes a [`GenericError`], a record becomes a [`StructuredError`]
/// whose `"error"` field is decoded recursively into its cause, and anything
/// else returns `None`: the payload does not describe an error.
pub fn decode(value: &Value) -> Option<DecodedError> {
    decode_with(value, &DecodeOptions::default())
}

pub fn decode_with(value: &Value, options: &DecodeOptions) -> Option<DecodedError> {
    decode_at(value, 1, options)
}

/// Parse JSON text, then [`decode`] it. Only the parse can fail.
pub fn decode_json(json: &str) -> Result<Option<DecodedError>, Error> {
    let value: Value = serde_json::from_str(json)?;
    Ok(decode(&value))
}

fn decode_at(value: &Value, depth: usize, options: &DecodeOptions) -> Option<DecodedError> {
    match Payload::classify(value) {
        Payload::Text(message) => Some(GenericError::new(message).into()),
        Payload::Record(record) => {
            let mut error = StructuredError::new(record.kind(), record.message());
            if let Some(cause_value) = record.cause {
                if options.allows(depth + 1) {
                    if let Some(cause) = decode_at(cause_value, depth + 1, options) {
                        error = error.with_cause(cause);
                    }
                } else {
                    tracing::warn!(
                        "Remote error chain exceeds max depth {depth}, dropping deeper causes"
                    );
                }
            }
            Some(error.into())
        }
        Payload::Other => {
            tracing::trace!("Remote error payload is neither text nor record: {value}");
            None
        }
    }
}
