use std::fmt;

use serde::Serialize;

use crate::decoder::payload::{CAUSE_KEY, CODE_KEY, MESSAGE_KEY};
use crate::kind::ErrorKind;

/// Message-only error produced from a bare text payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GenericError {
    message: String,
}

impl GenericError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Classified remote error with an optional, exclusively-owned cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredError {
    kind: ErrorKind,
    message: String,
    cause: Option<Box<DecodedError>>,
}

impl StructuredError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<DecodedError>) -> Self {
        self.cause = Some(Box::new(cause.into()));
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Possibly empty.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&DecodedError> {
        self.cause.as_deref()
    }

    fn to_value(&self) -> serde_json::Value {
        let mut record = serde_json::Map::new();
        record.insert(
            CODE_KEY.to_string(),
            serde_json::Value::String(self.kind.code().to_string()),
        );
        record.insert(
            MESSAGE_KEY.to_string(),
            serde_json::Value::String(self.message.clone()),
        );
        if let Some(cause) = &self.cause {
            record.insert(CAUSE_KEY.to_string(), cause.to_value());
        }
        serde_json::Value::Object(record)
    }
}

/// Renders `"{message}: {cause}"` when both are present, falls back to
/// whichever one is, and to the kind's wire code when neither is.
impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.message.is_empty(), &self.cause) {
            (false, Some(cause)) => write!(f, "{}: {cause}", self.message),
            (false, None) => f.write_str(&self.message),
            (true, Some(cause)) => write!(f, "{cause}"),
            (true, None) => f.write_str(self.kind.code()),
        }
    }
}

impl std::error::Error for StructuredError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

/// Result of decoding a remote error payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodedError {
    #[error(transparent)]
    Generic(#[from] GenericError),

    #[error(transparent)]
    Structured(#[from] StructuredError),
}

impl DecodedError {
    pub fn message(&self) -> &str {
        match self {
            Self::Generic(e) => e.message(),
            Self::Structured(e) => e.message(),
        }
    }

    /// `None` for generic errors, which carry no classification.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Generic(_) => None,
            Self::Structured(e) => Some(e.kind()),
        }
    }

    pub fn cause(&self) -> Option<&DecodedError> {
        match self {
            Self::Generic(_) => None,
            Self::Structured(e) => e.cause(),
        }
    }

    /// Walks from this error down to the root cause, inclusive.
    pub fn chain(&self) -> impl Iterator<Item = &DecodedError> {
        std::iter::successors(Some(self), |e| e.cause())
    }

    /// Number of errors in the chain, counting this one.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    pub fn root_cause(&self) -> &DecodedError {
        let mut current = self;
        while let Some(next) = current.cause() {
            current = next;
        }
        current
    }

    pub fn is_retriable(&self) -> bool {
        self.kind().is_some_and(ErrorKind::is_retriable)
    }

    /// Re-encode into the payload shape the decoder reads: a JSON string for
    /// generic errors, a `{"code", "message", "error"?}` record otherwise.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Generic(e) => serde_json::Value::String(e.message.clone()),
            Self::Structured(e) => e.to_value(),
        }
    }
}

impl Serialize for DecodedError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}
