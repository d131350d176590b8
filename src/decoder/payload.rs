//! Typed view over a decoded remote error payload.
//!
//! Only two node shapes carry an error: text and a string-keyed record. The
//! record's fields are looked up once and kept as [`Field`]s so that an absent
//! key and a key holding the wrong type stay distinguishable.

use serde_json::{Map, Value};

use crate::kind::ErrorKind;

pub const CODE_KEY: &str = "code";
pub const MESSAGE_KEY: &str = "message";
pub const CAUSE_KEY: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    Text(&'a str),
    Record(ErrorRecord<'a>),
    /// Numbers, booleans, lists and null.
    Other,
}

impl<'a> Payload<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            Value::Object(map) => Self::Record(ErrorRecord::from_map(map)),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => Self::Other,
        }
    }
}

/// A string-valued record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    Absent,
    Text(&'a str),
    Mistyped(&'a Value),
}

impl<'a> Field<'a> {
    fn lookup(map: &'a Map<String, Value>, key: &str) -> Self {
        match map.get(key) {
            None => Self::Absent,
            Some(Value::String(text)) => Self::Text(text),
            Some(other) => Self::Mistyped(other),
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(text) => Some(text),
            Self::Absent | Self::Mistyped(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorRecord<'a> {
    pub code: Field<'a>,
    pub message: Field<'a>,
    /// Any value under `"error"`, decoded recursively by the caller.
    pub cause: Option<&'a Value>,
}

impl<'a> ErrorRecord<'a> {
    pub fn from_map(map: &'a Map<String, Value>) -> Self {
        Self {
            code: Field::lookup(map, CODE_KEY),
            message: Field::lookup(map, MESSAGE_KEY),
            cause: map.get(CAUSE_KEY),
        }
    }

    /// Classification is only attempted on a string code; an absent or
    /// non-string code is `Unknown`.
    pub fn kind(&self) -> ErrorKind {
        match self.code {
            Field::Text(code) => {
                let kind = ErrorKind::from_code(code);
                if kind == ErrorKind::Unknown {
                    tracing::debug!("Unrecognized remote error code: {code:?}");
                }
                kind
            }
            Field::Mistyped(value) => {
                tracing::debug!("Ignoring non-string remote error code: {value}");
                ErrorKind::Unknown
            }
            Field::Absent => ErrorKind::Unknown,
        }
    }

    pub fn message(&self) -> &'a str {
        if let Field::Mistyped(value) = self.message {
            tracing::debug!("Ignoring non-string remote error message: {value}");
        }
        self.message.as_text().unwrap_or_default()
    }
}
