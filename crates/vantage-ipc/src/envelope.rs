//! Request and response envelopes.
//!
//! Clients send one JSON request per line:
//!
//! ```json
//! {"method":"entities/view-info","data":{"id":7}}
//! ```
//!
//! Responses are either `{"result":"ok", ...}` or
//! `{"result":"error","error":"<message>"}`. Unsolicited event messages
//! carry an `"event"` field instead of a `"result"` and are only sent to
//! clients that previously issued `events/watch`.

use std::fmt::Display;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::EnvelopeError;

/// Parsed request envelope from a client.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// The command name, e.g. `entities/list-views`.
    pub method: String,
    /// Method-specific parameters; an empty object when omitted.
    #[serde(default = "empty_object")]
    pub data: Value,
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

impl Request {
    /// Parses a single request line.
    ///
    /// Trailing whitespace (including the newline delimiter) is trimmed
    /// before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::Malformed`] if the line is empty or is not
    /// valid JSON matching the request schema.
    pub fn parse(line: &[u8]) -> Result<Self, EnvelopeError> {
        let trimmed = trim_trailing_whitespace(line);
        if trimmed.is_empty() {
            return Err(EnvelopeError::malformed("empty request line"));
        }

        serde_json::from_slice(trimmed).map_err(EnvelopeError::from_json_error)
    }

    /// Validates that the method name is present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`EnvelopeError::InvalidStructure`] if the method field is
    /// empty or contains only whitespace.
    pub fn validate(&self) -> Result<(), EnvelopeError> {
        if self.method.trim().is_empty() {
            return Err(EnvelopeError::invalid_structure("method field is empty"));
        }
        Ok(())
    }
}

/// Trims trailing ASCII whitespace from a byte slice.
fn trim_trailing_whitespace(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |pos| pos + 1);
    bytes.get(..end).unwrap_or_default()
}

/// Builds the bare success envelope `{"result":"ok"}`.
#[must_use]
pub fn ok() -> Value {
    let mut map = Map::new();
    map.insert("result".to_owned(), Value::from("ok"));
    Value::Object(map)
}

/// Builds a success envelope carrying one extra field.
#[must_use]
pub fn ok_with(field: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert("result".to_owned(), Value::from("ok"));
    map.insert(field.to_owned(), value);
    Value::Object(map)
}

/// Builds the error envelope `{"result":"error","error":<message>}`.
#[must_use]
pub fn error(message: impl Display) -> Value {
    let mut map = Map::new();
    map.insert("result".to_owned(), Value::from("error"));
    map.insert("error".to_owned(), Value::from(message.to_string()));
    Value::Object(map)
}
