//! Typed extraction of request parameters.
//!
//! Every helper names the offending field in its error so clients can fix
//! requests without guessing, and handlers can type-check all parameters
//! (required and optional alike) up front, before mutating any host state.

use serde_json::{Map, Value};

use crate::errors::MethodError;

fn missing(field: &str) -> MethodError {
    MethodError::invalid_parameter(format!("missing required field '{field}'"))
}

fn wrong_type(field: &str, expected: &str) -> MethodError {
    MethodError::invalid_parameter(format!("field '{field}' must be {expected}"))
}

/// Extracts a required unsigned integer field.
pub(crate) fn required_u64(data: &Value, field: &str) -> Result<u64, MethodError> {
    let value = data.get(field).ok_or_else(|| missing(field))?;
    value
        .as_u64()
        .ok_or_else(|| wrong_type(field, "an unsigned integer"))
}

/// Extracts a required boolean field.
pub(crate) fn required_bool(data: &Value, field: &str) -> Result<bool, MethodError> {
    let value = data.get(field).ok_or_else(|| missing(field))?;
    value.as_bool().ok_or_else(|| wrong_type(field, "a boolean"))
}

/// Extracts an optional unsigned integer field.
///
/// Absent fields are `Ok(None)`; present fields with the wrong type are
/// rejected.
pub(crate) fn optional_u64(data: &Value, field: &str) -> Result<Option<u64>, MethodError> {
    match data.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_u64()
            .map(Some)
            .ok_or_else(|| wrong_type(field, "an unsigned integer")),
    }
}

/// Extracts an optional boolean field.
pub(crate) fn optional_bool(data: &Value, field: &str) -> Result<Option<bool>, MethodError> {
    match data.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_bool()
            .map(Some)
            .ok_or_else(|| wrong_type(field, "a boolean")),
    }
}

/// Extracts an optional object field.
pub(crate) fn optional_object<'a>(
    data: &'a Value,
    field: &str,
) -> Result<Option<&'a Map<String, Value>>, MethodError> {
    match data.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_object()
            .map(Some)
            .ok_or_else(|| wrong_type(field, "an object")),
    }
}

/// Extracts an optional array field.
pub(crate) fn optional_array<'a>(
    data: &'a Value,
    field: &str,
) -> Result<Option<&'a Vec<Value>>, MethodError> {
    match data.get(field) {
        None => Ok(None),
        Some(value) => value
            .as_array()
            .map(Some)
            .ok_or_else(|| wrong_type(field, "an array")),
    }
}
