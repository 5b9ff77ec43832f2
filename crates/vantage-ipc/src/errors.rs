//! Error types for the control surface.
//!
//! Failures fall into two families with very different audiences.
//! [`MethodError`] is the per-request taxonomy rendered into the error
//! envelope and sent back to the requesting client; nothing in it is fatal.
//! [`CoreError`] covers conditions that indicate a bug in the host wiring
//! (duplicate method registration, subscription ref-count underflow); it is
//! never constructible from client-supplied data, and hosts treat it as
//! fatal.
//! [`EnvelopeError`] covers request-line parsing, before a request exists.

use thiserror::Error;

use crate::clients::ClientId;

/// Recoverable, per-request failures reported to the requesting client.
#[derive(Debug, Error)]
pub enum MethodError {
    /// A required or optional field is missing or has the wrong JSON type.
    #[error("{message}")]
    InvalidParameter {
        /// Human-readable description naming the offending field.
        message: String,
    },

    /// The request referenced an entity that does not exist.
    #[error("{message}")]
    NotFound {
        /// Human-readable description naming the entity kind.
        message: String,
    },

    /// The entity exists but does not support the requested action.
    #[error("{message}")]
    Unsupported {
        /// Human-readable description of the refused action.
        message: String,
    },

    /// No handler is registered under the requested method name.
    #[error("no such method '{method}'")]
    MethodNotFound {
        /// The name that failed to resolve.
        method: String,
    },
}

impl MethodError {
    /// Creates an invalid-parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Creates an unsupported-operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }

    /// Creates a method-not-found error.
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            method: method.into(),
        }
    }
}

/// Unrecoverable conditions indicating a bug in core or host wiring.
///
/// These are surfaced as `Result`s rather than panics so the host decides
/// how to abort, but they must never be reachable from client input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A method name was registered twice.
    #[error("method '{name}' is already registered")]
    DuplicateMethod {
        /// The colliding method name.
        name: String,
    },

    /// An event name outside the catalog reached the multiplexer.
    #[error("event '{name}' is not in the catalog")]
    UnknownEvent {
        /// The unknown event name.
        name: String,
    },

    /// A subscription was decremented more often than incremented.
    #[error("subscription ref count for '{name}' would drop below zero")]
    RefCountUnderflow {
        /// The event name whose count underflowed.
        name: String,
    },

    /// A request or subscription change referenced a client that is not
    /// connected.
    #[error("client {client} is not connected")]
    UnknownClient {
        /// The stale client handle.
        client: ClientId,
    },

    /// A handler result could not be serialized.
    #[error("failed to serialise response: {0}")]
    SerializeResponse(#[from] serde_json::Error),
}

impl CoreError {
    /// Creates a duplicate-method error.
    pub fn duplicate_method(name: impl Into<String>) -> Self {
        Self::DuplicateMethod { name: name.into() }
    }

    /// Creates an unknown-event error.
    pub fn unknown_event(name: impl Into<String>) -> Self {
        Self::UnknownEvent { name: name.into() }
    }

    /// Creates a ref-count underflow error.
    pub fn ref_count_underflow(name: impl Into<String>) -> Self {
        Self::RefCountUnderflow { name: name.into() }
    }
}

/// Failure of a method handler: either a client-visible [`MethodError`]
/// rendered into the error envelope, or a fatal [`CoreError`] bubbled to
/// the host.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Recoverable failure reported to the requesting client.
    #[error(transparent)]
    Method(#[from] MethodError),

    /// Fatal failure propagated to the host.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Errors surfaced while parsing a request line, before dispatch.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The line could not be parsed as a request envelope.
    #[error("malformed request: {message}")]
    Malformed {
        /// Human-readable parse failure description.
        message: String,
        /// Underlying JSON error, when one exists.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The envelope parsed but violates structural requirements.
    #[error("invalid request structure: {message}")]
    InvalidStructure {
        /// Human-readable description of the violation.
        message: String,
    },
}

impl EnvelopeError {
    /// Creates a malformed-request error from a serde error.
    pub fn from_json_error(source: serde_json::Error) -> Self {
        Self::Malformed {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Creates a malformed-request error with a custom message.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an invalid-structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
