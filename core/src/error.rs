//! Error types for the network-management API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http` with the raw status
//! code and body for debugging. Transport failures are passed through as
//! text; this layer does not classify or retry them.

use thiserror::Error;

/// Errors produced while building, dispatching, or parsing an API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The transport could not complete the exchange.
    #[error("transport failed: {0}")]
    Transport(String),

    /// A required path parameter or payload was empty.
    #[error("missing required parameter `{0}`")]
    MissingParameter(&'static str),

    /// A parameter is present but cannot be encoded into the request.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Errors produced while loading a [`ClientConfig`](crate::ClientConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A configuration field has an invalid value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
