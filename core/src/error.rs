//! Error types for the dessert API client.
//!
//! # Design
//! A lookup miss is not represented here: an id with no match is a normal
//! `Ok(None)` outcome of the lookup operation, so this enum only covers the
//! ways a fetch can actually fail. `Status` keeps the raw status code and
//! body because the API answers 200 even for no-match queries; anything
//! else means a proxy or an outage and is surfaced verbatim instead of
//! being decoded.

use thiserror::Error;

/// Errors returned by `DessertClient` build, parse, and fetch methods.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The endpoint URL could not be constructed from the base URL.
    #[error("invalid request URL: {0}")]
    InvalidRequest(#[from] url::ParseError),

    /// The request never completed: connectivity, DNS, or a body cut short.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The server answered with a non-success status code.
    #[error("unexpected HTTP status {status}")]
    Status {
        /// Raw status code of the response.
        status: u16,
        /// Response body, kept for diagnostics.
        body: String,
    },

    /// The response body does not match the expected envelope shape.
    #[error("undecodable response body: {0}")]
    Decode(#[from] serde_json::Error),
}
