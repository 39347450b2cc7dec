//! HTTP plumbing: request/response data and the in-crate executor.
//!
//! # Design
//! Requests and responses are plain data. The decode layer builds
//! `HttpRequest` values and parses `HttpResponse` values without ever
//! touching the network, so a host can run the round-trip with its own HTTP
//! stack and stay fully in control of scheduling. [`Transport`] is the
//! in-crate executor for callers that want the fetch operations to perform
//! the round-trip themselves. Both endpoints are bodyless GETs, so a
//! request is nothing but its URL.
//!
//! All fields use owned types (`String`) so values can cross FFI
//! boundaries without lifetime concerns.

use crate::error::FetchError;

/// A GET request described as plain data.
///
/// Built by `DessertClient::build_*` methods and executed either by
/// [`Transport`] or by the host's own HTTP stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
}

/// An HTTP response described as plain data.
///
/// Constructed by whoever executed the request, then passed to
/// `DessertClient::parse_*` methods for status interpretation and decoding.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Executes [`HttpRequest`] values over the network with a shared agent.
///
/// Non-success statuses come back as data, not errors; interpreting them is
/// the parse layer's job. A single `Transport` is safe to share across
/// threads, so concurrent in-flight requests reuse one connection pool. No
/// retries are attempted.
#[derive(Clone)]
pub struct Transport {
    agent: ureq::Agent,
}

impl Transport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Run one GET round-trip and capture the response as plain data.
    pub fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, FetchError> {
        let mut response = self.agent.get(&request.url).call()?;
        let status = response.status().as_u16();
        let body = response.body_mut().read_to_string()?;
        Ok(HttpResponse { status, body })
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
