//! Stateless request builder, response parser, and fetch entry points for
//! the dessert API.
//!
//! # Design
//! `DessertClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`, keeping the decode layer deterministic and free of I/O;
//! `fetch_list` and `fetch_detail` compose the halves with a [`Transport`]
//! for callers that want the round-trip performed here. Repeated or
//! concurrent fetches share nothing but the transport's agent; the client
//! neither orders nor de-duplicates requests, so a caller that reissues a
//! fetch simply observes whichever response resolves for it.

use url::Url;

use crate::error::FetchError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::types::{DessertDetail, DessertSummary, DetailRecord, ListEnvelope, LookupEnvelope};

/// Base URL of the production recipe API.
pub const DEFAULT_BASE_URL: &str = "https://themealdb.com/api/json/v1/1";

/// Category the listing is fixed to.
const CATEGORY: &str = "Dessert";

/// Synchronous, stateless client for the dessert endpoints of the recipe
/// API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network; the caller executes the HTTP round-trip between
/// `build_*` and `parse_*`, or hands that job to the `fetch_*` methods.
#[derive(Debug, Clone)]
pub struct DessertClient {
    base_url: String,
}

impl DessertClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Build the category listing request: `{base}/filter.php?c=Dessert`.
    pub fn build_list_desserts(&self) -> Result<HttpRequest, FetchError> {
        let mut url = Url::parse(&format!("{}/filter.php", self.base_url))?;
        url.query_pairs_mut().append_pair("c", CATEGORY);
        Ok(HttpRequest { url: url.into() })
    }

    /// Build a detail lookup request: `{base}/lookup.php?i={id}`.
    ///
    /// `id` is taken as supplied; it is expected to come from a previously
    /// fetched summary, and an empty or unknown one round-trips to the
    /// not-found outcome rather than an error.
    pub fn build_lookup_dessert(&self, id: &str) -> Result<HttpRequest, FetchError> {
        let mut url = Url::parse(&format!("{}/lookup.php", self.base_url))?;
        url.query_pairs_mut().append_pair("i", id);
        Ok(HttpRequest { url: url.into() })
    }

    /// Decode a listing response into summaries, preserving server order.
    pub fn parse_list_desserts(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<DessertSummary>, FetchError> {
        check_status(&response)?;
        let envelope: ListEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope.meals)
    }

    /// Decode a lookup response into at most one detail record.
    ///
    /// A null, missing, or empty `meals` array is the not-found outcome;
    /// when the server returns several records for one id, only the first
    /// is kept.
    pub fn parse_lookup_dessert(
        &self,
        response: HttpResponse,
    ) -> Result<Option<DessertDetail>, FetchError> {
        check_status(&response)?;
        let envelope: LookupEnvelope = serde_json::from_str(&response.body)?;
        Ok(envelope
            .meals
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(DetailRecord::into_detail))
    }

    /// Fetch the dessert listing in one round-trip.
    pub fn fetch_list(&self, transport: &Transport) -> Result<Vec<DessertSummary>, FetchError> {
        let request = self.build_list_desserts()?;
        let response = transport.execute(&request)?;
        self.parse_list_desserts(response)
    }

    /// Fetch the detail record for `id` in one round-trip.
    ///
    /// `Ok(None)` means the server knows no dessert with this id.
    pub fn fetch_detail(
        &self,
        transport: &Transport,
        id: &str,
    ) -> Result<Option<DessertDetail>, FetchError> {
        let request = self.build_lookup_dessert(id)?;
        let response = transport.execute(&request)?;
        self.parse_lookup_dessert(response)
    }
}

impl Default for DessertClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Both endpoints answer 200 even for no-match queries, so any other code
/// is surfaced with its body instead of being decoded.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(FetchError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
