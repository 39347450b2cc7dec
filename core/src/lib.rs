//! Fetch-and-decode core for a dessert catalog client.
//!
//! # Overview
//! Lists the desserts of a TheMealDB-compatible recipe API and resolves a
//! selected dessert to its full recipe: assembled ingredient/measure pairs
//! plus free-text instructions. Presentation is out of scope; list and
//! detail views consume this crate directly or through its C ABI wrapper.
//!
//! # Design
//! - `DessertClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), so the I/O boundary is explicit;
//!   `fetch_list` / `fetch_detail` run the round-trip with [`Transport`]
//!   for callers that do not bring their own HTTP stack.
//! - A lookup that matches nothing is `Ok(None)`, never an error; every
//!   failure is a typed [`FetchError`] and nothing is swallowed.
//! - Types use owned `String` / `Vec` fields to simplify FFI mapping.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{DessertClient, DEFAULT_BASE_URL};
pub use error::FetchError;
pub use http::{HttpRequest, HttpResponse, Transport};
pub use types::{
    sort_by_name, DessertDetail, DessertSummary, IngredientMeasure, INGREDIENT_SLOTS,
};
