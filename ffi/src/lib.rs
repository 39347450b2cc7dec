//! C-ABI wrapper around `dessert-core`.
//!
//! # Overview
//! Exposes the dessert catalog operations through `extern "C"` functions so
//! any language with a C FFI can drive them. Hosts that own their HTTP
//! stack use `dessert_build_*` / `dessert_parse_*` around their own
//! round-trip; hosts that do not call `dessert_fetch_*`, which block on the
//! bundled transport.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Per-operation `build_*` / `parse_*` / `fetch_*` mirrors the core API.
//! - A single `FfiDessertResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads, the not-found lookup outcome, and errors
//!   uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `dessert_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};

use dessert_core::http::HttpResponse;

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new client bound to `base_url`, bundled with the transport its
/// fetch operations run on.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `dessert_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_client_new(base_url: *const c_char) -> *mut FfiDessertClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        Box::into_raw(Box::new(FfiDessertClient {
            client: dessert_core::DessertClient::new(url),
            transport: dessert_core::Transport::new(),
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `dessert_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_client_free(client: *mut FfiDessertClient) {
    if !client.is_null() {
        let _ = catch_unwind(AssertUnwindSafe(|| {
            drop(unsafe { Box::from_raw(client) });
        }));
    }
}

// ---------------------------------------------------------------------------
// Build request functions
// ---------------------------------------------------------------------------

/// Build the HTTP request for listing the dessert catalog.
///
/// Returns null if `client` is null or the base URL cannot form a request.
/// The caller must free the returned pointer with `dessert_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_build_list_desserts(
    client: *const FfiDessertClient,
) -> *mut FfiHttpRequest {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        match client.client.build_list_desserts() {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Build the HTTP request for looking up a dessert by id.
///
/// Returns null if `client` or `id` is null or the base URL cannot form a
/// request.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_build_lookup_dessert(
    client: *const FfiDessertClient,
    id: *const c_char,
) -> *mut FfiHttpRequest {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() || id.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        let id_str = unsafe { CStr::from_ptr(id) }.to_str().unwrap_or("");
        match client.client.build_lookup_dessert(id_str) {
            Ok(req) => FfiHttpRequest::from_core(req),
            Err(_) => std::ptr::null_mut(),
        }
    }))
    .unwrap_or(std::ptr::null_mut())
}

// ---------------------------------------------------------------------------
// Parse response functions
// ---------------------------------------------------------------------------

/// Convert an `FfiHttpResponse` to a core `HttpResponse`. A null body
/// pointer is treated as an empty body.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.body) }
            .to_str()
            .unwrap_or("")
            .to_string()
    };
    HttpResponse {
        status: resp.status,
        body,
    }
}

/// Parse an HTTP response from a list request.
///
/// Returns a result with `data_tag = SummaryList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_parse_list_desserts(
    client: *const FfiDessertClient,
    response: *const FfiHttpResponse,
) -> *mut FfiDessertResult {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiDessertResult::null_arg("client");
        }
        if response.is_null() {
            return FfiDessertResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.client.parse_list_desserts(ffi_response_to_core(resp)) {
            Ok(desserts) => FfiDessertResult::ok_summary_list(desserts),
            Err(e) => FfiDessertResult::from_error(e),
        }
    }))
    .unwrap_or_else(|_| FfiDessertResult::panic("panic in dessert_parse_list_desserts"))
}

/// Parse an HTTP response from a lookup request.
///
/// Returns a result with `data_tag = Detail` when the id resolved, or
/// `error_code = Ok` with `data_tag = None` when it matched nothing.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_parse_lookup_dessert(
    client: *const FfiDessertClient,
    response: *const FfiHttpResponse,
) -> *mut FfiDessertResult {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiDessertResult::null_arg("client");
        }
        if response.is_null() {
            return FfiDessertResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        match client.client.parse_lookup_dessert(ffi_response_to_core(resp)) {
            Ok(Some(detail)) => FfiDessertResult::ok_detail(detail),
            Ok(None) => FfiDessertResult::ok_not_found(),
            Err(e) => FfiDessertResult::from_error(e),
        }
    }))
    .unwrap_or_else(|_| FfiDessertResult::panic("panic in dessert_parse_lookup_dessert"))
}

// ---------------------------------------------------------------------------
// Fetch functions (build + execute + parse in one blocking call)
// ---------------------------------------------------------------------------

/// Fetch the dessert catalog in one blocking round-trip on the bundled
/// transport.
///
/// Returns a result with `data_tag = SummaryList` on success.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_fetch_list(client: *const FfiDessertClient) -> *mut FfiDessertResult {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiDessertResult::null_arg("client");
        }
        let client = unsafe { &*client };
        match client.client.fetch_list(&client.transport) {
            Ok(desserts) => FfiDessertResult::ok_summary_list(desserts),
            Err(e) => FfiDessertResult::from_error(e),
        }
    }))
    .unwrap_or_else(|_| FfiDessertResult::panic("panic in dessert_fetch_list"))
}

/// Fetch the detail record for `id` in one blocking round-trip on the
/// bundled transport.
///
/// Returns a result with `data_tag = Detail` when the id resolved, or
/// `error_code = Ok` with `data_tag = None` when it matched nothing.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_fetch_detail(
    client: *const FfiDessertClient,
    id: *const c_char,
) -> *mut FfiDessertResult {
    catch_unwind(AssertUnwindSafe(|| {
        if client.is_null() {
            return FfiDessertResult::null_arg("client");
        }
        if id.is_null() {
            return FfiDessertResult::null_arg("id");
        }
        let client = unsafe { &*client };
        let id_str = unsafe { CStr::from_ptr(id) }.to_str().unwrap_or("");
        match client.client.fetch_detail(&client.transport, id_str) {
            Ok(Some(detail)) => FfiDessertResult::ok_detail(detail),
            Ok(None) => FfiDessertResult::ok_not_found(),
            Err(e) => FfiDessertResult::from_error(e),
        }
    }))
    .unwrap_or_else(|_| FfiDessertResult::panic("panic in dessert_fetch_detail"))
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by any `dessert_build_*` function.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        if !req.url.is_null() {
            drop(unsafe { CString::from_raw(req.url) });
        }
    });
}

/// Free an `FfiDessertResult` returned by any `dessert_parse_*` or
/// `dessert_fetch_*` function. Safe to call with null. Uses `data_tag` to
/// determine what `data` points to.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_free_result(result: *mut FfiDessertResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        if !result.error_message.is_null() {
            drop(unsafe { CString::from_raw(result.error_message) });
        }
        if !result.data.is_null() {
            match result.data_tag {
                FfiDataTag::SummaryList => {
                    let list = unsafe { Box::from_raw(result.data as *mut FfiSummaryList) };
                    if !list.items.is_null() && list.len > 0 {
                        let items = unsafe {
                            Vec::from_raw_parts(list.items, list.len as usize, list.len as usize)
                        };
                        for item in &items {
                            free_ffi_summary_fields(item);
                        }
                    }
                }
                FfiDataTag::Detail => {
                    let detail = unsafe { Box::from_raw(result.data as *mut FfiDessertDetail) };
                    free_ffi_detail_fields(&detail);
                }
                FfiDataTag::None => {}
            }
        }
    });
}

/// Free the C-string fields of an `FfiDessertSummary` (but not the struct
/// itself).
fn free_ffi_summary_fields(summary: &FfiDessertSummary) {
    if !summary.id.is_null() {
        drop(unsafe { CString::from_raw(summary.id) });
    }
    if !summary.name.is_null() {
        drop(unsafe { CString::from_raw(summary.name) });
    }
    if !summary.image_url.is_null() {
        drop(unsafe { CString::from_raw(summary.image_url) });
    }
}

/// Free the fields of an `FfiDessertDetail` (but not the struct itself).
fn free_ffi_detail_fields(detail: &FfiDessertDetail) {
    if !detail.id.is_null() {
        drop(unsafe { CString::from_raw(detail.id) });
    }
    if !detail.name.is_null() {
        drop(unsafe { CString::from_raw(detail.name) });
    }
    if !detail.image_url.is_null() {
        drop(unsafe { CString::from_raw(detail.image_url) });
    }
    if !detail.instructions.is_null() {
        drop(unsafe { CString::from_raw(detail.instructions) });
    }
    if !detail.ingredients.is_null() && detail.ingredients_len > 0 {
        let pairs = unsafe {
            Vec::from_raw_parts(
                detail.ingredients,
                detail.ingredients_len as usize,
                detail.ingredients_len as usize,
            )
        };
        for pair in &pairs {
            if !pair.ingredient.is_null() {
                drop(unsafe { CString::from_raw(pair.ingredient) });
            }
            if !pair.measure.is_null() {
                drop(unsafe { CString::from_raw(pair.measure) });
            }
        }
    }
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dessert_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
