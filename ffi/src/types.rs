//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, raw pointers instead of `Vec`, and
//! tagged enums with explicit discriminants. A summary id the API omitted
//! crosses the boundary as a null pointer, keeping absence distinguishable
//! from the empty string. Conversion functions live here to keep `lib.rs`
//! focused on the `extern "C"` surface.

use std::ffi::CString;
use std::os::raw::c_char;

use dessert_core::error::FetchError;
use dessert_core::http::Transport;
use dessert_core::types::{DessertDetail, DessertSummary};

/// Opaque handle bundling a `DessertClient` with the transport its fetch
/// operations run on. C callers receive a pointer to this and pass it back
/// into every FFI function.
pub struct FfiDessertClient {
    pub(crate) client: dessert_core::DessertClient,
    pub(crate) transport: Transport,
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// A GET request described as C-compatible plain data.
///
/// Built by `dessert_build_*` functions. The C caller executes the request
/// and passes the response back through `dessert_parse_*`.
#[repr(C)]
pub struct FfiHttpRequest {
    pub url: *mut c_char,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    pub(crate) fn from_core(req: dessert_core::HttpRequest) -> *mut Self {
        let url = CString::new(req.url).unwrap().into_raw();
        Box::into_raw(Box::new(FfiHttpRequest { url }))
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this on the stack after executing an HTTP request,
/// then passes a pointer to a `dessert_parse_*` function. The FFI layer reads
/// but does not free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiDessertResult`.
#[repr(C)]
pub enum FfiErrorCode {
    Ok = 0,
    InvalidRequest = 1,
    Transport = 2,
    Status = 3,
    Decode = 4,
    Panic = 5,
    NullArg = 6,
}

/// Tag that tells `dessert_free_result` what `FfiDessertResult::data` points
/// to. `None` with `error_code = Ok` is the not-found outcome of a lookup.
#[repr(C)]
pub enum FfiDataTag {
    None = 0,
    SummaryList = 1,
    Detail = 2,
}

/// A single catalog entry exposed to C. `id` is null when the API omitted
/// or nulled it.
#[repr(C)]
pub struct FfiDessertSummary {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub image_url: *mut c_char,
}

/// A list of catalog entries exposed to C, in server order.
#[repr(C)]
pub struct FfiSummaryList {
    pub items: *mut FfiDessertSummary,
    pub len: u32,
}

/// One assembled ingredient/measure pair exposed to C. `measure` is the
/// empty string, never null, when the recipe gave no measure.
#[repr(C)]
pub struct FfiIngredientMeasure {
    pub ingredient: *mut c_char,
    pub measure: *mut c_char,
}

/// A full recipe entry exposed to C.
#[repr(C)]
pub struct FfiDessertDetail {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub image_url: *mut c_char,
    pub instructions: *mut c_char,
    pub ingredients: *mut FfiIngredientMeasure,
    pub ingredients_len: u32,
}

/// Result envelope for all parse and fetch operations.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the payload (tagged by `data_tag`); a lookup that matched
/// nothing is `Ok` with `data_tag = None` and null `data`.
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, `http_status` carries the offending status for
/// `Status` errors, and `data` is null.
#[repr(C)]
pub struct FfiDessertResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut std::ffi::c_void,
}

impl FfiDessertResult {
    /// Build a success result carrying an `FfiSummaryList`.
    pub(crate) fn ok_summary_list(desserts: Vec<DessertSummary>) -> *mut Self {
        let len = desserts.len() as u32;
        let mut ffi_summaries: Vec<FfiDessertSummary> = desserts
            .into_iter()
            .map(|summary| FfiDessertSummary {
                id: match summary.id {
                    Some(id) => CString::new(id).unwrap().into_raw(),
                    None => std::ptr::null_mut(),
                },
                name: CString::new(summary.name).unwrap().into_raw(),
                image_url: CString::new(summary.image_url).unwrap().into_raw(),
            })
            .collect();

        let items = if ffi_summaries.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = ffi_summaries.as_mut_ptr();
            std::mem::forget(ffi_summaries);
            ptr
        };

        let ffi_list = Box::new(FfiSummaryList { items, len });
        let result = Box::new(FfiDessertResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::SummaryList,
            data: Box::into_raw(ffi_list) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build a success result carrying an `FfiDessertDetail`.
    pub(crate) fn ok_detail(detail: DessertDetail) -> *mut Self {
        let ingredients_len = detail.ingredients.len() as u32;
        let mut ffi_pairs: Vec<FfiIngredientMeasure> = detail
            .ingredients
            .into_iter()
            .map(|pair| FfiIngredientMeasure {
                ingredient: CString::new(pair.ingredient).unwrap().into_raw(),
                measure: CString::new(pair.measure).unwrap().into_raw(),
            })
            .collect();

        let ingredients = if ffi_pairs.is_empty() {
            std::ptr::null_mut()
        } else {
            let ptr = ffi_pairs.as_mut_ptr();
            std::mem::forget(ffi_pairs);
            ptr
        };

        let ffi_detail = Box::new(FfiDessertDetail {
            id: CString::new(detail.id).unwrap().into_raw(),
            name: CString::new(detail.name).unwrap().into_raw(),
            image_url: CString::new(detail.image_url).unwrap().into_raw(),
            instructions: CString::new(detail.instructions).unwrap().into_raw(),
            ingredients,
            ingredients_len,
        });
        let result = Box::new(FfiDessertResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::Detail,
            data: Box::into_raw(ffi_detail) as *mut std::ffi::c_void,
        });
        Box::into_raw(result)
    }

    /// Build the not-found outcome of a lookup: success with no payload.
    pub(crate) fn ok_not_found() -> *mut Self {
        let result = Box::new(FfiDessertResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result from a `FetchError`.
    pub(crate) fn from_error(err: FetchError) -> *mut Self {
        let (error_code, http_status) = match &err {
            FetchError::InvalidRequest(_) => (FfiErrorCode::InvalidRequest, 0u16),
            FetchError::Transport(_) => (FfiErrorCode::Transport, 0),
            FetchError::Status { status, .. } => (FfiErrorCode::Status, *status),
            FetchError::Decode(_) => (FfiErrorCode::Decode, 0),
        };

        let result = Box::new(FfiDessertResult {
            error_code,
            error_message: CString::new(err.to_string()).unwrap_or_default().into_raw(),
            http_status,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        let msg = format!("null argument: {name}");
        let result = Box::new(FfiDessertResult {
            error_code: FfiErrorCode::NullArg,
            error_message: CString::new(msg).unwrap().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        let result = Box::new(FfiDessertResult {
            error_code: FfiErrorCode::Panic,
            error_message: CString::new(msg).unwrap_or_default().into_raw(),
            http_status: 0,
            data_tag: FfiDataTag::None,
            data: std::ptr::null_mut(),
        });
        Box::into_raw(result)
    }
}
