//! Single point of outbound HTTP traffic for the application.
//!
//! One configured client instance owns auth-header injection, response
//! unwrapping, and error classification. Backends that wrap payloads in a
//! `{code, message, data}` envelope and backends that return bare JSON are
//! both supported; the envelope probe happens once per response at this
//! boundary and never downstream.
//!
//! Retry policy is deliberately absent here: request-lifecycle management
//! (loading/error/retry) belongs to the data-fetching layer one level up.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod client;
mod error;
mod normalize;

pub use client::{
    HttpClient, HttpMethod, RequestOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS,
};
pub use error::{HttpError, DEFAULT_BUSINESS_MESSAGE};
pub use normalize::{
    accept, classify_status, extract_payload, is_success_code, probe, ApiEnvelope, ResponseBody,
};
