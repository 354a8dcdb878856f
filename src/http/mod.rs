//! HTTP client module
//!
//! Provides the HTTP client used by all checks against the backend.

mod client;

pub use client::{HttpClient, HttpRequest, HttpResponse};
