//! Pixabay search API client.
//!
//! One HTTP GET per call, no retries, no pagination state. Session
//! bookkeeping (current page, exhaustion, in-flight tracking) lives in
//! [`crate::session`]; this module only speaks the wire format.

mod client;
mod models;

pub use client::{SearchClient, SearchError};
pub use models::{Hit, SearchResponse};
