//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - outbound HTTP GET used by the characters API client

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
