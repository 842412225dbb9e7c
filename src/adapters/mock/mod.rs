//! Mock implementations for testing without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
