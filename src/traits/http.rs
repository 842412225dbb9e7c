//! The HTTP seam of the fetch controller.
//!
//! Production code goes through [`ReqwestHttpClient`](crate::adapters::ReqwestHttpClient);
//! tests swap in [`MockHttpClient`](crate::adapters::MockHttpClient).

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use thiserror::Error;

/// Request headers by name.
pub type Headers = HashMap<String, String>;

/// A fully read response: status, content type and raw body.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            content_type: None,
            body: body.into(),
        }
    }

    /// `200 OK` with an `application/json` body.
    pub fn json_ok(body: impl Into<String>) -> Self {
        let body: String = body.into();
        Self {
            content_type: Some("application/json".to_string()),
            ..Self::new(200, body)
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the server labelled the body as JSON (`application/json` or a
    /// `+json` media type, parameters ignored).
    pub fn declares_json(&self) -> bool {
        self.content_type.as_deref().is_some_and(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
    }

    /// Body as UTF-8 text, lossily.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Failure to get any response at all.
///
/// An error status is still a [`Response`]; the caller classifies it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("transport error: {0}")]
    Other(String),
}

#[async_trait]
pub trait HttpClient: Send + Sync {
    /// `GET` a fully built URL, query string included, and read the body.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
