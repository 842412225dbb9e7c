//! `reqwest` implementation of [`HttpClient`].

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

const USER_AGENT: &str = concat!("futurama-tui/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// A client whose requests give up after `timeout`, connecting included.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|err| {
                tracing::warn!("HTTP client setup failed ({}), using defaults", err);
                reqwest::Client::new()
            });
        Self { client }
    }
}

fn classify(err: reqwest::Error) -> HttpError {
    let detail = err.to_string();
    if err.is_timeout() {
        HttpError::Timeout(detail)
    } else if err.is_connect() {
        HttpError::ConnectionFailed(detail)
    } else if err.is_builder() {
        HttpError::InvalidUrl(detail)
    } else {
        HttpError::Other(detail)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(classify)?;

        Ok(Response {
            status,
            content_type,
            body,
        })
    }
}
