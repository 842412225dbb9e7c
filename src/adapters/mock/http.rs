//! Mock HTTP client for testing.
//!
//! Returns predefined responses or errors and records every request so tests
//! can assert on the exact URL the characters client built.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method
    pub method: String,
    /// Request URL, query string included
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Return a transport error
    Error(HttpError),
    /// Wait before resolving to the inner response
    Delayed {
        delay: Duration,
        response: Box<MockResponse>,
    },
}

impl MockResponse {
    /// A 200 response with the given JSON body.
    pub fn json(body: impl Into<String>) -> Self {
        MockResponse::Success(Response::json_ok(body))
    }

    /// Wrap this response so it resolves after `delay`.
    pub fn after(self, delay: Duration) -> Self {
        MockResponse::Delayed {
            delay,
            response: Box::new(self),
        }
    }
}

/// Mock HTTP client for testing.
///
/// Lookup order for each request: the queue of one-shot responses (FIFO),
/// then an exact URL match, then a URL prefix match, then the default.
///
/// # Example
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_default_response(MockResponse::json(r#"{"items":[]}"#));
/// let response = client.get("https://futuramaapi.com/api/characters", &Headers::new()).await?;
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    queued: Arc<Mutex<VecDeque<MockResponse>>>,
    default_response: Arc<Mutex<Option<MockResponse>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    /// Create a new mock HTTP client with no responses configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for a URL (matched exactly, then as a prefix).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Queue a response consumed by the next request, whatever its URL.
    pub fn push_response(&self, response: MockResponse) {
        lock(&self.queued).push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        *lock(&self.default_response) = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers) {
        lock(&self.requests).push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    fn get_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = lock(&self.queued).pop_front() {
            return Some(response);
        }

        let responses = lock(&self.responses);
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        if let Some(response) = responses
            .iter()
            .find(|(pattern, _)| url.starts_with(pattern.as_str()))
            .map(|(_, response)| response.clone())
        {
            return Some(response);
        }
        drop(responses);

        lock(&self.default_response).clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers);

        let mut next = self.get_response(url);
        loop {
            match next {
                Some(MockResponse::Delayed { delay, response }) => {
                    tokio::time::sleep(delay).await;
                    next = Some(*response);
                }
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                None => {
                    return Err(HttpError::Other(format!(
                        "No mock response for URL: {}",
                        url
                    )))
                }
            }
        }
    }
}
