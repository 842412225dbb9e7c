//! Futurama API client.
//!
//! Builds the characters listing request and maps every way it can go wrong
//! onto [`FetchError`].

use std::fmt;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::error::{FetchError, FetchResult};
use crate::models::CharacterPage;
use crate::traits::{Headers, HttpClient};

/// Path of the characters listing, relative to the API origin.
pub const CHARACTERS_PATH: &str = "/api/characters";

/// Longest slice of an error body kept in a [`FetchError::HttpStatus`].
const MAX_ERROR_BODY: usize = 200;

/// Sort direction for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters of a listing request.
///
/// The default is the only query the screen sends: first page, 50 items,
/// ordered by `id` ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub order_by: String,
    pub direction: SortDirection,
    pub page: u32,
    pub size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            order_by: "id".to_string(),
            direction: SortDirection::Asc,
            page: 1,
            size: 50,
        }
    }
}

impl PageQuery {
    /// Encode as `orderBy=..&orderByDirection=..&page=..&size=..`.
    pub fn to_query_string(&self) -> String {
        format!(
            "orderBy={}&orderByDirection={}&page={}&size={}",
            urlencoding::encode(&self.order_by),
            self.direction,
            self.page,
            self.size
        )
    }
}

/// Client for the characters endpoint.
#[derive(Clone)]
pub struct CharactersClient {
    /// API origin, without trailing slash
    pub base_url: String,
    http: Arc<dyn HttpClient>,
}

impl fmt::Debug for CharactersClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharactersClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl CharactersClient {
    /// Create a client over any [`HttpClient`].
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Create the production client described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout);
        Self::new(Arc::new(http), config.base_url.clone())
    }

    /// Full request URL for `query`.
    pub fn characters_url(&self, query: &PageQuery) -> String {
        format!(
            "{}{}?{}",
            self.base_url,
            CHARACTERS_PATH,
            query.to_query_string()
        )
    }

    /// Fetch one page of characters.
    ///
    /// Fails on transport errors, non-2xx statuses, and bodies that do not
    /// decode as a [`CharacterPage`]. Items keep the server's order.
    pub async fn fetch_characters(&self, query: &PageQuery) -> FetchResult<CharacterPage> {
        let url = self.characters_url(query);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        tracing::debug!("GET {}", url);
        let response = self.http.get(&url, &headers).await?;

        if !response.is_success() {
            let body = response.text();
            let message: String = body.chars().take(MAX_ERROR_BODY).collect();
            return Err(FetchError::HttpStatus {
                status: response.status,
                message,
            });
        }

        if !response.declares_json() {
            tracing::warn!(
                "GET {} answered with content type {:?}, decoding as JSON anyway",
                url,
                response.content_type
            );
        }
        let page: CharacterPage = response.json()?;
        tracing::debug!(
            "GET {} -> {} items (total={:?})",
            url,
            page.items.len(),
            page.total
        );
        Ok(page)
    }
}
