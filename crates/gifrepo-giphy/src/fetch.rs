//! Giphy API client: request construction, blocking fetch, pagination
//! normalization.
//!
//! One outbound call per `fetch`, no retries. Every failure mode (transport,
//! malformed body, API status) becomes an error the caller is expected to
//! degrade to an empty listing.

use gifrepo_core::{Error, RepositoryConfig, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use tracing::debug;

use crate::models::{Envelope, NormalizedResponse, Pagination};

const API_BASE: &str = "https://api.giphy.com/v1/gifs";

/// Which endpoint a fetch targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    /// A single item looked up by id.
    ById(String),
    /// Full-text search.
    BySearch(String),
    /// The trending feed.
    Trending,
}

impl QueryMode {
    /// Resolve from the optional id/search pair; id wins when both are given.
    pub fn resolve(id: Option<&str>, search: Option<&str>) -> Self {
        match (id, search) {
            (Some(id), _) if !id.is_empty() => QueryMode::ById(id.to_string()),
            (_, Some(text)) if !text.is_empty() => QueryMode::BySearch(text.to_string()),
            _ => QueryMode::Trending,
        }
    }
}

/// Fetch seam: anything that can serve one normalized page of results.
/// `GiphyClient` is the production implementation; consumers that need to
/// exercise their handling of fetch failures substitute their own.
pub trait GifSource {
    fn fetch(
        &self,
        id: Option<&str>,
        search: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<NormalizedResponse>;
}

/// Stateless Giphy client; all request state lives on the call stack.
pub struct GiphyClient {
    http: Client,
    config: RepositoryConfig,
}

impl GiphyClient {
    pub fn new(config: RepositoryConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &RepositoryConfig {
        &self.config
    }

    /// Fetch one page of results, normalized per the query mode.
    ///
    /// `page` falls back to 1 when non-positive, `page_size` to the
    /// configured default.
    pub fn fetch(
        &self,
        id: Option<&str>,
        search: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<NormalizedResponse> {
        let mode = QueryMode::resolve(id, search);
        let (page, page_size) = resolve_paging(page, page_size, self.config.page_size);

        let url = self.request_url(&mode, page, page_size)?;
        debug!(%url, "giphy request");

        let body = self
            .http
            .get(url)
            .send()
            .map_err(|e| Error::Transport(e.to_string()))?
            .text()
            .map_err(|e| Error::Transport(e.to_string()))?;
        let envelope: Envelope =
            serde_json::from_str(&body).map_err(|e| Error::Parse(e.to_string()))?;

        normalize(envelope, page_size, &mode)
    }

    /// Build the request URL for a query mode and page window. The `rating`
    /// parameter is always appended; empty means "any".
    fn request_url(&self, mode: &QueryMode, page: u64, page_size: u64) -> Result<Url> {
        let endpoint = match mode {
            QueryMode::ById(id) => format!("{API_BASE}/{id}"),
            QueryMode::BySearch(_) => format!("{API_BASE}/search"),
            QueryMode::Trending => format!("{API_BASE}/trending"),
        };

        let mut params: Vec<(&str, String)> = Vec::new();
        if let QueryMode::BySearch(text) = mode {
            params.push(("q", text.clone()));
        }
        params.push(("offset", ((page - 1) * page_size).to_string()));
        params.push(("limit", page_size.to_string()));
        params.push(("api_key", self.config.api_key.clone()));
        params.push(("rating", self.config.rating.as_query_value().to_string()));

        Url::parse_with_params(&endpoint, &params)
            .map_err(|e| Error::Config(format!("bad request URL: {e}")))
    }
}

impl GifSource for GiphyClient {
    fn fetch(
        &self,
        id: Option<&str>,
        search: Option<&str>,
        page: i64,
        page_size: i64,
    ) -> Result<NormalizedResponse> {
        GiphyClient::fetch(self, id, search, page, page_size)
    }
}

/// Apply the paging defaults: page 1 and the configured page size.
fn resolve_paging(page: i64, page_size: i64, default_page_size: u32) -> (u64, u64) {
    let page = if page <= 0 { 1 } else { page as u64 };
    let page_size = if page_size <= 0 {
        u64::from(default_page_size)
    } else {
        page_size as u64
    };
    (page, page_size)
}

/// Reshape the raw envelope into the uniform listing shape.
///
/// Single-id fetches pin the pagination to one page of one item. List
/// fetches clamp `pagesize` up to the returned item count so a page holding
/// more (or fewer) items than requested never skews the arithmetic.
fn normalize(envelope: Envelope, requested: u64, mode: &QueryMode) -> Result<NormalizedResponse> {
    if envelope.meta.status != 200 {
        return Err(Error::Api {
            status: envelope.meta.status,
            message: envelope.meta.msg,
        });
    }

    let data = envelope.data.into_items();
    let raw = envelope.pagination;

    let pagination = match mode {
        QueryMode::ById(id) => Pagination {
            page: 1,
            pages: 1,
            pagesize: 1,
            path: Some(id.clone()),
        },
        QueryMode::BySearch(_) | QueryMode::Trending => {
            let pagesize = requested.max(raw.count).max(1);
            Pagination {
                page: 1 + raw.offset / pagesize,
                pages: raw.total_count.div_ceil(pagesize),
                pagesize,
                path: None,
            }
        }
    };

    Ok(NormalizedResponse { data, pagination })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gifrepo_core::Rating;

    fn client() -> GiphyClient {
        GiphyClient::new(RepositoryConfig::new("testkey", Rating::Any, 25))
    }

    fn envelope(value: serde_json::Value) -> Envelope {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_mode_resolution() {
        assert_eq!(QueryMode::resolve(None, None), QueryMode::Trending);
        assert_eq!(
            QueryMode::resolve(Some("abc"), None),
            QueryMode::ById("abc".into())
        );
        assert_eq!(
            QueryMode::resolve(None, Some("cats")),
            QueryMode::BySearch("cats".into())
        );
        // id wins over search, empty strings count as absent
        assert_eq!(
            QueryMode::resolve(Some("abc"), Some("cats")),
            QueryMode::ById("abc".into())
        );
        assert_eq!(QueryMode::resolve(Some(""), Some("")), QueryMode::Trending);
    }

    #[test]
    fn test_paging_defaults() {
        assert_eq!(resolve_paging(0, 0, 25), (1, 25));
        assert_eq!(resolve_paging(-3, -1, 50), (1, 50));
        assert_eq!(resolve_paging(4, 100, 25), (4, 100));
    }

    #[test]
    fn test_request_url_trending() {
        let url = client()
            .request_url(&QueryMode::Trending, 1, 25)
            .unwrap();
        assert_eq!(url.path(), "/v1/gifs/trending");
        let query = url.query().unwrap();
        assert!(query.contains("offset=0"));
        assert!(query.contains("limit=25"));
        assert!(query.contains("api_key=testkey"));
        assert!(query.contains("rating="));
    }

    #[test]
    fn test_request_url_search_encodes_text() {
        let url = client()
            .request_url(&QueryMode::BySearch("funny cats".into()), 3, 25)
            .unwrap();
        assert_eq!(url.path(), "/v1/gifs/search");
        let query = url.query().unwrap();
        assert!(query.contains("q=funny+cats") || query.contains("q=funny%20cats"));
        assert!(query.contains("offset=50"));
    }

    #[test]
    fn test_request_url_by_id() {
        let url = client()
            .request_url(&QueryMode::ById("xT9IgG50Fb7Mi0prBC".into()), 1, 25)
            .unwrap();
        assert_eq!(url.path(), "/v1/gifs/xT9IgG50Fb7Mi0prBC");
    }

    #[test]
    fn test_normalize_by_id_pins_pagination() {
        let env = envelope(serde_json::json!({
            "meta": { "status": 200 },
            "data": { "id": "abc", "title": "One" },
            "pagination": { "offset": 75, "total_count": 9000, "count": 1 }
        }));
        let resp = normalize(env, 25, &QueryMode::ById("abc".into())).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(
            resp.pagination,
            Pagination {
                page: 1,
                pages: 1,
                pagesize: 1,
                path: Some("abc".into())
            }
        );
    }

    #[test]
    fn test_normalize_pagination_arithmetic() {
        let env = envelope(serde_json::json!({
            "meta": { "status": 200 },
            "data": [],
            "pagination": { "offset": 50, "total_count": 237, "count": 25 }
        }));
        let resp = normalize(env, 25, &QueryMode::Trending).unwrap();
        assert_eq!(resp.pagination.page, 3);
        assert_eq!(resp.pagination.pages, 10);
        assert_eq!(resp.pagination.pagesize, 25);
        assert_eq!(resp.pagination.path, None);
    }

    #[test]
    fn test_normalize_pagesize_clamps_to_returned_count() {
        // API returned more items than requested; pagesize follows the count.
        let env = envelope(serde_json::json!({
            "meta": { "status": 200 },
            "data": [],
            "pagination": { "offset": 0, "total_count": 100, "count": 40 }
        }));
        let resp = normalize(env, 25, &QueryMode::Trending).unwrap();
        assert_eq!(resp.pagination.pagesize, 40);
        assert_eq!(resp.pagination.pages, 3);
    }

    #[test]
    fn test_normalize_api_failure() {
        let env = envelope(serde_json::json!({
            "meta": { "status": 500, "msg": "Internal Server Error" }
        }));
        let err = normalize(env, 25, &QueryMode::Trending).unwrap_err();
        match err {
            Error::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
