//! Low-level arXiv API client.
//!
//! [`Client`] resolves API routes against its base URL, builds requests and
//! executes them, decoding the body either as XML or returning raw bytes.
//! Higher level operations live in [`crate::eprints`].

pub mod query;

use quick_xml::DeError;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::eprints::ArxivEprints;
use crate::error::{ArxivError, ReadCause, Result};
use crate::utils::HttpClient;

pub use query::{encode_pairs, encode_query, QueryEncode};

const ATOM_CONTENT_TYPE: &str = "application/atom+xml";

/// A client for the arXiv API.
///
/// Cloning is cheap; clones share the underlying HTTP transport.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    default_max_results: u32,
    http: Arc<HttpClient>,
}

impl Client {
    /// Create a client against the public arXiv API with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client from configuration, building a transport from it
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let http = HttpClient::from_config(&config)?;
        Self::with_http_client(config, Arc::new(http))
    }

    /// Create a client that sends requests through an existing transport
    pub fn with_http_client(config: ClientConfig, http: Arc<HttpClient>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ArxivError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;

        Ok(Self {
            base_url,
            default_max_results: config.default_max_results,
            http,
        })
    }

    /// Base URL that routes are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Page size substituted for non-positive `max_results`
    pub fn default_max_results(&self) -> u32 {
        self.default_max_results
    }

    /// E-print operations backed by this client
    pub fn eprints(&self) -> ArxivEprints {
        ArxivEprints::new(self.clone())
    }

    /// Resolve `route` against the base URL and attach the encoded options.
    ///
    /// Routes are relative and should not start with a slash.
    pub fn url<T>(&self, route: &str, opts: Option<&T>) -> Result<Url>
    where
        T: QueryEncode + ?Sized,
    {
        let mut url = self
            .base_url
            .join(route)
            .map_err(|e| ArxivError::InvalidUrl(format!("{}: {}", route, e)))?;

        let query = encode_query(opts, self.default_max_results);
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// Build a request for an already resolved URL
    pub fn new_request(&self, method: Method, url: Url) -> Result<Request> {
        self.http
            .client()
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static(ATOM_CONTENT_TYPE))
            .build()
            .map_err(|e| ArxivError::InvalidUrl(e.to_string()))
    }

    /// Send the request and XML-decode the body into `T`
    pub async fn do_xml<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        self.do_decode(request, |body| quick_xml::de::from_reader(body)).await
    }

    /// Send the request and decode the body with `decode`.
    ///
    /// Decode failures are reported as [`ReadCause::Decode`] against the
    /// request they came from.
    pub async fn do_decode<T, F>(&self, request: Request, decode: F) -> Result<T>
    where
        F: FnOnce(&[u8]) -> std::result::Result<T, DeError>,
    {
        let method = request.method().to_string();
        let uri = request_uri(request.url());

        let body = self.send(request).await.map_err(|source| ArxivError::ResponseRead {
            method: method.clone(),
            uri: uri.clone(),
            source,
        })?;

        decode(body.as_slice()).map_err(|e| ArxivError::ResponseRead {
            method,
            uri,
            source: ReadCause::Decode(e),
        })
    }

    /// Send the request and return the body untouched
    pub async fn do_bytes(&self, request: Request) -> Result<Vec<u8>> {
        let method = request.method().to_string();
        let uri = request_uri(request.url());

        self.send(request)
            .await
            .map_err(|source| ArxivError::ResponseRead {
                method,
                uri,
                source,
            })
    }

    /// Execute the request and read the whole body.
    ///
    /// The response is consumed here, so its connection is released on
    /// every path out of this function.
    async fn send(&self, request: Request) -> std::result::Result<Vec<u8>, ReadCause> {
        debug!(method = %request.method(), url = %request.url(), "sending arXiv request");

        let response = self.http.client().execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ReadCause::Status(status));
        }

        let body = response.bytes().await?;
        debug!(bytes = body.len(), "read arXiv response body");
        Ok(body.to_vec())
    }
}

/// Path and query of a URL, as it appears on the request line
fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EprintListOptions, QueryOptions};

    fn client() -> Client {
        Client::new().unwrap()
    }

    #[test]
    fn test_url_without_options() {
        let url = client().url::<EprintListOptions>("query", None).unwrap();
        assert_eq!(url.as_str(), "http://export.arxiv.org/api/query");
    }

    #[test]
    fn test_url_with_options() {
        let opts = EprintListOptions::by_id("2301.12345");
        let url = client().url("query", Some(&opts)).unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_str(), Some("export.arxiv.org"));
        assert_eq!(url.path(), "/api/query");
        assert_eq!(
            url.query(),
            Some("id_list=2301.12345&max_results=100&sortBy=relevance&sortOrder=descending")
        );
    }

    #[test]
    fn test_url_uses_configured_default() {
        let config = ClientConfig::default().default_max_results(1000);
        let client = Client::with_config(config).unwrap();
        let url = client.url("query", Some(&QueryOptions::new())).unwrap();
        assert!(url.query().unwrap().contains("max_results=1000"));
    }

    #[test]
    fn test_url_invalid_route() {
        let result = client().url::<EprintListOptions>("http://[::1", None);
        assert!(matches!(result, Err(ArxivError::InvalidUrl(_))));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = ClientConfig::default().base_url("not a url");
        let result = Client::with_config(config);
        assert!(matches!(result, Err(ArxivError::InvalidUrl(_))));
    }

    #[test]
    fn test_new_request_sets_accept_header() {
        let client = client();
        let url = client.url::<EprintListOptions>("query", None).unwrap();
        let request = client.new_request(Method::GET, url).unwrap();
        assert_eq!(request.method(), &Method::GET);
        assert_eq!(
            request.headers().get(ACCEPT).unwrap(),
            "application/atom+xml"
        );
    }

    #[test]
    fn test_request_uri() {
        let url = Url::parse("http://export.arxiv.org/api/query?id_list=1").unwrap();
        assert_eq!(request_uri(&url), "/api/query?id_list=1");
        let url = Url::parse("http://export.arxiv.org/api/query").unwrap();
        assert_eq!(request_uri(&url), "/api/query");
    }
}
