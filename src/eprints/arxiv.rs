//! arXiv implementation of [`EprintsService`].

use async_trait::async_trait;
use reqwest::Method;
use tracing::debug;

use crate::client::Client;
use crate::eprints::EprintsService;
use crate::error::{ArxivError, NotFound};
use crate::models::{Eprint, EprintListOptions, EprintsFeed};

/// API route for feed queries
const QUERY_ROUTE: &str = "query";

/// E-print service backed by the arXiv export API
#[derive(Debug, Clone)]
pub struct ArxivEprints {
    client: Client,
}

impl ArxivEprints {
    /// Create the service on top of an existing client
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Run a query and return the decoded feed, whatever its size
    pub async fn feed(&self, options: &EprintListOptions) -> Result<EprintsFeed, ArxivError> {
        let url = self.client.url(QUERY_ROUTE, Some(options))?;
        debug!(url = %url, "listing e-prints");

        let request = self.client.new_request(Method::GET, url)?;
        self.client.do_decode(request, EprintsFeed::from_xml).await
    }
}

#[async_trait]
impl EprintsService for ArxivEprints {
    async fn get(&self, id: &str) -> Result<Eprint, ArxivError> {
        let options = EprintListOptions::by_id(id);
        let feed = self.feed(&options).await?;

        feed.entries
            .into_iter()
            .next()
            .ok_or_else(|| ArxivError::EprintNotFound(NotFound::Id(id.to_string())))
    }

    async fn list(&self, options: &EprintListOptions) -> Result<Vec<Eprint>, ArxivError> {
        let feed = self.feed(options).await?;

        if feed.entries.is_empty() {
            return Err(ArxivError::EprintNotFound(NotFound::Query));
        }

        debug!(count = feed.entries.len(), "decoded e-prints");
        Ok(feed.entries)
    }
}
