//! E-print operations.
//!
//! [`EprintsService`] is the interface callers program against;
//! [`ArxivEprints`] implements it on top of [`Client`](crate::client::Client).
//! Both operations treat an empty feed as [`ArxivError::EprintNotFound`],
//! with a [`NotFound`](crate::error::NotFound) payload telling an id lookup
//! apart from a query that matched nothing.

mod arxiv;

pub use arxiv::ArxivEprints;

use async_trait::async_trait;

use crate::error::ArxivError;
use crate::models::{Eprint, EprintListOptions, QueryOptions, SearchOptions};

/// Interacts with the e-print endpoints of the arXiv API
#[async_trait]
pub trait EprintsService: Send + Sync + std::fmt::Debug {
    /// Fetch a single e-print by identifier.
    ///
    /// The identifier is sent as-is; no format validation happens first.
    async fn get(&self, id: &str) -> Result<Eprint, ArxivError>;

    /// List e-prints matching `options`, in feed order
    async fn list(&self, options: &EprintListOptions) -> Result<Vec<Eprint>, ArxivError>;

    /// List e-prints matching a structured search
    async fn search(
        &self,
        search: &SearchOptions,
        query: &QueryOptions,
    ) -> Result<Vec<Eprint>, ArxivError> {
        let options = EprintListOptions::new()
            .search(search.to_string())
            .query(query.clone());
        self.list(&options).await
    }
}
