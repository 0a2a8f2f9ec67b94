//! # arxiv-eprints
//!
//! A client for the arXiv export API: builds query URLs from typed options
//! and decodes the Atom feed responses into e-print records.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Option types, feed/e-print records and subject tables
//! - [`client`]: URL building, query encoding and request execution
//! - [`eprints`]: The [`EprintsService`] operations (`get`, `list`, `search`)
//! - [`utils`]: HTTP transport
//! - [`config`]: Configuration management
//! - [`error`]: The [`ArxivError`] taxonomy
//!
//! ```rust,no_run
//! use arxiv_eprints::{Client, EprintsService};
//! use arxiv_eprints::models::{QueryOptions, SearchOptions};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), arxiv_eprints::ArxivError> {
//! let eprints = Client::new()?.eprints();
//!
//! let paper = eprints.get("1706.03762").await?;
//! println!("{}", paper);
//!
//! let search = SearchOptions::new().author("Hinton").category("cs.LG");
//! let results = eprints.search(&search, &QueryOptions::new().max_results(5)).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod eprints;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use client::Client;
pub use config::ClientConfig;
pub use eprints::{ArxivEprints, EprintsService};
pub use error::{ArxivError, NotFound, ReadCause};
pub use models::{Eprint, EprintListOptions, EprintsFeed};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
