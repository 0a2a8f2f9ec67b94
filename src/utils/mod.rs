//! Utility modules supporting API operations.
//!
//! - [`HttpClient`]: shared `reqwest` transport configured from
//!   [`ClientConfig`](crate::config::ClientConfig)
//!
//! ```rust,no_run
//! use arxiv_eprints::utils::HttpClient;
//!
//! # fn main() -> Result<(), arxiv_eprints::ArxivError> {
//! let http = HttpClient::new()?;
//! let _inner: &reqwest::Client = http.client();
//! # Ok(())
//! # }
//! ```

mod http;

pub use http::HttpClient;
