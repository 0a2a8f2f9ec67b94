//! Core data models for e-prints, feeds and request options.

mod eprint;
mod options;
pub mod subjects;

pub use eprint::{Author, Category, Eprint, EprintsFeed, Link};
pub use options::{EprintListOptions, QueryOptions, SearchOptions, SortBy, SortOrder};
