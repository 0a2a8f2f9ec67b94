//! Query and search option models.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort field accepted by the arXiv API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    #[default]
    Relevance,
    LastUpdatedDate,
    SubmittedDate,
}

impl SortBy {
    /// Wire name of the sort field
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Relevance => "relevance",
            SortBy::LastUpdatedDate => "lastUpdatedDate",
            SortBy::SubmittedDate => "submittedDate",
        }
    }

    /// Parse a wire name, falling back to [`SortBy::Relevance`] for anything unknown
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "lastUpdatedDate" => SortBy::LastUpdatedDate,
            "submittedDate" => SortBy::SubmittedDate,
            _ => SortBy::Relevance,
        }
    }
}

impl From<&str> for SortBy {
    fn from(value: &str) -> Self {
        Self::parse_lenient(value)
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction accepted by the arXiv API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    /// Wire name of the sort direction
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }

    /// Parse a wire name, falling back to [`SortOrder::Descending`] for anything unknown
    pub fn parse_lenient(value: &str) -> Self {
        match value {
            "ascending" => SortOrder::Ascending,
            _ => SortOrder::Descending,
        }
    }
}

impl From<&str> for SortOrder {
    fn from(value: &str) -> Self {
        Self::parse_lenient(value)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General pagination and ordering options for a list request.
///
/// Out-of-range values are never rejected. They are replaced when the
/// request is encoded: a non-positive `max_results` becomes the client's
/// configured default and a negative `start` becomes `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    /// Maximum number of entries to return
    #[serde(default)]
    pub max_results: i32,

    /// Zero-based offset of the first entry
    #[serde(default)]
    pub start: i32,

    /// Sort field
    #[serde(default)]
    pub sort_by: SortBy,

    /// Sort direction
    #[serde(default)]
    pub sort_order: SortOrder,
}

impl QueryOptions {
    /// Create options with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum results
    pub fn max_results(mut self, max: i32) -> Self {
        self.max_results = max;
        self
    }

    /// Set start offset
    pub fn start(mut self, start: i32) -> Self {
        self.start = start;
        self
    }

    /// Set sort field
    pub fn sort_by(mut self, sort: SortBy) -> Self {
        self.sort_by = sort;
        self
    }

    /// Set sort direction
    pub fn sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Effective page size given the configured default
    pub fn effective_max_results(&self, default_max_results: u32) -> u32 {
        if self.max_results <= 0 {
            default_max_results
        } else {
            self.max_results as u32
        }
    }

    /// Effective start offset
    pub fn effective_start(&self) -> u32 {
        self.start.max(0) as u32
    }
}

/// Options for listing e-prints, by free search text, by identifier, or both
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EprintListOptions {
    /// Raw `search_query` expression (see [`SearchOptions`])
    #[serde(default)]
    pub search: String,

    /// Explicit identifiers to fetch
    #[serde(default)]
    pub id_list: Vec<String>,

    /// Pagination and ordering
    #[serde(flatten)]
    pub query: QueryOptions,
}

impl EprintListOptions {
    /// Create empty list options
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that fetch exactly the given identifier
    pub fn by_id(id: impl Into<String>) -> Self {
        Self::default().id(id)
    }

    /// Set the search expression
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Append an identifier to the id list
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id_list.push(id.into());
        self
    }

    /// Replace pagination and ordering
    pub fn query(mut self, query: QueryOptions) -> Self {
        self.query = query;
        self
    }
}

/// Builds a `search_query` expression from named fields.
///
/// When `all` is non-empty it wins and yields a single `all:` clause.
/// Otherwise the non-empty fields are emitted as `ti`, `au`, `abs`, `jr`,
/// `cat` in that order, joined by ` AND `.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub abstract_text: String,
    #[serde(default)]
    pub journal_reference: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub all: String,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn abstract_text(mut self, text: impl Into<String>) -> Self {
        self.abstract_text = text.into();
        self
    }

    pub fn journal_reference(mut self, journal: impl Into<String>) -> Self {
        self.journal_reference = journal.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn all(mut self, all: impl Into<String>) -> Self {
        self.all = all.into();
        self
    }

    /// Field prefixes paired with their values, in emission order
    fn clauses(&self) -> [(&'static str, &str); 5] {
        [
            ("ti", self.title.as_str()),
            ("au", self.author.as_str()),
            ("abs", self.abstract_text.as_str()),
            ("jr", self.journal_reference.as_str()),
            ("cat", self.category.as_str()),
        ]
    }

    /// Whether no field is set
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.clauses().iter().all(|(_, v)| v.is_empty())
    }
}

impl fmt::Display for SearchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.all.is_empty() {
            return write!(f, "all:{}", self.all);
        }

        let clauses = self
            .clauses()
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(prefix, value)| format!("{}:{}", prefix, value))
            .collect::<Vec<_>>();

        f.write_str(&clauses.join(" AND "))
    }
}
