//! E-print and feed models decoded from the arXiv Atom response.
//!
//! The field names follow the Atom vocabulary (`entry`, `summary`, ...).
//! Namespace prefixes such as `arxiv:` and `opensearch:` are dropped by the
//! deserializer, so extension elements match on their local names.

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::{DeError, NsReader};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace of the feed root element
pub const ATOM_NAMESPACE: &str = "http://www.w3.org/2005/Atom";

/// A feed retrieved from the arXiv API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EprintsFeed {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub updated: DateTime<Utc>,

    #[serde(rename = "link", default)]
    pub links: Vec<Link>,

    /// `opensearch:totalResults`
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<u64>,

    /// `opensearch:startIndex`
    #[serde(rename = "startIndex", default)]
    pub start_index: Option<u64>,

    /// `opensearch:itemsPerPage`
    #[serde(rename = "itemsPerPage", default)]
    pub items_per_page: Option<u64>,

    #[serde(rename = "entry", default)]
    pub entries: Vec<Eprint>,
}

impl EprintsFeed {
    /// Decode a feed document.
    ///
    /// The root element must be `feed` in the Atom namespace; any other
    /// document is rejected before field mapping.
    pub fn from_xml(xml: &[u8]) -> Result<Self, DeError> {
        check_feed_root(xml)?;
        quick_xml::de::from_reader(xml)
    }
}

/// Reject documents whose root is not an Atom `<feed>`
fn check_feed_root(xml: &[u8]) -> Result<(), DeError> {
    let mut reader = NsReader::from_reader(xml);

    loop {
        let (ns, event) = reader.read_resolved_event()?;
        match event {
            Event::Start(root) | Event::Empty(root) => {
                let in_atom = matches!(
                    ns,
                    ResolveResult::Bound(Namespace(uri)) if uri == ATOM_NAMESPACE.as_bytes()
                );
                if in_atom && root.local_name().as_ref() == b"feed" {
                    return Ok(());
                }
                return Err(DeError::Custom(format!(
                    "expected Atom <feed> root, found <{}>",
                    String::from_utf8_lossy(root.name().as_ref())
                )));
            }
            Event::Eof => {
                return Err(DeError::Custom("document has no root element".to_string()))
            }
            _ => {}
        }
    }
}

/// A subject category attached to an e-print
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "@term")]
    pub term: String,

    #[serde(rename = "@scheme", default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

/// An author of an e-print
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    /// `arxiv:affiliation`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

/// A link attached to a feed or an e-print
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "@rel", default)]
    pub rel: String,

    #[serde(rename = "@href")]
    pub href: String,

    #[serde(rename = "@type", default)]
    pub link_type: String,

    #[serde(rename = "@title", default)]
    pub title: String,
}

/// An e-print residing in arXiv.org
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Eprint {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub title: String,

    #[serde(rename = "author", default)]
    pub authors: Vec<Author>,

    #[serde(rename = "link", default)]
    pub links: Vec<Link>,

    #[serde(rename = "category", default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub published: DateTime<Utc>,

    #[serde(default)]
    pub updated: DateTime<Utc>,

    #[serde(rename = "summary", default)]
    pub abstract_text: String,

    /// `arxiv:primary_category`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_category: Option<Category>,

    /// `arxiv:comment`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// `arxiv:journal_ref`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_ref: Option<String>,

    /// `arxiv:doi`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

impl Eprint {
    /// The arXiv identifier, taken from the `/abs/` segment of the entry id.
    ///
    /// `http://arxiv.org/abs/2301.12345v2` yields `2301.12345v2`. Ids that do
    /// not look like an abstract URL are returned unchanged.
    pub fn arxiv_id(&self) -> &str {
        match self.id.find("/abs/") {
            Some(pos) => &self.id[pos + 5..],
            None => &self.id,
        }
    }

    /// URL of the PDF rendition, if the feed advertised one
    pub fn pdf_url(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.title == "pdf" || link.link_type == "application/pdf")
            .map(|link| link.href.as_str())
    }

    /// Author names in document order
    pub fn author_names(&self) -> Vec<&str> {
        self.authors.iter().map(|a| a.name.as_str()).collect()
    }
}

impl fmt::Display for Eprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}\n\nAuthors: {}\n\nAbstract: {}",
            self.title,
            self.author_names().join(", "),
            self.abstract_text
        )
    }
}
