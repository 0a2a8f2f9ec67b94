//! Query-string encoding for request options.
//!
//! Each wire parameter is described by a [`QueryField`] entry: its key,
//! whether an empty value is left out, and how list values are joined.
//! Option types implement [`QueryEncode`] by pairing those entries with
//! their normalized values.

use crate::models::{EprintListOptions, QueryOptions};

/// How a list value is written to the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Join {
    /// Scalar value as-is; list values repeat the key once per item
    Single,
    /// List value, comma-joined into one parameter
    Comma,
}

/// Wire description of one query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryField {
    pub key: &'static str,
    pub omit_empty: bool,
    pub join: Join,
}

impl QueryField {
    const fn new(key: &'static str, omit_empty: bool, join: Join) -> Self {
        Self {
            key,
            omit_empty,
            join,
        }
    }
}

pub const SEARCH_QUERY: QueryField = QueryField::new("search_query", true, Join::Single);
pub const ID_LIST: QueryField = QueryField::new("id_list", true, Join::Comma);
pub const MAX_RESULTS: QueryField = QueryField::new("max_results", true, Join::Single);
pub const START: QueryField = QueryField::new("start", true, Join::Single);
pub const SORT_BY: QueryField = QueryField::new("sortBy", true, Join::Single);
pub const SORT_ORDER: QueryField = QueryField::new("sortOrder", true, Join::Single);

/// A parameter value before rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Text(String),
    Number(u32),
    List(Vec<String>),
}

impl QueryValue {
    /// Zero, empty string and empty list count as empty
    pub fn is_empty(&self) -> bool {
        match self {
            QueryValue::Text(s) => s.is_empty(),
            QueryValue::Number(n) => *n == 0,
            QueryValue::List(items) => items.is_empty(),
        }
    }

    /// Wire values for this parameter, one per emitted pair
    fn render(&self, join: Join) -> Vec<String> {
        match (self, join) {
            (QueryValue::Text(s), _) => vec![s.clone()],
            (QueryValue::Number(n), _) => vec![n.to_string()],
            (QueryValue::List(items), Join::Comma) => vec![items.join(",")],
            (QueryValue::List(items), Join::Single) => items.clone(),
        }
    }
}

/// Types that can be written as request query parameters
pub trait QueryEncode {
    /// Fields and their normalized values, in wire order.
    ///
    /// `default_max_results` replaces a non-positive page size.
    fn query_fields(&self, default_max_results: u32) -> Vec<(QueryField, QueryValue)>;
}

impl QueryEncode for QueryOptions {
    fn query_fields(&self, default_max_results: u32) -> Vec<(QueryField, QueryValue)> {
        vec![
            (
                MAX_RESULTS,
                QueryValue::Number(self.effective_max_results(default_max_results)),
            ),
            (START, QueryValue::Number(self.effective_start())),
            (SORT_BY, QueryValue::Text(self.sort_by.as_str().to_string())),
            (
                SORT_ORDER,
                QueryValue::Text(self.sort_order.as_str().to_string()),
            ),
        ]
    }
}

impl QueryEncode for EprintListOptions {
    fn query_fields(&self, default_max_results: u32) -> Vec<(QueryField, QueryValue)> {
        let mut fields = vec![
            (SEARCH_QUERY, QueryValue::Text(self.search.clone())),
            (ID_LIST, QueryValue::List(self.id_list.clone())),
        ];
        fields.extend(self.query.query_fields(default_max_results));
        fields
    }
}

/// Render options as ordered key/value pairs, dropping empty optional fields
pub fn encode_pairs<T>(opts: &T, default_max_results: u32) -> Vec<(&'static str, String)>
where
    T: QueryEncode + ?Sized,
{
    opts.query_fields(default_max_results)
        .into_iter()
        .filter(|(field, value)| !(field.omit_empty && value.is_empty()))
        .flat_map(|(field, value)| {
            value
                .render(field.join)
                .into_iter()
                .map(move |rendered| (field.key, rendered))
        })
        .collect()
}

/// Render options as a form-urlencoded query string.
///
/// `None` yields an empty string.
pub fn encode_query<T>(opts: Option<&T>, default_max_results: u32) -> String
where
    T: QueryEncode + ?Sized,
{
    let Some(opts) = opts else {
        return String::new();
    };

    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(encode_pairs(opts, default_max_results))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SortBy, SortOrder};
    use std::collections::HashMap;

    fn decode(query: &str) -> HashMap<String, String> {
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn test_none_options_encode_empty() {
        assert_eq!(encode_query::<EprintListOptions>(None, 100), "");
    }

    #[test]
    fn test_defaults_are_substituted() {
        let opts = EprintListOptions::new()
            .search("all:electron")
            .query(QueryOptions::new().max_results(0).start(-10));
        let params = decode(&encode_query(Some(&opts), 100));

        assert_eq!(params.get("max_results").map(String::as_str), Some("100"));
        assert_eq!(params.get("sortBy").map(String::as_str), Some("relevance"));
        assert_eq!(params.get("sortOrder").map(String::as_str), Some("descending"));
        // start normalized to zero and omitted
        assert!(!params.contains_key("start"));
        assert!(!params.contains_key("id_list"));
    }

    #[test]
    fn test_configured_default_max_results() {
        let opts = QueryOptions::new().max_results(-1);
        let params = decode(&encode_query(Some(&opts), 1000));
        assert_eq!(params.get("max_results").map(String::as_str), Some("1000"));
    }

    #[test]
    fn test_unknown_sort_values_fall_back() {
        let opts = QueryOptions::new()
            .sort_by(SortBy::from("popularity"))
            .sort_order(SortOrder::from("sideways"));
        let params = decode(&encode_query(Some(&opts), 100));
        assert_eq!(params.get("sortBy").map(String::as_str), Some("relevance"));
        assert_eq!(params.get("sortOrder").map(String::as_str), Some("descending"));
    }

    #[test]
    fn test_id_list_is_comma_joined() {
        let opts = EprintListOptions::new().id("2301.00001").id("2301.00002v2");
        let query = encode_query(Some(&opts), 100);
        assert!(query.starts_with("id_list=2301.00001%2C2301.00002v2"));
        assert!(!query.contains("search_query"));
    }

    struct Tags(Vec<String>);

    impl QueryEncode for Tags {
        fn query_fields(&self, _default_max_results: u32) -> Vec<(QueryField, QueryValue)> {
            vec![(
                QueryField::new("tag", true, Join::Single),
                QueryValue::List(self.0.clone()),
            )]
        }
    }

    #[test]
    fn test_single_join_list_repeats_key() {
        let tags = Tags(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(encode_query(Some(&tags), 100), "tag=a&tag=b&tag=c");

        let empty = Tags(Vec::new());
        assert_eq!(encode_query(Some(&empty), 100), "");
    }

    #[test]
    fn test_pair_order_follows_field_table() {
        let opts = EprintListOptions::new()
            .search("ti:graphs")
            .id("1")
            .query(QueryOptions::new().max_results(5).start(10));
        let keys: Vec<&str> = encode_pairs(&opts, 100).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec!["search_query", "id_list", "max_results", "start", "sortBy", "sortOrder"]
        );
    }

    #[test]
    fn test_round_trip_recovers_values() {
        let opts = EprintListOptions::new()
            .search("au:del_maestro AND ti:checkerboard")
            .id("hep-ex/0307015")
            .id("1507.05313")
            .query(
                QueryOptions::new()
                    .max_results(25)
                    .start(50)
                    .sort_by(SortBy::SubmittedDate)
                    .sort_order(SortOrder::Ascending),
            );
        let params = decode(&encode_query(Some(&opts), 100));

        let decoded = EprintListOptions {
            search: params["search_query"].clone(),
            id_list: params["id_list"].split(',').map(str::to_string).collect(),
            query: QueryOptions {
                max_results: params["max_results"].parse().unwrap(),
                start: params["start"].parse().unwrap(),
                sort_by: SortBy::from(params["sortBy"].as_str()),
                sort_order: SortOrder::from(params["sortOrder"].as_str()),
            },
        };
        assert_eq!(decoded, opts);
    }

    #[test]
    fn test_spaces_are_form_encoded() {
        let opts = EprintListOptions::new().search("all:quantum computing");
        let query = encode_query(Some(&opts), 100);
        assert!(query.starts_with("search_query=all%3Aquantum+computing"));
    }
}
