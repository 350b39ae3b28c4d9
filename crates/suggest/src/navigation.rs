use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::fmt;

/// Path of the search results view
pub const SEARCH_RESULTS_PATH: &str = "/search";

/// Characters `encodeURIComponent` leaves untouched
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Request to open the results view for a submitted query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Trimmed, unencoded search text
    pub query: String,
}

impl NavigationRequest {
    pub fn search(query: impl Into<String>) -> Self {
        Self { query: query.into() }
    }

    pub fn encoded_query(&self) -> String {
        utf8_percent_encode(&self.query, QUERY_COMPONENT).to_string()
    }

    /// `/search?q=<encoded>`
    pub fn url(&self) -> String {
        format!("{}?q={}", SEARCH_RESULTS_PATH, self.encoded_query())
    }
}

impl fmt::Display for NavigationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
