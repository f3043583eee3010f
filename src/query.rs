use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Path of the SearxNG results page
pub const SEARCH_PATH: &str = "/search";

/// Fixed parameters appended after `q`, in wire order
pub const FIXED_PARAMS: [(&str, &str); 4] = [
    ("language", "auto"),
    ("time_range", ""),
    ("safesearch", "0"),
    ("categories", "general"),
];

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern should be valid"));

/// A single search query, as handed in by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    query: String,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Build the results-page URL for this request against `base_url`
    pub fn to_url(&self, base_url: &str) -> SearchUrl {
        encode(base_url, &self.query)
    }
}

/// URL of a SearxNG results page.
///
/// Parameter values are stored exactly as they go on the wire: `q` holds the
/// `+`-joined phrase and nothing else is percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchUrl {
    base: String,
    path: String,
    params: Vec<(String, String)>,
}

impl SearchUrl {
    /// Scheme and authority, without a trailing slash
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw value of the first parameter called `name`
    pub fn query_parameter(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }
}

impl fmt::Display for SearchUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base, self.path)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{sep}{key}={value}")?;
        }
        Ok(())
    }
}

/// Collapse every run of whitespace into a single `+`
pub fn to_phrase(query: &str) -> String {
    WHITESPACE_RUN.replace_all(query, "+").into_owned()
}

/// Turn a free-text query into the SearxNG results-page URL.
///
/// Only whitespace is rewritten; every other character is interpolated
/// as-is, so `?`, `&` and `#` reach the URL unescaped.
pub fn encode(base_url: &str, query: &str) -> SearchUrl {
    let mut params = Vec::with_capacity(FIXED_PARAMS.len() + 1);
    params.push(("q".to_string(), to_phrase(query)));
    params.extend(
        FIXED_PARAMS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string())),
    );

    SearchUrl {
        base: base_url.trim_end_matches('/').to_string(),
        path: SEARCH_PATH.to_string(),
        params,
    }
}
