use serde::{Deserialize, Serialize};

/// Substituted when a result block has no title anchor
pub const NO_TITLE: &str = "No Title";

/// Substituted when the title anchor is missing or carries no `href`
pub const NO_URL: &str = "No URL";

/// Substituted when a result block has no content paragraph
pub const NO_CONTENT: &str = "No Content";

/// A single search hit extracted from the results page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Title of the hit (text of the header anchor)
    pub title: String,

    /// Target URL of the hit
    pub url: String,

    /// Snippet shown under the hit
    pub content: String,
}

impl SearchResult {
    /// Create a new search result
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            content: content.into(),
        }
    }
}

/// Results in document order. May be empty.
pub type ResultSet = Vec<SearchResult>;

/// One element of the tool's output list.
///
/// Failures are reported as data: a failed search yields a single
/// `{"error": "..."}` record instead of an `Err`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolRecord {
    /// A successfully extracted hit
    Result(SearchResult),
    /// A failure description
    Error { error: String },
}

impl ToolRecord {
    pub fn error(message: impl Into<String>) -> Self {
        ToolRecord::Error {
            error: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolRecord::Error { .. })
    }
}

impl From<SearchResult> for ToolRecord {
    fn from(result: SearchResult) -> Self {
        ToolRecord::Result(result)
    }
}

/// What the tool hands back to the calling framework
pub type ToolOutput = Vec<ToolRecord>;
