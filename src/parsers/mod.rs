pub mod html;


pub use html::{extract, extract_str, page_text, parse_blocks};

use crate::results::{NO_CONTENT, NO_TITLE, NO_URL, SearchResult};

/// Fields found in one result block, before placeholders are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedResult {
    /// Trimmed text of the header anchor, if the anchor exists
    pub title: Option<String>,
    /// Trimmed `href` of the header anchor, if both exist
    pub url: Option<String>,
    /// Trimmed text of the content paragraph, if it exists
    pub content: Option<String>,
}

impl ParsedResult {
    /// Resolve missing fields to their placeholder strings
    pub fn into_result(self) -> SearchResult {
        SearchResult {
            title: self.title.unwrap_or_else(|| NO_TITLE.to_string()),
            url: self.url.unwrap_or_else(|| NO_URL.to_string()),
            content: self.content.unwrap_or_else(|| NO_CONTENT.to_string()),
        }
    }
}

impl From<ParsedResult> for SearchResult {
    fn from(parsed: ParsedResult) -> Self {
        parsed.into_result()
    }
}
