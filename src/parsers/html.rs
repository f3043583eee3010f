use crate::parsers::ParsedResult;
use crate::results::{ResultSet, SearchResult};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static RESULT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("article.result").expect("result selector should be valid"));

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.url_header").expect("title selector should be valid"));

static CONTENT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p.content").expect("content selector should be valid"));

static BODY_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector should be valid"));

/// Extracts search results from a raw response body.
///
/// Invalid UTF-8 is replaced rather than rejected, and markup is parsed
/// permissively, so this never fails: a page without result blocks simply
/// yields an empty set.
pub fn extract(body: &[u8]) -> ResultSet {
    extract_str(&String::from_utf8_lossy(body))
}

/// Extracts search results from an HTML string
pub fn extract_str(html: &str) -> ResultSet {
    let results: ResultSet = parse_blocks(html)
        .into_iter()
        .map(SearchResult::from)
        .collect();

    ::log::debug!("HTML extractor found {} result blocks", results.len());
    results
}

/// Collects the optional fields of every `article.result` block in document order
pub fn parse_blocks(html: &str) -> Vec<ParsedResult> {
    let doc = Html::parse_document(html);
    doc.select(&RESULT_SELECTOR).map(parse_block).collect()
}

fn parse_block(block: ElementRef<'_>) -> ParsedResult {
    let (title, url) = match block.select(&TITLE_SELECTOR).next() {
        Some(anchor) => (
            Some(trimmed_text(anchor)),
            anchor.value().attr("href").map(|href| href.trim().to_string()),
        ),
        None => (None, None),
    };

    let content = block.select(&CONTENT_SELECTOR).next().map(trimmed_text);

    ParsedResult {
        title,
        url,
        content,
    }
}

fn trimmed_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Whitespace-normalized text of the page body
pub fn page_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    doc.select(&BODY_SELECTOR)
        .flat_map(|n| n.text())
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
