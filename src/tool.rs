use crate::config::SearxConfig;
use crate::error::ConfigError;
use crate::fetchers::{FetchOutcome, Fetcher, HttpFetcher};
use crate::parsers;
use crate::query::SearchRequest;
use crate::results::{ToolOutput, ToolRecord};
use crate::utils::truncate_for_log;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Name the tool is registered under
pub const TOOL_NAME: &str = "searxng_search";

/// Description shown to the calling agent
pub const TOOL_DESCRIPTION: &str = "Searches the web using a SearxNG instance and returns the title, URL and snippet of each result.";

/// Longest page-text excerpt written to the debug log
const PAGE_TEXT_LOG_CHARS: usize = 2000;

/// Tool metadata as handed to an orchestration framework
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    /// JSON schema of the arguments object
    pub parameters: Value,
}

/// Arguments accepted by the tool
#[derive(Debug, Clone, Deserialize)]
pub struct SearchArgs {
    pub query: String,
}

/// SearxNG search exposed as a callable tool.
///
/// Every call performs one fetch and one extraction pass. Failures never
/// escape as `Err`; they come back as a single `{"error": ...}` record.
#[derive(Debug, Clone)]
pub struct SearxTool<F = HttpFetcher> {
    base_url: String,
    fetcher: F,
}

impl SearxTool<HttpFetcher> {
    /// Build a tool that talks HTTP to the configured instance
    pub fn new(config: &SearxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::with_fetcher(&config.base_url, fetcher))
    }

    /// Build a tool from defaults plus `SEARXNG_BASE_URL`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&SearxConfig::from_env())
    }
}

impl<F: Fetcher> SearxTool<F> {
    /// Build a tool around any fetcher
    pub fn with_fetcher(base_url: &str, fetcher: F) -> Self {
        Self {
            base_url: base_url.to_string(),
            fetcher,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name, description and argument schema of the tool
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: TOOL_NAME.to_string(),
            description: TOOL_DESCRIPTION.to_string(),
            parameters: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "The search query to use."
                    }
                },
                "required": ["query"]
            }),
        }
    }

    /// Entry point for frameworks that pass arguments as a JSON string
    pub async fn invoke(&self, arguments: &str) -> ToolOutput {
        match serde_json::from_str::<SearchArgs>(arguments) {
            Ok(args) => self.search(&args.query).await,
            Err(e) => {
                ::log::error!("Rejected tool arguments {}: {}", arguments, e);
                vec![ToolRecord::error(format!("Invalid tool arguments: {e}"))]
            }
        }
    }

    /// Run one search and return the results, or a single error record
    pub async fn search(&self, query: &str) -> ToolOutput {
        ::log::info!("Starting {} with query: {}", TOOL_NAME, query);

        let request = SearchRequest::new(query);
        let url = request.to_url(&self.base_url);
        ::log::info!("Constructed search URL: {}", url);

        let output = match self.fetcher.fetch(&url).await {
            FetchOutcome::Success { body, status } => {
                ::log::info!("Fetch completed with status {}", status);
                if !(200..300).contains(&status) {
                    ::log::warn!("SearxNG answered with non-success status {}", status);
                }
                if body.is_empty() {
                    ::log::warn!("Response body is empty");
                } else if ::log::log_enabled!(::log::Level::Debug) {
                    let text = parsers::page_text(&String::from_utf8_lossy(&body));
                    ::log::debug!("Text content: {}", truncate_for_log(&text, PAGE_TEXT_LOG_CHARS));
                }

                let results = parsers::extract(&body);
                ::log::info!("Parsed {} results", results.len());
                ::log::debug!("Parsed results: {:?}", results);
                results.into_iter().map(ToolRecord::from).collect()
            }
            FetchOutcome::TransportFailure(message) => {
                ::log::error!("Search request failed: {}", message);
                vec![ToolRecord::error(format!(
                    "An unexpected error occurred: {message}"
                ))]
            }
            FetchOutcome::NonZeroExit(message) => {
                ::log::error!("Error executing search request: {}", message);
                vec![ToolRecord::error(format!(
                    "Error executing search request: {message}"
                ))]
            }
        };

        ::log::info!("Ending {}", TOOL_NAME);
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SearchUrl;
    use crate::results::SearchResult;
    use std::sync::Mutex;

    const FIXTURE: &str = r#"<html><body>
        <article class="result">
            <a class="url_header" href="https://a.example">Paris</a>
            <p class="content">Capital of France.</p>
        </article>
        <article class="result">
            <a class="url_header" href="https://b.example">France</a>
            <p class="content">A country in Europe.</p>
        </article>
    </body></html>"#;

    /// Returns a canned outcome and remembers the URLs it was asked for
    struct StubFetcher {
        outcome: FetchOutcome,
        requested: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(outcome: FetchOutcome) -> Self {
            Self {
                outcome,
                requested: Mutex::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.lock().unwrap().clone()
        }
    }

    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &SearchUrl) -> FetchOutcome {
            self.requested.lock().unwrap().push(url.to_string());
            self.outcome.clone()
        }
    }

    fn tool(outcome: FetchOutcome) -> SearxTool<StubFetcher> {
        SearxTool::with_fetcher("http://searx.lan", StubFetcher::new(outcome))
    }

    fn success(body: &str, status: u16) -> FetchOutcome {
        FetchOutcome::Success {
            body: body.as_bytes().to_vec(),
            status,
        }
    }

    #[tokio::test]
    async fn test_search_returns_results_in_order() {
        let tool = tool(success(FIXTURE, 200));
        let output = tool.search("What is the capital of France?").await;

        assert_eq!(
            output,
            vec![
                ToolRecord::Result(SearchResult::new(
                    "Paris",
                    "https://a.example",
                    "Capital of France."
                )),
                ToolRecord::Result(SearchResult::new(
                    "France",
                    "https://b.example",
                    "A country in Europe."
                )),
            ]
        );
        assert_eq!(
            tool.fetcher.requested(),
            vec![
                "http://searx.lan/search?q=What+is+the+capital+of+France?&language=auto&time_range=&safesearch=0&categories=general"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_error_record() {
        let tool = tool(FetchOutcome::TransportFailure(
            "connection refused".to_string(),
        ));
        let output = tool.search("anything").await;

        assert_eq!(
            serde_json::to_value(&output).unwrap(),
            json!([{"error": "An unexpected error occurred: connection refused"}])
        );
    }

    #[tokio::test]
    async fn test_non_zero_exit_becomes_error_record() {
        let tool = tool(FetchOutcome::NonZeroExit("too many redirects".to_string()));
        let output = tool.search("anything").await;

        assert_eq!(
            output,
            vec![ToolRecord::error(
                "Error executing search request: too many redirects"
            )]
        );
    }

    #[tokio::test]
    async fn test_empty_body_yields_no_results() {
        let output = tool(success("", 200)).search("nothing").await;
        assert!(output.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_still_extracts() {
        let output = tool(success(FIXTURE, 503)).search("busy").await;
        assert_eq!(output.len(), 2);
        assert!(output.iter().all(|record| !record.is_error()));
    }

    #[tokio::test]
    async fn test_invoke_decodes_arguments() {
        let tool = tool(success(FIXTURE, 200));
        let output = tool.invoke(r#"{"query": "rust  lang"}"#).await;

        assert_eq!(output.len(), 2);
        assert!(tool.fetcher.requested()[0].contains("?q=rust+lang&"));
    }

    #[tokio::test]
    async fn test_invoke_rejects_bad_arguments() {
        let tool = tool(success(FIXTURE, 200));

        for arguments in ["not json", "{}", r#"{"query": 42}"#] {
            let output = tool.invoke(arguments).await;
            assert_eq!(output.len(), 1, "arguments {arguments:?}");
            match &output[0] {
                ToolRecord::Error { error } => {
                    assert!(error.starts_with("Invalid tool arguments: "))
                }
                other => panic!("expected error record, got {other:?}"),
            }
        }
        assert!(tool.fetcher.requested().is_empty());
    }

    #[test]
    fn test_definition_schema() {
        let definition = SearxTool::<HttpFetcher>::definition();
        assert_eq!(definition.name, "searxng_search");
        assert_eq!(definition.parameters["type"], "object");
        assert_eq!(definition.parameters["properties"]["query"]["type"], "string");
        assert_eq!(definition.parameters["required"], json!(["query"]));
    }

    #[test]
    fn test_new_rejects_invalid_base_url() {
        let err = SearxTool::new(&SearxConfig::new("searx.lan")).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[tokio::test]
    async fn test_concurrent_searches_are_independent() {
        let tool = tool(success(FIXTURE, 200));
        let (a, b) = tokio::join!(tool.search("first query"), tool.search("second query"));

        assert_eq!(a, b);
        let mut requested = tool.fetcher.requested();
        requested.sort();
        assert_eq!(requested.len(), 2);
        assert!(requested[0].contains("q=first+query"));
        assert!(requested[1].contains("q=second+query"));
    }
}
