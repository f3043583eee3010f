use crate::config::SearxConfig;
use crate::error::ConfigError;
use crate::fetchers::fetcher::{FetchOutcome, Fetcher};
use crate::query::SearchUrl;
use crate::utils::error_chain;
use reqwest::Client;
use reqwest::redirect::Policy;
use std::time::{Duration, Instant};
use tokio::time::timeout;

/// Fetches results pages over HTTP with a browser-like identity.
///
/// Redirects are followed up to the configured limit. A completed round trip
/// is always a `Success`, whatever its status code; deciding whether the page
/// is usable is left to extraction.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher from the tool configuration
    pub fn new(config: &SearxConfig) -> Result<Self, ConfigError> {
        Self::build(&config.user_agent, config.max_redirects, config.timeout())
    }

    /// Build a fetcher from individual settings
    pub fn build(
        user_agent: &str,
        max_redirects: usize,
        request_timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::limited(max_redirects))
            .timeout(request_timeout)
            .build()
            .map_err(|e| ConfigError::Client(error_chain(&e)))?;

        Ok(Self {
            client,
            timeout: request_timeout,
        })
    }

    async fn send(&self, url: &str) -> FetchOutcome {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => return classify_error(&e),
        };

        let status = response.status();
        ::log::info!("Search request to {} returned status {}", url, status);
        if response.url().as_str() != url {
            ::log::debug!("Followed redirects to {}", response.url());
        }

        // Headers arrived, so a failed body read means the stream was cut
        match response.bytes().await {
            Ok(body) => FetchOutcome::Success {
                body: body.to_vec(),
                status: status.as_u16(),
            },
            Err(e) => FetchOutcome::TransportFailure(error_chain(&e)),
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &SearchUrl) -> FetchOutcome {
        let url = url.to_string();
        let started = Instant::now();
        ::log::info!("Fetching {}", url);

        // Overall cap on top of the client's own timeout
        let outcome = match timeout(self.timeout, self.send(&url)).await {
            Ok(outcome) => outcome,
            Err(_) => FetchOutcome::TransportFailure(format!(
                "request timed out after {:.1}s",
                self.timeout.as_secs_f64()
            )),
        };

        ::log::debug!(
            "Fetch of {} finished in {:.2} seconds",
            url,
            started.elapsed().as_secs_f64()
        );
        outcome
    }
}

/// Split request failures into transport failures and client-side refusals
fn classify_error(error: &reqwest::Error) -> FetchOutcome {
    let message = error_chain(error);
    if error.is_timeout() || error.is_connect() {
        FetchOutcome::TransportFailure(message)
    } else if error.is_redirect() || error.is_builder() {
        FetchOutcome::NonZeroExit(message)
    } else {
        FetchOutcome::TransportFailure(message)
    }
}
