use crate::query::SearchUrl;
use std::future::Future;

/// Result of a single fetch of a results page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The HTTP round trip completed; any status code lands here
    Success { body: Vec<u8>, status: u16 },
    /// The network operation could not complete (DNS, connect, TLS, timeout)
    TransportFailure(String),
    /// The fetch mechanism reported a failure that is not a transport error
    NonZeroExit(String),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }

    /// HTTP status of a completed round trip
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchOutcome::Success { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Define a base trait for fetchers
pub trait Fetcher {
    /// Perform exactly one GET against `url`
    fn fetch(&self, url: &SearchUrl) -> impl Future<Output = FetchOutcome> + Send;
}
