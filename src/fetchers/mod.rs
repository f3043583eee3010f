pub mod fetcher;
pub mod http;

pub use fetcher::{FetchOutcome, Fetcher};
pub use http::HttpFetcher;
