use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "searx-search")]
#[command(about = "Search a SearxNG instance and print the results as JSON")]
#[command(version)]
pub struct Args {
    /// Search query (words are joined with single spaces)
    pub query: Vec<String>,

    /// Base URL of the SearxNG instance (overrides SEARXNG_BASE_URL and the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Maximum number of redirects to follow
    #[arg(long)]
    pub max_redirects: Option<usize>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config_file: Option<PathBuf>,

    /// Print the tool definition and exit
    #[arg(long)]
    pub schema: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

impl Args {
    /// The query words joined back together, if any were given
    pub fn joined_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
