use clap::Parser;
use searx_search::{ConfigError, Searx, SearxTool, ToolOutput};
use serde::Serialize;
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    if args.schema {
        return print_json(&SearxTool::<searx_search::HttpFetcher>::definition(), args.pretty);
    }

    let Some(query) = args.joined_query() else {
        eprintln!("error: a search query is required (or pass --schema)");
        return ExitCode::from(2);
    };

    let tool = match build_tool(&args) {
        Ok(tool) => tool,
        Err(e) => {
            ::log::error!("Failed to configure search tool: {}", e);
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let start_time = std::time::Instant::now();
    let output: ToolOutput = tool.search(&query).await;
    ::log::info!(
        "Search complete - {} records in {:.2} seconds",
        output.len(),
        start_time.elapsed().as_secs_f64()
    );

    print_json(&output, args.pretty)
}

/// Layer config file and CLI overrides; `Searx` applies `SEARXNG_BASE_URL` in between
fn build_tool(args: &Args) -> Result<SearxTool, ConfigError> {
    let mut searx = Searx::new();
    if let Some(path) = &args.config_file {
        searx = searx.with_config_file(path)?;
    }
    if let Some(base_url) = &args.base_url {
        searx = searx.with_base_url(base_url);
    }
    if let Some(timeout) = args.timeout {
        searx = searx.with_timeout(timeout);
    }
    if let Some(max_redirects) = args.max_redirects {
        searx = searx.with_max_redirects(max_redirects);
    }
    searx.build()
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> ExitCode {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Failed to serialize output: {}", e);
            ExitCode::FAILURE
        }
    }
}
