mod config;
mod output;

use std::sync::Arc;

use creditsearch_core::{CreditsClient, SearchController};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;
use tracing::error;
use tracing_subscriber::EnvFilter;

use config::Config;
use output::TerminalPage;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let client = match CreditsClient::with_config(config.client_config()) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            output::fatal(&e.to_string());
            std::process::exit(1);
        }
    };

    let page = Arc::new(TerminalPage::stdout());
    let controller = Arc::new(
        SearchController::new(client.clone(), page.clone(), page).with_ordering(config.ordering()),
    );

    let words: Vec<String> = std::env::args().skip(1).collect();
    if !words.is_empty() {
        controller.execute_search(&words.join(" ")).await;
        return;
    }

    output::startup_banner(client.search_url().as_str());

    // Each line is one trigger. Searches are not serialized: a new name can
    // be entered while earlier lookups are still in flight.
    let mut in_flight = JoinSet::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        output::prompt();
        match lines.next_line().await {
            Ok(Some(line)) => {
                let controller = controller.clone();
                in_flight.spawn(async move {
                    controller.execute_search(&line).await;
                });
            }
            Ok(None) => break,
            Err(e) => {
                error!(error = %e, "failed to read from stdin");
                break;
            }
        }
        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}
}

/// Build the log filter from `RUST_LOG`-style directives, defaulting to info
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
