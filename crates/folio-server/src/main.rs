use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use folio_server::config::ServerConfig;
use folio_service::GitHubClient;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let github = config.github_config();
    if !github.has_token() {
        warn!("GITHUB_TOKEN not set; contribution feed will report unavailable");
    }
    info!("github endpoint: {}", github.endpoint);

    let source = Arc::new(GitHubClient::new(github));

    let addr = config.addr();
    let listener = TcpListener::bind(addr).await?;
    info!("folio-server listening on http://{addr}");

    folio_server::serve(listener, source).await
}
