use std::net::{IpAddr, SocketAddr};

use clap::Parser;
use folio_service::{GitHubConfig, DEFAULT_ENDPOINT};

#[derive(Debug, Parser)]
#[command(name = "folio-server", about = "Portfolio contribution feed server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "FOLIO_BIND", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Port to listen on
    #[arg(long, env = "FOLIO_PORT", default_value = "3720")]
    pub port: u16,

    /// GitHub token used for the contributions query
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// GitHub GraphQL endpoint (override for GitHub Enterprise)
    #[arg(long, env = "FOLIO_GITHUB_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub github_endpoint: String,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn github_config(&self) -> GitHubConfig {
        GitHubConfig::new(self.github_token.clone()).with_endpoint(&self.github_endpoint)
    }
}
