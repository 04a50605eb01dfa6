use thiserror::Error;

/// Failures of the contribution pipeline.
///
/// Every variant collapses to a single "no data" outcome at the HTTP
/// boundary; the detail only reaches the logs.
#[derive(Debug, Clone, Error)]
pub enum FeedError {
    #[error("upstream credential is not configured")]
    ConfigurationMissing,

    #[error("upstream request failed: {0}")]
    UpstreamNetwork(String),

    #[error("upstream returned status {status}")]
    UpstreamUnavailable { status: u16 },

    #[error("unexpected upstream payload: {0}")]
    UpstreamProtocol(String),
}
