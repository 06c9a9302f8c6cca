use thiserror::Error;

/// Failures that abort a fetch strategy. Nothing here is retried or recovered.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}
