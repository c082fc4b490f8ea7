use anchor_client::ClientError;
use thiserror::Error;

/// Terminal failure classes of a smoke run. Nothing is recovered locally;
/// the caller's only move is to report and exit non-zero.
#[derive(Debug, Error)]
pub enum SmokeError {
    /// Environment or context setup failed; no network object was built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The program handle could not be resolved.
    #[error("binding error: {0}")]
    Binding(#[source] ClientError),

    /// The remote call failed, was rejected, or timed out.
    #[error("remote call error: {0}")]
    RemoteCall(#[source] ClientError),
}
