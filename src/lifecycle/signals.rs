//! OS signal handling.

/// Wait for SIGINT (Ctrl+C).
///
/// A failure to install the handler is reported and treated as an
/// immediate shutdown request.
pub async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to install Ctrl+C handler");
    }
}
