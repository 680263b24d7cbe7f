use std::time::Duration;

use actix_web::dev::ServerHandle;
use tokio::signal;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// 关闭超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Wait for Ctrl+C.
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, draining connections..."),
        Err(e) => warn!(
            "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
            e
        ),
    }
}

/// Stop accepting connections and let in-flight requests finish, bounded
/// by [`SHUTDOWN_TIMEOUT_SECS`].
pub async fn graceful_stop(handle: ServerHandle) {
    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), handle.stop(true)).await {
        Ok(()) => info!("All workers stopped"),
        Err(_) => {
            error!(
                "Graceful shutdown timed out after {} seconds, forcing stop",
                SHUTDOWN_TIMEOUT_SECS
            );
            handle.stop(false).await;
        }
    }
}
