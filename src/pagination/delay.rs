//! Inter-page delay

use std::time::Duration;
use tracing::debug;

/// Sleep for `delay` without blocking the executor.
///
/// A zero delay returns on the first poll without touching the timer.
pub async fn pause(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    debug!("Waiting {:?} before next scan page", delay);
    tokio::time::sleep(delay).await;
}
