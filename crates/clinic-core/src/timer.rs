//! Cancellable delays.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

/// Sleep for `delay` unless `cancel` fires first.
///
/// Returns `true` when the full delay elapsed.
pub async fn sleep_unless_cancelled(delay: Duration, cancel: &CancellationToken) -> bool {
    tokio::select! {
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(delay) => !cancel.is_cancelled(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn elapses_without_cancel() {
        let token = CancellationToken::new();
        assert!(sleep_unless_cancelled(Duration::from_secs(5), &token).await);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_wins() {
        let token = CancellationToken::new();
        let canceller = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });
        let started = tokio::time::Instant::now();
        assert!(!sleep_unless_cancelled(Duration::from_secs(5), &token).await);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn already_cancelled_returns_immediately() {
        let token = CancellationToken::new();
        token.cancel();
        assert!(!sleep_unless_cancelled(Duration::from_secs(5), &token).await);
    }
}
