use std::future::Future;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayOutcome {
    Fired,
    Cancelled,
}

/// A screen transition that fires after a delay unless cancelled first,
/// e.g. when the user navigates away before the splash screen finishes.
#[derive(Debug, Clone)]
pub struct ScheduledTransition {
    duration: Duration,
    cancel_token: CancellationToken,
}

impl ScheduledTransition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn cancel(&self) {
        log::debug!("scheduled transition cancelled");
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }

    /// Resolves once the delay elapses or the transition is cancelled,
    /// whichever comes first. Cancellation wins a tie.
    pub fn wait(&self) -> impl Future<Output = DelayOutcome> + Send + 'static {
        let token = self.cancel_token.clone();
        let duration = self.duration;
        async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => DelayOutcome::Cancelled,
                _ = tokio::time::sleep(duration) => DelayOutcome::Fired,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_fires_after_duration() {
        let transition = ScheduledTransition::new(Duration::from_secs(3));
        let started = tokio::time::Instant::now();
        assert_eq!(transition.wait().await, DelayOutcome::Fired);
        assert!(started.elapsed() >= Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_deadline() {
        let transition = ScheduledTransition::new(Duration::from_secs(3));
        let pending = tokio::spawn(transition.wait());

        tokio::time::sleep(Duration::from_secs(1)).await;
        transition.cancel();

        assert_eq!(pending.await.unwrap(), DelayOutcome::Cancelled);
        assert!(transition.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_wait_after_cancel_returns_immediately() {
        let transition = ScheduledTransition::new(Duration::from_millis(1500));
        transition.cancel();
        let started = tokio::time::Instant::now();
        assert_eq!(transition.wait().await, DelayOutcome::Cancelled);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
