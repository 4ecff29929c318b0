//! Countdown timer for the claim cooldown
//!
//! A scoped resource around a background task that recomputes the
//! countdown text once per minute and publishes it over a watch channel.
//! The task is cancelled when `stop` is called or the handle is dropped,
//! so a view teardown can never leak a timer.

use crate::view::format_time_until_next_claim;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Refresh cadence for the countdown text (60 seconds)
const TICK_INTERVAL_SECS: u64 = 60;

/// Handle to a running countdown task
pub struct ClaimCountdown {
    target: DateTime<Utc>,
    cancel: CancellationToken,
    rx: watch::Receiver<Option<String>>,
}

impl ClaimCountdown {
    /// Spawn a countdown toward `target`. Must run inside a tokio runtime.
    pub fn spawn(target: DateTime<Utc>) -> Self {
        let cancel = CancellationToken::new();
        let (tx, rx) = watch::channel(None);

        tokio::spawn(countdown_loop(target, tx, cancel.clone()));

        Self { target, cancel, rx }
    }

    /// The instant this countdown is ticking toward
    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    /// Latest published countdown text (`None` before the first tick or
    /// once the target has passed)
    pub fn current(&self) -> Option<String> {
        self.rx.borrow().clone()
    }

    /// Wait for the next published value.
    ///
    /// Errors once the task has exited (after `stop` or drop).
    pub async fn changed(&mut self) -> Result<(), watch::error::RecvError> {
        self.rx.changed().await
    }

    /// Cancel the timer task
    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for ClaimCountdown {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn countdown_loop(
    target: DateTime<Utc>,
    tx: watch::Sender<Option<String>>,
    cancel: CancellationToken,
) {
    let mut interval =
        tokio::time::interval(std::time::Duration::from_secs(TICK_INTERVAL_SECS));

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!("Countdown toward {} cancelled", target);
                return;
            }
            _ = interval.tick() => {
                let text = format_time_until_next_claim(target, Utc::now());
                // Keep publishing even once the target passed; the view
                // only changes state on the next authoritative refresh
                if tx.send(text).is_err() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[tokio::test]
    async fn test_emits_countdown_text_on_spawn() {
        // Half a minute of slack so the first tick still reads 1h 30m
        let target = Utc::now() + Duration::minutes(90) + Duration::seconds(30);
        let mut countdown = ClaimCountdown::spawn(target);

        countdown.changed().await.expect("first tick");

        assert_eq!(countdown.current().as_deref(), Some("en 1h 30m"));
    }

    #[tokio::test]
    async fn test_stop_ends_the_task() {
        let target = Utc::now() + Duration::minutes(5);
        let mut countdown = ClaimCountdown::spawn(target);
        countdown.changed().await.expect("first tick");

        countdown.stop();

        // The task drops its sender on exit
        assert!(countdown.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_minute() {
        let target = Utc::now() + Duration::hours(2);
        let mut countdown = ClaimCountdown::spawn(target);
        countdown.changed().await.expect("first tick");

        tokio::time::advance(std::time::Duration::from_secs(TICK_INTERVAL_SECS)).await;
        countdown.changed().await.expect("second tick");

        assert!(countdown.current().is_some());
    }

    #[tokio::test]
    async fn test_past_target_publishes_none() {
        let target = Utc::now() - Duration::minutes(1);
        let mut countdown = ClaimCountdown::spawn(target);

        countdown.changed().await.expect("first tick");

        assert_eq!(countdown.current(), None);
    }
}
