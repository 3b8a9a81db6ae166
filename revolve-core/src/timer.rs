//! Owned auto-advance timer
//!
//! The interval lives inside this value: stopping or dropping it releases the
//! timer, so a carousel can be torn down before the page that hosts it.

use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior};
use tracing::debug;

/// Auto-advance ticker, stopped until started.
#[derive(Debug, Default)]
pub struct AutoAdvance {
    ticker: Option<Interval>,
}

impl AutoAdvance {
    /// A stopped timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// A timer that is already running with `period`.
    pub fn running(period: Duration) -> Self {
        let mut timer = Self::new();
        timer.start(period);
        timer
    }

    /// Start (or restart) ticking every `period`. The first tick fires one
    /// full period from now. A zero period stops the timer instead.
    pub fn start(&mut self, period: Duration) {
        if period.is_zero() {
            self.stop();
            return;
        }
        let mut ticker = time::interval_at(Instant::now() + period, period);
        // A late tick is skipped rather than replayed in a burst.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.ticker = Some(ticker);
        debug!(period_ms = period.as_millis() as u64, "auto-advance started");
    }

    /// Stop ticking. Idempotent.
    pub fn stop(&mut self) {
        if self.ticker.take().is_some() {
            debug!("auto-advance stopped");
        }
    }

    /// Whether a period is set.
    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    /// Current period, `None` while stopped.
    pub fn period(&self) -> Option<Duration> {
        self.ticker.as_ref().map(Interval::period)
    }

    /// Wait for the next tick. Pends forever while stopped, which lets the
    /// timer sit in a `select!` unconditionally.
    pub async fn tick(&mut self) -> Instant {
        match self.ticker.as_mut() {
            Some(ticker) => ticker.tick().await,
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_tick_waits_a_full_period() {
        let start = Instant::now();
        let mut timer = AutoAdvance::running(Duration::from_millis(4_000));
        let fired = timer.tick().await;
        assert_eq!(fired - start, Duration::from_millis(4_000));
        let fired = timer.tick().await;
        assert_eq!(fired - start, Duration::from_millis(8_000));
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_timer_never_fires() {
        let mut timer = AutoAdvance::running(Duration::from_millis(100));
        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.period(), None);

        let outcome =
            time::timeout(Duration::from_secs(10), timer.tick()).await;
        assert!(outcome.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_period_leaves_the_timer_stopped() {
        let mut timer = AutoAdvance::running(Duration::from_millis(100));
        timer.start(Duration::ZERO);
        assert!(!timer.is_running());

        let timer = AutoAdvance::running(Duration::ZERO);
        assert_eq!(timer.period(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_changes_the_period() {
        let mut timer = AutoAdvance::running(Duration::from_millis(100));
        timer.start(Duration::from_millis(250));
        assert_eq!(timer.period(), Some(Duration::from_millis(250)));
        let start = Instant::now();
        let fired = timer.tick().await;
        assert_eq!(fired - start, Duration::from_millis(250));
    }
}
