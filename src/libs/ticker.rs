//! Periodic tick driving the live panel.
//!
//! The ticker owns its tokio task: `start` spawns it, `stop` aborts it, and
//! dropping the ticker stops it too, so a view cannot leave a timer running
//! after it is gone. Each tick reads the clock once and hands the instant to
//! the callback. Ticks never touch stored state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zonal::libs::clock::SystemClock;
//! use zonal::libs::ticker::Ticker;
//! use std::time::Duration;
//!
//! # async fn demo() {
//! let mut ticker = Ticker::new(Duration::from_secs(1));
//! ticker.start(SystemClock, |now| println!("{}", now));
//! // ...
//! ticker.stop();
//! # }
//! ```

use crate::libs::clock::Clock;
use chrono::NaiveDateTime;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

pub struct Ticker {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// A zero period is raised to one millisecond; tokio intervals cannot tick at zero.
    pub fn new(period: Duration) -> Self {
        Ticker {
            period: period.max(MIN_TICK_INTERVAL),
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Starts ticking on the current tokio runtime. The first tick fires immediately.
    ///
    /// Starting a running ticker restarts it with the new callback.
    pub fn start<C, F>(&mut self, clock: C, mut on_tick: F)
    where
        C: Clock + Send + 'static,
        F: FnMut(NaiveDateTime) + Send + 'static,
    {
        self.stop();

        let period = self.period;
        self.handle = Some(tokio::spawn(async move {
            let mut interval = time::interval(period);
            // A slow render skips ticks instead of bursting to catch up
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                on_tick(clock.now());
            }
        }));
        tracing::debug!(period_ms = period.as_millis() as u64, "ticker started");
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            tracing::debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.stop();
    }
}
