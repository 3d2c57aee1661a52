//! Owned periodic tick timer
//!
//! The timer task lives exactly as long as its `TickTimer` handle: it is
//! aborted on `cancel()` and on drop, so a discarded session can never be
//! mutated by a stale tick.

use super::session::{RecordingError, RecordingResult};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// Default period between ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Handle to a repeating tick task
#[derive(Debug)]
pub struct TickTimer {
    period: Duration,
    handle: Option<JoinHandle<()>>,
}

impl TickTimer {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            handle: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Whether a tick task is currently scheduled
    pub fn is_active(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Spawn the tick task on the current tokio runtime
    ///
    /// `on_tick` runs once per period, the first time one full period after
    /// this call. Returning `false` ends the task.
    pub fn start<F>(&mut self, mut on_tick: F) -> RecordingResult<()>
    where
        F: FnMut() -> bool + Send + 'static,
    {
        if self.is_active() {
            return Err(RecordingError::TimerAlreadyActive);
        }

        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|_| RecordingError::RuntimeUnavailable)?;

        let period = self.period;
        let handle = runtime.spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if !on_tick() {
                    tracing::debug!("Tick task finished");
                    break;
                }
            }
        });

        self.handle = Some(handle);
        tracing::debug!("Tick timer started ({:?} period)", period);
        Ok(())
    }

    /// Abort the tick task
    pub fn cancel(&mut self) -> RecordingResult<()> {
        match self.handle.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                tracing::debug!("Tick timer cancelled");
                Ok(())
            }
            _ => Err(RecordingError::TimerNotActive),
        }
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
