// ── Periodic poll task ──
//
// One background task per running dashboard. The first tick fires
// immediately so the grid fills at startup; after that the cadence is
// fixed and independent of whether the previous poll succeeded.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::dashboard::Dashboard;
use crate::error::CoreError;

/// Result of one `refresh()`.
#[derive(Debug)]
pub enum PollOutcome {
    /// The snapshot was replaced and re-rendered.
    Updated { total: usize, live: usize },
    /// The poll failed; the previous view is untouched.
    Skipped { error: CoreError },
    /// A newer poll landed first; this response was dropped.
    Superseded,
}

impl PollOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Handle to a running poll task.
pub(crate) struct Poller {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl Poller {
    /// Spawn the task. `period` must be non-zero.
    pub(crate) fn spawn(dashboard: Dashboard, period: Duration, cancel: CancellationToken) -> Self {
        info!(interval_secs = period.as_secs_f64(), "starting poll task");
        let handle = tokio::spawn(poll_task(dashboard, period, cancel.clone()));
        Self { cancel, handle }
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancel the task and wait for it to exit.
    pub(crate) async fn stop(self) {
        self.cancel.cancel();
        let _ = self.handle.await;
        debug!("poll task stopped");
    }
}

async fn poll_task(dashboard: Dashboard, period: Duration, cancel: CancellationToken) {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            () = cancel.cancelled() => break,
            _ = interval.tick() => {
                // Failures are logged inside refresh; the next tick retries.
                let outcome = dashboard.refresh().await;
                debug!(?outcome, "poll cycle finished");
            }
        }
    }
}
