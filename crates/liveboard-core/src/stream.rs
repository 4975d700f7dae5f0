// ── View state subscriptions ──
//
// Subscription handle for consumers that re-render or persist the page
// whenever a poll lands.

use std::sync::Arc;

use tokio::sync::watch;

use crate::store::ViewSnapshot;

/// A subscription to view state replacements.
///
/// Only replacements made after the subscription was created are reported.
pub struct ViewStream {
    receiver: watch::Receiver<Arc<ViewSnapshot>>,
}

impl ViewStream {
    /// `receiver` must be fresh from `watch::Sender::subscribe`, which
    /// starts out having seen the current value.
    pub(crate) fn new(receiver: watch::Receiver<Arc<ViewSnapshot>>) -> Self {
        Self { receiver }
    }

    /// Wait for the next replacement, returning the new snapshot.
    /// Returns `None` once the dashboard has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<ViewSnapshot>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }
}
