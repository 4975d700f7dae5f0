// ── View state ──
//
// Single source of truth for the grid. Every successful poll swaps in a
// complete new snapshot; nothing is merged or patched in place.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::model::Streamer;

/// One complete poll result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSnapshot {
    /// Ordered exactly as the server returned them.
    pub streamers: Vec<Arc<Streamer>>,
    /// When this snapshot was applied; `None` before the first poll lands.
    pub refreshed_at: Option<DateTime<Utc>>,
    /// Sequence number of the poll that produced this snapshot.
    pub seq: u64,
}

impl ViewSnapshot {
    pub fn total(&self) -> usize {
        self.streamers.len()
    }

    pub fn live(&self) -> usize {
        self.streamers.iter().filter(|s| s.is_live).count()
    }

    pub fn is_empty(&self) -> bool {
        self.streamers.is_empty()
    }
}

/// Ticket handed out when a poll is issued.
///
/// Poll responses can arrive out of order; a response only lands if its
/// ticket is newer than the snapshot currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PollSeq(u64);

/// Watch-backed holder of the latest [`ViewSnapshot`].
pub struct ViewState {
    next_seq: AtomicU64,
    snapshot: watch::Sender<Arc<ViewSnapshot>>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(Arc::new(ViewSnapshot::default()));
        Self {
            next_seq: AtomicU64::new(1),
            snapshot,
        }
    }

    /// Reserve a sequence number for a poll about to be issued.
    pub fn begin_poll(&self) -> PollSeq {
        PollSeq(self.next_seq.fetch_add(1, Ordering::Relaxed))
    }

    /// Replace the snapshot wholesale with the result of poll `seq`.
    ///
    /// Returns `false` (and changes nothing) when a newer poll has already
    /// landed.
    pub fn replace(&self, seq: PollSeq, streamers: Vec<Streamer>, at: DateTime<Utc>) -> bool {
        let next = Arc::new(ViewSnapshot {
            streamers: streamers.into_iter().map(Arc::new).collect(),
            refreshed_at: Some(at),
            seq: seq.0,
        });
        // `send_if_modified` updates even with zero receivers.
        self.snapshot.send_if_modified(|current| {
            if seq.0 <= current.seq {
                return false;
            }
            *current = next;
            true
        })
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn current(&self) -> Arc<ViewSnapshot> {
        self.snapshot.borrow().clone()
    }

    /// Subscribe to snapshot replacements.
    pub fn subscribe(&self) -> watch::Receiver<Arc<ViewSnapshot>> {
        self.snapshot.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{LastQuery, Platform};

    fn streamer(id: &str, live: bool) -> Streamer {
        Streamer {
            id: id.into(),
            name: id.to_uppercase(),
            platform: Platform::Douyu,
            room_id: String::new(),
            avatar_local: None,
            avatar_remote: None,
            is_live: live,
            session: None,
            room_url: None,
            last_query: LastQuery::default(),
        }
    }

    #[test]
    fn starts_empty() {
        let state = ViewState::new();
        let snap = state.current();
        assert!(snap.is_empty());
        assert!(snap.refreshed_at.is_none());
    }

    #[test]
    fn replace_swaps_whole_snapshot() {
        let state = ViewState::new();
        let seq = state.begin_poll();
        assert!(state.replace(seq, vec![streamer("a", true), streamer("b", false)], Utc::now()));
        let snap = state.current();
        assert_eq!(snap.total(), 2);
        assert_eq!(snap.live(), 1);

        let seq = state.begin_poll();
        assert!(state.replace(seq, vec![streamer("c", false)], Utc::now()));
        let snap = state.current();
        assert_eq!(snap.total(), 1);
        assert_eq!(snap.streamers[0].id, "c");
    }

    #[test]
    fn stale_poll_does_not_overwrite_newer() {
        let state = ViewState::new();
        let older = state.begin_poll();
        let newer = state.begin_poll();

        assert!(state.replace(newer, vec![streamer("new", true)], Utc::now()));
        assert!(!state.replace(older, vec![streamer("old", false)], Utc::now()));

        assert_eq!(state.current().streamers[0].id, "new");
    }

    #[tokio::test]
    async fn subscribers_see_replacements() {
        let state = ViewState::new();
        let mut rx = state.subscribe();

        let seq = state.begin_poll();
        state.replace(seq, vec![streamer("a", true)], Utc::now());

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().total(), 1);
    }
}
