// ── Per-streamer statistics ──
//
// Fetched on demand for the detail overlay and dropped when it closes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate counters for one streamer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_sessions: u64,
    /// Cumulative live time in seconds.
    pub total_duration: u64,
    /// Mean session length in seconds.
    pub avg_duration: u64,
    pub week_sessions: u64,
    pub month_sessions: u64,
    pub last_live: Option<DateTime<Utc>>,
}

/// One past (or still running) broadcast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub title: String,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    /// Seconds; `None` while the session is open.
    pub duration: Option<u64>,
}

impl HistoryEntry {
    /// A session without a recorded duration has not ended yet.
    pub fn is_open(&self) -> bool {
        !matches!(self.duration, Some(secs) if secs > 0)
    }
}

/// Everything the overlay shows for one streamer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamerDetail {
    pub stats: StatsSummary,
    /// Most recent first.
    pub history: Vec<HistoryEntry>,
}
