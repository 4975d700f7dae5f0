// Wire types for the `{ code, data }` envelope and its payloads.
//
// These mirror the server's JSON exactly. Optional and absent fields fall
// back to defaults so a partially filled record still deserializes;
// `liveboard-core` converts them into domain types.

use serde::{Deserialize, Serialize};

/// The envelope wrapping every API response.
///
/// `code == 0` means success. Failure envelopes usually carry a
/// `message` and no `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    pub data: Option<T>,
    pub message: Option<String>,
}

/// One tracked streamer as returned by `GET /api/streamers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamerRecord {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub room_id: String,
    pub avatar: String,
    pub avatar_local: Option<String>,
    pub is_live: bool,
    pub title: String,
    pub start_time: Option<String>,
    /// Signed on the wire; `liveboard-core` clamps negatives to zero.
    pub viewer_count: Option<i64>,
    pub room_url: String,
    pub last_query_time: Option<String>,
    pub last_query_failed: bool,
}

/// Aggregate counters from `GET /api/stats/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    pub streamer_id: String,
    pub total_sessions: u64,
    /// Seconds.
    pub total_duration: u64,
    /// Seconds.
    pub avg_duration: u64,
    pub last_live_time: Option<String>,
    pub week_sessions: u64,
    pub month_sessions: u64,
}

/// One past session from `GET /api/history/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryRecord {
    pub id: i64,
    pub streamer_id: String,
    pub platform: String,
    pub room_id: String,
    pub title: String,
    pub start_time: String,
    pub end_time: Option<String>,
    /// Seconds; absent while the session is still open. End minus start
    /// on the server, so clock skew can make it negative.
    pub duration: Option<i64>,
}
