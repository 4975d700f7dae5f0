// ── Wire → domain conversion ──
//
// Timestamps are parsed here once, so the renderer only ever sees
// `DateTime<Utc>`. Unparseable timestamps become `None` and render like
// absent ones.

use liveboard_api::{HistoryRecord, StatsRecord, StreamerRecord};

use crate::fmt::parse_utc_timestamp;
use crate::model::{HistoryEntry, LastQuery, LiveSession, Platform, StatsSummary, Streamer};

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() { None } else { Some(s) }
}

/// Counts are signed on the wire; anything below zero reads as zero.
fn clamp_count(n: i64) -> u64 {
    u64::try_from(n).unwrap_or(0)
}

impl From<StreamerRecord> for Streamer {
    fn from(r: StreamerRecord) -> Self {
        let session = r.is_live.then(|| LiveSession {
            title: r.title,
            viewer_count: r.viewer_count.map_or(0, clamp_count),
            started_at: r.start_time.as_deref().and_then(parse_utc_timestamp),
        });

        Self {
            id: r.id,
            name: r.name,
            platform: Platform::from(r.platform),
            room_id: r.room_id,
            avatar_local: r.avatar_local.and_then(non_empty),
            avatar_remote: non_empty(r.avatar),
            is_live: r.is_live,
            session,
            room_url: non_empty(r.room_url),
            last_query: LastQuery {
                at: r.last_query_time.as_deref().and_then(parse_utc_timestamp),
                failed: r.last_query_failed,
            },
        }
    }
}

impl From<StatsRecord> for StatsSummary {
    fn from(r: StatsRecord) -> Self {
        Self {
            total_sessions: r.total_sessions,
            total_duration: r.total_duration,
            avg_duration: r.avg_duration,
            week_sessions: r.week_sessions,
            month_sessions: r.month_sessions,
            last_live: r.last_live_time.as_deref().and_then(parse_utc_timestamp),
        }
    }
}

impl From<HistoryRecord> for HistoryEntry {
    fn from(r: HistoryRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            started_at: parse_utc_timestamp(&r.start_time),
            ended_at: r.end_time.as_deref().and_then(parse_utc_timestamp),
            duration: r.duration.map(clamp_count),
        }
    }
}
