//! Display formatting for timestamps, counts and durations.
//!
//! Every function here is pure and total: bad or missing input maps to a
//! defined fallback string, never an error. Wall-clock dependence goes
//! through [`Clock`] so callers (and tests) control "now" and the viewer's
//! UTC offset.

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Shown when a streamer has never been queried.
pub const NEVER_QUERIED: &str = "未查询";

/// Point-in-time reference used for relative ages and local rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: DateTime<Utc>,
    offset: FixedOffset,
}

impl Clock {
    /// Current system time in the machine's local offset.
    pub fn system() -> Self {
        let local = Local::now();
        Self {
            now: local.with_timezone(&Utc),
            offset: *local.offset(),
        }
    }

    /// Current system time rendered in an explicit offset.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            now: Utc::now(),
            offset,
        }
    }

    pub fn fixed(now: DateTime<Utc>, offset: FixedOffset) -> Self {
        Self { now, offset }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn local(&self, at: DateTime<Utc>) -> DateTime<FixedOffset> {
        at.with_timezone(&self.offset)
    }
}

// ── Parsing ─────────────────────────────────────────────────────────

/// Parse a wire timestamp.
///
/// The server writes naive `YYYY-MM-DD HH:MM:SS` strings in UTC. They are
/// rewritten to RFC 3339 (`T` separator, `Z` designator) before parsing so
/// they are never mistaken for local time. Full RFC 3339 strings with an
/// explicit offset are accepted as-is.
pub fn parse_utc_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let as_utc = format!("{}Z", raw.replacen(' ', "T", 1));
    DateTime::parse_from_rfc3339(&as_utc)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ── Time ────────────────────────────────────────────────────────────

/// Relative age of a query timestamp: "N秒前", "N分钟前", "N小时前", or the
/// local time of day once it is a day old.
///
/// Timestamps slightly in the future (clock skew) read as "0秒前".
pub fn format_query_time(at: Option<DateTime<Utc>>, clock: &Clock) -> String {
    let Some(at) = at else {
        return NEVER_QUERIED.to_owned();
    };
    let secs = (clock.now - at).num_seconds().max(0);
    match secs {
        s if s < 60 => format!("{s}秒前"),
        s if s < 3_600 => format!("{}分钟前", s / 60),
        s if s < 86_400 => format!("{}小时前", s / 3_600),
        _ => format_time_of_day(at, clock),
    }
}

/// Local `HH:MM`.
pub fn format_time_of_day(at: DateTime<Utc>, clock: &Clock) -> String {
    clock.local(at).format("%H:%M").to_string()
}

/// Local `MM/DD HH:MM`; empty when absent.
pub fn format_date_time(at: Option<DateTime<Utc>>, clock: &Clock) -> String {
    at.map(|t| clock.local(t).format("%m/%d %H:%M").to_string())
        .unwrap_or_default()
}

/// The clock's own time as local `HH:MM:SS`, for the "last update" slot.
pub fn format_clock(clock: &Clock) -> String {
    clock.local(clock.now).format("%H:%M:%S").to_string()
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Viewer-style count: `15000` → `"1.5万"`, `999` → `"999"`.
///
/// Rounds half up to one decimal place of 万 (ten thousand).
pub fn format_number(n: u64) -> String {
    if n >= 10_000 {
        let tenths = (n + 500) / 1_000;
        format!("{}.{}万", tenths / 10, tenths % 10)
    } else {
        n.to_string()
    }
}

/// Session length: `5400` → `"1小时30分钟"`, `600` → `"10分钟"`, `0` → `"0分钟"`.
pub fn format_duration(secs: u64) -> String {
    let hours = secs / 3_600;
    let minutes = (secs % 3_600) / 60;
    if hours > 0 {
        format!("{hours}小时{minutes}分钟")
    } else {
        format!("{minutes}分钟")
    }
}
