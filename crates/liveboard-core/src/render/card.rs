// ── Card descriptors ──
//
// Display-ready projection of a snapshot. All strings here are final text
// (formatted, not yet escaped); `markup` decides how they reach the page.

use crate::fmt::{Clock, format_clock, format_number, format_query_time, format_time_of_day};
use crate::model::Streamer;
use crate::store::ViewSnapshot;

use super::escape::is_safe_url;

/// Shown for a live session with an empty title.
pub const UNTITLED: &str = "无标题";

/// Glyph used when a streamer has no name to take an initial from.
const FALLBACK_GLYPH: char = '?';

/// How the avatar slot is filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    /// An image, falling back to `glyph` if it fails to load.
    Image { src: String, glyph: char },
    Placeholder { glyph: char },
}

impl Avatar {
    pub fn glyph(&self) -> char {
        match self {
            Self::Image { glyph, .. } | Self::Placeholder { glyph } => *glyph,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveDetails {
    pub title: String,
    /// Already formatted, e.g. `1.5万`.
    pub viewers: String,
    /// Local `HH:MM`; `None` when the start time is unknown.
    pub started: Option<String>,
}

/// Footer indicator for the crawler's last check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryBadge {
    pub failed: bool,
    /// Relative age, or `未查询`.
    pub age: String,
}

impl QueryBadge {
    pub fn glyph(&self) -> &'static str {
        if self.failed { "⚠️" } else { "🕐" }
    }

    /// Full indicator text, e.g. `🕐 5分钟前` or `⚠️ 3小时前 失败`.
    pub fn label(&self) -> String {
        if self.failed {
            format!("{} {} 失败", self.glyph(), self.age)
        } else {
            format!("{} {}", self.glyph(), self.age)
        }
    }
}

/// Everything one grid card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub platform: String,
    pub avatar: Avatar,
    /// `Some` only for live streamers.
    pub live: Option<LiveDetails>,
    pub query: QueryBadge,
    /// Only http(s) or site-relative links survive.
    pub room_url: Option<String>,
}

impl Card {
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    pub fn from_streamer(s: &Streamer, clock: &Clock) -> Self {
        let glyph = s.initial().unwrap_or(FALLBACK_GLYPH);
        let avatar = match s.avatar_sources().find(|src| is_safe_url(src)) {
            Some(src) => Avatar::Image {
                src: src.to_owned(),
                glyph,
            },
            None => Avatar::Placeholder { glyph },
        };

        let live = if s.is_live {
            let session = s.session.as_ref();
            let title = session
                .map(|x| x.title.trim())
                .filter(|t| !t.is_empty())
                .unwrap_or(UNTITLED);
            Some(LiveDetails {
                title: title.to_owned(),
                viewers: format_number(session.map_or(0, |x| x.viewer_count)),
                started: session
                    .and_then(|x| x.started_at)
                    .map(|at| format_time_of_day(at, clock)),
            })
        } else {
            None
        };

        Self {
            id: s.id.clone(),
            name: s.name.clone(),
            platform: s.platform.label().to_owned(),
            avatar,
            live,
            query: QueryBadge {
                failed: s.last_query.failed,
                age: format_query_time(s.last_query.at, clock),
            },
            room_url: s.room_url.clone().filter(|u| is_safe_url(u)),
        }
    }
}

/// Header counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub live: usize,
    /// Local `HH:MM:SS`.
    pub clock: String,
}

/// One card per streamer, in snapshot order.
pub fn cards(snapshot: &ViewSnapshot, clock: &Clock) -> Vec<Card> {
    snapshot
        .streamers
        .iter()
        .map(|s| Card::from_streamer(s, clock))
        .collect()
}

pub fn summarize(snapshot: &ViewSnapshot, clock: &Clock) -> Summary {
    Summary {
        total: snapshot.total(),
        live: snapshot.live(),
        clock: format_clock(clock),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use chrono::{Duration, FixedOffset, TimeZone, Utc};

    use super::*;
    use crate::model::{LastQuery, LiveSession, Platform};

    fn clock() -> Clock {
        Clock::fixed(
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap(),
            FixedOffset::east_opt(8 * 3600).unwrap(),
        )
    }

    fn streamer() -> Streamer {
        Streamer {
            id: "s1".into(),
            name: "Alice".into(),
            platform: Platform::Bilibili,
            room_id: "1001".into(),
            avatar_local: None,
            avatar_remote: None,
            is_live: false,
            session: None,
            room_url: None,
            last_query: LastQuery::default(),
        }
    }

    #[test]
    fn offline_card_has_no_live_details() {
        let card = Card::from_streamer(&streamer(), &clock());
        assert!(!card.is_live());
        assert_eq!(card.platform, "B站");
        assert_eq!(card.avatar, Avatar::Placeholder { glyph: 'A' });
        assert_eq!(card.query.label(), "🕐 未查询");
    }

    #[test]
    fn live_card_formats_session() {
        let mut s = streamer();
        s.is_live = true;
        s.session = Some(LiveSession {
            title: "  ".into(),
            viewer_count: 15_000,
            started_at: Some(Utc.with_ymd_and_hms(2024, 6, 15, 2, 30, 0).unwrap()),
        });
        let live = Card::from_streamer(&s, &clock()).live.unwrap();
        assert_eq!(live.title, UNTITLED);
        assert_eq!(live.viewers, "1.5万");
        assert_eq!(live.started.as_deref(), Some("10:30"));
    }

    #[test]
    fn failed_query_badge() {
        let mut s = streamer();
        s.last_query = LastQuery {
            at: Some(clock().now() - Duration::minutes(5)),
            failed: true,
        };
        let card = Card::from_streamer(&s, &clock());
        assert_eq!(card.query.label(), "⚠️ 5分钟前 失败");
    }

    #[test]
    fn unsafe_urls_are_dropped() {
        let mut s = streamer();
        s.avatar_remote = Some("javascript:alert(1)".into());
        s.room_url = Some("javascript:alert(1)".into());
        let card = Card::from_streamer(&s, &clock());
        assert_eq!(card.avatar, Avatar::Placeholder { glyph: 'A' });
        assert_eq!(card.room_url, None);
    }

    #[test]
    fn local_avatar_preferred() {
        let mut s = streamer();
        s.avatar_local = Some("/avatars/s1.png".into());
        s.avatar_remote = Some("https://cdn/s1.png".into());
        let card = Card::from_streamer(&s, &clock());
        assert_eq!(
            card.avatar,
            Avatar::Image {
                src: "/avatars/s1.png".into(),
                glyph: 'A'
            }
        );
    }

    #[test]
    fn unsafe_local_avatar_falls_back_to_remote() {
        let mut s = streamer();
        s.avatar_local = Some("javascript:alert(1)".into());
        s.avatar_remote = Some("https://cdn/s1.png".into());
        let card = Card::from_streamer(&s, &clock());
        assert_eq!(
            card.avatar,
            Avatar::Image {
                src: "https://cdn/s1.png".into(),
                glyph: 'A'
            }
        );
    }

    #[test]
    fn summary_counts_live() {
        let mut live = streamer();
        live.is_live = true;
        let snap = ViewSnapshot {
            streamers: vec![Arc::new(streamer()), Arc::new(live)],
            refreshed_at: None,
            seq: 1,
        };
        let summary = summarize(&snap, &clock());
        assert_eq!(summary.total, 2);
        assert_eq!(summary.live, 1);
        assert_eq!(summary.clock, "20:00:00");
        assert_eq!(cards(&snap, &clock()).len(), 2);
    }
}
