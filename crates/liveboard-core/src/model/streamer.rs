// ── Streamer domain types ──

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::EnumString;

/// Streaming platform a streamer broadcasts on.
///
/// Known platforms carry a display label; any other tag is preserved
/// verbatim in [`Platform::Other`] and displayed as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Bilibili,
    Douyu,
    Douyin,
    Kuaishou,
    Cc163,
    Weibo,
    #[strum(default)]
    Other(String),
}

impl Platform {
    /// Wire tag, e.g. `"bilibili"`.
    pub fn tag(&self) -> &str {
        match self {
            Self::Bilibili => "bilibili",
            Self::Douyu => "douyu",
            Self::Douyin => "douyin",
            Self::Kuaishou => "kuaishou",
            Self::Cc163 => "cc163",
            Self::Weibo => "weibo",
            Self::Other(raw) => raw,
        }
    }

    /// Human-facing label; unknown platforms fall back to the raw tag.
    pub fn label(&self) -> &str {
        match self {
            Self::Bilibili => "B站",
            Self::Douyu => "斗鱼",
            Self::Douyin => "抖音",
            Self::Kuaishou => "快手",
            Self::Cc163 => "网易CC",
            Self::Weibo => "微博",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Platform {
    fn from(raw: String) -> Self {
        Self::from_str(&raw).unwrap_or(Self::Other(raw))
    }
}

impl From<Platform> for String {
    fn from(p: Platform) -> Self {
        match p {
            Platform::Other(raw) => raw,
            known => known.tag().to_owned(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Fields that only exist while a streamer is live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSession {
    pub title: String,
    pub viewer_count: u64,
    pub started_at: Option<DateTime<Utc>>,
}

/// Outcome of the crawler's most recent check of this streamer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastQuery {
    pub at: Option<DateTime<Utc>>,
    pub failed: bool,
}

/// A tracked streamer, rebuilt from every poll response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streamer {
    pub id: String,
    pub name: String,
    pub platform: Platform,
    pub room_id: String,
    /// Locally cached avatar path, if the server mirrored one.
    pub avatar_local: Option<String>,
    /// Remote avatar URL.
    pub avatar_remote: Option<String>,
    pub is_live: bool,
    /// `Some` only when `is_live`.
    pub session: Option<LiveSession>,
    pub room_url: Option<String>,
    pub last_query: LastQuery,
}

impl Streamer {
    /// Avatar sources in order of preference: the cached copy, then the
    /// remote URL.
    pub fn avatar_sources(&self) -> impl Iterator<Item = &str> {
        [self.avatar_local.as_deref(), self.avatar_remote.as_deref()]
            .into_iter()
            .flatten()
    }

    /// First character of the name, used for placeholder avatars.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_platforms_parse() {
        assert_eq!(Platform::from("bilibili".to_owned()), Platform::Bilibili);
        assert_eq!(Platform::from("cc163".to_owned()), Platform::Cc163);
        assert_eq!(Platform::from("weibo".to_owned()).label(), "微博");
    }

    #[test]
    fn unknown_platform_passes_through() {
        let p: Platform = "twitch".parse().unwrap();
        assert_eq!(p, Platform::Other("twitch".into()));
        assert_eq!(p.label(), "twitch");
        assert_eq!(p.tag(), "twitch");
        assert!(!p.is_known());
    }

    #[test]
    fn platform_round_trips_through_string() {
        for p in [Platform::Douyin, Platform::Other("huya".into())] {
            let s: String = p.clone().into();
            assert_eq!(Platform::from(s), p);
        }
    }

    #[test]
    fn avatar_prefers_local_copy() {
        let mut s = Streamer {
            id: "1".into(),
            name: "Alice".into(),
            platform: Platform::Bilibili,
            room_id: String::new(),
            avatar_local: Some("/avatars/1.png".into()),
            avatar_remote: Some("https://cdn/1.png".into()),
            is_live: false,
            session: None,
            room_url: None,
            last_query: LastQuery::default(),
        };
        assert_eq!(
            s.avatar_sources().collect::<Vec<_>>(),
            ["/avatars/1.png", "https://cdn/1.png"]
        );

        s.avatar_local = None;
        assert_eq!(s.avatar_sources().next(), Some("https://cdn/1.png"));

        s.avatar_remote = None;
        assert_eq!(s.avatar_sources().next(), None);
        assert_eq!(s.initial(), Some('A'));
    }
}
