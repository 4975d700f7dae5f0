// ── Detail overlay body ──

use crate::fmt::{Clock, format_date_time, format_duration};
use crate::model::{HistoryEntry, StreamerDetail};

use super::card::UNTITLED;
use super::escape::escape_html;

pub const DETAIL_LOADING: &str = r#"<div class="loading">加载中...</div>"#;
pub const DETAIL_FAILED: &str = r#"<div class="loading">加载失败</div>"#;
const NO_HISTORY: &str = r#"<div class="loading">暂无开播记录</div>"#;
const STILL_LIVE: &str = "进行中";

/// Modal title text for a streamer.
pub fn detail_title(name: &str) -> String {
    format!("{name} - 统计数据")
}

/// One labelled counter in the stats grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub title: String,
    pub started: String,
    /// Formatted length, or `进行中`.
    pub duration: String,
}

impl HistoryRow {
    pub fn from_entry(entry: &HistoryEntry, clock: &Clock) -> Self {
        let title = entry.title.trim();
        Self {
            title: if title.is_empty() { UNTITLED } else { title }.to_owned(),
            started: format_date_time(entry.started_at, clock),
            duration: match entry.duration {
                Some(secs) if !entry.is_open() => format_duration(secs),
                _ => STILL_LIVE.to_owned(),
            },
        }
    }
}

/// Display-ready overlay body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub tiles: [StatTile; 4],
    /// `MM/DD HH:MM` of the last broadcast, when known.
    pub last_live: Option<String>,
    pub history: Vec<HistoryRow>,
}

impl DetailView {
    pub fn new(detail: &StreamerDetail, clock: &Clock) -> Self {
        let stats = &detail.stats;
        Self {
            tiles: [
                StatTile {
                    label: "总开播次数",
                    value: stats.total_sessions.to_string(),
                },
                StatTile {
                    label: "总直播时长",
                    value: format_duration(stats.total_duration),
                },
                StatTile {
                    label: "本周开播",
                    value: stats.week_sessions.to_string(),
                },
                StatTile {
                    label: "本月开播",
                    value: stats.month_sessions.to_string(),
                },
            ],
            last_live: stats
                .last_live
                .map(|at| format_date_time(Some(at), clock)),
            history: detail
                .history
                .iter()
                .map(|h| HistoryRow::from_entry(h, clock))
                .collect(),
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::from(r#"<div class="stats-grid">"#);
        for tile in &self.tiles {
            out.push_str(&format!(
                r#"<div class="stats-item"><div class="value">{}</div><div class="label">{}</div></div>"#,
                escape_html(&tile.value),
                tile.label,
            ));
        }
        out.push_str("</div>");

        if let Some(at) = &self.last_live {
            out.push_str(&format!(
                r#"<div class="last-live">上次开播时间: {}</div>"#,
                escape_html(at)
            ));
        }

        out.push_str(r#"<h3 class="history-title">近期开播记录</h3>"#);
        if self.history.is_empty() {
            out.push_str(NO_HISTORY);
            return out;
        }
        out.push_str(r#"<div class="history-list">"#);
        for row in &self.history {
            out.push_str(&format!(
                r#"<div class="history-item"><div class="title">{title}</div><div class="meta"><span>{started}</span><span>{duration}</span></div></div>"#,
                title = escape_html(&row.title),
                started = escape_html(&row.started),
                duration = escape_html(&row.duration),
            ));
        }
        out.push_str("</div>");
        out
    }
}

/// Render the loaded overlay body.
pub fn detail_html(detail: &StreamerDetail, clock: &Clock) -> String {
    DetailView::new(detail, clock).to_html()
}
