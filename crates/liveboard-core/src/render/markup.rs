// ── Card markup ──
//
// Card descriptors → grid HTML. Every descriptor string passes through
// `escape_html`/`escape_attr` on its way in; nothing else is interpolated.

use super::card::{Avatar, Card};
use super::escape::{escape_attr, escape_html};

/// The single row shown when the server tracks no streamers.
pub const EMPTY_GRID: &str = r#"<div class="loading">暂无主播数据</div>"#;

// Swaps a broken image for a placeholder built from `data-fallback`, using
// textContent so the glyph is never parsed as markup.
const AVATAR_ONERROR: &str = "var p=document.createElement('div');\
p.className='avatar-placeholder';p.textContent=this.dataset.fallback;\
this.replaceWith(p)";

/// Grid contents for `cards`, or the empty placeholder.
pub fn grid_html(cards: &[Card]) -> String {
    if cards.is_empty() {
        return EMPTY_GRID.to_owned();
    }
    cards.iter().map(card_html).collect()
}

pub fn card_html(card: &Card) -> String {
    let mut out = String::with_capacity(768);
    let state = if card.is_live() { "live" } else { "offline" };

    out.push_str(&format!(
        r#"<div class="streamer-card {state}" data-id="{id}"><div class="card-header">{avatar}<div class="streamer-info"><div class="streamer-name">{name}</div><span class="platform-tag">{platform}</span></div><div class="live-status">{status}</div></div>"#,
        id = escape_attr(&card.id),
        avatar = avatar_html(&card.avatar),
        name = escape_html(&card.name),
        platform = escape_html(&card.platform),
        status = if card.is_live() {
            r#"<span class="live-dot"></span><span class="live-text">直播中</span>"#
        } else {
            r#"<span class="offline-text">未开播</span>"#
        },
    ));

    if let Some(live) = &card.live {
        out.push_str(&format!(
            r#"<div class="stream-info"><div class="stream-title">{title}</div><div class="stream-meta"><span class="viewers">👁 {viewers}</span>"#,
            title = escape_html(&live.title),
            viewers = escape_html(&live.viewers),
        ));
        if let Some(started) = &live.started {
            out.push_str(&format!(
                r#"<span class="start-time">开播: {}</span>"#,
                escape_html(started)
            ));
        }
        out.push_str("</div></div>");
    }

    let query_class = if card.query.failed {
        "last-query query-failed"
    } else {
        "last-query"
    };
    out.push_str(&format!(
        r#"<div class="card-footer"><span class="{query_class}">{badge}</span><div class="card-actions"><button class="btn-stats" data-action="stats" data-id="{id}" data-name="{name}">统计</button>"#,
        badge = escape_html(&card.query.label()),
        id = escape_attr(&card.id),
        name = escape_attr(&card.name),
    ));
    if let Some(url) = &card.room_url {
        out.push_str(&format!(
            r#"<a class="btn-room" href="{}" target="_blank" rel="noopener noreferrer">打开直播间</a>"#,
            escape_attr(url)
        ));
    }
    out.push_str("</div></div></div>");
    out
}

fn avatar_html(avatar: &Avatar) -> String {
    match avatar {
        Avatar::Image { src, glyph } => format!(
            r#"<img class="avatar" src="{src}" alt="" data-fallback="{fallback}" onerror="{AVATAR_ONERROR}">"#,
            src = escape_attr(src),
            fallback = escape_attr(&glyph.to_string()),
        ),
        Avatar::Placeholder { glyph } => format!(
            r#"<div class="avatar-placeholder">{}</div>"#,
            escape_html(&glyph.to_string())
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::card::{LiveDetails, QueryBadge};

    fn card() -> Card {
        Card {
            id: "s1".into(),
            name: "Alice".into(),
            platform: "斗鱼".into(),
            avatar: Avatar::Placeholder { glyph: 'A' },
            live: None,
            query: QueryBadge {
                failed: false,
                age: "5分钟前".into(),
            },
            room_url: None,
        }
    }

    #[test]
    fn empty_grid_is_one_placeholder() {
        assert_eq!(grid_html(&[]), EMPTY_GRID);
    }

    #[test]
    fn offline_card_markup() {
        let html = card_html(&card());
        assert!(html.starts_with(r#"<div class="streamer-card offline" data-id="s1">"#));
        assert!(html.contains("未开播"));
        assert!(html.contains(r#"<div class="avatar-placeholder">A</div>"#));
        assert!(html.contains(r#"<span class="last-query">🕐 5分钟前</span>"#));
        assert!(!html.contains("stream-info"));
        assert!(!html.contains("打开直播间"));
    }

    #[test]
    fn live_card_markup() {
        let mut c = card();
        c.live = Some(LiveDetails {
            title: "<b>hi</b>".into(),
            viewers: "1.5万".into(),
            started: Some("10:30".into()),
        });
        c.room_url = Some("https://www.douyu.com/1".into());
        let html = card_html(&c);
        assert!(html.contains("streamer-card live"));
        assert!(html.contains("直播中"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("👁 1.5万"));
        assert!(html.contains("开播: 10:30"));
        assert!(html.contains(r#"href="https://www.douyu.com/1""#));
    }

    #[test]
    fn failed_query_gets_class() {
        let mut c = card();
        c.query.failed = true;
        let html = card_html(&c);
        assert!(html.contains(r#"<span class="last-query query-failed">⚠️ 5分钟前 失败</span>"#));
    }

    #[test]
    fn attributes_cannot_break_out() {
        let mut c = card();
        c.name = r#"x" onclick="evil()"#.into();
        let html = card_html(&c);
        assert!(html.contains(r#"data-name="x&quot; onclick=&quot;evil()""#));
        assert!(!html.contains(r#"onclick="evil()""#));
    }

    #[test]
    fn image_avatar_has_fallback() {
        let mut c = card();
        c.avatar = Avatar::Image {
            src: "/a.png".into(),
            glyph: '<',
        };
        let html = card_html(&c);
        assert!(html.contains(r#"src="/a.png""#));
        assert!(html.contains(r#"data-fallback="&lt;""#));
        assert!(html.contains("onerror="));
    }
}
