//! Full-page serialization of the host document.
//!
//! Produces a standalone HTML file with the slots of a [`Document`] filled
//! in, so a headless dashboard can publish what a browser would show.
//!
//! The published page is a snapshot: its inline script handles the modal's
//! close triggers, but statistics are loaded through `liveboard detail`, so
//! the per-card 统计 buttons are disabled and point at that command.

use super::{Document, Element, ViewBinding};
use crate::render::escape::escape_attr;

const STYLE: &str = r"
:root { --bg: #0f1115; --card: #1a1d24; --text: #e6e6e6; --text-secondary: #9aa0a6; --live: #ff4d4f; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'PingFang SC', 'Microsoft YaHei', sans-serif; background: var(--bg); color: var(--text); }
header { display: flex; justify-content: space-between; align-items: center; padding: 1rem 1.5rem; }
.stats-bar { display: flex; gap: 1.5rem; color: var(--text-secondary); }
.streamers-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; padding: 1.5rem; }
.streamer-card { background: var(--card); border-radius: 10px; padding: 1rem; }
.streamer-card.live { box-shadow: 0 0 0 2px var(--live); }
.card-header { display: flex; align-items: center; gap: 0.75rem; }
.avatar, .avatar-placeholder { width: 48px; height: 48px; border-radius: 50%; }
.avatar-placeholder { display: flex; align-items: center; justify-content: center; background: #333; font-weight: 600; }
.live-dot { display: inline-block; width: 8px; height: 8px; border-radius: 50%; background: var(--live); }
.offline-text, .stream-meta, .last-query { color: var(--text-secondary); font-size: 0.85rem; }
.query-failed { color: #faad14; }
.card-footer { display: flex; justify-content: space-between; align-items: center; margin-top: 0.75rem; }
.loading { grid-column: 1 / -1; text-align: center; padding: 2rem; color: var(--text-secondary); }
.modal { display: none; position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6); align-items: center; justify-content: center; }
.modal.show { display: flex; }
.modal-content { background: var(--card); border-radius: 12px; width: min(640px, 92vw); max-height: 85vh; overflow: auto; padding: 1.25rem; }
.stats-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; margin-bottom: 1rem; }
.stats-item .value { font-size: 1.4rem; font-weight: 600; }
.stats-item .label, .history-item .meta { color: var(--text-secondary); font-size: 0.8rem; }
.history-item { padding: 0.5rem 0; border-bottom: 1px solid #2a2e37; }
";

// Close triggers match `UiEvent::closes_overlay`: the close button, a click
// on the backdrop itself, or Escape.
const SCRIPT: &str = r#"
(function () {
  var modal = document.querySelector('[data-visible-class]');
  if (!modal) return;
  var shown = modal.dataset.visibleClass;
  function close() { modal.classList.remove(shown); }
  document.addEventListener('click', function (e) {
    if (e.target === modal || e.target.closest('[data-action="close"]')) close();
  });
  document.addEventListener('keydown', function (e) {
    if (e.key === 'Escape') close();
  });
  document.querySelectorAll('[data-action="stats"]').forEach(function (b) {
    b.disabled = true;
    b.title = 'liveboard detail ' + b.dataset.id;
  });
})();
"#;

/// Serialize `doc` into a complete HTML page laid out per `binding`.
pub fn render_page(doc: &Document, binding: &ViewBinding) -> String {
    let html = |id: &str| doc.inner_html(id).unwrap_or_default();
    let classes = |id: &str| {
        doc.get(id)
            .map(Element::class_attr)
            .map(|c| escape_attr(&c))
            .unwrap_or_default()
    };
    let id = |id: &str| escape_attr(id);

    format!(
        r#"<!DOCTYPE html>
<html lang="zh-CN">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>直播状态监控</title>
<style>{STYLE}</style>
</head>
<body>
<header>
<h1>直播状态监控</h1>
<div class="stats-bar">
<span>主播总数: <strong id="{total_id}">{total}</strong></span>
<span>正在直播: <strong id="{live_id}">{live}</strong></span>
<span>更新时间: <span id="{update_id}">{update}</span></span>
</div>
</header>
<main>
<div id="{grid_id}" class="{grid_class}">{grid}</div>
</main>
<div id="{modal_id}" class="{modal_class}" data-visible-class="{visible_class}">
<div class="modal-content">
<div class="modal-header">
<h2 id="{title_id}">{title}</h2>
<button class="modal-close" data-action="close">&times;</button>
</div>
<div id="{body_id}" class="{body_class}">{body}</div>
</div>
</div>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        total_id = id(&binding.total_count),
        total = html(&binding.total_count),
        live_id = id(&binding.live_count),
        live = html(&binding.live_count),
        update_id = id(&binding.last_update),
        update = html(&binding.last_update),
        grid_id = id(&binding.grid),
        grid_class = classes(&binding.grid),
        grid = html(&binding.grid),
        modal_id = id(&binding.modal),
        modal_class = classes(&binding.modal),
        visible_class = escape_attr(&binding.visible_class),
        title_id = id(&binding.modal_title),
        title = html(&binding.modal_title),
        body_id = id(&binding.modal_body),
        body_class = classes(&binding.modal_body),
        body = html(&binding.modal_body),
    )
}
