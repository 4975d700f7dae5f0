// ── Renderer ──
//
// Snapshot → card descriptors → markup, written into the bound slots of
// the host document. Rendering is a pure projection of the snapshot, so
// applying it twice leaves the document unchanged.

mod card;
mod detail;
pub(crate) mod escape;
mod markup;

pub use card::{Avatar, Card, LiveDetails, QueryBadge, Summary, UNTITLED, cards, summarize};
pub use detail::{
    DETAIL_FAILED, DETAIL_LOADING, DetailView, HistoryRow, StatTile, detail_html, detail_title,
};
pub use escape::{escape_attr, escape_html};
pub use markup::{EMPTY_GRID, card_html, grid_html};

use crate::fmt::Clock;
use crate::store::ViewSnapshot;
use crate::view::{Document, ViewBinding};

/// Write the grid and header counters for `snapshot` into `doc`.
pub fn render_dashboard(
    doc: &mut Document,
    binding: &ViewBinding,
    snapshot: &ViewSnapshot,
    clock: &Clock,
) -> Summary {
    let summary = summarize(snapshot, clock);
    doc.set_inner_html(&binding.grid, grid_html(&cards(snapshot, clock)));
    apply_summary(doc, binding, &summary);
    summary
}

/// Update only the header counters.
pub fn apply_summary(doc: &mut Document, binding: &ViewBinding, summary: &Summary) {
    doc.set_text(&binding.total_count, &summary.total.to_string());
    doc.set_text(&binding.live_count, &summary.live.to_string());
    doc.set_text(&binding.last_update, &summary.clock);
}
