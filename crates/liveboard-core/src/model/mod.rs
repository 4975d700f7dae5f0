// ── Domain model ──
//
// Canonical types the renderer and overlay work with. Built from the
// wire records in `liveboard-api` by `convert`.

mod stats;
mod streamer;

pub use stats::{HistoryEntry, StatsSummary, StreamerDetail};
pub use streamer::{LastQuery, LiveSession, Platform, Streamer};
