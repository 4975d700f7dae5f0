// ── View state store ──
//
// Whole-snapshot storage with push-based change notification.

mod view_state;

pub use view_state::{PollSeq, ViewSnapshot, ViewState};
