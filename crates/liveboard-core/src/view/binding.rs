// ── View binding ──
//
// Element ids of the host page, resolved once at startup and threaded
// through the renderer and overlay.

use serde::{Deserialize, Serialize};

/// Ids of every element the dashboard writes into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewBinding {
    /// Card grid container.
    pub grid: String,
    pub total_count: String,
    pub live_count: String,
    /// Wall-clock time of the last successful poll.
    pub last_update: String,
    /// Modal backdrop; clicks landing exactly on it close the overlay.
    pub modal: String,
    pub modal_title: String,
    pub modal_body: String,
    /// Class toggled on `modal` to show it.
    pub visible_class: String,
}

impl Default for ViewBinding {
    fn default() -> Self {
        Self {
            grid: "streamersGrid".into(),
            total_count: "totalCount".into(),
            live_count: "liveCount".into(),
            last_update: "lastUpdate".into(),
            modal: "statsModal".into(),
            modal_title: "modalTitle".into(),
            modal_body: "modalBody".into(),
            visible_class: "show".into(),
        }
    }
}

impl ViewBinding {
    /// Every element id, in page order.
    pub fn slot_ids(&self) -> [&str; 7] {
        [
            self.total_count.as_str(),
            self.live_count.as_str(),
            self.last_update.as_str(),
            self.grid.as_str(),
            self.modal.as_str(),
            self.modal_title.as_str(),
            self.modal_body.as_str(),
        ]
    }
}
