//! Refresh/render pipeline between `liveboard-api` and the page.
//!
//! - **[`Dashboard`]**: the controller. Owns the API client, the
//!   [`ViewState`], the host [`Document`] and the [`DetailOverlay`].
//!   [`refresh()`](Dashboard::refresh) runs one poll cycle deterministically;
//!   [`start()`](Dashboard::start) / [`stop()`](Dashboard::stop) manage the
//!   cancellable periodic task.
//!
//! - **[`ViewState`]**: whole-snapshot store on a `tokio::sync::watch`
//!   channel. A response from an older poll never replaces a newer snapshot.
//!
//! - **Renderer** ([`render`]): snapshot → [`Card`] descriptors → markup,
//!   with all user-supplied text escaped through a text-node round trip.
//!
//! - **Formatter utilities** ([`fmt`]): pure, total display formatting for
//!   wire timestamps, relative ages, viewer counts and durations.
//!
//! - **[`DetailOverlay`]**: token-guarded modal state machine for the
//!   per-streamer stats and history view.

pub mod config;
pub mod convert;
pub mod dashboard;
pub mod error;
pub mod fmt;
pub mod model;
pub mod overlay;
pub mod poller;
pub mod render;
pub mod store;
pub mod stream;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use fmt::Clock;
pub use overlay::{DetailOverlay, DetailTicket, OverlayState, UiEvent};
pub use poller::PollOutcome;
pub use render::{Card, Summary};
pub use store::{ViewSnapshot, ViewState};
pub use stream::ViewStream;
pub use view::{Document, ViewBinding};

pub use model::{
    HistoryEntry, LastQuery, LiveSession, Platform, StatsSummary, Streamer, StreamerDetail,
};
