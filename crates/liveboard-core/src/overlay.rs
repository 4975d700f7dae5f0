// ── Detail overlay ──
//
// Modal lifecycle: Closed → Loading → (Loaded | Failed) → Closed. Every
// `open` mints a fresh token; a completion is applied only while the
// overlay is still loading under that same token, so a slow response for
// an earlier open (or one that lands after close) never touches the page.

use tracing::{debug, warn};

use crate::error::CoreError;
use crate::fmt::Clock;
use crate::model::StreamerDetail;
use crate::render::{DETAIL_FAILED, DETAIL_LOADING, detail_html, detail_title};
use crate::view::{Document, ViewBinding};

/// Receipt for one `open`, handed back with its completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    token: u64,
    id: String,
}

impl DetailTicket {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    Loading { token: u64, id: String },
    Loaded { token: u64, id: String },
    Failed { token: u64, id: String },
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Streamer the modal is showing, if open.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::Loading { id, .. } | Self::Loaded { id, .. } | Self::Failed { id, .. } => {
                Some(id)
            }
        }
    }
}

/// Input events from the host page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A card's stats button.
    OpenDetail { id: String, name: String },
    /// The modal's close button.
    CloseButton,
    /// A click; `target` is the id of the element it landed on.
    Click { target: String },
    /// A key press anywhere on the page.
    KeyDown { key: String },
}

impl UiEvent {
    /// Whether this event dismisses the modal.
    ///
    /// Clicks only count when they land on the backdrop itself, not on
    /// anything inside it.
    pub fn closes_overlay(&self, binding: &ViewBinding) -> bool {
        match self {
            Self::CloseButton => true,
            Self::Click { target } => *target == binding.modal,
            Self::KeyDown { key } => key == "Escape",
            Self::OpenDetail { .. } => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct DetailOverlay {
    state: OverlayState,
    last_token: u64,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    /// Show the modal for `id` in its loading state.
    ///
    /// Valid from any state; whatever was in flight is superseded.
    pub fn open(
        &mut self,
        doc: &mut Document,
        binding: &ViewBinding,
        id: &str,
        name: &str,
    ) -> DetailTicket {
        self.last_token += 1;
        let token = self.last_token;

        doc.set_text(&binding.modal_title, &detail_title(name));
        doc.set_inner_html(&binding.modal_body, DETAIL_LOADING);
        doc.add_class(&binding.modal, &binding.visible_class);

        self.state = OverlayState::Loading {
            token,
            id: id.to_owned(),
        };
        debug!(token, id, "detail overlay opened");

        DetailTicket {
            token,
            id: id.to_owned(),
        }
    }

    /// Apply the joined stats/history result for `ticket`.
    ///
    /// Returns `false` without touching `doc` when the ticket is stale.
    pub fn settle(
        &mut self,
        doc: &mut Document,
        binding: &ViewBinding,
        ticket: &DetailTicket,
        result: Result<StreamerDetail, CoreError>,
        clock: &Clock,
    ) -> bool {
        match &self.state {
            OverlayState::Loading { token, .. } if *token == ticket.token => {}
            current => {
                debug!(
                    token = ticket.token,
                    id = %ticket.id,
                    current = ?current,
                    "discarding stale detail response"
                );
                return false;
            }
        }

        let id = ticket.id.clone();
        let token = ticket.token;
        match result {
            Ok(detail) => {
                doc.set_inner_html(&binding.modal_body, detail_html(&detail, clock));
                self.state = OverlayState::Loaded { token, id };
            }
            Err(e) => {
                warn!(id = %ticket.id, error = %e, "failed to load streamer detail");
                doc.set_inner_html(&binding.modal_body, DETAIL_FAILED);
                self.state = OverlayState::Failed { token, id };
            }
        }
        true
    }

    /// Hide the modal. Any in-flight load becomes stale.
    pub fn close(&mut self, doc: &mut Document, binding: &ViewBinding) {
        doc.remove_class(&binding.modal, &binding.visible_class);
        if self.state.is_open() {
            debug!(id = self.state.id(), "detail overlay closed");
        }
        self.state = OverlayState::Closed;
    }
}
