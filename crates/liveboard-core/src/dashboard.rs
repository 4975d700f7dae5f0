// ── Dashboard controller ──
//
// Owns the API client, the view state, the host document and the detail
// overlay. Cheap to clone; every clone drives the same dashboard.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use liveboard_api::ApiClient;

use crate::config::DashboardConfig;
use crate::error::CoreError;
use crate::fmt::Clock;
use crate::model::{HistoryEntry, Streamer, StreamerDetail};
use crate::overlay::{DetailOverlay, DetailTicket, OverlayState, UiEvent};
use crate::poller::{PollOutcome, Poller};
use crate::render::{Summary, render_dashboard};
use crate::store::{ViewSnapshot, ViewState};
use crate::stream::ViewStream;
use crate::view::{Document, render_page};

/// What the page currently shows. Grid and modal share one lock so a
/// render never interleaves with an overlay transition.
struct Surface {
    document: Document,
    overlay: DetailOverlay,
}

/// Top-level handle for one status dashboard.
#[derive(Clone)]
pub struct Dashboard {
    inner: Arc<DashboardInner>,
}

struct DashboardInner {
    config: DashboardConfig,
    api: ApiClient,
    view_state: ViewState,
    surface: Mutex<Surface>,
    cancel: CancellationToken,
    poller: Mutex<Option<Poller>>,
}

impl Dashboard {
    /// Build a dashboard and its HTTP client. Does not poll; call
    /// [`start()`](Self::start) or [`refresh()`](Self::refresh).
    pub fn new(config: DashboardConfig) -> Result<Self, CoreError> {
        let api = ApiClient::new(config.api_url.clone(), &config.transport())?;
        Ok(Self::with_client(config, api))
    }

    /// Build a dashboard around an existing API client.
    pub fn with_client(config: DashboardConfig, api: ApiClient) -> Self {
        let document = Document::for_binding(&config.binding);
        Self {
            inner: Arc::new(DashboardInner {
                config,
                api,
                view_state: ViewState::new(),
                surface: Mutex::new(Surface {
                    document,
                    overlay: DetailOverlay::new(),
                }),
                cancel: CancellationToken::new(),
                poller: Mutex::new(None),
            }),
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    pub fn view_state(&self) -> &ViewState {
        &self.inner.view_state
    }

    /// Clock for rendering, in the configured offset.
    pub fn clock(&self) -> Clock {
        self.inner
            .config
            .utc_offset
            .map_or_else(Clock::system, Clock::with_offset)
    }

    // ── Polling ──────────────────────────────────────────────────────

    /// Run one poll cycle.
    ///
    /// On success the snapshot is replaced and the grid and counters are
    /// re-rendered. On any failure the previous view stays as it was.
    pub async fn refresh(&self) -> PollOutcome {
        let seq = self.inner.view_state.begin_poll();

        let records = match self.inner.api.list_streamers().await {
            Ok(records) => records,
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, transient = err.is_transient(), "poll failed, keeping previous view");
                return PollOutcome::Skipped { error: err };
            }
        };
        let streamers: Vec<Streamer> = records.into_iter().map(Streamer::from).collect();
        let clock = self.clock();

        // Replace under the surface lock so subscribers woken by the
        // replacement observe the rendered page, not the previous one.
        let mut surface = self.inner.surface.lock().await;
        if !self.inner.view_state.replace(seq, streamers, clock.now()) {
            debug!(?seq, "newer poll already applied, dropping response");
            return PollOutcome::Superseded;
        }
        let snapshot = self.inner.view_state.current();
        let Summary { total, live, .. } = render_dashboard(
            &mut surface.document,
            &self.inner.config.binding,
            &snapshot,
            &clock,
        );
        debug!(total, live, "view refreshed");
        PollOutcome::Updated { total, live }
    }

    /// Re-render the current snapshot, e.g. to advance relative ages.
    pub async fn render(&self) -> Summary {
        let snapshot = self.inner.view_state.current();
        let mut surface = self.inner.surface.lock().await;
        render_dashboard(
            &mut surface.document,
            &self.inner.config.binding,
            &snapshot,
            &self.clock(),
        )
    }

    /// Start the periodic poll. The first cycle runs immediately.
    ///
    /// A zero interval runs a single cycle and schedules nothing. Calling
    /// `start` while already running is a no-op.
    pub async fn start(&self) {
        let mut poller = self.inner.poller.lock().await;
        if poller.as_ref().is_some_and(|p| !p.is_finished()) {
            debug!("poll task already running");
            return;
        }

        let period = self.inner.config.poll_interval;
        if period.is_zero() {
            drop(poller);
            info!("poll interval is zero, refreshing once");
            self.refresh().await;
            return;
        }

        *poller = Some(Poller::spawn(
            self.clone(),
            period,
            self.inner.cancel.child_token(),
        ));
    }

    /// Stop the periodic poll and wait for the task to exit.
    pub async fn stop(&self) {
        let poller = self.inner.poller.lock().await.take();
        if let Some(poller) = poller {
            poller.stop().await;
        }
    }

    pub async fn is_running(&self) -> bool {
        self.inner
            .poller
            .lock()
            .await
            .as_ref()
            .is_some_and(|p| !p.is_finished())
    }

    // ── Reading the view ─────────────────────────────────────────────

    pub fn snapshot(&self) -> Arc<ViewSnapshot> {
        self.inner.view_state.current()
    }

    /// Subscribe to snapshot replacements.
    pub fn subscribe(&self) -> ViewStream {
        ViewStream::new(self.inner.view_state.subscribe())
    }

    /// Copy of the host document as it stands.
    pub async fn document(&self) -> Document {
        self.inner.surface.lock().await.document.clone()
    }

    /// The host document serialized as a full HTML page.
    pub async fn page_html(&self) -> String {
        let surface = self.inner.surface.lock().await;
        render_page(&surface.document, &self.inner.config.binding)
    }

    pub async fn overlay_state(&self) -> OverlayState {
        self.inner.surface.lock().await.overlay.state().clone()
    }

    // ── Detail overlay ───────────────────────────────────────────────

    /// Fetch stats and history for `id` concurrently; either failing fails
    /// the whole load.
    pub async fn fetch_detail(&self, id: &str) -> Result<StreamerDetail, CoreError> {
        let api = &self.inner.api;
        let (stats, history) = tokio::try_join!(
            api.get_stats(id),
            api.get_history(id, self.inner.config.history_limit),
        )?;
        Ok(StreamerDetail {
            stats: stats.into(),
            history: history.into_iter().map(HistoryEntry::from).collect(),
        })
    }

    /// Show the modal for `id` in its loading state.
    pub async fn begin_detail(&self, id: &str, name: &str) -> DetailTicket {
        let mut guard = self.inner.surface.lock().await;
        let surface = &mut *guard;
        surface
            .overlay
            .open(&mut surface.document, &self.inner.config.binding, id, name)
    }

    /// Fetch and apply the detail for `ticket`.
    ///
    /// Returns `false` if a later open or a close made the ticket stale by
    /// the time the requests settled.
    pub async fn load_detail(&self, ticket: &DetailTicket) -> bool {
        let result = self.fetch_detail(ticket.id()).await;
        let clock = self.clock();
        let mut guard = self.inner.surface.lock().await;
        let surface = &mut *guard;
        surface.overlay.settle(
            &mut surface.document,
            &self.inner.config.binding,
            ticket,
            result,
            &clock,
        )
    }

    /// Open the modal for `id` and wait for it to settle.
    pub async fn open_detail(&self, id: &str, name: &str) -> bool {
        let ticket = self.begin_detail(id, name).await;
        self.load_detail(&ticket).await
    }

    pub async fn close_detail(&self) {
        let mut guard = self.inner.surface.lock().await;
        let surface = &mut *guard;
        surface
            .overlay
            .close(&mut surface.document, &self.inner.config.binding);
    }

    /// Route a page event.
    ///
    /// Opening a detail returns the handle of the background load; it
    /// resolves to whether the load was applied.
    pub async fn dispatch(&self, event: UiEvent) -> Option<JoinHandle<bool>> {
        if let UiEvent::OpenDetail { id, name } = &event {
            let ticket = self.begin_detail(id, name).await;
            let dashboard = self.clone();
            return Some(tokio::spawn(async move {
                dashboard.load_detail(&ticket).await
            }));
        }
        if event.closes_overlay(&self.inner.config.binding) {
            self.close_detail().await;
        }
        None
    }

    /// Stop background work. Further `refresh` calls still work.
    pub async fn shutdown(&self) {
        self.stop().await;
        self.inner.cancel.cancel();
        info!("dashboard shut down");
    }
}
