// ── Runtime dashboard configuration ──
//
// Describes which API to poll and how often. Never touches disk: the
// binary loads a `liveboard_config::Config` and translates it into this.

use std::path::PathBuf;
use std::time::Duration;

use chrono::FixedOffset;
use url::Url;

use crate::view::ViewBinding;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for one dashboard instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL of the status API; `/api/...` is appended.
    pub api_url: Url,
    /// Period of the background poll. Zero disables the periodic task.
    pub poll_interval: Duration,
    /// Rows requested from the history endpoint.
    pub history_limit: u32,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Extra PEM root certificate.
    pub ca_cert: Option<PathBuf>,
    /// Offset used for local times; `None` means the machine's offset.
    pub utc_offset: Option<FixedOffset>,
    /// Element ids of the host page.
    pub binding: ViewBinding,
}

impl DashboardConfig {
    pub fn new(api_url: Url) -> Self {
        Self {
            api_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
            history_limit: liveboard_api::DEFAULT_HISTORY_LIMIT,
            timeout: DEFAULT_TIMEOUT,
            ca_cert: None,
            utc_offset: None,
            binding: ViewBinding::default(),
        }
    }

    pub fn transport(&self) -> liveboard_api::TransportConfig {
        liveboard_api::TransportConfig {
            timeout: self.timeout,
            ca_cert: self.ca_cert.clone(),
        }
    }
}
