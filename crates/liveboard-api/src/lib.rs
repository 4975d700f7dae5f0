// liveboard-api: Async Rust client for the streamer status API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::{ApiClient, DEFAULT_HISTORY_LIMIT};
pub use error::Error;
pub use models::{Envelope, HistoryRecord, StatsRecord, StreamerRecord};
pub use transport::TransportConfig;
