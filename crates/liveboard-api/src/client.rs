// Status API HTTP client
//
// Wraps `reqwest::Client` with URL construction and envelope unwrapping
// for the three read endpoints the dashboard consumes.

use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::models::{Envelope, HistoryRecord, StatsRecord, StreamerRecord};
use crate::transport::TransportConfig;

/// History rows requested when the caller has no preference.
pub const DEFAULT_HISTORY_LIMIT: u32 = 10;

/// Raw HTTP client for the streamer status API.
///
/// Handles the `{ code, data }` envelope. All methods return unwrapped
/// `data` payloads -- the envelope is stripped before the caller sees it,
/// and a non-zero `code` becomes [`Error::Api`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// `base_url` is the server root (e.g. `http://127.0.0.1:8080`); a path
    /// prefix such as `https://host/liveboard/` is preserved.
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    // ── Endpoints ────────────────────────────────────────────────────

    /// `GET /api/streamers`
    ///
    /// A success envelope with `data: null` yields an empty list.
    pub async fn list_streamers(&self) -> Result<Vec<StreamerRecord>, Error> {
        let url = self.api_url(&["streamers"])?;
        Ok(self.get(url).await?.unwrap_or_default())
    }

    /// `GET /api/stats/{id}`
    pub async fn get_stats(&self, id: &str) -> Result<StatsRecord, Error> {
        let url = self.api_url(&["stats", id])?;
        self.get(url).await?.ok_or_else(|| Error::Deserialization {
            message: format!("stats envelope for {id:?} carried no data"),
            body: String::new(),
        })
    }

    /// `GET /api/history/{id}?limit=N`
    ///
    /// Rows arrive most-recent-first. A success envelope with
    /// `data: null` yields an empty list.
    pub async fn get_history(&self, id: &str, limit: u32) -> Result<Vec<HistoryRecord>, Error> {
        let mut url = self.api_url(&["history", id])?;
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string());
        Ok(self.get(url).await?.unwrap_or_default())
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/api/{segments...}`, percent-encoding every segment so
    /// opaque ids never escape their path position.
    pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url, Error> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| Error::UnusableBaseUrl(self.base_url.to_string()))?;
            path.pop_if_empty().push("api").extend(segments);
        }
        Ok(url)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET request and unwrap the envelope.
    async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, Error> {
        debug!("GET {}", url);

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        Self::parse_envelope(resp).await
    }

    /// Parse the `{ code, data }` envelope, returning `data` on success
    /// or an `Error::Api` if `code != 0`.
    async fn parse_envelope<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<Option<T>, Error> {
        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(%status, len = body.len(), "response received");

        if !status.is_success() {
            // The server reports handler failures as `{code: 1, message}`
            // with HTTP 500; prefer that message when present.
            let message = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
                .ok()
                .and_then(|env| env.message)
                .unwrap_or_else(|| preview(&body).to_owned());
            return Err(Error::Http {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: Envelope<T> = serde_json::from_str(&body).map_err(|e| {
            Error::Deserialization {
                message: format!("{e} (body preview: {:?})", preview(&body)),
                body: body.clone(),
            }
        })?;

        if envelope.code != 0 {
            return Err(Error::Api {
                code: envelope.code,
                message: envelope
                    .message
                    .unwrap_or_else(|| format!("code={}", envelope.code)),
            });
        }

        Ok(envelope.data)
    }
}

/// First 200 bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn api_url_appends_segments() {
        let c = client("http://localhost:8080");
        assert_eq!(
            c.api_url(&["stats", "abc"]).unwrap().as_str(),
            "http://localhost:8080/api/stats/abc"
        );
    }

    #[test]
    fn api_url_keeps_path_prefix() {
        let c = client("https://example.com/board/");
        assert_eq!(
            c.api_url(&["streamers"]).unwrap().as_str(),
            "https://example.com/board/api/streamers"
        );
    }

    #[test]
    fn api_url_encodes_ids() {
        let c = client("http://localhost:8080");
        assert_eq!(
            c.api_url(&["history", "a/b c"]).unwrap().as_str(),
            "http://localhost:8080/api/history/a%2Fb%20c"
        );
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let body = "主".repeat(100);
        let p = preview(&body);
        assert!(p.len() <= 200);
        assert!(body.starts_with(p));
    }
}
