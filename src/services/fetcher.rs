// src/services/fetcher.rs

//! Fragment fetcher.
//!
//! The portal answers with a JSON envelope `{"html": "..."}` whose `html`
//! field holds the department's exam tables.

use std::sync::Arc;

use serde::Deserialize;
use url::Url;

use crate::error::{AppError, Result};
use crate::models::UpstreamConfig;
use crate::utils::http::Transport;

#[derive(Debug, Deserialize)]
struct Envelope {
    html: String,
}

/// Fetches raw schedule fragments from the upstream portal.
#[derive(Clone)]
pub struct FragmentFetcher {
    transport: Arc<dyn Transport>,
    config: UpstreamConfig,
}

impl FragmentFetcher {
    pub fn new(transport: Arc<dyn Transport>, config: UpstreamConfig) -> Self {
        Self { transport, config }
    }

    /// Build the request URL for a department source id.
    pub fn url_for(&self, source_id: u8) -> Result<Url> {
        let url = Url::parse_with_params(
            &self.config.base_url,
            &[
                ("sid", self.config.sid.to_string()),
                ("a", self.config.action.clone()),
                ("proftaflaID", self.config.schedule_id.to_string()),
                ("svidID", source_id.to_string()),
                (
                    "notaVinnuToflu",
                    u8::from(self.config.use_work_table).to_string(),
                ),
            ],
        )?;
        Ok(url)
    }

    /// Fetch the HTML fragment for a department. Issues exactly one request.
    pub async fn fetch(&self, source_id: u8) -> Result<String> {
        let url = self.url_for(source_id)?;
        log::debug!("Fetching fragment {}", url);

        let body = self.transport.get_text(url.as_str()).await?;
        let envelope: Envelope = serde_json::from_str(&body)
            .map_err(|e| AppError::upstream_malformed(url.as_str(), e))?;

        log::debug!(
            "Fetched fragment for svidID={} ({} bytes)",
            source_id,
            envelope.html.len()
        );
        Ok(envelope.html)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Transport serving canned bodies keyed by `svidID`, recording requests.
    #[derive(Default)]
    pub(crate) struct FakeTransport {
        bodies: HashMap<String, String>,
        pub(crate) requests: Mutex<Vec<String>>,
    }

    impl FakeTransport {
        pub(crate) fn with_body(mut self, svid: u8, body: impl Into<String>) -> Self {
            self.bodies.insert(svid.to_string(), body.into());
            self
        }

        pub(crate) fn with_html(self, svid: u8, html: &str) -> Self {
            let body = serde_json::json!({ "html": html }).to_string();
            self.with_body(svid, body)
        }

        pub(crate) fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn get_text(&self, url: &str) -> Result<String> {
            self.requests.lock().unwrap().push(url.to_string());
            let parsed = Url::parse(url)?;
            let svid = parsed
                .query_pairs()
                .find(|(k, _)| k == "svidID")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            self.bodies
                .get(&svid)
                .cloned()
                .ok_or_else(|| AppError::upstream_unavailable(url, "connection refused"))
        }
    }

    fn fetcher(transport: FakeTransport) -> (FragmentFetcher, Arc<FakeTransport>) {
        let transport = Arc::new(transport);
        let fetcher = FragmentFetcher::new(transport.clone(), UpstreamConfig::default());
        (fetcher, transport)
    }

    #[test]
    fn test_url_for() {
        let (fetcher, _) = fetcher(FakeTransport::default());
        assert_eq!(
            fetcher.url_for(3).unwrap().as_str(),
            "https://ugla.hi.is/Proftafla/View/ajax.php?sid=2027&a=getProfSvids&proftaflaID=37&svidID=3&notaVinnuToflu=0"
        );
    }

    #[tokio::test]
    async fn test_fetch_returns_html_field() {
        let (fetcher, transport) =
            fetcher(FakeTransport::default().with_html(2, "<h3>Hópur A</h3>"));

        let html = fetcher.fetch(2).await.unwrap();
        assert_eq!(html, "<h3>Hópur A</h3>");
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_transport_failure() {
        let (fetcher, transport) = fetcher(FakeTransport::default());
        let err = fetcher.fetch(1).await.unwrap_err();
        assert!(matches!(err, AppError::UpstreamUnavailable { .. }));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_malformed_bodies() {
        let (fetcher, _) = fetcher(
            FakeTransport::default()
                .with_body(1, "<html>Villa</html>")
                .with_body(2, r#"{"status":"ok"}"#)
                .with_body(3, r#"{"html":null}"#),
        );

        for svid in 1..=3 {
            let err = fetcher.fetch(svid).await.unwrap_err();
            assert!(
                matches!(err, AppError::UpstreamMalformed { .. }),
                "svidID={svid}: {err}"
            );
        }
    }
}
