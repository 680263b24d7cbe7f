//! Minimal PocketBase client
//!
//! Only what the board needs today: URL building for collections and stored
//! files, and a health probe. Requests go through a blocking `ureq` agent and
//! are moved off the async runtime with `spawn_blocking`.

use std::future::{Ready, ready};
use std::sync::Arc;
use std::time::Duration;

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};
use ureq::Agent;

use crate::errors::{Result, StickerboardError};

/// 默认请求超时
pub const DEFAULT_TIMEOUT_SECS: u64 = 2;

/// Build the shared HTTP agent. `ureq::Agent` is `Send + Sync` and cheap to clone.
pub fn build_agent(timeout: Duration) -> Agent {
    Agent::config_builder()
        .timeout_global(Some(timeout))
        .build()
        .into()
}

/// Body of PocketBase's `GET /api/health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub code: u16,
    pub message: String,
}

#[derive(Clone)]
pub struct PocketBase {
    base_url: Arc<str>,
    agent: Agent,
}

impl std::fmt::Debug for PocketBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PocketBase")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PocketBase {
    pub fn new(base_url: &str) -> Self {
        Self::with_agent(base_url, build_agent(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
    }

    pub fn with_agent(base_url: &str, agent: Agent) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/collections/{collection}/records`
    pub fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/api/collections/{}/records",
            self.base_url,
            urlencoding::encode(collection)
        )
    }

    /// `{base}/api/files/{collection}/{record_id}/{filename}`
    pub fn file_url(&self, collection: &str, record_id: &str, filename: &str) -> String {
        format!(
            "{}/api/files/{}/{}/{}",
            self.base_url,
            urlencoding::encode(collection),
            urlencoding::encode(record_id),
            urlencoding::encode(filename)
        )
    }

    pub fn health_url(&self) -> String {
        format!("{}/api/health", self.base_url)
    }

    /// Query the PocketBase health endpoint.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.health_url();
        let agent = self.agent.clone();
        trace!("Probing PocketBase at {}", url);

        tokio::task::spawn_blocking(move || fetch_health_sync(&agent, &url))
            .await
            .map_err(|e| StickerboardError::internal(format!("health probe task failed: {}", e)))?
    }
}

fn fetch_health_sync(agent: &Agent, url: &str) -> Result<HealthStatus> {
    let resp = agent.get(url).call().map_err(|e| {
        warn!("PocketBase request to \"{}\" failed: {}", url, e);
        StickerboardError::backend(format!("request to {} failed: {}", url, e))
    })?;

    resp.into_body().read_json::<HealthStatus>().map_err(|e| {
        warn!("PocketBase response from \"{}\" parse failed: {}", url, e);
        StickerboardError::backend(format!("invalid health response from {}: {}", url, e))
    })
}

/// Handlers take `PocketBase` as an argument; the request hook must have
/// attached one.
impl FromRequest for PocketBase {
    type Error = actix_web::Error;
    type Future = Ready<std::result::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(req.extensions().get::<PocketBase>().cloned().ok_or_else(|| {
            actix_web::error::ErrorInternalServerError("PocketBase client not attached")
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let pb = PocketBase::new("http://localhost:8090/");
        assert_eq!(pb.base_url(), "http://localhost:8090");
        assert_eq!(pb.health_url(), "http://localhost:8090/api/health");
    }

    #[test]
    fn test_collection_and_file_urls() {
        let pb = PocketBase::new("http://pb.internal:8090");
        assert_eq!(
            pb.collection_url("stickers"),
            "http://pb.internal:8090/api/collections/stickers/records"
        );
        assert_eq!(
            pb.file_url("stickers", "abc123", "cat face.png"),
            "http://pb.internal:8090/api/files/stickers/abc123/cat%20face.png"
        );
    }

    #[tokio::test]
    async fn test_health_against_closed_port_is_backend_error() {
        // port 9 (discard) is almost never listening on loopback
        let pb = PocketBase::new("http://127.0.0.1:9");
        match pb.health().await {
            Err(StickerboardError::Backend(_)) => {}
            other => panic!("expected backend error, got {:?}", other),
        }
    }
}
