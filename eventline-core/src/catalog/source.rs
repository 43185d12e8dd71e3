//! Event sources
//!
//! Where the catalog comes from: the remote `GET /events` endpoint, or a
//! list supplied locally (tests, offline demos).

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::Event;
use crate::config::ApiConfig;
use crate::error::CatalogError;

/// Trait for catalog sources
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch the full catalog
    async fn fetch_events(&self) -> Result<Vec<Event>, CatalogError>;

    /// Source identifier for logging
    fn name(&self) -> &'static str;
}

/// Remote catalog served as a JSON array at `{events_url}/events`
pub struct HttpEventSource {
    client: reqwest::Client,
    url: String,
}

impl HttpEventSource {
    /// Create a source from API configuration
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        Self::with_timeout(&config.events_url, config.timeout())
    }

    /// Create a source for a base URL with an explicit request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = crate::config::http_client(timeout)?;
        Ok(Self {
            client,
            url: format!("{}/events", base_url.trim_end_matches('/')),
        })
    }

    /// Full URL of the events endpoint
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, CatalogError> {
        debug!("Fetching events from {}", self.url);

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    url: self.url.clone(),
                }
            } else {
                CatalogError::Request {
                    url: self.url.clone(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout {
                    url: self.url.clone(),
                }
            } else {
                CatalogError::Request {
                    url: self.url.clone(),
                    source: e,
                }
            }
        })?;

        serde_json::from_str(&body).map_err(|source| CatalogError::Parse {
            url: self.url.clone(),
            source,
        })
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Catalog supplied in memory
#[derive(Debug, Clone, Default)]
pub struct StaticEventSource {
    events: Vec<Event>,
}

impl StaticEventSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

#[async_trait]
impl EventSource for StaticEventSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, CatalogError> {
        Ok(self.events.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
