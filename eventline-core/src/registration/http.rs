//! HTTP backend for registrations
//!
//! Plain JSON POSTs to `{registration_url}/users` and
//! `{registration_url}/registrations`.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::backend::{NewRegistration, NewUser, RegistrationBackend};
use crate::config::ApiConfig;
use crate::error::BackendError;

/// Registration backend talking to the remote service
pub struct HttpRegistrationBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRegistrationBackend {
    /// Create a backend from API configuration
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        Self::with_timeout(&config.registration_url, config.timeout())
    }

    /// Create a backend for a base URL with an explicit per-call timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = crate::config::http_client(timeout)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<T: Serialize + Sync>(&self, path: &str, body: &T) -> Result<(), BackendError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("POST {} failed: {} - {}", url, status, body);
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl RegistrationBackend for HttpRegistrationBackend {
    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError> {
        self.post_json("/users", user).await
    }

    async fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<(), BackendError> {
        self.post_json("/registrations", registration).await
    }

    fn name(&self) -> &'static str {
        "http"
    }
}
