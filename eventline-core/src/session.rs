//! Session controller
//!
//! Owns the catalog and the registration pipeline for one app session. The
//! catalog is loaded exactly once, by [`EventSession::start`], and is
//! read-only afterwards.

use anyhow::Result;
use tracing::info;

use crate::catalog::{Event, EventCatalog, EventSource, HttpEventSource};
use crate::config::{EventlineConfig, Settings};
use crate::registration::{
    HttpRegistrationBackend, RegistrationBackend, RegistrationForm, RegistrationPipeline,
    SubmissionOutcome,
};

pub struct EventSession {
    settings: Settings,
    catalog: EventCatalog,
    pipeline: RegistrationPipeline<Box<dyn RegistrationBackend>>,
}

impl EventSession {
    /// Start a session against the configured remote service
    pub async fn start(config: &EventlineConfig) -> Result<Self> {
        let source = HttpEventSource::new(&config.api)?;
        let backend = HttpRegistrationBackend::new(&config.api)?;
        Ok(Self::with_parts(config.settings, &source, Box::new(backend)).await)
    }

    /// Start a session from explicit collaborators
    pub async fn with_parts(
        settings: Settings,
        source: &dyn EventSource,
        backend: Box<dyn RegistrationBackend>,
    ) -> Self {
        let catalog = EventCatalog::load(source).await;
        info!("Session started with {} event(s)", catalog.len());
        Self {
            settings,
            catalog,
            pipeline: RegistrationPipeline::new(backend),
        }
    }

    /// Display settings, read-only for the session
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn pipeline(&self) -> &RegistrationPipeline<Box<dyn RegistrationBackend>> {
        &self.pipeline
    }

    /// Register the form's registrant for `event` (or for no event)
    pub async fn register(
        &self,
        form: &mut RegistrationForm,
        event: Option<&Event>,
    ) -> SubmissionOutcome {
        self.pipeline
            .submit_form(form, event.map(|e| &e.id))
            .await
    }
}
