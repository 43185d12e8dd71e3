//! Registration backend trait - abstraction over the remote write endpoints
//!
//! - HTTP (`POST /users`, `POST /registrations`)
//! - Mock (testing)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::form::{RegistrantInput, Role};
use crate::catalog::EventId;
use crate::error::BackendError;

/// Body of `POST /users`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub deactivated: bool,
}

impl NewUser {
    pub fn from_input(input: &RegistrantInput) -> Self {
        Self {
            name: input.trimmed_name().to_string(),
            email: input.trimmed_email().to_string(),
            phone: input.trimmed_phone().to_string(),
            role: input.role,
            deactivated: false,
        }
    }
}

/// Body of `POST /registrations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    /// Event being registered for; `null` when the caller had none
    pub movie_id: Option<EventId>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl NewRegistration {
    pub fn from_input(event_id: Option<&EventId>, input: &RegistrantInput) -> Self {
        Self {
            movie_id: event_id.cloned(),
            name: input.trimmed_name().to_string(),
            email: input.trimmed_email().to_string(),
            phone: input.trimmed_phone().to_string(),
        }
    }
}

/// Trait for registration backends
///
/// Implementations handle their own timeout and report it as
/// [`BackendError::Timeout`].
#[async_trait]
pub trait RegistrationBackend: Send + Sync {
    /// Create (or identify) the registrant as a user
    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError>;

    /// Link the registrant to an event
    async fn create_registration(&self, registration: &NewRegistration)
        -> Result<(), BackendError>;

    /// Backend identifier for logging
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<T: RegistrationBackend + ?Sized> RegistrationBackend for Box<T> {
    async fn create_user(&self, user: &NewUser) -> Result<(), BackendError> {
        (**self).create_user(user).await
    }

    async fn create_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<(), BackendError> {
        (**self).create_registration(registration).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Mock backend for testing
#[cfg(test)]
pub struct MockBackend {
    pub user_result: Result<(), BackendError>,
    pub registration_result: Result<(), BackendError>,
    pub delay: std::time::Duration,
    pub user_calls: std::sync::atomic::AtomicUsize,
    pub registration_calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockBackend {
    pub fn succeeding() -> Self {
        Self {
            user_result: Ok(()),
            registration_result: Ok(()),
            delay: std::time::Duration::ZERO,
            user_calls: Default::default(),
            registration_calls: Default::default(),
        }
    }

    pub fn user_calls(&self) -> usize {
        self.user_calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub fn registration_calls(&self) -> usize {
        self.registration_calls
            .load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl RegistrationBackend for MockBackend {
    async fn create_user(&self, _user: &NewUser) -> Result<(), BackendError> {
        self.user_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.user_result.clone()
    }

    async fn create_registration(
        &self,
        _registration: &NewRegistration,
    ) -> Result<(), BackendError> {
        self.registration_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        self.registration_result.clone()
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
