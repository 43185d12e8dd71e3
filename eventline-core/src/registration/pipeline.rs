//! Registration pipeline - validate, then create user, then create registration
//!
//! The two remote calls run strictly in sequence. If the user call fails the
//! registration call is never made. If the registration call fails the user
//! created by the first call is left in place; there is no compensation.

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

use super::backend::{NewRegistration, NewUser, RegistrationBackend};
use super::form::{RegistrantInput, RegistrationForm};
use crate::catalog::EventId;
use crate::error::{BackendError, RegistrationError};

/// Message shown after a successful registration
pub const SUCCESS_MESSAGE: &str = "You have successfully registered!";

/// Terminal result of a submit, ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Registered { message: String },
    Failed { error: RegistrationError, message: String },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Registered { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionOutcome::Registered { message } | SubmissionOutcome::Failed { message, .. } => {
                message
            }
        }
    }
}

impl From<Result<(), RegistrationError>> for SubmissionOutcome {
    fn from(result: Result<(), RegistrationError>) -> Self {
        match result {
            Ok(()) => SubmissionOutcome::Registered {
                message: SUCCESS_MESSAGE.to_string(),
            },
            Err(error) => SubmissionOutcome::Failed {
                message: error.to_string(),
                error,
            },
        }
    }
}

/// Clears the in-progress flag when dropped, whichever way `submit` exits
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Two-phase registration submitter with a single-flight guard
pub struct RegistrationPipeline<B: RegistrationBackend> {
    backend: B,
    in_progress: AtomicBool,
}

impl<B: RegistrationBackend> RegistrationPipeline<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            in_progress: AtomicBool::new(false),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Whether a submission is currently in flight
    pub fn in_progress(&self) -> bool {
        self.in_progress.load(Ordering::SeqCst)
    }

    fn begin(&self) -> Option<InFlight<'_>> {
        self.in_progress
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| InFlight(&self.in_progress))
    }

    /// Validate and submit one registration.
    ///
    /// Refused with [`RegistrationError::SubmissionInProgress`] while another
    /// submission is running.
    pub async fn submit(
        &self,
        input: &RegistrantInput,
        event_id: Option<&EventId>,
    ) -> Result<(), RegistrationError> {
        let Some(_guard) = self.begin() else {
            debug!("Submission refused: another registration is in flight");
            return Err(RegistrationError::SubmissionInProgress);
        };

        let errors = input.validate();
        if !errors.is_empty() {
            return Err(RegistrationError::Invalid(errors));
        }

        let event_label = event_id.map(ToString::to_string);
        info!(
            "Submitting registration via {} backend (event: {})",
            self.backend.name(),
            event_label.as_deref().unwrap_or("none")
        );

        self.backend
            .create_user(&NewUser::from_input(input))
            .await
            .map_err(|e| match e {
                BackendError::Timeout => RegistrationError::NetworkTimeout,
                other => RegistrationError::UserRegistrationFailed {
                    detail: Some(other.to_string()),
                },
            })?;

        debug!("User step succeeded; creating registration");

        self.backend
            .create_registration(&NewRegistration::from_input(event_id, input))
            .await
            .map_err(|e| match e {
                BackendError::Timeout => RegistrationError::NetworkTimeout,
                other => RegistrationError::EventRegistrationFailed {
                    detail: Some(other.to_string()),
                },
            })?;

        info!(
            "Registration completed (event: {})",
            event_label.as_deref().unwrap_or("none")
        );
        Ok(())
    }

    /// Submit from form state: marks the attempt (making validation errors
    /// visible) and reports a displayable outcome.
    pub async fn submit_form(
        &self,
        form: &mut RegistrationForm,
        event_id: Option<&EventId>,
    ) -> SubmissionOutcome {
        form.mark_submitted();
        let result = self.submit(form.input(), event_id).await;
        if let Err(e) = &result {
            e.log();
        }
        result.into()
    }
}
