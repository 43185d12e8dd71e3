//! Error types with clear, user-facing messages

use thiserror::Error;

/// Failures while loading the event catalog.
///
/// These never leave the catalog boundary: [`crate::catalog::EventCatalog::load`]
/// logs them and degrades to an empty catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be sent or the connection failed
    #[error("Catalog fetch failed: request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The remote source did not answer within the configured timeout
    #[error("Catalog fetch failed: request to {url} timed out")]
    Timeout { url: String },

    /// The remote source answered with a non-2xx status
    #[error("Catalog fetch failed: HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The payload was not a JSON array of events
    #[error("Catalog fetch failed: malformed event payload from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A single local validation failure on the registration form
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Enter a valid email")]
    EmailInvalid,
}

/// Failure reported by a [`crate::registration::RegistrationBackend`] call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The call did not complete within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// The remote service answered with a non-2xx status
    #[error("HTTP {status}{}", body_suffix(.body))]
    Status { status: u16, body: String },

    /// Connection or protocol failure before a status was received
    #[error("{message}")]
    Transport { message: String },
}

impl BackendError {
    /// Classify a reqwest failure, separating timeouts from other transport errors
    pub fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else {
            BackendError::Transport {
                message: err.to_string(),
            }
        }
    }
}

fn body_suffix(body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {body}")
    }
}

/// Terminal failure of a registration attempt.
///
/// Every variant leaves the caller in a usable state; the whole submission
/// can be retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Local validation failed; nothing was sent
    #[error("{}", join_validation(.0))]
    Invalid(Vec<ValidationError>),

    /// Another submission is still in flight; nothing was sent
    #[error("A registration is already being submitted")]
    SubmissionInProgress,

    /// Step 1 (user creation) failed; step 2 was not attempted
    #[error("User registration failed{}", detail_suffix(.detail))]
    UserRegistrationFailed { detail: Option<String> },

    /// Step 2 (event registration) failed; the user created in step 1 is kept
    #[error("Event registration failed{}", detail_suffix(.detail))]
    EventRegistrationFailed { detail: Option<String> },

    /// One of the remote calls exceeded the configured timeout
    #[error("Request timed out")]
    NetworkTimeout,
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(d) if !d.trim().is_empty() => format!(": {d}"),
        _ => String::new(),
    }
}

fn join_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl RegistrationError {
    /// Validation errors carried by this failure, if any
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            RegistrationError::Invalid(errors) => errors,
            _ => &[],
        }
    }

    /// True for failures produced by the remote service
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            RegistrationError::UserRegistrationFailed { .. }
                | RegistrationError::EventRegistrationFailed { .. }
                | RegistrationError::NetworkTimeout
        )
    }

    /// Log remote failures at error level, local refusals at debug
    pub fn log(&self) {
        if self.is_remote() {
            tracing::error!("Registration error: {}", self);
        } else {
            tracing::debug!("Registration refused: {}", self);
        }
    }
}
