//! Registration - form validation and the two-step remote write
//!
//! ```text
//! RegistrationForm ── submit attempt ──► RegistrationPipeline
//!                                            │ validate
//!                                            │ POST /users          (stop on failure)
//!                                            │ POST /registrations
//!                                            ▼
//!                                     SubmissionOutcome
//! ```

pub mod backend;
mod form;
pub mod http;
mod pipeline;

pub use backend::{NewRegistration, NewUser, RegistrationBackend};
pub use form::{RegistrantInput, RegistrationForm, Role};
pub use http::HttpRegistrationBackend;
pub use pipeline::{RegistrationPipeline, SubmissionOutcome, SUCCESS_MESSAGE};
