//! Eventline core library
//!
//! Client-side logic for browsing community events and registering for them:
//! the event catalog (loading, filtering, search, daily featured picks) and
//! the registration pipeline (validation plus the two-step remote write).

pub mod catalog;
pub mod config;
pub mod error;
pub mod registration;
pub mod session;

pub use catalog::{Event, EventCatalog, EventId};
pub use config::{ApiConfig, EventlineConfig, Settings};
pub use error::{BackendError, CatalogError, RegistrationError, ValidationError};
pub use registration::{RegistrantInput, RegistrationForm, RegistrationPipeline, Role};
pub use session::EventSession;
