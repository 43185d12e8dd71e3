//! Registrant input and form validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Coarse shape check: something@something.something, no whitespace
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email pattern is valid"));

/// Role requested for the registrant. Only members can register today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
}

impl Role {
    pub const ALL: &'static [Role] = &[Role::Member];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .iter()
            .copied()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown role: {s} (expected one of: member)"))
    }
}

/// What the registrant typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrantInput {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
}

impl RegistrantInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn name_error(&self) -> Option<ValidationError> {
        self.name
            .trim()
            .is_empty()
            .then_some(ValidationError::NameRequired)
    }

    pub fn email_error(&self) -> Option<ValidationError> {
        let email = self.email.trim();
        (email.is_empty() || !EMAIL_SHAPE.is_match(email)).then_some(ValidationError::EmailInvalid)
    }

    /// All validation failures, name first
    pub fn validate(&self) -> Vec<ValidationError> {
        self.name_error()
            .into_iter()
            .chain(self.email_error())
            .collect()
    }

    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    pub fn trimmed_email(&self) -> &str {
        self.email.trim()
    }

    /// Trimmed phone, empty when not given
    pub fn trimmed_phone(&self) -> &str {
        self.phone.as_deref().map(str::trim).unwrap_or("")
    }
}

/// Form state for one registration attempt.
///
/// Validation errors are computed continuously but only reported once a
/// submit has been attempted.
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    input: RegistrantInput,
    submitted: bool,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_input(input: RegistrantInput) -> Self {
        Self {
            input,
            submitted: false,
        }
    }

    pub fn input(&self) -> &RegistrantInput {
        &self.input
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.input.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.input.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        let phone = phone.into();
        self.input.phone = (!phone.is_empty()).then_some(phone);
    }

    pub fn set_role(&mut self, role: Role) {
        self.input.role = role;
    }

    /// Whether a submit has been attempted
    pub fn submitted(&self) -> bool {
        self.submitted
    }

    /// Record a submit attempt; errors become visible from here on
    pub fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    /// Errors to display: none before the first submit attempt
    pub fn visible_errors(&self) -> Vec<ValidationError> {
        if self.submitted {
            self.input.validate()
        } else {
            Vec::new()
        }
    }

    pub fn shows_name_error(&self) -> bool {
        self.submitted && self.input.name_error().is_some()
    }

    pub fn shows_email_error(&self) -> bool {
        self.submitted && self.input.email_error().is_some()
    }
}
