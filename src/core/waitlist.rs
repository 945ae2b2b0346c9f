//! Waitlist form controller
//!
//! Holds the two text fields of the signup form, validates them and drives a
//! single submission through a [`WaitlistTransport`]:
//!
//! ```text
//! Idle --submit(valid)--> Submitting --ok--> Success --complete()--> Idle (cleared)
//!                                    \--err--> Error  --retry()---> Idle (values kept)
//! ```
//!
//! Invalid input never leaves `Idle`; it only fills [`FieldErrors`].

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the success panel stays up before the form resets
pub const SUCCESS_DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// The only message a failed submission shows to the user
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Minimum trimmed length of a name, in characters
pub const MIN_NAME_LEN: usize = 2;

/// Form-capture script that receives the signups
pub const DEFAULT_WAITLIST_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxqT19HYWxhQHaz292LuQoNgChNuHfkEQtl7UVGzmc80T2KgftQPQSFZrIpDem2nv38/exec";

/// Which input a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    #[error("required")]
    Required,
    #[error("too short")]
    TooShort,
    #[error("invalid format")]
    InvalidFormat,
}

impl ValidationError {
    /// Stable identifier sent back by the relay route
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::Required => "required",
            ValidationError::TooShort => "tooShort",
            ValidationError::InvalidFormat => "invalidFormat",
        }
    }

    /// Inline message shown under the offending input
    pub fn message(&self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, ValidationError::Required) => "Name is required",
            (Field::Name, _) => "Name must be at least 2 characters",
            (Field::Email, ValidationError::Required) => "Email is required",
            (Field::Email, _) => "Please enter a valid email address",
        }
    }
}

/// Validate the name input
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() < MIN_NAME_LEN {
        return Err(ValidationError::TooShort);
    }
    Ok(())
}

/// Validate the email input: `local@domain.tld` with no whitespace anywhere,
/// exactly one `@`, and a dot inside the domain with text on both sides.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidFormat);
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(ValidationError::InvalidFormat);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidFormat);
    }

    // Any dot that is neither the first nor the last character of the domain
    let chars: Vec<char> = domain.chars().collect();
    let has_inner_dot = chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.');
    if !has_inner_dot {
        return Err(ValidationError::InvalidFormat);
    }

    Ok(())
}

/// Per-field validation results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<ValidationError>,
}

impl FieldErrors {
    /// Run both validators
    pub fn check(name: &str, email: &str) -> Self {
        Self {
            name: validate_name(name).err(),
            email: validate_email(email).err(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    pub fn get(&self, field: Field) -> Option<ValidationError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
        }
    }

    /// Inline message for a field, if it has an error
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(|error| error.message(field))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// One signup as it travels to the capture endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub name: String,
    pub email: String,
    /// RFC 3339 submission time
    pub timestamp: String,
}

impl WaitlistEntry {
    /// Build an entry stamped with the current time
    pub fn now(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            timestamp: now_timestamp(),
        }
    }
}

/// Current time as RFC 3339 with milliseconds, e.g. `2025-01-01T00:00:00.000Z`
pub fn now_timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// Why a submission did not go through. Only logged, never shown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request could not be built: {0}")]
    Request(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("relay responded with status {0}")]
    Status(u16),
}

/// The seam between the form and the network
#[allow(async_fn_in_trait)]
pub trait WaitlistTransport {
    /// Deliver one entry. Success only means the request itself went out.
    async fn send(&self, entry: &WaitlistEntry) -> Result<(), SubmitError>;
}

/// Why `begin_submit` refused to start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// At least one field failed validation; see [`WaitlistForm::field_errors`]
    Invalid,
    /// A submission is in flight or has already succeeded
    Busy,
}

/// Result of a full [`WaitlistForm::submit`] round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid,
    Busy,
    Sent,
    Failed,
}

/// State of the waitlist form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitlistForm {
    name: String,
    email: String,
    status: SubmissionStatus,
    field_errors: FieldErrors,
    error: Option<&'static str>,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn field_errors(&self) -> FieldErrors {
        self.field_errors
    }

    /// User-facing message while in the Error state
    pub fn error_message(&self) -> Option<&'static str> {
        self.error
    }

    /// Inputs are locked while a request is in flight and after success
    pub fn is_locked(&self) -> bool {
        matches!(
            self.status,
            SubmissionStatus::Submitting | SubmissionStatus::Success
        )
    }

    /// Update the name; clears its error so the hint goes away as the user types
    pub fn set_name(&mut self, value: impl Into<String>) {
        if self.is_locked() {
            return;
        }
        self.name = value.into();
        self.field_errors.name = None;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if self.is_locked() {
            return;
        }
        self.email = value.into();
        self.field_errors.email = None;
    }

    /// Validate and, if everything passes, move to Submitting and hand back
    /// the entry to send. Field errors are recorded on failure.
    pub fn begin_submit(&mut self) -> Result<WaitlistEntry, SubmitBlocked> {
        if self.is_locked() {
            return Err(SubmitBlocked::Busy);
        }

        let errors = FieldErrors::check(&self.name, &self.email);
        self.field_errors = errors;
        if !errors.is_empty() {
            return Err(SubmitBlocked::Invalid);
        }

        self.status = SubmissionStatus::Submitting;
        self.error = None;
        Ok(WaitlistEntry::now(self.name.trim(), self.email.clone()))
    }

    /// Record the transport result. Ignored unless a submission is in flight,
    /// so a late completion after a reset cannot resurrect old state.
    pub fn finish_submit(&mut self, result: Result<(), SubmitError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        match result {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
            }
            Err(e) => {
                leptos::logging::warn!("waitlist submission failed: {}", e);
                self.status = SubmissionStatus::Error;
                self.error = Some(GENERIC_ERROR_MESSAGE);
            }
        }
    }

    /// Validate, send once and settle. The whole operation in one call.
    pub async fn submit<T: WaitlistTransport>(&mut self, transport: &T) -> SubmitOutcome {
        let entry = match self.begin_submit() {
            Ok(entry) => entry,
            Err(SubmitBlocked::Invalid) => return SubmitOutcome::Invalid,
            Err(SubmitBlocked::Busy) => return SubmitOutcome::Busy,
        };

        let result = transport.send(&entry).await;
        let sent = result.is_ok();
        self.finish_submit(result);

        if sent {
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Failed
        }
    }

    /// End of the success display: reset to a blank form. Returns whether
    /// anything happened so the caller knows to close the modal.
    pub fn complete(&mut self) -> bool {
        if self.status != SubmissionStatus::Success {
            return false;
        }
        self.reset();
        true
    }

    /// Leave the Error state, keeping what the user typed
    pub fn retry(&mut self) {
        if self.status == SubmissionStatus::Error {
            self.status = SubmissionStatus::Idle;
            self.error = None;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
