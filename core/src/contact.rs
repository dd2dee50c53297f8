//! Contact form and its simulated submission
//!
//! The machine has three observable states:
//!
//! ```text
//! Idle --submit--> Submitting --SUBMIT_LATENCY--> Succeeded --SUCCESS_NOTICE--> Idle
//! ```
//!
//! Fields are cleared when `Submitting` completes, before the success
//! notice is shown. The `failed` flag is rendered by the UI but no
//! transition ever raises it.

use std::time::Duration;

use tracing::debug;

use crate::error::ValidationError;

/// Simulated network round-trip before the message counts as sent
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// How long the success notice stays up
pub const SUCCESS_NOTICE: Duration = Duration::from_millis(5000);

/// Form field identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// HTML `name`/`id` attribute
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    /// HTML input type
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }
}

/// Form field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Same checks a browser applies for `required` and `type=email`.
    ///
    /// `required` only rejects the empty string, so whitespace counts as
    /// a value.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(missing) = Field::ALL.into_iter().find(|f| self.get(*f).is_empty()) {
            return Err(ValidationError::MissingField(missing));
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(())
    }
}

/// `local@domain` with both parts non-empty and no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains('@')
        }
        None => false,
    }
}

/// Submission indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Everything the contact section owns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    /// Drives the failure banner. Nothing sets it.
    pub failed: bool,
}

impl ContactState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    pub fn show_success(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn show_failure(&self) -> bool {
        self.failed
    }

    /// Update a field. Edits are accepted in every state.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Idle -> Submitting. A submit while the success notice is up is
    /// accepted like one from Idle.
    pub fn begin_submit(&mut self) -> Result<(), ValidationError> {
        if self.is_submitting() {
            return Err(ValidationError::Busy);
        }
        self.form.validate()?;

        self.status = SubmissionStatus::Submitting;
        debug!("contact form submitting");
        Ok(())
    }

    /// Submitting -> Succeeded, clearing the fields first.
    ///
    /// Returns false when the machine was not submitting.
    pub fn complete_submit(&mut self) -> bool {
        if !self.is_submitting() {
            return false;
        }
        self.form.clear();
        self.status = SubmissionStatus::Succeeded;
        debug!("contact form sent (simulated)");
        true
    }

    /// Succeeded -> Idle once the notice has been shown long enough.
    ///
    /// Returns false when there was no notice to dismiss.
    pub fn dismiss_success(&mut self) -> bool {
        if !self.show_success() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactState {
        let mut state = ContactState::new();
        state.edit(Field::Name, "Ada");
        state.edit(Field::Email, "ada@example.com");
        state.edit(Field::Subject, "Hello");
        state.edit(Field::Message, "Nice site");
        state
    }

    #[test]
    fn test_full_cycle() {
        let mut state = filled();
        assert_eq!(state.status, SubmissionStatus::Idle);

        state.begin_submit().unwrap();
        assert!(state.is_submitting());
        assert_eq!(state.form.name, "Ada");

        assert!(state.complete_submit());
        assert_eq!(state.status, SubmissionStatus::Succeeded);
        assert!(state.form.is_empty());
        assert!(state.show_success());

        assert!(state.dismiss_success());
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(!state.failed);
    }

    #[test]
    fn test_each_empty_field_blocks_submit() {
        for field in Field::ALL {
            let mut state = filled();
            state.edit(field, "");
            assert_eq!(
                state.begin_submit(),
                Err(ValidationError::MissingField(field))
            );
            assert_eq!(state.status, SubmissionStatus::Idle);
        }
    }

    #[test]
    fn test_whitespace_only_is_accepted() {
        let mut state = filled();
        state.edit(Field::Subject, "   ");
        assert_eq!(state.begin_submit(), Ok(()));
        assert!(state.is_submitting());

        assert!(state.complete_submit());
        assert!(state.form.is_empty());
    }

    #[test]
    fn test_invalid_email_blocks_submit() {
        let mut state = filled();
        state.edit(Field::Email, "not-an-email");
        assert_eq!(state.begin_submit(), Err(ValidationError::InvalidEmail));
        assert_eq!(state.status, SubmissionStatus::Idle);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email(" a@b.co "));
        assert!(!is_valid_email("@b"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("a b@c"));
    }

    #[test]
    fn test_double_submit_is_busy() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(ValidationError::Busy));
        assert!(state.is_submitting());
    }

    #[test]
    fn test_out_of_order_timers_are_ignored() {
        let mut state = filled();
        assert!(!state.complete_submit());
        assert!(!state.dismiss_success());
        assert_eq!(state.form.name, "Ada");

        state.begin_submit().unwrap();
        assert!(!state.dismiss_success());
        assert!(state.is_submitting());
    }

    #[test]
    fn test_resubmit_during_notice() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.complete_submit();

        state.edit(Field::Name, "Grace");
        state.edit(Field::Email, "grace@example.com");
        state.edit(Field::Subject, "Again");
        state.edit(Field::Message, "Hi");
        state.begin_submit().unwrap();
        assert!(state.is_submitting());
        assert!(!state.show_success());
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::MissingField(Field::Email).to_string(),
            "Email is required"
        );
    }

    #[test]
    fn test_delays() {
        assert_eq!(SUBMIT_LATENCY.as_millis(), 1500);
        assert_eq!(SUCCESS_NOTICE.as_millis(), 5000);
    }
}
