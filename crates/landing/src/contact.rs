//! Contact form validation.
//!
//! Mirrors what the page checks before showing the success message. There is
//! no backend: a valid submission only produces a [`ContactSubmission`] and
//! the success notification.

use core::fmt;

use billease_core::Email;
use serde::{Deserialize, Serialize};

const MIN_NAME_CHARS: usize = 2;
const MIN_MESSAGE_CHARS: usize = 10;

/// Raw contact form input, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A form field that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    /// The input element id (`#name`, `#email`, `#message`).
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// A validation failure on one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    Required(ContactField),
    TooShort { field: ContactField, min: usize },
    InvalidEmail,
}

impl FieldError {
    /// The field the message is shown under.
    #[must_use]
    pub const fn field(self) -> ContactField {
        match self {
            Self::Required(field) | Self::TooShort { field, .. } => field,
            Self::InvalidEmail => ContactField::Email,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.field() {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        };
        match self {
            Self::Required(_) => write!(f, "{label} is required"),
            Self::TooShort { min, .. } => write!(f, "{label} must be at least {min} characters"),
            Self::InvalidEmail => f.write_str("Please enter a valid email address"),
        }
    }
}

/// Every failing field, in form order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("contact form has {} invalid field(s)", .0.len())]
pub struct ContactErrors(Vec<FieldError>);

impl ContactErrors {
    /// All errors, in form order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    /// The error for `field`, if it failed.
    #[must_use]
    pub fn for_field(&self, field: ContactField) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

/// A validated, trimmed submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub message: String,
}

impl ContactForm {
    /// Validate every field, reporting all failures at once.
    ///
    /// Values are trimmed first. Lengths count characters, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ContactErrors`] listing each field that failed.
    pub fn validate(&self) -> Result<ContactSubmission, ContactErrors> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if let Some(err) = check_length(ContactField::Name, name, MIN_NAME_CHARS) {
            errors.push(err);
        }

        let email = self.email.trim();
        let parsed = if email.is_empty() {
            errors.push(FieldError::Required(ContactField::Email));
            None
        } else {
            match Email::parse(email) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::debug!(error = %e, "Contact email rejected");
                    errors.push(FieldError::InvalidEmail);
                    None
                }
            }
        };

        let message = self.message.trim();
        if let Some(err) = check_length(ContactField::Message, message, MIN_MESSAGE_CHARS) {
            errors.push(err);
        }

        match parsed {
            Some(email) if errors.is_empty() => {
                tracing::info!(email = %email, "Contact form accepted");
                Ok(ContactSubmission {
                    name: name.to_owned(),
                    email,
                    message: message.to_owned(),
                })
            }
            _ => Err(ContactErrors(errors)),
        }
    }
}

fn check_length(field: ContactField, value: &str, min: usize) -> Option<FieldError> {
    if value.is_empty() {
        Some(FieldError::Required(field))
    } else if value.chars().count() < min {
        Some(FieldError::TooShort { field, min })
    } else {
        None
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let submission = form("  Ada ", " ada@example.com ", "  I would like a demo.  ")
            .validate()
            .unwrap();
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email.as_str(), "ada@example.com");
        assert_eq!(submission.message, "I would like a demo.");
    }

    #[test]
    fn test_all_required() {
        let errors = ContactForm::default().validate().unwrap_err();
        let messages: Vec<String> = errors.errors().iter().map(ToString::to_string).collect();
        assert_eq!(
            messages,
            ["Name is required", "Email is required", "Message is required"]
        );
    }

    #[test]
    fn test_whitespace_only_is_missing() {
        let errors = form("   ", "\t", "\n").validate().unwrap_err();
        assert_eq!(errors.errors().len(), 3);
    }

    #[test]
    fn test_too_short() {
        let errors = form("A", "a@b.co", "Too short").validate().unwrap_err();
        assert_eq!(
            errors.for_field(ContactField::Name).unwrap().to_string(),
            "Name must be at least 2 characters"
        );
        assert_eq!(
            errors.for_field(ContactField::Message).unwrap().to_string(),
            "Message must be at least 10 characters"
        );
        assert!(errors.for_field(ContactField::Email).is_none());
    }

    #[test]
    fn test_invalid_email() {
        let errors = form("Ada", "ada@example", "Hello there, BillEase!")
            .validate()
            .unwrap_err();
        assert_eq!(errors.errors(), [FieldError::InvalidEmail]);
        assert_eq!(
            errors.errors()[0].to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_lengths_count_characters() {
        assert!(form("Zoë", "z@e.io", "ünïcödé ok").validate().is_ok());
        assert!(form("É", "z@e.io", "0123456789").validate().is_err());
    }

    #[test]
    fn test_field_ids() {
        assert_eq!(ContactField::Name.id(), "name");
        assert_eq!(ContactField::Email.id(), "email");
        assert_eq!(ContactField::Message.id(), "message");
    }
}
