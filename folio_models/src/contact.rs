use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Minimal structural email check: one `@`, at least one dot in the domain,
/// no whitespace. Deliberately permissive, not RFC 5322.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// One contact form submission attempt, exactly as entered by the visitor.
///
/// Created fresh per attempt and discarded once the dispatch resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// Verdict of [`ContactMessage::validate`]: a map from failed field to its
/// user-facing error message. The submission is valid iff the map is empty,
/// which this type guarantees by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContactValidation {
    errors: BTreeMap<ContactField, &'static str>,
}

impl ContactValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: ContactField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn errors(&self) -> &BTreeMap<ContactField, &'static str> {
        &self.errors
    }
}

impl ContactMessage {
    /// Checks the submission against the form rules.
    ///
    /// All fields are evaluated in a single pass and every failed field is
    /// reported together. At most one message is recorded per field; the
    /// "required" check takes precedence over the length and shape checks.
    /// Pure function of the input, no I/O.
    pub fn validate(&self) -> ContactValidation {
        let mut errors = BTreeMap::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(ContactField::Name, "Name is required");
        } else if name.chars().count() < 2 {
            errors.insert(ContactField::Name, "Name must be at least 2 characters");
        }

        // The shape check runs on the value as entered, so an address with
        // surrounding whitespace is rejected rather than silently accepted.
        if self.email.trim().is_empty() {
            errors.insert(ContactField::Email, "Email is required");
        } else if !EMAIL_REGEX.is_match(&self.email) {
            errors.insert(ContactField::Email, "Please enter a valid email address");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.insert(ContactField::Message, "Message is required");
        } else if message.chars().count() < 10 {
            errors.insert(
                ContactField::Message,
                "Message must be at least 10 characters",
            );
        }

        ContactValidation { errors }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn message(name: &str, email: &str, message: &str) -> ContactMessage {
        ContactMessage {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let validation = message("Jane", "jane@x.com", "this is long enough").validate();

        assert!(validation.is_valid());
        assert_eq!(validation.errors().len(), 0);
    }

    #[test]
    fn rejects_missing_name() {
        for name in ["", "   ", "\t\n"] {
            let validation = message(name, "jane@x.com", "this is long enough").validate();

            assert!(!validation.is_valid());
            assert_eq!(validation.error(ContactField::Name), Some("Name is required"));
            assert_eq!(validation.errors().len(), 1);
        }
    }

    #[test]
    fn rejects_short_name() {
        let validation = message("A", "a@b.com", "valid message!").validate();

        assert!(!validation.is_valid());
        assert_eq!(
            validation.error(ContactField::Name),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(validation.errors().len(), 1);
    }

    #[test]
    fn accepts_two_character_name() {
        let validation = message("Jo", "jo@x.com", "this is long enough").validate();

        assert!(validation.is_valid());
    }

    #[test]
    fn name_length_counts_chars_after_trimming() {
        // " A " trims to one character, which is too short.
        let validation = message(" A ", "a@b.com", "valid message!").validate();

        assert_eq!(
            validation.error(ContactField::Name),
            Some("Name must be at least 2 characters")
        );

        // Two non-ascii chars are two chars, not four bytes.
        let validation = message("Æø", "a@b.com", "valid message!").validate();

        assert!(validation.is_valid());
    }

    #[test]
    fn rejects_missing_email() {
        let validation = message("Jane", "  ", "this is long enough").validate();

        assert!(!validation.is_valid());
        assert_eq!(
            validation.error(ContactField::Email),
            Some("Email is required")
        );
    }

    #[test]
    fn rejects_malformed_email() {
        for email in [
            "not-an-email",
            "a@b",
            "a@b.",
            "@b.com",
            "a@.com",
            "a b@c.com",
            "a@b@c.com",
            " jane@x.com",
        ] {
            let validation = message("Jane", email, "valid message!").validate();

            assert!(!validation.is_valid(), "accepted {email:?}");
            assert_eq!(
                validation.error(ContactField::Email),
                Some("Please enter a valid email address"),
                "wrong error for {email:?}"
            );
        }
    }

    #[test]
    fn rejects_missing_message() {
        let validation = message("Jane", "jane@x.com", " \n ").validate();

        assert!(!validation.is_valid());
        assert_eq!(
            validation.error(ContactField::Message),
            Some("Message is required")
        );
    }

    #[test]
    fn rejects_short_message() {
        let validation = message("Jane", "jane@x.com", "short").validate();

        assert!(!validation.is_valid());
        assert_eq!(
            validation.error(ContactField::Message),
            Some("Message must be at least 10 characters")
        );
        assert_eq!(validation.errors().len(), 1);
    }

    #[test]
    fn accepts_ten_character_message() {
        let validation = message("Jane", "jane@x.com", "ten chars!").validate();

        assert!(validation.is_valid());
    }

    #[test]
    fn reports_all_failed_fields_together() {
        let validation = message("", "", "").validate();

        assert!(!validation.is_valid());
        assert_eq!(validation.error(ContactField::Name), Some("Name is required"));
        assert_eq!(
            validation.error(ContactField::Email),
            Some("Email is required")
        );
        assert_eq!(
            validation.error(ContactField::Message),
            Some("Message is required")
        );
        assert_eq!(validation.errors().len(), 3);
    }

    #[test]
    fn validation_is_idempotent() {
        let submission = message("J", "nope", "short");

        assert_eq!(submission.validate(), submission.validate());
    }

    #[test]
    fn serializes_errors_keyed_by_field() {
        let validation = message("Jane", "not-an-email", "valid message!").validate();

        assert_eq!(
            serde_json::to_value(&validation).unwrap(),
            serde_json::json!({"email": "Please enter a valid email address"})
        );
    }
}
