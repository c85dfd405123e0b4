use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::SUCCESS_BANNER_MS;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Email is required.")]
    EmailRequired,
    #[error("Invalid email format.")]
    EmailInvalid,
    #[error("Message is required.")]
    MessageRequired,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormFields {
    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    /// Message shown under the field, empty when it is valid.
    pub fn text(&self, field: Field) -> String {
        self.get(field).map(|err| err.to_string()).unwrap_or_default()
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks every field; all failures are reported together.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let name = fields
        .name
        .trim()
        .is_empty()
        .then_some(FieldError::NameRequired);

    let email = if fields.email.trim().is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(&fields.email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    };

    let message = fields
        .message
        .trim()
        .is_empty()
        .then_some(FieldError::MessageRequired);

    FieldErrors {
        name,
        email,
        message,
    }
}

/// Contact form state. Submission goes nowhere; a valid message only flips
/// the success banner on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: FormFields,
    pub errors: FieldErrors,
    pub submitted: bool,
    /// Accepted submissions so far; restarts the success banner timer.
    pub successes: u32,
}

impl ContactForm {
    pub fn edit(&mut self, field: Field, value: String) {
        *self.fields.slot_mut(field) = value;
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> Result<(), FieldErrors> {
        let errors = validate(&self.fields);
        self.errors = errors;
        if !errors.is_empty() {
            return Err(errors);
        }

        self.fields = FormFields::default();
        self.submitted = true;
        self.successes = self.successes.wrapping_add(1);
        Ok(())
    }

    pub fn dismiss_success(&mut self) {
        self.submitted = false;
    }

    /// How long the success banner stays up, `None` while it is hidden.
    pub fn banner_timeout(&self) -> Option<u32> {
        self.submitted.then_some(SUCCESS_BANNER_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, name.to_string());
        form.edit(Field::Email, email.to_string());
        form.edit(Field::Message, message.to_string());
        form
    }

    #[test]
    fn valid_submission_clears_fields_and_shows_success() {
        let mut form = filled("Ada", "ada@example.com", "Hello there");
        assert_eq!(form.submit(), Ok(()));
        assert!(form.submitted);
        assert!(form.errors.is_empty());
        assert_eq!(form.fields, FormFields::default());
        assert_eq!(form.successes, 1);

        form.dismiss_success();
        assert!(!form.submitted);
    }

    #[test]
    fn success_banner_hides_after_three_seconds() {
        let mut form = filled("Ada", "ada@example.com", "Hello there");
        assert_eq!(form.banner_timeout(), None);

        form.submit().unwrap();
        assert_eq!(form.banner_timeout(), Some(3_000));

        form.dismiss_success();
        assert_eq!(form.banner_timeout(), None);

        // A rejected submit never arms the banner.
        let mut empty = ContactForm::default();
        empty.submit().unwrap_err();
        assert_eq!(empty.banner_timeout(), None);
    }

    #[test]
    fn missing_name_is_the_only_error() {
        let mut form = filled("", "a@b.com", "hi");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.text(Field::Name), "Name is required.");
        assert_eq!(errors.text(Field::Email), "");
        assert_eq!(errors.text(Field::Message), "");
        assert_eq!(form.fields.email, "a@b.com");
        assert_eq!(form.fields.message, "hi");
        assert!(!form.submitted);
    }

    #[test]
    fn malformed_email_reports_format_error_only() {
        let mut form = filled("A", "not-an-email", "hi");
        let errors = form.submit().unwrap_err();
        assert_eq!(
            errors,
            FieldErrors {
                email: Some(FieldError::EmailInvalid),
                ..FieldErrors::default()
            }
        );
        assert_eq!(errors.text(Field::Email), "Invalid email format.");
    }

    #[test]
    fn every_failing_field_is_reported_at_once() {
        let mut form = filled("   ", "", "\n\t");
        let errors = form.submit().unwrap_err();
        assert_eq!(errors.name, Some(FieldError::NameRequired));
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.message, Some(FieldError::MessageRequired));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = filled("", "", "");
        form.submit().unwrap_err();

        form.edit(Field::Name, "B".to_string());
        assert_eq!(form.errors.name, None);
        assert_eq!(form.errors.email, Some(FieldError::EmailRequired));
        assert_eq!(form.errors.message, Some(FieldError::MessageRequired));
    }

    #[test]
    fn email_pattern_matches_loose_two_part_addresses() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email(" padded@host.io "));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@ b.com"));
        assert!(!is_valid_email("a@b."));
    }
}
