use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// RFC 5322 style: permissive local part, domain labels of at most 63
// characters that neither start nor end with a hyphen.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$")
        .expect("email pattern compiles")
});

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s'-]+$").expect("name pattern compiles"));

pub const NAME_MIN: usize = 2;
pub const NAME_MAX: usize = 100;
pub const MESSAGE_MIN: usize = 10;
pub const MESSAGE_MAX: usize = 5000;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFormData {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name is required")]
    Required,
    #[error("Name contains invalid characters")]
    InvalidCharacters,
    #[error("Name must be at least 2 characters")]
    TooShort,
    #[error("Name must not exceed 100 characters")]
    TooLong,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MessageError {
    #[error("Message is required")]
    Required,
    #[error("Message must be at least 10 characters")]
    TooShort,
    #[error("Message must not exceed 5000 characters")]
    TooLong,
}

/// Outcome of validating a whole form. Holds at most one message per field;
/// a missing key means that field passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidationResult {
    pub errors: BTreeMap<Field, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

// Character set is checked before length so that a name with digits or
// symbols always reports invalid characters, whatever its length.
pub fn validate_name(name: &str) -> Result<(), NameError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NameError::Required);
    }
    if !NAME_REGEX.is_match(name) {
        return Err(NameError::InvalidCharacters);
    }
    let len = name.chars().count();
    if len < NAME_MIN {
        return Err(NameError::TooShort);
    }
    if len > NAME_MAX {
        return Err(NameError::TooLong);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && EMAIL_REGEX.is_match(email)
}

/// Lengths are in Unicode scalar values, so an emoji counts once.
pub fn validate_message(message: &str) -> Result<(), MessageError> {
    let message = message.trim();
    if message.is_empty() {
        return Err(MessageError::Required);
    }
    let len = message.chars().count();
    if len < MESSAGE_MIN {
        return Err(MessageError::TooShort);
    }
    if len > MESSAGE_MAX {
        return Err(MessageError::TooLong);
    }
    Ok(())
}

pub fn validate_form(data: &ContactFormData) -> ValidationResult {
    let mut errors = BTreeMap::new();

    if let Err(e) = validate_name(&data.name) {
        errors.insert(Field::Name, e.to_string());
    }
    if !validate_email(&data.email) {
        errors.insert(Field::Email, INVALID_EMAIL.to_string());
    }
    if let Err(e) = validate_message(&data.message) {
        errors.insert(Field::Message, e.to_string());
    }

    ValidationResult { errors }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactFormData {
        ContactFormData {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn name_length_bounds() {
        assert_eq!(validate_name("A"), Err(NameError::TooShort));
        assert_eq!(validate_name("Jo"), Ok(()));
        assert_eq!(validate_name(&"a".repeat(100)), Ok(()));
        assert_eq!(validate_name(&"a".repeat(101)), Err(NameError::TooLong));
    }

    #[test]
    fn name_is_trimmed_before_checks() {
        assert_eq!(validate_name("   "), Err(NameError::Required));
        assert_eq!(validate_name(""), Err(NameError::Required));
        assert_eq!(validate_name("  A  "), Err(NameError::TooShort));
        assert_eq!(validate_name("  Jo  "), Ok(()));
    }

    #[test]
    fn name_allows_spaces_hyphens_apostrophes() {
        assert_eq!(validate_name("Mary-Jane O'Neill"), Ok(()));
        assert_eq!(validate_name("Ruairi Laughlin-Mccann"), Ok(()));
    }

    #[test]
    fn name_with_digits_or_symbols_is_invalid_characters() {
        for name in ["R2D2", "1", "Jo!", "a@b", "José", "Name_With_Underscore", "#"] {
            assert_eq!(validate_name(name), Err(NameError::InvalidCharacters), "{name}");
        }
        let long_with_digit = format!("{}9", "a".repeat(120));
        assert_eq!(validate_name(&long_with_digit), Err(NameError::InvalidCharacters));
    }

    #[test]
    fn email_examples() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("  first.last+tag@sub.example.org "));
        assert!(validate_email("user@localhost"));
        assert!(!validate_email("a@@b.com"));
        assert!(!validate_email(""));
        assert!(!validate_email("   "));
        assert!(!validate_email("no-at-sign.com"));
        assert!(!validate_email("a@-bad.com"));
        assert!(!validate_email("a@bad-.com"));
        assert!(!validate_email("a@b..com"));
    }

    #[test]
    fn email_label_length_limit() {
        let ok = format!("a@{}.com", "b".repeat(63));
        let too_long = format!("a@{}.com", "b".repeat(64));
        assert!(validate_email(&ok));
        assert!(!validate_email(&too_long));
    }

    #[test]
    fn message_length_bounds() {
        assert_eq!(validate_message(&"x".repeat(9)), Err(MessageError::TooShort));
        assert_eq!(validate_message(&"x".repeat(10)), Ok(()));
        assert_eq!(validate_message(&"x".repeat(5000)), Ok(()));
        assert_eq!(validate_message(&"x".repeat(5001)), Err(MessageError::TooLong));
        assert_eq!(validate_message(" \n\t "), Err(MessageError::Required));
    }

    #[test]
    fn message_length_counts_characters_not_bytes() {
        assert_eq!(validate_message(&"é".repeat(10)), Ok(()));
        // one char each, even outside the BMP
        assert_eq!(validate_message(&"📈".repeat(MESSAGE_MAX)), Ok(()));
        assert_eq!(validate_message(&"📈".repeat(MESSAGE_MAX + 1)), Err(MessageError::TooLong));
    }

    #[test]
    fn all_fields_invalid_yields_three_errors() {
        let result = validate_form(&form("1", "nope", "short"));
        assert!(!result.is_valid());
        assert_eq!(result.errors.len(), 3);
        assert_eq!(result.error(Field::Email), Some(INVALID_EMAIL));
        assert_eq!(result.error(Field::Name), Some("Name contains invalid characters"));
        assert_eq!(result.error(Field::Message), Some("Message must be at least 10 characters"));
    }

    #[test]
    fn valid_form_has_no_errors() {
        let result = validate_form(&form("Jo Bloggs", "jo@example.com", "We need a UK holding company."));
        assert!(result.is_valid());
        assert!(result.errors.is_empty());
    }

    #[test]
    fn only_failing_fields_are_reported() {
        let result = validate_form(&form("Jo", "bad", "A perfectly long message"));
        assert_eq!(result.errors.keys().copied().collect::<Vec<_>>(), vec![Field::Email]);
        assert!(result.error(Field::Name).is_none());
    }

    #[test]
    fn validation_is_deterministic() {
        let data = form("A", "a@b.co", "hi");
        assert_eq!(validate_form(&data), validate_form(&data));
    }

    #[test]
    fn trimmed_strips_every_field() {
        let data = form("  Jo ", " jo@example.com\n", "\thello there  ");
        assert_eq!(data.trimmed(), form("Jo", "jo@example.com", "hello there"));
    }
}
