// Contact form domain model and schema validation

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{0,15}$").unwrap());

/// A contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A single failed validation rule, reported per field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl ContactForm {
    /// Validate the submission against the contact form schema.
    ///
    /// Every failing field is reported, one message per field (the first
    /// failing rule wins). Lengths count characters, not bytes.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        let name_len = self.name.trim().chars().count();
        if name_len == 0 {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name_len < 2 {
            errors.push(FieldError::new(
                "name",
                "Name must be at least 2 characters long",
            ));
        } else if name_len > 50 {
            errors.push(FieldError::new("name", "Name cannot exceed 50 characters"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !EMAIL_PATTERN.is_match(email) {
            errors.push(FieldError::new(
                "email",
                "Please provide a valid email address",
            ));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            errors.push(FieldError::new("phone", "Phone number is required"));
        } else if !PHONE_PATTERN.is_match(phone) {
            errors.push(FieldError::new(
                "phone",
                "Please provide a valid phone number",
            ));
        }

        let message_len = self.message.trim().chars().count();
        if message_len == 0 {
            errors.push(FieldError::new("message", "Message is required"));
        } else if message_len < 10 {
            errors.push(FieldError::new(
                "message",
                "Message must be at least 10 characters long",
            ));
        } else if message_len > 1000 {
            errors.push(FieldError::new(
                "message",
                "Message cannot exceed 1000 characters",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Normalized copy of the submission: fields trimmed, email lowercased
    pub fn sanitized(&self) -> ContactForm {
        ContactForm {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}
