//! Field validation for the registration form.

use once_cell::sync::Lazy;
use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").expect("valid phone regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
}

impl FieldKind {
    /// Value for the `type` attribute of the rendered input
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Tel => "tel",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub raw_value: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub fn new(name: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            raw_value: String::new(),
            kind,
            required,
        }
    }

    #[cfg(test)]
    pub fn with_value(mut self, value: &str) -> Self {
        self.raw_value = value.to_string();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: &str) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Checks one field. Empty optional fields pass without format checks.
pub fn validate(field: &FormField) -> ValidationResult {
    let value = field.raw_value.trim();

    if value.is_empty() {
        return if field.required {
            ValidationResult::invalid(REQUIRED_MESSAGE)
        } else {
            ValidationResult::ok()
        };
    }

    match field.kind {
        FieldKind::Email if !EMAIL_RE.is_match(value) => ValidationResult::invalid(EMAIL_MESSAGE),
        FieldKind::Tel if !PHONE_RE.is_match(&strip_phone_formatting(value)) => {
            ValidationResult::invalid(PHONE_MESSAGE)
        }
        _ => ValidationResult::ok(),
    }
}

fn strip_phone_formatting(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}
