use std::collections::BTreeMap;

/// Inline error messages keyed by field name. At most one message per field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    messages: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field invalid. A second call replaces the text.
    pub fn show_error(&mut self, field: &str, message: &str) {
        self.messages.insert(field.to_string(), message.to_string());
    }

    /// No-op when the field has no error.
    pub fn clear_error(&mut self, field: &str) {
        self.messages.remove(field);
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.messages.get(field).map(String::as_str)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
