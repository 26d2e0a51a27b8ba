use super::validator::{FieldKind, FormField};

/// The registration form's fields in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            fields: vec![
                FormField::new("name", FieldKind::Text, true),
                FormField::new("email", FieldKind::Email, true),
                FormField::new("phone", FieldKind::Tel, true),
            ],
        }
    }
}

impl RegistrationForm {
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns false for unknown field names.
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.raw_value = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        for field in &mut self.fields {
            field.raw_value.clear();
        }
    }
}

/// Label and enabled state of the form's submit button.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitControl {
    label: String,
    original_label: String,
    busy_label: String,
    disabled: bool,
}

impl SubmitControl {
    pub fn new(label: &str, busy_label: &str) -> Self {
        Self {
            label: label.to_string(),
            original_label: label.to_string(),
            busy_label: busy_label.to_string(),
            disabled: false,
        }
    }

    pub fn set_busy(&mut self) {
        self.label = self.busy_label.clone();
        self.disabled = true;
    }

    pub fn restore(&mut self) {
        self.label = self.original_label.clone();
        self.disabled = false;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_busy(&self) -> bool {
        self.disabled && self.label == self.busy_label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_and_clear() {
        let mut form = RegistrationForm::default();
        assert!(form.set_value("email", "ann@x.com"));
        assert!(!form.set_value("age", "12"));
        assert_eq!(form.field("email").unwrap().raw_value, "ann@x.com");

        form.clear();
        assert!(form.fields().iter().all(|f| f.raw_value.is_empty()));
    }

    #[test]
    fn test_submit_control_busy_and_restore() {
        let mut submit = SubmitControl::new("Reserve", "Registering...");
        submit.set_busy();
        assert!(submit.is_busy());
        assert_eq!(submit.label(), "Registering...");

        submit.restore();
        assert!(!submit.is_disabled());
        assert_eq!(submit.label(), "Reserve");
    }
}
