//! Form field value objects

use super::signup_form::SignupField;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: SignupField,
    pub label: String,
    pub value: FieldValue,
    pub is_secret: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: SignupField) -> Self {
        Self {
            label: name.label().to_string(),
            name,
            value: FieldValue::Text(String::new()),
            is_secret: false,
        }
    }

    /// Create a new text field with initial value
    pub fn text_with_value(name: SignupField, value: String) -> Self {
        Self {
            label: name.label().to_string(),
            name,
            value: FieldValue::Text(value),
            is_secret: false,
        }
    }

    /// Create a new secret text field (passwords; masked by frontends)
    pub fn secret(name: SignupField) -> Self {
        Self {
            label: name.label().to_string(),
            name,
            value: FieldValue::Text(String::new()),
            is_secret: true,
        }
    }

    /// Create a new unchecked checkbox field
    pub fn checkbox(name: SignupField) -> Self {
        Self {
            label: name.label().to_string(),
            name,
            value: FieldValue::Checkbox(false),
            is_secret: false,
        }
    }

    /// Get the text value (returns empty string for checkbox fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checkbox value (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        match &self.value {
            FieldValue::Checkbox(c) => *c,
            FieldValue::Text(_) => false,
        }
    }

    /// Set the text value
    pub fn set_text(&mut self, value: String) {
        self.value = FieldValue::Text(value);
    }

    /// Set the checkbox value
    pub fn set_checked(&mut self, checked: bool) {
        self.value = FieldValue::Checkbox(checked);
    }

    /// Toggle the checkbox value
    pub fn toggle(&mut self) {
        if let FieldValue::Checkbox(c) = &mut self.value {
            *c = !*c;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        match &mut self.value {
            FieldValue::Text(s) => s.push(c),
            FieldValue::Checkbox(_) => {
                // Checkboxes don't take character input
            }
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Checkbox(c) => *c = false,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) if self.is_secret => "•".repeat(s.chars().count()),
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checkbox(true) => "[x]".to_string(),
            FieldValue::Checkbox(false) => "[ ]".to_string(),
        }
    }
}
