//! Per-field validation error map
//!
//! A field present in the map is invalid; absence means valid-or-untouched.

use super::signup_form::SignupField;
use std::collections::HashMap;

/// The set of currently-invalid fields and their user-facing messages
#[derive(Debug, Clone, Default)]
pub struct FieldErrors {
    entries: HashMap<SignupField, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error message for a field, replacing any previous one
    pub fn set(&mut self, field: SignupField, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    /// Remove a field's error, if any
    pub fn clear(&mut self, field: SignupField) {
        self.entries.remove(&field);
    }

    /// Get the current message for a field
    pub fn get(&self, field: SignupField) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Whether the field currently has an error
    pub fn contains(&self, field: SignupField) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate over (field, message) pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (SignupField, &str)> + '_ {
        self.entries.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert!(!errors.contains(SignupField::Username));
    }

    #[test]
    fn test_set_and_get() {
        let mut errors = FieldErrors::new();
        errors.set(SignupField::Email, "Please enter a valid email address");
        assert!(errors.contains(SignupField::Email));
        assert_eq!(
            errors.get(SignupField::Email),
            Some("Please enter a valid email address")
        );
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_set_replaces_previous_message() {
        let mut errors = FieldErrors::new();
        errors.set(SignupField::Phone, "first");
        errors.set(SignupField::Phone, "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(SignupField::Phone), Some("second"));
    }

    #[test]
    fn test_clear_removes_entry() {
        let mut errors = FieldErrors::new();
        errors.set(SignupField::Username, "bad");
        errors.clear(SignupField::Username);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_clear_absent_field_is_noop() {
        let mut errors = FieldErrors::new();
        errors.set(SignupField::Username, "bad");
        errors.clear(SignupField::Email);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_iter_yields_all_entries() {
        let mut errors = FieldErrors::new();
        errors.set(SignupField::Username, "a");
        errors.set(SignupField::Pincode, "b");
        let mut fields: Vec<SignupField> = errors.iter().map(|(f, _)| f).collect();
        fields.sort_by_key(|f| format!("{f:?}"));
        assert_eq!(fields, vec![SignupField::Pincode, SignupField::Username]);
    }
}
