//! Signup form state and field traversal

use super::field::FormField;
use super::validate;

/// The fields of the signup form, in traversal order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignupField {
    Username,
    Email,
    Phone,
    State,
    District,
    Pincode,
    Password,
    ConfirmPassword,
    Terms,
}

/// Traversal order of the form fields
pub const FIELD_ORDER: [SignupField; 9] = [
    SignupField::Username,
    SignupField::Email,
    SignupField::Phone,
    SignupField::State,
    SignupField::District,
    SignupField::Pincode,
    SignupField::Password,
    SignupField::ConfirmPassword,
    SignupField::Terms,
];

impl SignupField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email address",
            Self::Phone => "Phone number",
            Self::State => "State",
            Self::District => "District",
            Self::Pincode => "Pincode",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Terms => "I agree to the Terms and Privacy Policy",
        }
    }

    /// The fixed message shown while this field is invalid
    pub fn error_message(&self) -> &'static str {
        match self {
            Self::Username => {
                "Username must be 4-20 characters long and contain only letters and numbers"
            }
            Self::Email => "Please enter a valid email address",
            Self::Phone => "Please enter a valid 10-digit phone number",
            Self::State => "Please select a state",
            Self::District => "Please enter your district",
            Self::Pincode => "Please enter a valid 6-digit pincode",
            Self::Password => {
                "Password must be at least 8 characters long with uppercase, lowercase, number, and special character"
            }
            Self::ConfirmPassword => "Passwords do not match",
            Self::Terms => "Please accept the Terms and Privacy Policy",
        }
    }

    /// Run this field's format validator against a raw text value.
    ///
    /// `ConfirmPassword` and `Terms` have no standalone format rule; the
    /// controller checks them against the password value and the checkbox
    /// state respectively.
    pub fn accepts(&self, raw: &str) -> bool {
        match self {
            Self::Username => validate::valid_username(raw),
            Self::Email => validate::valid_email(raw),
            Self::Phone => validate::valid_phone(raw),
            Self::State => validate::valid_state(raw),
            Self::District => validate::valid_district(raw),
            Self::Pincode => validate::valid_pincode(raw),
            Self::Password => validate::valid_password(raw),
            Self::ConfirmPassword | Self::Terms => true,
        }
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The signup form: one field per [`SignupField`] plus the submit row
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub username: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub state: FormField,
    pub district: FormField,
    pub pincode: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub terms: FormField,
    pub active_field_index: usize,
}

impl SignupForm {
    pub fn new() -> Self {
        Self {
            username: FormField::text(SignupField::Username),
            email: FormField::text(SignupField::Email),
            phone: FormField::text(SignupField::Phone),
            state: FormField::text(SignupField::State),
            district: FormField::text(SignupField::District),
            pincode: FormField::text(SignupField::Pincode),
            password: FormField::secret(SignupField::Password),
            confirm_password: FormField::secret(SignupField::ConfirmPassword),
            terms: FormField::checkbox(SignupField::Terms),
            active_field_index: 0,
        }
    }

    /// Borrow the field for a [`SignupField`]
    pub fn field(&self, name: SignupField) -> &FormField {
        match name {
            SignupField::Username => &self.username,
            SignupField::Email => &self.email,
            SignupField::Phone => &self.phone,
            SignupField::State => &self.state,
            SignupField::District => &self.district,
            SignupField::Pincode => &self.pincode,
            SignupField::Password => &self.password,
            SignupField::ConfirmPassword => &self.confirm_password,
            SignupField::Terms => &self.terms,
        }
    }

    /// Mutably borrow the field for a [`SignupField`]
    pub fn field_mut(&mut self, name: SignupField) -> &mut FormField {
        match name {
            SignupField::Username => &mut self.username,
            SignupField::Email => &mut self.email,
            SignupField::Phone => &mut self.phone,
            SignupField::State => &mut self.state,
            SignupField::District => &mut self.district,
            SignupField::Pincode => &mut self.pincode,
            SignupField::Password => &mut self.password,
            SignupField::ConfirmPassword => &mut self.confirm_password,
            SignupField::Terms => &mut self.terms,
        }
    }

    /// Current text value of a field (empty string for the checkbox)
    pub fn value_of(&self, name: SignupField) -> &str {
        self.field(name).as_text()
    }

    /// Whether the terms checkbox is checked
    pub fn terms_accepted(&self) -> bool {
        self.terms.is_checked()
    }

    /// Returns true if the submit row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == FIELD_ORDER.len()
    }
}

impl Default for SignupForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        FIELD_ORDER.len() + 1 // nine fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(FIELD_ORDER.len());
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match FIELD_ORDER.get(self.active_field_index) {
            Some(name) => self.field_mut(*name),
            // Submit row: no field of its own, hand back the checkbox
            None => &mut self.terms,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FIELD_ORDER.get(index).map(|name| self.field(*name))
    }
}
