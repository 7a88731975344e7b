//! Service-boundary payload and handle types

use crate::state::{SignupField, SignupForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity and credential payload for account creation (Step A)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

impl NewAccount {
    /// Snapshot the identity fields of the form as typed
    pub fn from_form(form: &SignupForm) -> Self {
        Self {
            name: form.value_of(SignupField::Username).to_string(),
            email: form.value_of(SignupField::Email).to_string(),
            phone: form.value_of(SignupField::Phone).to_string(),
            password: form.value_of(SignupField::Password).to_string(),
        }
    }
}

/// Demographic payload for profile upload (Step B)
///
/// Phone and pincode are numeric at this boundary. The conversion from the
/// form's raw strings happens in [`ProfileRecord::from_form`], before any
/// remote call is issued; a malformed value never reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    pub phone: u64,
    pub state: String,
    pub district: String,
    pub pincode: u32,
}

impl ProfileRecord {
    /// Build the profile payload from the form, converting the numeric
    /// fields explicitly.
    ///
    /// Returns the offending field when phone or pincode does not parse,
    /// so the caller can surface it as a field error instead of a failed
    /// remote call.
    pub fn from_form(form: &SignupForm) -> Result<Self, SignupField> {
        let phone = form
            .value_of(SignupField::Phone)
            .parse::<u64>()
            .map_err(|_| SignupField::Phone)?;
        let pincode = form
            .value_of(SignupField::Pincode)
            .parse::<u32>()
            .map_err(|_| SignupField::Pincode)?;

        Ok(Self {
            name: form.value_of(SignupField::Username).to_string(),
            email: form.value_of(SignupField::Email).to_string(),
            phone,
            state: form.value_of(SignupField::State).to_string(),
            district: form.value_of(SignupField::District).to_string(),
            pincode,
        })
    }
}

/// Opaque identity of a created account, as returned by the account service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserHandle {
    pub id: String,
    pub name: String,
    pub email: String,
    pub registered_at: DateTime<Utc>,
}

/// Handle of a stored profile document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileHandle {
    pub id: String,
}

/// Navigation targets the signup flow can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Signup,
    Terms,
}

/// Notification kinds for user-visible feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_form() -> SignupForm {
        let mut form = SignupForm::new();
        form.field_mut(SignupField::Username).set_text("Alice2024".into());
        form.field_mut(SignupField::Email).set_text("a@b.com".into());
        form.field_mut(SignupField::Phone).set_text("9876543210".into());
        form.field_mut(SignupField::State).set_text("Goa".into());
        form.field_mut(SignupField::District).set_text("North Goa".into());
        form.field_mut(SignupField::Pincode).set_text("403001".into());
        form.field_mut(SignupField::Password).set_text("Abcdef1!".into());
        form.field_mut(SignupField::ConfirmPassword)
            .set_text("Abcdef1!".into());
        form.field_mut(SignupField::Terms).set_checked(true);
        form
    }

    #[test]
    fn test_new_account_snapshots_identity_fields() {
        let account = NewAccount::from_form(&filled_form());
        assert_eq!(account.name, "Alice2024");
        assert_eq!(account.email, "a@b.com");
        assert_eq!(account.phone, "9876543210");
        assert_eq!(account.password, "Abcdef1!");
    }

    #[test]
    fn test_profile_record_converts_numeric_fields() {
        let profile = ProfileRecord::from_form(&filled_form()).unwrap();
        assert_eq!(profile.phone, 9_876_543_210);
        assert_eq!(profile.pincode, 403_001);
        assert_eq!(profile.state, "Goa");
        assert_eq!(profile.district, "North Goa");
    }

    #[test]
    fn test_profile_record_reports_bad_phone() {
        let mut form = filled_form();
        form.field_mut(SignupField::Phone).set_text("98765-3210".into());
        assert_eq!(ProfileRecord::from_form(&form), Err(SignupField::Phone));
    }

    #[test]
    fn test_profile_record_reports_bad_pincode() {
        let mut form = filled_form();
        form.field_mut(SignupField::Pincode).set_text("forty".into());
        assert_eq!(ProfileRecord::from_form(&form), Err(SignupField::Pincode));
    }

    #[test]
    fn test_handles_serialize_roundtrip() {
        let handle = UserHandle {
            id: "u-1".to_string(),
            name: "Alice2024".to_string(),
            email: "a@b.com".to_string(),
            registered_at: Utc::now(),
        };
        let json = serde_json::to_string(&handle).unwrap();
        let parsed: UserHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, handle);
    }
}
