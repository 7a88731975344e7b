//! Signup application state and core logic

use crate::config::SignupConfig;
use crate::services::{
    AccountApi, Navigator, NewAccount, Notice, Notifier, ProfileApi, ProfileHandle, ProfileRecord,
    Route, SessionStore, SubmissionError, UserHandle,
};
use crate::state::{
    validate, FieldErrors, Form, SignupField, SignupForm, SubmitPhase, FIELD_ORDER,
};
use uuid::Uuid;

/// The one message shown for any submission failure. Step A and Step B
/// failures are not distinguished to the user; logs carry the detail.
const SIGNUP_FAILED_MESSAGE: &str =
    "Signup failed: an account with these details may already exist";

/// Result of one explicit submit call
#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Both remote steps completed; the session was recorded and
    /// navigation to home was requested
    Succeeded {
        account: UserHandle,
        profile: ProfileHandle,
    },
    /// A remote step failed; the form stays interactable
    Failed(SubmissionError),
    /// The guard refused: form invalid or a submission already in flight
    NotAttempted,
}

/// Main signup controller
///
/// Owns the form snapshot, the per-field error map, and the submission
/// phase, and drives the two-step account/profile sequence through the
/// injected service capabilities.
pub struct SignupApp {
    /// Current form field values and traversal state
    pub form: SignupForm,
    /// Per-field validation errors
    pub errors: FieldErrors,
    /// Where the current/last submission attempt stands
    pub phase: SubmitPhase,
    accounts: Box<dyn AccountApi>,
    profiles: Box<dyn ProfileApi>,
    session: Box<dyn SessionStore>,
    navigator: Box<dyn Navigator>,
    notifier: Box<dyn Notifier>,
}

impl SignupApp {
    /// Create a new controller over the given service capabilities
    pub fn new(
        accounts: Box<dyn AccountApi>,
        profiles: Box<dyn ProfileApi>,
        session: Box<dyn SessionStore>,
        navigator: Box<dyn Navigator>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        Self {
            form: SignupForm::new(),
            errors: FieldErrors::new(),
            phase: SubmitPhase::Idle,
            accounts,
            profiles,
            session,
            navigator,
            notifier,
        }
    }

    /// Reset to a fresh form, applying configured defaults
    ///
    /// Keeps the username across the reset when `remember_username` is set,
    /// and pre-selects the configured default state when it names a real
    /// option.
    pub fn reset(&mut self, config: &SignupConfig) {
        let kept_username = if config.remember_username.unwrap_or(false) {
            Some(self.form.value_of(SignupField::Username).to_string())
        } else {
            None
        };

        self.form = SignupForm::new();
        self.errors = FieldErrors::new();
        self.phase = SubmitPhase::Idle;

        if let Some(username) = kept_username.filter(|u| !u.is_empty()) {
            self.set_field(SignupField::Username, &username);
        }
        if let Some(state) = config.valid_default_state() {
            let state = state.to_string();
            self.set_field(SignupField::State, &state);
        }
    }

    /// Whether a submission is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.phase.is_in_flight()
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.is_form_valid() && !self.is_submitting()
    }

    /// Strength score of the current password, for the meter
    pub fn password_strength(&self) -> u8 {
        validate::password_strength(self.form.value_of(SignupField::Password))
    }

    /// Current error message for a field, if any
    pub fn error_for(&self, field: SignupField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Write a raw text value into a field and re-validate it.
    ///
    /// The terms checkbox takes [`Self::set_terms`] instead; text writes to
    /// it are ignored.
    pub fn set_field(&mut self, field: SignupField, raw: &str) {
        if matches!(field, SignupField::Terms) {
            return;
        }
        self.form.field_mut(field).set_text(raw.to_string());
        self.revalidate(field);
    }

    /// Set the terms checkbox
    pub fn set_terms(&mut self, checked: bool) {
        self.form.field_mut(SignupField::Terms).set_checked(checked);
    }

    /// Append a character to the active field (space toggles the checkbox)
    pub fn input_char(&mut self, c: char) {
        let Some(field) = FIELD_ORDER.get(self.form.active_field()).copied() else {
            return; // submit row
        };
        if matches!(field, SignupField::Terms) {
            if c == ' ' {
                self.form.field_mut(field).toggle();
            }
            return;
        }
        self.form.field_mut(field).push_char(c);
        self.revalidate(field);
    }

    /// Remove the last character of the active field
    pub fn backspace(&mut self) {
        let Some(field) = FIELD_ORDER.get(self.form.active_field()).copied() else {
            return;
        };
        self.form.field_mut(field).pop_char();
        self.revalidate(field);
    }

    /// Re-run validation for one field, updating the error map.
    ///
    /// Password edits also re-check the confirmation against the new value;
    /// that is the only cross-field dependency.
    fn revalidate(&mut self, field: SignupField) {
        match field {
            SignupField::Terms => {}
            SignupField::ConfirmPassword => self.check_confirmation(false),
            SignupField::Password => {
                self.apply_format_rule(field);
                self.check_confirmation(true);
            }
            _ => self.apply_format_rule(field),
        }
    }

    /// Set or clear a field's error per its format validator
    fn apply_format_rule(&mut self, field: SignupField) {
        if field.accepts(self.form.value_of(field)) {
            self.errors.clear(field);
        } else {
            self.errors.set(field, field.error_message());
        }
    }

    /// Compare the confirmation against the current password.
    ///
    /// When triggered by a password edit, an empty confirmation is left
    /// untouched; editing the confirmation itself always compares.
    fn check_confirmation(&mut self, from_password_edit: bool) {
        let password = self.form.value_of(SignupField::Password);
        let confirm = self.form.value_of(SignupField::ConfirmPassword);
        let mismatch = if from_password_edit {
            !confirm.is_empty() && confirm != password
        } else {
            confirm != password
        };
        if mismatch {
            self.errors.set(
                SignupField::ConfirmPassword,
                SignupField::ConfirmPassword.error_message(),
            );
        } else {
            self.errors.clear(SignupField::ConfirmPassword);
        }
    }

    /// Aggregate validity: every field passes its validator, the passwords
    /// match, the terms are accepted, and no error is outstanding.
    ///
    /// Recomputed from scratch on every call; the inputs are cheap and a
    /// cached value could go stale.
    pub fn is_form_valid(&self) -> bool {
        self.errors.is_empty()
            && validate::valid_username(self.form.value_of(SignupField::Username))
            && validate::valid_email(self.form.value_of(SignupField::Email))
            && validate::valid_phone(self.form.value_of(SignupField::Phone))
            && validate::valid_state(self.form.value_of(SignupField::State))
            && validate::valid_district(self.form.value_of(SignupField::District))
            && validate::valid_pincode(self.form.value_of(SignupField::Pincode))
            && validate::valid_password(self.form.value_of(SignupField::Password))
            && self.form.value_of(SignupField::Password)
                == self.form.value_of(SignupField::ConfirmPassword)
            && self.form.terms_accepted()
    }

    /// Run the two-step submission sequence.
    ///
    /// Step A creates the account; Step B uploads the profile for the new
    /// account id. Step B only runs after Step A succeeds, and a Step B
    /// failure does not roll the account back. On full success the session
    /// is recorded and navigation to home is requested. Remote failures
    /// never escape this method; the phase always leaves `Submitting`.
    pub async fn submit(&mut self) -> SubmissionOutcome {
        if self.is_submitting() {
            tracing::warn!("submit ignored: a submission is already in flight");
            return SubmissionOutcome::NotAttempted;
        }
        if !self.is_form_valid() {
            tracing::debug!("submit ignored: form is not valid");
            return SubmissionOutcome::NotAttempted;
        }

        // Numeric conversion happens before any remote call; a failure here
        // becomes a field error, not a submission error.
        let profile = match ProfileRecord::from_form(&self.form) {
            Ok(profile) => profile,
            Err(field) => {
                self.errors.set(field, field.error_message());
                return SubmissionOutcome::NotAttempted;
            }
        };
        let account = NewAccount::from_form(&self.form);

        let attempt_id = Uuid::new_v4();
        self.phase = SubmitPhase::Submitting;
        tracing::info!(%attempt_id, username = %account.name, "starting signup");

        let user = match self.accounts.create_account(account).await {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(%attempt_id, error = %e, "account creation failed");
                return self.fail(e.into());
            }
        };

        let stored = match self.profiles.upload_profile(&user.id, profile).await {
            Ok(stored) => stored,
            Err(e) => {
                // The Step-A account stays behind remotely; there is no
                // compensating delete.
                tracing::warn!(
                    %attempt_id,
                    user_id = %user.id,
                    error = %e,
                    "profile upload failed"
                );
                return self.fail(e.into());
            }
        };

        self.session.record_session(&user, &stored);
        self.notifier.notify(
            Notice::Success,
            &format!(
                "Welcome, {}! Your account has been created successfully.",
                user.name
            ),
        );
        self.navigator.navigate_to(Route::Home);

        self.phase = SubmitPhase::Succeeded;
        tracing::info!(%attempt_id, user_id = %user.id, "signup completed");

        SubmissionOutcome::Succeeded {
            account: user,
            profile: stored,
        }
    }

    /// Record a failed attempt and surface the generic notification
    fn fail(&mut self, error: SubmissionError) -> SubmissionOutcome {
        self.phase = SubmitPhase::Failed;
        self.notifier.notify(Notice::Error, SIGNUP_FAILED_MESSAGE);
        SubmissionOutcome::Failed(error)
    }
}
