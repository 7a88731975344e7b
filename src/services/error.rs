//! Service error taxonomy

use thiserror::Error;

/// Failures from the account-creation service (Step A)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("An account with this email or phone already exists")]
    AlreadyExists,

    #[error("Account creation rejected: {0}")]
    Rejected(String),

    #[error("Account service unreachable: {0}")]
    Transport(String),
}

/// Failures from the profile-upload service (Step B)
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("Profile upload rejected: {0}")]
    Rejected(String),

    #[error("Profile service unreachable: {0}")]
    Transport(String),
}

/// A submission attempt failed in one of its two remote steps.
///
/// Which step failed is visible here and in the logs, but the user-facing
/// notification stays undifferentiated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AccountError::AlreadyExists.to_string(),
            "An account with this email or phone already exists"
        );
        assert_eq!(
            ProfileError::Transport("timeout".to_string()).to_string(),
            "Profile service unreachable: timeout"
        );
    }

    #[test]
    fn test_submission_error_is_transparent() {
        let err: SubmissionError = AccountError::AlreadyExists.into();
        assert_eq!(
            err.to_string(),
            "An account with this email or phone already exists"
        );
        let err: SubmissionError = ProfileError::Rejected("bad pincode".to_string()).into();
        assert_eq!(err.to_string(), "Profile upload rejected: bad pincode");
    }
}
