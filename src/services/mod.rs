//! External service capabilities
//!
//! Contracts for the collaborators the signup core depends on, plus the
//! payload types crossing those boundaries.

mod error;
mod traits;
mod types;

pub use error::{AccountError, ProfileError, SubmissionError};
pub use traits::{AccountApi, Navigator, Notifier, ProfileApi, SessionStore};
pub use types::{NewAccount, Notice, ProfileHandle, ProfileRecord, Route, UserHandle};

#[cfg(test)]
pub use traits::{
    MockAccountApi, MockNavigator, MockNotifier, MockProfileApi, MockSessionStore,
};
