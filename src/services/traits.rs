//! Capability traits the signup controller consumes
//!
//! Every external collaborator is injected behind one of these traits so
//! controllers can be tested against mocks. Concrete implementations
//! (HTTP clients, the session store, the router, the toast host) live in
//! the embedding application.

use super::error::{AccountError, ProfileError};
use super::types::{NewAccount, Notice, ProfileHandle, ProfileRecord, Route, UserHandle};
use async_trait::async_trait;

/// Account-creation service (Step A of the submission sequence)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Create an account from identity and credential data, returning an
    /// opaque user handle
    async fn create_account(&mut self, account: NewAccount) -> Result<UserHandle, AccountError>;
}

/// Profile-upload service (Step B of the submission sequence)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// Store the demographic profile for a created account, returning the
    /// stored-document handle
    async fn upload_profile(
        &mut self,
        user_id: &str,
        profile: ProfileRecord,
    ) -> Result<ProfileHandle, ProfileError>;
}

/// Global session store written once signup fully succeeds
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore: Send + Sync {
    fn record_session(&mut self, account: &UserHandle, profile: &ProfileHandle);
}

/// Route navigation requested by the signup flow
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn navigate_to(&mut self, route: Route);
}

/// User-visible success/error notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&mut self, kind: Notice, message: &str);
}
