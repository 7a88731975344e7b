//! Registration form core for the RentWheels vehicle-rental client
//!
//! Field-level validation, aggregate form validity, and the two-step
//! account/profile submission sequence, independent of any frontend.
//! Rendering, routing, and the concrete service clients are supplied by
//! the embedding application through the capability traits in
//! [`services`].

mod app;
mod config;
mod services;
mod state;

pub use app::{SignupApp, SubmissionOutcome};
pub use config::SignupConfig;
pub use services::{
    AccountApi, AccountError, Navigator, NewAccount, Notice, Notifier, ProfileApi, ProfileError,
    ProfileHandle, ProfileRecord, Route, SessionStore, SubmissionError, UserHandle,
};
pub use state::{
    validate, FieldErrors, FieldValue, Form, FormField, SignupField, SignupForm, SubmitPhase,
    FIELD_ORDER,
};
