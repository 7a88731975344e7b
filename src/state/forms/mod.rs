//! Form domain layer
//!
//! Type-safe field state, pure validators, and the per-field error map
//! backing the signup form.

mod errors;
mod field;
mod signup_form;
pub mod validate;

pub use errors::FieldErrors;
pub use field::{FieldValue, FormField};
pub use signup_form::{Form, SignupField, SignupForm, FIELD_ORDER};
