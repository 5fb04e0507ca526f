//! Demo sign-in
//!
//! Any non-empty username/password pair is accepted. The username "admin"
//! (any case) signs in as staff, everything else as a student. This is a
//! mock, not an access control.

use crate::error::ValidationError;
use crate::session::{Role, SessionContext};
use tracing::{info, warn};

/// Username that selects the staff role.
pub const STAFF_USERNAME: &str = "admin";

/// Contents of the login form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Role granted to a submitted form.
pub fn role_for(form: &LoginForm) -> Result<Role, ValidationError> {
    if form.username.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    if form.username.eq_ignore_ascii_case(STAFF_USERNAME) {
        Ok(Role::Staff)
    } else {
        Ok(Role::Student)
    }
}

/// Validate the form and switch the session to the granted role.
///
/// On rejection the session is left untouched.
pub fn sign_in(session: &mut SessionContext, form: &LoginForm) -> Result<Role, ValidationError> {
    match role_for(form) {
        Ok(role) => {
            session.set_role(role);
            info!(username = %form.username, role = %role, "signed in");
            Ok(role)
        }
        Err(err) => {
            warn!(error = %err, "sign-in rejected");
            Err(err)
        }
    }
}
