//! Login credential normalization.
//!
//! The credential check is a plain existence lookup; this module only decides
//! whether a submitted pair is complete enough to look up.

use crate::error::CoreError;

/// Message returned for both unknown users and wrong passwords.
pub const INVALID_CREDENTIALS: &str = "invalid username or password";

/// A complete username/password pair. The username is trimmed, the password is
/// taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Validate a submitted pair, rejecting missing or empty fields.
pub fn normalize_credentials(
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Credentials, CoreError> {
    let username = username.map(str::trim).unwrap_or_default();
    let password = password.unwrap_or_default();

    if username.is_empty() || password.is_empty() {
        return Err(CoreError::Validation("missing credentials".into()));
    }

    Ok(Credentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}
