use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::UserId;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

/// Opaque bearer credential. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(..)")
    }
}

/// Success body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: AuthToken,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// A registered user as returned by `/auth/signup` and `/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl UserProfile {
    /// Full name when present, username otherwise.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.username.as_str())
    }
}

/// Local form errors, raised before any request is sent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please fill in all required fields")]
    MissingRequiredFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Body of `POST /auth/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Body of `POST /auth/signup`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Raw login form input.
#[derive(Clone, Debug, Default)]
pub struct LoginDraft {
    pub username: String,
    pub password: String,
}

impl LoginDraft {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// # Errors
    ///
    /// Returns `ValidationError::MissingFields` if either field is empty.
    pub fn validate(self) -> Result<LoginRequest, ValidationError> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        Ok(LoginRequest {
            username: self.username,
            password: self.password,
        })
    }
}

/// Raw signup form input. `full_name` is optional.
#[derive(Clone, Debug, Default)]
pub struct SignupDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl SignupDraft {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequiredFields` when username, email or
    /// password is empty, and `ValidationError::InvalidEmail` when the email
    /// does not look like `local@domain.tld`.
    pub fn validate(self) -> Result<SignupRequest, ValidationError> {
        if self.username.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingRequiredFields);
        }
        if !is_email_valid(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        let full_name = Some(self.full_name).filter(|name| !name.is_empty());
        Ok(SignupRequest {
            username: self.username,
            email: self.email,
            password: self.password,
            full_name,
        })
    }
}

#[must_use]
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
