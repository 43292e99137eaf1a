//! Username type
//!
//! Account owner name, validated at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::limits::DEFAULT_MIN_USERNAME_LENGTH;

/// Errors that can occur when creating a Username
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameError {
    #[error("username is required")]
    Missing,

    #[error("username must be at least {minimum} characters (got {length})")]
    TooShort { length: usize, minimum: usize },
}

/// Username of an account holder.
///
/// # Invariants
/// - At least the configured minimum number of characters (7 by default)
///
/// Length is counted in characters, not bytes. The value is stored as given,
/// without trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Create a username with the default minimum length.
    pub fn new(value: impl Into<String>) -> Result<Self, UsernameError> {
        Self::with_min_length(value, DEFAULT_MIN_USERNAME_LENGTH)
    }

    /// Create a username requiring at least `minimum` characters.
    pub fn with_min_length(value: impl Into<String>, minimum: usize) -> Result<Self, UsernameError> {
        let value = value.into();
        let length = value.chars().count();

        if length == 0 {
            return Err(UsernameError::Missing);
        }

        if length < minimum {
            return Err(UsernameError::TooShort { length, minimum });
        }

        Ok(Self(value))
    }

    /// Validate an optional username, treating `None` as missing.
    pub fn from_optional(value: Option<String>, minimum: usize) -> Result<Self, UsernameError> {
        match value {
            Some(value) => Self::with_min_length(value, minimum),
            None => Err(UsernameError::Missing),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Username {
    type Error = UsernameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Username::new(value)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}
