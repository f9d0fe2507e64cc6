//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Externally assigned user identifier
pub type UserId = i32;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Plaintext; compared verbatim on login
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create a new user record
    pub fn new(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Shorthand for [`User::new`]
    pub fn of(id: UserId, username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::new(id, username, password)
    }

    /// Check whether both credentials match exactly (case-sensitive)
    pub fn matches(&self, credentials: &Credentials<'_>) -> bool {
        self.username == credentials.username && self.password == credentials.password
    }
}

/// Login credentials, guaranteed to carry both values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> Credentials<'a> {
    /// Build credentials from possibly absent values.
    ///
    /// Fails with [`DomainError::InvalidArgument`] when either value is absent.
    /// Empty strings are accepted as given.
    pub fn new(username: Option<&'a str>, password: Option<&'a str>) -> DomainResult<Self> {
        match (username, password) {
            (Some(username), Some(password)) => Ok(Self { username, password }),
            _ => Err(DomainError::invalid_argument("username or password is missing")),
        }
    }
}
