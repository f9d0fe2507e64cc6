//! External user store contract and its in-memory implementation.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use common::{AppError, AppResult};
use domain::{User, UserId};

#[cfg(test)]
use mockall::automock;

/// External store consulted by the directory service.
///
/// The service never owns the store; it only calls `delete`.
#[cfg_attr(test, automock)]
pub trait UserDao: Send + Sync {
    /// Remove the user from storage.
    ///
    /// Returns `true` if a record was removed and `false` if none existed.
    /// Fails when the store cannot serve the call.
    fn delete(&self, user_id: UserId) -> AppResult<bool>;
}

/// Store keeping records in process memory.
#[derive(Debug, Default)]
pub struct InMemoryUserDao {
    records: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserDao {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given users (later ids overwrite earlier ones)
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let records = users.into_iter().map(|user| (user.id, user)).collect();
        Self {
            records: Mutex::new(records),
        }
    }

    /// Check whether a record with this id is stored
    pub fn contains(&self, user_id: UserId) -> AppResult<bool> {
        Ok(self.lock()?.contains_key(&user_id))
    }

    /// Number of stored records
    pub fn len(&self) -> AppResult<usize> {
        Ok(self.lock()?.len())
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> AppResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, HashMap<UserId, User>>> {
        self.records
            .lock()
            .map_err(|_| AppError::store_unavailable("user records lock poisoned"))
    }
}

impl UserDao for InMemoryUserDao {
    fn delete(&self, user_id: UserId) -> AppResult<bool> {
        let removed = self.lock()?.remove(&user_id).is_some();
        tracing::debug!(user_id, removed, "Deleted user from store");
        Ok(removed)
    }
}
