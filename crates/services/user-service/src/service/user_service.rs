//! User service - Handles the in-memory user directory.
//!
//! SOLID (SRP): Owns the directory; deletion is delegated to the store.

use std::collections::HashMap;
use std::sync::Arc;

use common::AppResult;
use domain::{Credentials, User, UserId};

use crate::repository::UserDao;

/// User service trait for dependency injection.
pub trait UserService {
    /// Append users to the directory in the given order
    fn add(&mut self, users: Vec<User>);

    /// Read-only view of the directory in insertion order
    fn get_all(&self) -> &[User];

    /// Delete a user in the external store.
    ///
    /// The store's answer and errors are returned unchanged.
    /// The in-memory directory is not touched.
    fn delete(&self, user_id: UserId) -> AppResult<bool>;

    /// Find the first user whose username and password both match exactly.
    ///
    /// Fails with `AppError::InvalidArgument` when either value is absent.
    fn login(&self, username: Option<&str>, password: Option<&str>) -> AppResult<Option<User>>;

    /// Project the directory into a map keyed by user id (last duplicate wins)
    fn get_all_converted_by_id(&self) -> HashMap<UserId, User>;
}

/// Concrete implementation of UserService over an injected store.
pub struct UserManager {
    users: Vec<User>,
    dao: Arc<dyn UserDao>,
}

impl UserManager {
    /// Create an empty directory backed by the given store
    pub fn new(dao: Arc<dyn UserDao>) -> Self {
        Self {
            users: Vec::new(),
            dao,
        }
    }

    /// Number of users in the directory
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Check if the directory is empty
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserService for UserManager {
    fn add(&mut self, users: Vec<User>) {
        tracing::debug!(count = users.len(), "Adding users to directory");
        self.users.extend(users);
    }

    fn get_all(&self) -> &[User] {
        &self.users
    }

    fn delete(&self, user_id: UserId) -> AppResult<bool> {
        self.dao.delete(user_id)
    }

    fn login(&self, username: Option<&str>, password: Option<&str>) -> AppResult<Option<User>> {
        let credentials = Credentials::new(username, password)?;
        tracing::debug!(username = credentials.username, "Login attempt");

        Ok(self
            .users
            .iter()
            .find(|user| user.matches(&credentials))
            .cloned())
    }

    fn get_all_converted_by_id(&self) -> HashMap<UserId, User> {
        self.users
            .iter()
            .map(|user| (user.id, user.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use common::AppError;

    use super::*;
    use crate::repository::MockUserDao;

    fn ivan() -> User {
        User::of(1, "Ivan", "123")
    }

    fn petr() -> User {
        User::of(2, "Petr", "111")
    }

    fn manager_with(dao: MockUserDao) -> UserManager {
        UserManager::new(Arc::new(dao))
    }

    #[test]
    fn test_delete_returns_store_answer() {
        let mut dao = MockUserDao::new();
        dao.expect_delete()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));

        let mut manager = manager_with(dao);
        manager.add(vec![ivan()]);

        assert!(manager.delete(1).unwrap());
    }

    #[test]
    fn test_delete_returns_false_from_store() {
        let mut dao = MockUserDao::new();
        dao.expect_delete()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(false));

        let manager = manager_with(dao);

        assert!(!manager.delete(99).unwrap());
    }

    #[test]
    fn test_delete_propagates_store_failure() {
        let mut dao = MockUserDao::new();
        dao.expect_delete()
            .returning(|_| Err(AppError::store_unavailable("database is down")));

        let manager = manager_with(dao);
        let result = manager.delete(1);

        assert!(matches!(result, Err(AppError::StoreUnavailable(ref msg)) if msg == "database is down"));
    }

    #[test]
    fn test_delete_does_not_touch_directory() {
        let mut dao = MockUserDao::new();
        dao.expect_delete().returning(|_| Ok(true));

        let mut manager = manager_with(dao);
        manager.add(vec![ivan(), petr()]);
        manager.delete(1).unwrap();

        // Deletion only reaches the store; the directory keeps the record.
        assert_eq!(manager.get_all(), &[ivan(), petr()]);
    }

    #[test]
    fn test_login_with_absent_credentials_skips_store() {
        // No expectations: any store call would panic.
        let manager = manager_with(MockUserDao::new());

        assert!(matches!(manager.login(None, Some("123")), Err(AppError::InvalidArgument(_))));
        assert!(matches!(manager.login(Some("Ivan"), None), Err(AppError::InvalidArgument(_))));
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut manager = manager_with(MockUserDao::new());
        assert!(manager.is_empty());

        manager.add(vec![ivan(), petr()]);
        assert_eq!(manager.len(), 2);
        assert!(!manager.is_empty());
    }
}
