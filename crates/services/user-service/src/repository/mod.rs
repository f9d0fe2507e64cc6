//! Repository layer for data access.

mod user_dao;

pub use user_dao::{InMemoryUserDao, UserDao};

#[cfg(test)]
pub use user_dao::MockUserDao;
