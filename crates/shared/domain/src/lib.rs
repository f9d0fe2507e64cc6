//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The user directory service and its store share these types.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{Credentials, User, UserId};
