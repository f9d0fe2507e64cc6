//! User Service Library
//!
//! This crate provides an in-memory user directory backed by an external
//! user store. It can be driven from the `user-service` binary or embedded
//! in other programs through [`UserManager`].

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;

use tracing::info;

use common::AppResult;
use domain::{User, UserId};

use crate::config::UserServiceConfig;
use crate::repository::InMemoryUserDao;
pub use crate::service::{UserManager, UserService};

/// Directory command type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryCommand {
    List,
    Login {
        username: Option<String>,
        password: Option<String>,
    },
    ById,
    Delete {
        id: UserId,
    },
}

/// Build a directory whose users are also held by a fresh in-memory store.
pub fn build_directory(users: Vec<User>) -> UserManager {
    let dao = Arc::new(InMemoryUserDao::with_users(users.iter().cloned()));
    let mut manager = UserManager::new(dao);
    manager.add(users);
    manager
}

/// Load the seed file named by the configuration into a fresh directory.
pub fn load_directory(config: &UserServiceConfig) -> AppResult<UserManager> {
    let users = infra::load_seed(&config.seed_file)?;
    Ok(build_directory(users))
}

/// Run one directory command, writing its result to `out`.
pub fn run_command(
    command: DirectoryCommand,
    config: &UserServiceConfig,
    out: &mut impl Write,
) -> AppResult<()> {
    let manager = load_directory(config)?;
    info!("Directory ready with {} users", manager.len());

    match command {
        DirectoryCommand::List => {
            for user in manager.get_all() {
                writeln!(out, "{}", serde_json::to_string(user)?)?;
            }
        }
        DirectoryCommand::Login { username, password } => {
            match manager.login(username.as_deref(), password.as_deref())? {
                Some(user) => writeln!(out, "{}", serde_json::to_string(&user)?)?,
                None => writeln!(out, "no matching user")?,
            }
        }
        DirectoryCommand::ById => {
            let by_id: BTreeMap<UserId, User> =
                manager.get_all_converted_by_id().into_iter().collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&by_id)?)?;
        }
        DirectoryCommand::Delete { id } => {
            let deleted = manager.delete(id)?;
            info!("Delete of user {} returned {}", id, deleted);
            writeln!(out, "{}", deleted)?;
        }
    }

    Ok(())
}
