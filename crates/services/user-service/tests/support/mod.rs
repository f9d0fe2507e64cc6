//! Shared test fixtures for the user service integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use common::{AppError, AppResult};
use domain::{User, UserId};
use user_service_lib::repository::UserDao;
use user_service_lib::UserManager;

pub fn ivan() -> User {
    User::of(1, "Ivan", "123")
}

pub fn petr() -> User {
    User::of(2, "Petr", "111")
}

/// Store spy: answers from a preset table (default `false`) and records
/// every id it was asked to delete. A failing spy records the call, then errors.
#[derive(Default)]
pub struct UserDaoSpy {
    answers: HashMap<UserId, bool>,
    failure: Option<fn() -> AppError>,
    calls: Mutex<Vec<UserId>>,
}

impl UserDaoSpy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answering(mut self, user_id: UserId, answer: bool) -> Self {
        self.answers.insert(user_id, answer);
        self
    }

    pub fn failing_with(mut self, make_error: fn() -> AppError) -> Self {
        self.failure = Some(make_error);
        self
    }

    pub fn calls(&self) -> Vec<UserId> {
        self.calls.lock().unwrap().clone()
    }
}

impl UserDao for UserDaoSpy {
    fn delete(&self, user_id: UserId) -> AppResult<bool> {
        self.calls.lock().unwrap().push(user_id);
        if let Some(make_error) = self.failure {
            return Err(make_error());
        }
        Ok(self.answers.get(&user_id).copied().unwrap_or(false))
    }
}

/// Fresh service wired to a spy that answers `true` for Ivan.
pub fn service_with_spy() -> (UserManager, Arc<UserDaoSpy>) {
    let spy = Arc::new(UserDaoSpy::new().answering(ivan().id, true));
    (UserManager::new(spy.clone()), spy)
}
