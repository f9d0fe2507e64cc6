//! Seed file loading.
//!
//! A seed file is a JSON array of `{ "id", "username", "password" }` objects.

use std::fs;
use std::path::Path;

use common::AppResult;
use domain::User;

/// Read and parse a seed file.
pub fn load_seed(path: impl AsRef<Path>) -> AppResult<Vec<User>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let users = parse_seed(&raw)?;
    tracing::info!("Loaded {} users from {}", users.len(), path.display());
    Ok(users)
}

/// Parse seed JSON, keeping the file order.
pub fn parse_seed(raw: &str) -> AppResult<Vec<User>> {
    Ok(serde_json::from_str(raw)?)
}
