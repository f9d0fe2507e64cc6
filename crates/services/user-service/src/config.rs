//! User service configuration.

use std::env;
use std::path::PathBuf;

use common::ServiceConfig;

/// Default seed file, relative to the working directory
pub const DEFAULT_SEED_FILE: &str = "users.json";

/// User service configuration.
#[derive(Debug, Clone)]
pub struct UserServiceConfig {
    /// Service name and log filter
    pub service: ServiceConfig,
    /// JSON file the directory and store are seeded from
    pub seed_file: PathBuf,
}

impl UserServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(filter) = env::var("USER_SERVICE_LOG").or_else(|_| env::var("RUST_LOG")) {
            config.service.log_level = filter;
        }
        if let Ok(path) = env::var("USER_SERVICE_SEED_FILE") {
            config.seed_file = PathBuf::from(path);
        }

        config
    }

    /// Replace the seed file (CLI flag overrides the environment)
    pub fn with_seed_file(mut self, seed_file: impl Into<PathBuf>) -> Self {
        self.seed_file = seed_file.into();
        self
    }
}

impl Default for UserServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig::named("user-service"),
            seed_file: PathBuf::from(DEFAULT_SEED_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = UserServiceConfig::default();

        assert_eq!(config.service.service_name, "user-service");
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.seed_file, PathBuf::from("users.json"));
    }

    #[test]
    fn test_with_seed_file_overrides_path() {
        let config = UserServiceConfig::default().with_seed_file("/tmp/seed.json");

        assert_eq!(config.seed_file, PathBuf::from("/tmp/seed.json"));
    }
}
