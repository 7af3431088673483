//! Process-level configuration read from the environment

use std::env;

/// Environment variable naming the deployment environment
pub const ENVIRONMENT_VAR: &str = "CHARTWISE_ENV";

const DEFAULT_ENVIRONMENT: &str = "development";

/// Current environment name (e.g. `production`, `development`)
pub fn get_environment() -> String {
    env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string())
}

pub fn is_production() -> bool {
    matches!(get_environment().as_str(), "production" | "prod")
}
