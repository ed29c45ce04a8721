//! Environment variable naming for the notifier client.
//!
//! Configuration values can be overridden with variables of the form
//! `NOTIFIER__SECTION__KEY`, e.g. `NOTIFIER__API__BASE_URL`. The prefix itself
//! can be changed with the `PREFIX` variable.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "NOTIFIER";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "api.base_url")
///
/// # Returns
///
/// The environment variable name (e.g., "NOTIFIER__API__BASE_URL")
pub fn config_path_to_env_var(path: &str) -> String {
    let prefix = get_config_prefix();
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Name of the active run environment (`debug` unless `RUN_ENV` says otherwise).
pub fn run_env() -> String {
    env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(
            config_path_to_env_var("api.base_url"),
            "NOTIFIER__API__BASE_URL"
        );
        assert_eq!(
            config_path_to_env_var("ui.completion_delay_ms"),
            "NOTIFIER__UI__COMPLETION_DELAY_MS"
        );
    }
}
