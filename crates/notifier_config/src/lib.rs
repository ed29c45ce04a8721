//! Configuration for the schedule notifier client.
//!
//! Values are layered the same way on every start:
//!
//! 1. `config/default.toml`
//! 2. `config/{RUN_ENV}.toml` (optional, `RUN_ENV` defaults to `debug`)
//! 3. `NOTIFIER__*` environment variables (see [`env_vars`])
//!
//! A `.env` file is loaded once before any of this happens.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Loads the configuration from the directory named by `CONFIG_DIR`, or `./config`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));
    load_config_from(&config_dir)
}

/// Loads the configuration from an explicit directory.
///
/// Missing files are not an error; every field has a default.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let run_env = env_vars::run_env();
    let prefix = env_vars::get_config_prefix();

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    debug!(
        default = %default_path.display(),
        env = %env_path.display(),
        base_url_override = %env_vars::config_path_to_env_var("api.base_url"),
        "loading configuration"
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(&prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is taken from `DOTENV_OVERRIDE`, else from the first command line
/// argument if it starts with `.env`, else `.env`. Loading happens at most once
/// per process; a missing file is ignored.
///
/// Returns the path that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_directory_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope")).unwrap();

        assert_eq!(config.ui.completion_delay_ms, 2000);
        assert_eq!(config.ui.default_language, "he");
        assert_eq!(config.firebase.icon, "/icon-192.png");
        assert_eq!(config.firebase.badge, "/badge-72.png");
        assert!(config.api.timeout_secs.is_none());
    }

    #[test]
    fn test_default_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            r#"
[api]
base_url = "https://school.example/api"

[ui]
completion_delay_ms = 10
default_language = "en"
"#,
        )
        .unwrap();

        let config = load_config_from(dir.path()).unwrap();
        assert_eq!(config.api.base_url, "https://school.example/api");
        assert_eq!(config.ui.completion_delay_ms, 10);
        assert_eq!(config.ui.default_language, "en");
        // untouched sections keep their defaults
        assert_eq!(config.storage.path, "notifier-prefs.json");
    }
}
