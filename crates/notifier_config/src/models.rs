// --- File: crates/notifier_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- Remote API Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub base_url: String, // e.g. http://localhost:5000/api, override via NOTIFIER__API__BASE_URL
    /// Request timeout in seconds. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
            timeout_secs: None,
        }
    }
}

// --- Firebase Config ---
// Holds the public web-push settings. Nothing in here is a secret.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FirebaseConfig {
    pub project_id: String,
    #[serde(default)]
    pub messaging_sender_id: String,
    #[serde(default)]
    pub vapid_key: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default = "default_badge")]
    pub badge: String,
    #[serde(default = "default_click_url")]
    pub click_url: String,
}

fn default_icon() -> String {
    "/icon-192.png".to_string()
}

fn default_badge() -> String {
    "/badge-72.png".to_string()
}

fn default_click_url() -> String {
    "/".to_string()
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            project_id: "schedule-notifier".to_string(),
            messaging_sender_id: String::new(),
            vapid_key: String::new(),
            icon: default_icon(),
            badge: default_badge(),
            click_url: default_click_url(),
        }
    }
}

// --- Local Storage Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StorageConfig {
    pub path: String, // JSON file backing the preference store
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "notifier-prefs.json".to_string(),
        }
    }
}

// --- UI Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct UiConfig {
    /// How long the onboarding "welcome" screen stays up before Home is shown.
    #[serde(default = "default_completion_delay_ms")]
    pub completion_delay_ms: u64,
    /// Language used when nothing is stored yet ("he" or "en").
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_completion_delay_ms() -> u64 {
    2000
}

fn default_language() -> String {
    "he".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            completion_delay_ms: default_completion_delay_ms(),
            default_language: default_language(),
        }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_directory")]
    pub directory: String,
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_directory() -> String {
    "logs".to_string()
}

fn default_file_prefix() -> String {
    "notifier-client.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            directory: default_directory(),
            file_prefix: default_file_prefix(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub firebase: FirebaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
