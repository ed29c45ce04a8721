// --- File: crates/services/notifier_client/src/app_state.rs ---
use std::sync::Arc;
use std::time::Duration;

use notifier_common::services::ServiceFactory;
use notifier_common::Language;
use notifier_config::AppConfig;
use notifier_firebase::PushRegistrationService;
use notifier_i18n::StringTable;
use notifier_store::PreferenceStore;
use notifier_ui::AppContext;
use tracing::warn;

/// Everything the host keeps for the lifetime of the process.
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub context: AppContext,
}

impl AppState {
    pub fn new(config: Arc<AppConfig>, factory: &dyn ServiceFactory) -> Self {
        let default_language = Language::from_code(&config.ui.default_language).unwrap_or_else(|| {
            warn!(
                code = %config.ui.default_language,
                "unknown default language, using {}",
                Language::default()
            );
            Language::default()
        });

        let store = PreferenceStore::new(factory.key_value_store()).with_default_language(default_language);
        let push = PushRegistrationService::new(
            factory.push_platform(),
            store.clone(),
            config.firebase.clone(),
        );

        let context = AppContext {
            schedule: factory.schedule_service(),
            push: Arc::new(push),
            store,
            strings: StringTable::builtin(),
            completion_delay: Duration::from_millis(config.ui.completion_delay_ms),
        };

        Self { config, context }
    }
}
