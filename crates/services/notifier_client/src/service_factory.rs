// --- File: crates/services/notifier_client/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Builds the concrete services from the loaded configuration: the REST client, the
//! console push platform and the preference store.

use std::sync::Arc;

use notifier_api::ApiClient;
use notifier_common::services::{KeyValueStore, PushPlatform, ScheduleService, ServiceFactory};
use notifier_common::NotifierError;
use notifier_config::AppConfig;
use notifier_firebase::ConsolePlatform;
use notifier_store::open_store;
use tracing::info;

pub struct NotifierServiceFactory {
    schedule: Arc<ApiClient>,
    platform: Arc<ConsolePlatform>,
    store: Arc<dyn KeyValueStore>,
}

impl NotifierServiceFactory {
    pub fn new(config: &AppConfig) -> Result<Self, NotifierError> {
        let schedule = ApiClient::new(&config.api)?;
        info!(base_url = %schedule.base_url(), "schedule backend configured");

        let store = open_store(&config.storage)?;
        let platform = ConsolePlatform::new(&config.firebase);

        Ok(Self {
            schedule: Arc::new(schedule),
            platform: Arc::new(platform),
            store,
        })
    }
}

impl ServiceFactory for NotifierServiceFactory {
    fn schedule_service(&self) -> Arc<dyn ScheduleService> {
        self.schedule.clone()
    }

    fn push_platform(&self) -> Arc<dyn PushPlatform> {
        self.platform.clone()
    }

    fn key_value_store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }
}
