use std::sync::Arc;
use std::time::Duration;

use notifier_common::services::ScheduleService;
use notifier_firebase::PushRegistrationService;
use notifier_i18n::StringTable;
use notifier_store::PreferenceStore;

/// Handles to every collaborator the flows use, built once by the host.
#[derive(Clone)]
pub struct AppContext {
    pub schedule: Arc<dyn ScheduleService>,
    pub push: Arc<PushRegistrationService>,
    pub store: PreferenceStore,
    pub strings: StringTable,
    /// How long the onboarding "done" screen stays up before Home takes over.
    pub completion_delay: Duration,
}
