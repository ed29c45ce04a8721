//! In-memory collaborators for flow and controller tests.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use notifier_common::models::{
    ClassRef, DeviceRegistration, ScheduleChange, Subject, TeacherPreferences, UserRecord,
};
use notifier_common::services::{BoxFuture, ScheduleService};
use notifier_common::{Language, NotifierError};
use notifier_config::FirebaseConfig;
use notifier_firebase::testing::FakePushPlatform;
use notifier_firebase::PushRegistrationService;
use notifier_i18n::StringTable;
use notifier_store::{MemoryStore, PreferenceStore};

use crate::context::AppContext;

type Reply<T> = Mutex<Result<T, NotifierError>>;

/// Scriptable backend that records every request as `"METHOD /path"`.
pub struct FakeSchedule {
    pub classes: Reply<Vec<ClassRef>>,
    pub subjects: Reply<Vec<Subject>>,
    pub user: Reply<UserRecord>,
    pub changes: Reply<Vec<ScheduleChange>>,
    pub register: Reply<bool>,
    pub update: Reply<()>,
    pub test_notification: Reply<bool>,
    pub calls: Mutex<Vec<String>>,
    pub registrations: Mutex<Vec<DeviceRegistration>>,
    pub updates: Mutex<Vec<(String, TeacherPreferences, Language)>>,
}

impl Default for FakeSchedule {
    fn default() -> Self {
        Self {
            classes: Mutex::new(Ok(vec![
                ClassRef::new("10A", "10A"),
                ClassRef::new("11B", "11B"),
            ])),
            subjects: Mutex::new(Ok(vec![
                Subject::new("Math", &["T1", "T2"]),
                Subject::new("English", &["T3"]),
            ])),
            user: Mutex::new(Err(NotifierError::HttpStatus(404))),
            changes: Mutex::new(Ok(Vec::new())),
            register: Mutex::new(Ok(true)),
            update: Mutex::new(Ok(())),
            test_notification: Mutex::new(Ok(true)),
            calls: Mutex::new(Vec::new()),
            registrations: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }
}

impl FakeSchedule {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn reply<T>(slot: &Reply<T>, value: Result<T, NotifierError>) {
        *slot.lock().unwrap() = value;
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ScheduleService for FakeSchedule {
    fn get_classes(&self) -> BoxFuture<'_, Vec<ClassRef>, NotifierError> {
        Box::pin(async move {
            self.record("GET /classes".into());
            self.classes.lock().unwrap().clone()
        })
    }

    fn get_schedule<'a>(&'a self, class_id: &'a str) -> BoxFuture<'a, Vec<Subject>, NotifierError> {
        Box::pin(async move {
            self.record(format!("GET /schedule/{}", class_id));
            self.subjects.lock().unwrap().clone()
        })
    }

    fn get_user<'a>(&'a self, device_token: &'a str) -> BoxFuture<'a, UserRecord, NotifierError> {
        Box::pin(async move {
            self.record(format!("GET /user/{}", device_token));
            self.user.lock().unwrap().clone()
        })
    }

    fn get_changes<'a>(
        &'a self,
        class_id: &'a str,
    ) -> BoxFuture<'a, Vec<ScheduleChange>, NotifierError> {
        Box::pin(async move {
            self.record(format!("GET /changes/{}", class_id));
            self.changes.lock().unwrap().clone()
        })
    }

    fn get_live_changes<'a>(
        &'a self,
        class_id: &'a str,
    ) -> BoxFuture<'a, Vec<ScheduleChange>, NotifierError> {
        Box::pin(async move {
            self.record(format!("GET /changes/live/{}", class_id));
            self.changes.lock().unwrap().clone()
        })
    }

    fn register<'a>(
        &'a self,
        registration: &'a DeviceRegistration,
    ) -> BoxFuture<'a, bool, NotifierError> {
        Box::pin(async move {
            self.record("POST /register".into());
            self.registrations.lock().unwrap().push(registration.clone());
            self.register.lock().unwrap().clone()
        })
    }

    fn update_preferences<'a>(
        &'a self,
        device_token: &'a str,
        preferences: &'a TeacherPreferences,
        language: Language,
    ) -> BoxFuture<'a, (), NotifierError> {
        Box::pin(async move {
            self.record("PUT /preferences".into());
            self.updates.lock().unwrap().push((
                device_token.to_string(),
                preferences.clone(),
                language,
            ));
            self.update.lock().unwrap().clone()
        })
    }

    fn send_test_notification<'a>(
        &'a self,
        _device_token: &'a str,
        _title: &'a str,
        _body: &'a str,
    ) -> BoxFuture<'a, bool, NotifierError> {
        Box::pin(async move {
            self.record("POST /test-notification".into());
            self.test_notification.lock().unwrap().clone()
        })
    }
}

/// A context over fresh in-memory state and a zero completion delay.
pub fn context(schedule: Arc<FakeSchedule>, platform: FakePushPlatform) -> (AppContext, Arc<FakePushPlatform>) {
    let platform = Arc::new(platform);
    let store = PreferenceStore::new(Arc::new(MemoryStore::new()));
    let push = Arc::new(PushRegistrationService::new(
        platform.clone(),
        store.clone(),
        FirebaseConfig::default(),
    ));
    let ctx = AppContext {
        schedule,
        push,
        store,
        strings: StringTable::builtin(),
        completion_delay: Duration::ZERO,
    };
    (ctx, platform)
}

/// A store that already finished onboarding for class 10A.
pub fn register(ctx: &AppContext, token: &str, preferences: &TeacherPreferences) {
    ctx.store.save_device_token(token).unwrap();
    ctx.store
        .save_registration(&ClassRef::new("10A", "10A"), preferences)
        .unwrap();
}
