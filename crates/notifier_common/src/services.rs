//! Service abstractions for the collaborators of the view layer.
//!
//! The flows never talk to reqwest, the push platform or the file system directly.
//! They receive `Arc<dyn ...>` handles to these traits, so tests can swap in
//! in-memory fakes and the host binary can wire in the real implementations.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::NotifierError;
use crate::models::{
    ClassRef, DeviceRegistration, PermissionStatus, ScheduleChange, Subject, SystemNotification,
    TeacherPreferences, UserRecord,
};
use notifier_i18n::Language;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// The remote schedule service (REST backend).
///
/// Every method issues exactly one request. Non-2xx responses surface as
/// [`NotifierError::HttpStatus`]; nothing is retried or cached.
pub trait ScheduleService: Send + Sync {
    /// `GET /classes`
    fn get_classes(&self) -> BoxFuture<'_, Vec<ClassRef>, NotifierError>;

    /// `GET /schedule/{class_id}`: subjects and their teachers.
    fn get_schedule<'a>(&'a self, class_id: &'a str) -> BoxFuture<'a, Vec<Subject>, NotifierError>;

    /// `GET /user/{device_token}`
    fn get_user<'a>(&'a self, device_token: &'a str) -> BoxFuture<'a, UserRecord, NotifierError>;

    /// `GET /changes/{class_id}`: changes recorded by the backend.
    fn get_changes<'a>(
        &'a self,
        class_id: &'a str,
    ) -> BoxFuture<'a, Vec<ScheduleChange>, NotifierError>;

    /// `GET /changes/live/{class_id}`: changes scraped live; slow.
    fn get_live_changes<'a>(
        &'a self,
        class_id: &'a str,
    ) -> BoxFuture<'a, Vec<ScheduleChange>, NotifierError>;

    /// `POST /register`. Returns the backend's `success` flag.
    fn register<'a>(
        &'a self,
        registration: &'a DeviceRegistration,
    ) -> BoxFuture<'a, bool, NotifierError>;

    /// `PUT /preferences` with the full map.
    fn update_preferences<'a>(
        &'a self,
        device_token: &'a str,
        preferences: &'a TeacherPreferences,
        language: Language,
    ) -> BoxFuture<'a, (), NotifierError>;

    /// `POST /test-notification`. Returns the backend's `success` flag.
    fn send_test_notification<'a>(
        &'a self,
        device_token: &'a str,
        title: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, bool, NotifierError>;
}

/// The platform push-messaging capability (permission prompt, token minting,
/// notification display).
pub trait PushPlatform: Send + Sync {
    /// Sets up the underlying messaging SDK.
    fn initialize(&self) -> BoxFuture<'_, (), NotifierError>;

    /// Prompts the user for notification permission.
    fn request_permission(&self) -> BoxFuture<'_, PermissionStatus, NotifierError>;

    /// Mints a device token; `None` when the platform has none to give.
    fn fetch_token(&self) -> BoxFuture<'_, Option<String>, NotifierError>;

    /// Shows a notification to the user.
    fn show_notification(&self, notification: &SystemNotification) -> Result<(), NotifierError>;
}

/// A synchronous client-local key-value store that survives restarts.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), NotifierError>;
    fn remove(&self, key: &str) -> Result<(), NotifierError>;
    /// Removes every key.
    fn clear(&self) -> Result<(), NotifierError>;
}

/// A factory for the service instances the client needs.
pub trait ServiceFactory: Send + Sync {
    fn schedule_service(&self) -> Arc<dyn ScheduleService>;
    fn push_platform(&self) -> Arc<dyn PushPlatform>;
    fn key_value_store(&self) -> Arc<dyn KeyValueStore>;
}
