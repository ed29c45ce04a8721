//! Scriptable in-memory [`PushPlatform`] for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use notifier_common::models::{PermissionStatus, SystemNotification};
use notifier_common::services::{BoxFuture, PushPlatform};
use notifier_common::{push_error, NotifierError};

/// A push platform whose answers are fixed up front and whose calls are recorded.
pub struct FakePushPlatform {
    permission: PermissionStatus,
    tokens: Mutex<Vec<String>>,
    fail_initialize: bool,
    pub initialize_calls: AtomicUsize,
    pub permission_calls: AtomicUsize,
    pub shown: Mutex<Vec<SystemNotification>>,
    /// Shared event log; the platform appends `"show:<title>"` on every display.
    pub log: Arc<Mutex<Vec<String>>>,
}

impl FakePushPlatform {
    /// Grants permission and hands out `tokens` in order.
    pub fn granting(tokens: &[&str]) -> Self {
        Self {
            permission: PermissionStatus::Granted,
            tokens: Mutex::new(tokens.iter().rev().map(|t| t.to_string()).collect()),
            fail_initialize: false,
            initialize_calls: AtomicUsize::new(0),
            permission_calls: AtomicUsize::new(0),
            shown: Mutex::new(Vec::new()),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn denying() -> Self {
        Self {
            permission: PermissionStatus::Denied,
            ..Self::granting(&[])
        }
    }

    pub fn failing_initialize(mut self) -> Self {
        self.fail_initialize = true;
        self
    }

    pub fn shown(&self) -> Vec<SystemNotification> {
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PushPlatform for FakePushPlatform {
    fn initialize(&self) -> BoxFuture<'_, (), NotifierError> {
        Box::pin(async move {
            self.initialize_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_initialize {
                return Err(push_error("messaging unavailable"));
            }
            Ok(())
        })
    }

    fn request_permission(&self) -> BoxFuture<'_, PermissionStatus, NotifierError> {
        Box::pin(async move {
            self.permission_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.permission)
        })
    }

    fn fetch_token(&self) -> BoxFuture<'_, Option<String>, NotifierError> {
        Box::pin(async move {
            Ok(self
                .tokens
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .pop())
        })
    }

    fn show_notification(&self, notification: &SystemNotification) -> Result<(), NotifierError> {
        self.log
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format!("show:{}", notification.title));
        self.shown
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification.clone());
        Ok(())
    }
}
