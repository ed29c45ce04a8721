//! Push platform for terminal hosts.
//!
//! A terminal has no permission prompt and no push transport, so this platform
//! grants permission up front, mints random device tokens, and writes notifications
//! to an output stream (stdout by default).

use std::io::{self, Write};
use std::sync::Mutex;

use notifier_common::models::{PermissionStatus, SystemNotification};
use notifier_common::services::{BoxFuture, PushPlatform};
use notifier_common::NotifierError;
use notifier_config::FirebaseConfig;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::PushError;

pub struct ConsolePlatform {
    project_id: String,
    permission: PermissionStatus,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsolePlatform {
    pub fn new(config: &FirebaseConfig) -> Self {
        Self::with_writer(config, Box::new(io::stdout()))
    }

    pub fn with_writer(config: &FirebaseConfig, out: Box<dyn Write + Send>) -> Self {
        Self {
            project_id: config.project_id.clone(),
            permission: PermissionStatus::Granted,
            out: Mutex::new(out),
        }
    }

    /// Overrides the answer given to permission requests.
    pub fn with_permission(mut self, permission: PermissionStatus) -> Self {
        self.permission = permission;
        self
    }
}

impl PushPlatform for ConsolePlatform {
    fn initialize(&self) -> BoxFuture<'_, (), NotifierError> {
        Box::pin(async move {
            if self.project_id.trim().is_empty() {
                return Err(PushError::NotConfigured("firebase.project_id".into()).into());
            }
            info!(project_id = %self.project_id, "console push platform ready");
            Ok(())
        })
    }

    fn request_permission(&self) -> BoxFuture<'_, PermissionStatus, NotifierError> {
        Box::pin(async move { Ok(self.permission) })
    }

    fn fetch_token(&self) -> BoxFuture<'_, Option<String>, NotifierError> {
        Box::pin(async move {
            if self.permission != PermissionStatus::Granted {
                return Ok(None);
            }
            let token = format!("{}:{}", self.project_id, Uuid::new_v4().simple());
            debug!("minted console device token");
            Ok(Some(token))
        })
    }

    fn show_notification(&self, notification: &SystemNotification) -> Result<(), NotifierError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| PushError::Platform("notification output poisoned".into()))?;
        writeln!(out, "[{}] {}", notification.title, notification.body).map_err(PushError::from)?;
        out.flush().map_err(PushError::from)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_tokens_are_unique_and_scoped_to_project() {
        let platform = ConsolePlatform::with_writer(&FirebaseConfig::default(), Box::new(io::sink()));
        platform.initialize().await.unwrap();
        assert_eq!(platform.request_permission().await.unwrap(), PermissionStatus::Granted);

        let a = platform.fetch_token().await.unwrap().unwrap();
        let b = platform.fetch_token().await.unwrap().unwrap();
        assert!(a.starts_with("schedule-notifier:"));
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_denied_permission_yields_no_token() {
        let platform = ConsolePlatform::with_writer(&FirebaseConfig::default(), Box::new(io::sink()))
            .with_permission(PermissionStatus::Denied);
        assert_eq!(platform.request_permission().await.unwrap(), PermissionStatus::Denied);
        assert_eq!(platform.fetch_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_project_id_fails_initialize() {
        let config = FirebaseConfig {
            project_id: String::new(),
            ..FirebaseConfig::default()
        };
        let platform = ConsolePlatform::with_writer(&config, Box::new(io::sink()));
        let err = platform.initialize().await.unwrap_err();
        assert!(matches!(err, NotifierError::ConfigError(_)));
    }

    #[test]
    fn test_notification_is_written_to_output() {
        let buf = SharedBuf::default();
        let platform = ConsolePlatform::with_writer(&FirebaseConfig::default(), Box::new(buf.clone()));
        platform
            .show_notification(&SystemNotification {
                title: "Room change".into(),
                body: "Lesson 2 moved to 204".into(),
                icon: "/icon-192.png".into(),
                badge: "/badge-72.png".into(),
                data: HashMap::new(),
            })
            .unwrap();

        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, "[Room change] Lesson 2 moved to 204\n");
    }
}
