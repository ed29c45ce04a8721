//! Push registration service
//!
//! Wraps a [`PushPlatform`] with the client's token bookkeeping: the token is
//! recovered from the preference store on start, persisted when first minted, and
//! incoming foreground messages are shown and then handed to a single listener.
//!
//! None of the public operations return errors. Platform failures are logged and
//! reported as `false` / `None`, which is all the flows need to decide what to show.

use std::sync::{Arc, Mutex, PoisonError};

use notifier_common::models::{PermissionStatus, PushPayload};
use notifier_common::services::PushPlatform;
use notifier_config::FirebaseConfig;
use notifier_store::PreferenceStore;
use tracing::{debug, info, warn};

use crate::background::notification_for;

/// Listener for foreground push messages.
pub type MessageCallback = Arc<dyn Fn(PushPayload) + Send + Sync>;

#[derive(Default)]
struct PushState {
    initialized: bool,
    token: Option<String>,
}

pub struct PushRegistrationService {
    platform: Arc<dyn PushPlatform>,
    store: PreferenceStore,
    config: FirebaseConfig,
    state: Mutex<PushState>,
    callback: Mutex<Option<MessageCallback>>,
}

impl PushRegistrationService {
    pub fn new(platform: Arc<dyn PushPlatform>, store: PreferenceStore, config: FirebaseConfig) -> Self {
        Self {
            platform,
            store,
            config,
            state: Mutex::new(PushState::default()),
            callback: Mutex::new(None),
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, PushState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Initializes the platform once and recovers a previously stored token.
    ///
    /// Returns `false` when the platform could not be initialized; calling again
    /// after a failure retries.
    pub async fn init(&self) -> bool {
        if self.state().initialized {
            return true;
        }
        if let Err(err) = self.platform.initialize().await {
            warn!("push messaging unavailable: {}", err);
            return false;
        }

        let stored = self.store.device_token();
        let mut state = self.state();
        state.initialized = true;
        if state.token.is_none() {
            state.token = stored;
        }
        info!(has_token = state.token.is_some(), "push messaging initialized");
        true
    }

    /// Asks for notification permission and returns the device token.
    ///
    /// Returns the token only when permission was granted. A known token is reused;
    /// otherwise the platform mints one, which is persisted before it is returned.
    pub async fn request_permission(&self) -> Option<String> {
        if !self.init().await {
            return None;
        }

        match self.platform.request_permission().await {
            Ok(PermissionStatus::Granted) => {}
            Ok(status) => {
                info!(?status, "notification permission not granted");
                return None;
            }
            Err(err) => {
                warn!("permission request failed: {}", err);
                return None;
            }
        }

        if let Some(token) = self.get_stored_token() {
            debug!("reusing stored device token");
            return Some(token);
        }

        let token = match self.platform.fetch_token().await {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => {
                warn!("push platform returned no device token");
                return None;
            }
            Err(err) => {
                warn!("fetching device token failed: {}", err);
                return None;
            }
        };

        if let Err(err) = self.store.save_device_token(&token) {
            warn!("could not persist device token: {}", err);
        }
        self.state().token = Some(token.clone());
        debug!("device token obtained");
        Some(token)
    }

    /// The last known token, from memory or the preference store.
    pub fn get_stored_token(&self) -> Option<String> {
        let mut state = self.state();
        if state.token.is_none() {
            state.token = self.store.device_token();
        }
        state.token.clone()
    }

    /// Installs the foreground message listener, replacing any previous one.
    pub fn on_message_received<F>(&self, callback: F)
    where
        F: Fn(PushPayload) + Send + Sync + 'static,
    {
        *self.callback.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(callback));
    }

    /// Delivers a message received while the client is in the foreground: the
    /// notification is displayed first, then the listener runs.
    ///
    /// Data-only payloads reach the listener without being displayed.
    pub fn deliver_foreground(&self, payload: PushPayload) {
        if payload.notification.is_some() {
            let notification = notification_for(&payload, &self.config);
            if let Err(err) = self.platform.show_notification(&notification) {
                warn!("could not display notification: {}", err);
            }
        }

        let callback = self
            .callback
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        match callback {
            Some(callback) => callback(payload),
            None => debug!("foreground message dropped, no listener"),
        }
    }

    /// Forgets the in-memory token. The persisted copy is cleared by the store owner.
    pub fn reset(&self) {
        self.state().token = None;
        debug!("push registration reset");
    }
}
