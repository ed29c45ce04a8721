//! Typed access to the persisted client state.

use std::sync::Arc;

use notifier_common::models::{ClassRef, TeacherPreferences};
use notifier_common::services::KeyValueStore;
use notifier_common::{Language, NotifierError};
use tracing::{debug, warn};

use crate::keys;

/// Typed view over a [`KeyValueStore`].
///
/// Cloning is cheap; clones share the same underlying store.
#[derive(Clone)]
pub struct PreferenceStore {
    inner: Arc<dyn KeyValueStore>,
    default_language: Language,
}

impl PreferenceStore {
    pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
        Self {
            inner,
            default_language: Language::default(),
        }
    }

    /// Language reported when none has been stored yet.
    pub fn with_default_language(mut self, language: Language) -> Self {
        self.default_language = language;
        self
    }

    /// Whether onboarding completed on this device.
    pub fn is_registered(&self) -> bool {
        self.inner
            .get(keys::USER_REGISTERED)
            .is_some_and(|flag| !flag.is_empty())
    }

    pub fn class_id(&self) -> Option<String> {
        self.inner
            .get(keys::CLASS_ID)
            .filter(|id| !id.is_empty())
    }

    /// The registered class; the display name falls back to the id.
    pub fn class(&self) -> Option<ClassRef> {
        let id = self.class_id()?;
        let name = self
            .inner
            .get(keys::CLASS_NAME)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| id.clone());
        Some(ClassRef { id, name })
    }

    /// Records a completed onboarding: flag, class and the initial preference cache.
    pub fn save_registration(
        &self,
        class: &ClassRef,
        preferences: &TeacherPreferences,
    ) -> Result<(), NotifierError> {
        self.inner.set(keys::CLASS_ID, &class.id)?;
        self.inner.set(keys::CLASS_NAME, &class.name)?;
        self.save_preferences(preferences)?;
        // the flag goes last so a partial write never looks registered
        self.inner.set(keys::USER_REGISTERED, "true")?;
        debug!(class_id = %class.id, "registration persisted");
        Ok(())
    }

    /// Locally cached preference map; empty when nothing (valid) is cached.
    pub fn preferences(&self) -> TeacherPreferences {
        let Some(raw) = self.inner.get(keys::TEACHER_PREFERENCES) else {
            return TeacherPreferences::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("discarding unreadable preference cache: {}", err);
            TeacherPreferences::new()
        })
    }

    pub fn save_preferences(&self, preferences: &TeacherPreferences) -> Result<(), NotifierError> {
        let raw = serde_json::to_string(preferences)?;
        self.inner.set(keys::TEACHER_PREFERENCES, &raw)
    }

    pub fn device_token(&self) -> Option<String> {
        self.inner
            .get(keys::DEVICE_TOKEN)
            .filter(|token| !token.is_empty())
    }

    pub fn save_device_token(&self, token: &str) -> Result<(), NotifierError> {
        self.inner.set(keys::DEVICE_TOKEN, token)
    }

    /// Stored language, or the default when unset or unrecognised.
    pub fn language(&self) -> Language {
        self.inner
            .get(keys::LANGUAGE)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or(self.default_language)
    }

    pub fn save_language(&self, language: Language) -> Result<(), NotifierError> {
        self.inner.set(keys::LANGUAGE, language.code())
    }

    /// Forgets everything, including the device token. Used by "change class".
    pub fn clear(&self) -> Result<(), NotifierError> {
        self.inner.clear()
    }
}
