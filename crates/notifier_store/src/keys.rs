//! Keys under which the client persists its state.

/// `"true"` once onboarding finished successfully.
pub const USER_REGISTERED: &str = "user_registered";
pub const CLASS_ID: &str = "class_id";
pub const CLASS_NAME: &str = "class_name";
/// Language code, see [`notifier_common::Language`].
pub const LANGUAGE: &str = "language";
/// The push device token. Stable once minted.
pub const DEVICE_TOKEN: &str = "fcm_token";
/// JSON object subject -> teacher, a cache of the server-side preferences.
pub const TEACHER_PREFERENCES: &str = "teacher_preferences";
