//! Handling of push messages that arrive while the client is not in the foreground.
//!
//! These are plain functions: the platform shell (service worker, OS notification
//! daemon, ...) calls them and performs the side effects itself.

use notifier_common::models::{PushPayload, SystemNotification};
use notifier_config::FirebaseConfig;
use tracing::info;

/// Title used when a payload carries no notification block.
pub const DEFAULT_TITLE: &str = "Notification";

/// Builds the notification shown for `payload`, with the configured icon and badge.
pub fn notification_for(payload: &PushPayload, config: &FirebaseConfig) -> SystemNotification {
    let (title, body) = match &payload.notification {
        Some(n) if !n.title.is_empty() => (n.title.clone(), n.body.clone()),
        Some(n) => (DEFAULT_TITLE.to_string(), n.body.clone()),
        None => (DEFAULT_TITLE.to_string(), String::new()),
    };
    SystemNotification {
        title,
        body,
        icon: config.icon.clone(),
        badge: config.badge.clone(),
        data: payload.data.clone(),
    }
}

/// Maps a background push message to the system notification to display.
pub fn handle_background_message(
    payload: &PushPayload,
    config: &FirebaseConfig,
) -> SystemNotification {
    let notification = notification_for(payload, config);
    info!(title = %notification.title, "background push message received");
    notification
}

/// Where a click on a displayed notification navigates: the client root.
pub fn notification_click_target(config: &FirebaseConfig) -> &str {
    if config.click_url.is_empty() {
        "/"
    } else {
        &config.click_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notifier_common::models::PushNotification;
    use std::collections::HashMap;

    #[test]
    fn test_background_notification_uses_fixed_assets() {
        let payload = PushPayload {
            notification: Some(PushNotification {
                title: "Lesson cancelled".into(),
                body: "Math, lesson 3".into(),
            }),
            data: HashMap::from([("class_id".to_string(), "10A".to_string())]),
        };

        let shown = handle_background_message(&payload, &FirebaseConfig::default());
        assert_eq!(shown.title, "Lesson cancelled");
        assert_eq!(shown.body, "Math, lesson 3");
        assert_eq!(shown.icon, "/icon-192.png");
        assert_eq!(shown.badge, "/badge-72.png");
        assert_eq!(shown.data.get("class_id").map(String::as_str), Some("10A"));
    }

    #[test]
    fn test_data_only_message_gets_default_title() {
        let shown = notification_for(&PushPayload::default(), &FirebaseConfig::default());
        assert_eq!(shown.title, DEFAULT_TITLE);
        assert!(shown.body.is_empty());
    }

    #[test]
    fn test_click_opens_root() {
        let mut config = FirebaseConfig::default();
        assert_eq!(notification_click_target(&config), "/");
        config.click_url.clear();
        assert_eq!(notification_click_target(&config), "/");
    }
}
