// --- File: crates/notifier_common/src/models.rs ---
//! Data shared between the service crates and the view layer.

use notifier_i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A class the user can register for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRef {
    pub id: String,
    pub name: String,
}

impl ClassRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A subject taught in a class together with the teachers who teach it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "subject")]
    pub name: String,
    #[serde(default)]
    pub teachers: Vec<String>,
}

impl Subject {
    pub fn new(name: impl Into<String>, teachers: &[&str]) -> Self {
        Self {
            name: name.into(),
            teachers: teachers.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Subject -> chosen teacher.
///
/// A subject without an entry means "no preference / not taking this subject".
/// Empty teacher names are never stored: assigning one removes the entry, and
/// they are dropped when a map is deserialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, String>",
    into = "BTreeMap<String, String>"
)]
pub struct TeacherPreferences(BTreeMap<String, String>);

impl TeacherPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the teacher for `subject`.
    ///
    /// `None` or a blank name clears the entry.
    pub fn set(&mut self, subject: &str, teacher: Option<&str>) {
        match teacher.map(str::trim).filter(|t| !t.is_empty()) {
            Some(teacher) => {
                self.0.insert(subject.to_string(), teacher.to_string());
            }
            None => {
                self.0.remove(subject);
            }
        }
    }

    pub fn get(&self, subject: &str) -> Option<&str> {
        self.0.get(subject).map(String::as_str)
    }

    /// Whether `teacher` is chosen for any subject; this is the Home filter.
    pub fn contains_teacher(&self, teacher: &str) -> bool {
        self.0.values().any(|t| t == teacher)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(s, t)| (s.as_str(), t.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for TeacherPreferences {
    fn from(map: BTreeMap<String, String>) -> Self {
        let mut prefs = Self::new();
        for (subject, teacher) in &map {
            prefs.set(subject, Some(teacher));
        }
        prefs
    }
}

impl From<TeacherPreferences> for BTreeMap<String, String> {
    fn from(prefs: TeacherPreferences) -> Self {
        prefs.0
    }
}

impl<S: Into<String>, T: Into<String>> FromIterator<(S, T)> for TeacherPreferences {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let map: BTreeMap<String, String> = iter
            .into_iter()
            .map(|(s, t)| (s.into(), t.into()))
            .collect();
        map.into()
    }
}

/// Kind of schedule change reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeType {
    #[serde(rename = "cancellation")]
    Cancellation,
    #[serde(rename = "room_change", alias = "roomChange")]
    RoomChange,
}

impl ChangeType {
    /// String table key for the change label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ChangeType::Cancellation => notifier_i18n::keys::CANCELLATION,
            ChangeType::RoomChange => notifier_i18n::keys::ROOM_CHANGE,
        }
    }
}

/// One cancelled or moved lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleChange {
    pub date: String,
    pub teacher: String,
    pub lesson_number: u32,
    pub change_type: ChangeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_room: Option<String>,
}

/// The server-side view of this device's registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub class_id: String,
    #[serde(default)]
    pub class_name: String,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub preferences: TeacherPreferences,
}

/// Everything the backend needs to start notifying a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRegistration {
    pub device_token: String,
    pub class: ClassRef,
    pub language: Language,
    pub preferences: TeacherPreferences,
}

/// Title/body pair of a push message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushNotification {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

/// A push message as delivered by the messaging platform.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(default)]
    pub notification: Option<PushNotification>,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

/// A notification handed to the operating system / browser for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemNotification {
    pub title: String,
    pub body: String,
    pub icon: String,
    pub badge: String,
    pub data: HashMap<String, String>,
}

/// Outcome of asking the user for notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Default,
}
