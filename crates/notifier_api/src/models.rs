//! Request and response bodies of the backend REST API.
//!
//! Responses carry a `success` flag next to the payload. The client only looks at
//! it where the flows need it (`/register`, `/test-notification`); everywhere else
//! the HTTP status is the contract.

use notifier_common::models::{ClassRef, ScheduleChange, Subject, TeacherPreferences, UserRecord};
use notifier_common::Language;
use serde::{Deserialize, Serialize};

/// Response of `GET /classes`
#[derive(Debug, Deserialize)]
pub struct ClassesResponse {
    #[serde(default)]
    pub classes: Vec<ClassRef>,
}

/// Response of `GET /schedule/{class_id}`
#[derive(Debug, Deserialize)]
pub struct ScheduleResponse {
    #[serde(default)]
    pub subjects: Vec<Subject>,
}

/// Response of `GET /user/{device_token}`
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

/// Response of `GET /changes/{class_id}` and `GET /changes/live/{class_id}`
#[derive(Debug, Deserialize)]
pub struct ChangesResponse {
    #[serde(default)]
    pub changes: Vec<ScheduleChange>,
}

/// Body of `POST /register`
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub device_token: &'a str,
    pub class_id: &'a str,
    pub class_name: &'a str,
    pub preferences: &'a TeacherPreferences,
    pub language: Language,
}

/// Body of `PUT /preferences`
#[derive(Debug, Serialize)]
pub struct UpdatePreferencesRequest<'a> {
    pub device_token: &'a str,
    pub preferences: &'a TeacherPreferences,
    pub language: Language,
}

/// Body of `POST /test-notification`
#[derive(Debug, Serialize)]
pub struct TestNotificationRequest<'a> {
    pub device_token: &'a str,
    pub title: &'a str,
    pub body: &'a str,
}

/// The generic `{success, message?, error?}` acknowledgement.
#[derive(Debug, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
