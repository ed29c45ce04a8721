//! Schedule backend client
//!
//! A thin typed wrapper over the backend REST API. Every call issues exactly one
//! request; there is no retry and no caching. Path parameters (class ids, device
//! tokens) are percent-encoded as URL path segments.

use std::time::Duration;

use notifier_common::create_client;
use notifier_common::models::{
    ClassRef, DeviceRegistration, ScheduleChange, Subject, TeacherPreferences, UserRecord,
};
use notifier_common::services::{BoxFuture, ScheduleService};
use notifier_common::{Language, NotifierError};
use notifier_config::ApiConfig;
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::models::{
    Acknowledgement, ChangesResponse, ClassesResponse, RegisterRequest, ScheduleResponse,
    TestNotificationRequest, UpdatePreferencesRequest, UserResponse,
};

/// Client for the schedule backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Creates a client from the `[api]` configuration section.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = create_client(config.timeout_secs.map(Duration::from_secs), true)?;
        Self::with_client(client, &config.base_url)
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|err| ApiError::InvalidUrl(format!("{}: {}", base_url, err)))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` to the base URL, encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        debug!(%method, %url, "backend request");

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%method, %url, status = status.as_u16(), "backend returned an error status");
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        self.send::<(), T>(Method::GET, segments, None).await
    }

    pub async fn classes(&self) -> Result<Vec<ClassRef>, ApiError> {
        let response: ClassesResponse = self.get(&["classes"]).await?;
        Ok(response.classes)
    }

    pub async fn schedule(&self, class_id: &str) -> Result<Vec<Subject>, ApiError> {
        let response: ScheduleResponse = self.get(&["schedule", class_id]).await?;
        Ok(response.subjects)
    }

    pub async fn user(&self, device_token: &str) -> Result<UserRecord, ApiError> {
        let response: UserResponse = self.get(&["user", device_token]).await?;
        Ok(response.user)
    }

    pub async fn changes(&self, class_id: &str) -> Result<Vec<ScheduleChange>, ApiError> {
        let response: ChangesResponse = self.get(&["changes", class_id]).await?;
        Ok(response.changes)
    }

    /// Changes scraped on demand by the backend. Slow; callers show a loading note.
    pub async fn live_changes(&self, class_id: &str) -> Result<Vec<ScheduleChange>, ApiError> {
        let response: ChangesResponse = self.get(&["changes", "live", class_id]).await?;
        Ok(response.changes)
    }

    pub async fn register(&self, registration: &DeviceRegistration) -> Result<bool, ApiError> {
        let body = RegisterRequest {
            device_token: &registration.device_token,
            class_id: &registration.class.id,
            class_name: &registration.class.name,
            preferences: &registration.preferences,
            language: registration.language,
        };
        let ack: Acknowledgement = self.send(Method::POST, &["register"], Some(&body)).await?;
        if !ack.success {
            warn!(
                class_id = %registration.class.id,
                error = ack.error.as_deref().unwrap_or_default(),
                "backend declined the registration"
            );
        }
        Ok(ack.success)
    }

    pub async fn update_preferences(
        &self,
        device_token: &str,
        preferences: &TeacherPreferences,
        language: Language,
    ) -> Result<(), ApiError> {
        let body = UpdatePreferencesRequest {
            device_token,
            preferences,
            language,
        };
        let ack: Acknowledgement = self.send(Method::PUT, &["preferences"], Some(&body)).await?;
        debug!(success = ack.success, message = ?ack.message, "preferences updated");
        Ok(())
    }

    pub async fn test_notification(
        &self,
        device_token: &str,
        title: &str,
        body: &str,
    ) -> Result<bool, ApiError> {
        let body = TestNotificationRequest {
            device_token,
            title,
            body,
        };
        let ack: Acknowledgement = self
            .send(Method::POST, &["test-notification"], Some(&body))
            .await?;
        Ok(ack.success)
    }
}

impl ScheduleService for ApiClient {
    fn get_classes(&self) -> BoxFuture<'_, Vec<ClassRef>, NotifierError> {
        Box::pin(async move { Ok(self.classes().await?) })
    }

    fn get_schedule<'a>(&'a self, class_id: &'a str) -> BoxFuture<'a, Vec<Subject>, NotifierError> {
        Box::pin(async move { Ok(self.schedule(class_id).await?) })
    }

    fn get_user<'a>(&'a self, device_token: &'a str) -> BoxFuture<'a, UserRecord, NotifierError> {
        Box::pin(async move { Ok(self.user(device_token).await?) })
    }

    fn get_changes<'a>(
        &'a self,
        class_id: &'a str,
    ) -> BoxFuture<'a, Vec<ScheduleChange>, NotifierError> {
        Box::pin(async move { Ok(self.changes(class_id).await?) })
    }

    fn get_live_changes<'a>(
        &'a self,
        class_id: &'a str,
    ) -> BoxFuture<'a, Vec<ScheduleChange>, NotifierError> {
        Box::pin(async move { Ok(self.live_changes(class_id).await?) })
    }

    fn register<'a>(
        &'a self,
        registration: &'a DeviceRegistration,
    ) -> BoxFuture<'a, bool, NotifierError> {
        Box::pin(async move { Ok(ApiClient::register(self, registration).await?) })
    }

    fn update_preferences<'a>(
        &'a self,
        device_token: &'a str,
        preferences: &'a TeacherPreferences,
        language: Language,
    ) -> BoxFuture<'a, (), NotifierError> {
        Box::pin(async move {
            Ok(ApiClient::update_preferences(self, device_token, preferences, language).await?)
        })
    }

    fn send_test_notification<'a>(
        &'a self,
        device_token: &'a str,
        title: &'a str,
        body: &'a str,
    ) -> BoxFuture<'a, bool, NotifierError> {
        Box::pin(async move { Ok(self.test_notification(device_token, title, body).await?) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn client_for(server: &MockServer) -> ApiClient {
        let config = ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_secs: Some(5),
        };
        ApiClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_get_classes_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/classes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "classes": [{"id": "10A", "name": "Grade 10 A"}, {"id": "11B", "name": "11B"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let classes = client_for(&server).await.get_classes().await.unwrap();
        assert_eq!(
            classes,
            vec![ClassRef::new("10A", "Grade 10 A"), ClassRef::new("11B", "11B")]
        );
    }

    #[tokio::test]
    async fn test_schedule_path_segment_is_encoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/schedule/10%2F2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "subjects": [{"subject": "Math", "teachers": ["T1", "T2"]}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let subjects = client_for(&server).await.get_schedule("10/2").await.unwrap();
        assert_eq!(subjects, vec![Subject::new("Math", &["T1", "T2"])]);
    }

    #[tokio::test]
    async fn test_non_success_status_surfaces_status_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/changes/10A"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).await.get_changes("10A").await.unwrap_err();
        assert_eq!(err, NotifierError::HttpStatus(500));
        assert_eq!(err.to_string(), "HTTP error! status: 500");
    }

    #[tokio::test]
    async fn test_live_changes_use_live_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/changes/live/10A"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "changes": [{
                    "date": "12/03", "lesson_number": 2, "teacher": "T1",
                    "subject": "Math", "change_type": "room_change", "new_room": "204"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let changes = client_for(&server).await.get_live_changes("10A").await.unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].new_room.as_deref(), Some("204"));
    }

    #[tokio::test]
    async fn test_get_user_reads_nested_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/user/tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": {
                    "class_id": "10A", "class_name": "10A", "language": "en",
                    "preferences": {"Math": "T1"}
                }
            })))
            .mount(&server)
            .await;

        let user = client_for(&server).await.get_user("tok-1").await.unwrap();
        assert_eq!(user.language, Some(Language::En));
        assert_eq!(user.preferences.get("Math"), Some("T1"));
    }

    #[tokio::test]
    async fn test_register_sends_flat_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .and(body_json(json!({
                "device_token": "tok-1",
                "class_id": "10A",
                "class_name": "Grade 10 A",
                "preferences": {"Math": "T1"},
                "language": "he"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"success": true, "user_id": 7})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let registration = DeviceRegistration {
            device_token: "tok-1".into(),
            class: ClassRef::new("10A", "Grade 10 A"),
            language: Language::He,
            preferences: [("Math", "T1")].into_iter().collect(),
        };
        let ok = ScheduleService::register(&client_for(&server).await, &registration)
            .await
            .unwrap();
        assert!(ok);
    }

    #[tokio::test]
    async fn test_update_preferences_puts_full_map() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/api/preferences"))
            .and(body_json(json!({
                "device_token": "tok-1",
                "preferences": {"English": "T3", "Math": "T2"},
                "language": "en"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;

        let prefs: TeacherPreferences = [("Math", "T2"), ("English", "T3")].into_iter().collect();
        ScheduleService::update_preferences(&client_for(&server).await, "tok-1", &prefs, Language::En)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_test_notification_reports_backend_flag() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/test-notification"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "error": "unknown token"})),
            )
            .mount(&server)
            .await;

        let sent = client_for(&server)
            .await
            .send_test_notification("tok-1", "Hi", "there")
            .await
            .unwrap();
        assert!(!sent);
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let err = ApiClient::with_client(Client::new(), "not a url").unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
        let err: NotifierError = err.into();
        assert!(matches!(err, NotifierError::ConfigError(_)));
    }
}
