//! Home: the list of schedule changes for the registered class, plus settings.

use notifier_common::models::{ClassRef, ScheduleChange, TeacherPreferences};
use notifier_common::{Language, NotifierError};
use notifier_i18n::keys;
use tracing::{debug, info, warn};

use crate::context::AppContext;
use crate::load::Load;
use crate::picker::TeacherPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Only changes for the chosen teachers.
    #[default]
    Mine,
    All,
}

impl FilterMode {
    pub fn toggled(self) -> Self {
        match self {
            FilterMode::Mine => FilterMode::All,
            FilterMode::All => FilterMode::Mine,
        }
    }
}

/// The edit-teachers overlay: a draft copy of the preferences.
#[derive(Debug, Clone, PartialEq)]
pub struct TeacherEditor {
    pub picker: TeacherPicker,
    pub saving: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Overlay {
    #[default]
    None,
    /// The settings menu; carries the outcome of the last test notification.
    Settings { test_notification: Load<bool> },
    EditTeachers(TeacherEditor),
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeState {
    pub class: ClassRef,
    pub preferences: TeacherPreferences,
    pub changes: Load<Vec<ScheduleChange>>,
    pub filter: FilterMode,
    pub overlay: Overlay,
}

impl HomeState {
    pub fn new(class: ClassRef, preferences: TeacherPreferences) -> Self {
        Self {
            class,
            preferences,
            changes: Load::Idle,
            filter: FilterMode::default(),
            overlay: Overlay::None,
        }
    }

    /// Changes visible under the current filter, in backend order.
    pub fn visible_changes(&self) -> Vec<&ScheduleChange> {
        let Some(changes) = self.changes.ready() else {
            return Vec::new();
        };
        match self.filter {
            FilterMode::All => changes.iter().collect(),
            FilterMode::Mine => changes
                .iter()
                .filter(|c| self.preferences.contains_teacher(&c.teacher))
                .collect(),
        }
    }

    pub fn toggle_filter(&mut self) {
        self.filter = self.filter.toggled();
    }

    pub fn open_settings(&mut self) {
        self.overlay = Overlay::Settings {
            test_notification: Load::Idle,
        };
    }

    /// Opens the editor prefilled with the current preferences.
    pub fn open_editor(&mut self) {
        let mut picker = TeacherPicker::new(self.preferences.clone());
        picker.subjects = Load::Loading;
        self.overlay = Overlay::EditTeachers(TeacherEditor {
            picker,
            saving: false,
            error: None,
        });
    }

    pub fn editor_mut(&mut self) -> Option<&mut TeacherEditor> {
        match &mut self.overlay {
            Overlay::EditTeachers(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = Overlay::None;
    }

    /// Adopts saved preferences and closes the editor.
    pub fn preferences_saved(&mut self, preferences: TeacherPreferences) {
        self.preferences = preferences;
        self.overlay = Overlay::None;
    }
}

pub struct HomeFlow {
    ctx: AppContext,
    language: Language,
    state: HomeState,
}

impl HomeFlow {
    pub fn new(ctx: AppContext, language: Language, class: ClassRef) -> Self {
        let preferences = ctx.store.preferences();
        Self {
            ctx,
            language,
            state: HomeState::new(class, preferences),
        }
    }

    pub fn state(&self) -> &HomeState {
        &self.state
    }

    /// Refreshes preferences from the backend, then loads live changes.
    pub async fn load(&mut self) {
        self.refresh_preferences().await;
        self.load_changes().await;
    }

    async fn refresh_preferences(&mut self) {
        let Some(token) = self.ctx.store.device_token() else {
            debug!("no device token, using cached preferences");
            return;
        };
        match self.ctx.schedule.get_user(&token).await {
            Ok(user) => {
                if let Err(err) = self.ctx.store.save_preferences(&user.preferences) {
                    warn!("could not cache preferences: {}", err);
                }
                self.state.preferences = user.preferences;
            }
            Err(err) => warn!("user record unavailable, using cached preferences: {}", err),
        }
    }

    async fn load_changes(&mut self) {
        self.state.changes = Load::Loading;
        let result = self.ctx.schedule.get_live_changes(&self.state.class.id).await;
        match &result {
            Ok(changes) => debug!(count = changes.len(), "live changes loaded"),
            Err(err) => warn!(class_id = %self.state.class.id, "loading changes failed: {}", err),
        }
        self.state.changes = result.into();
    }

    async fn load_editor_schedule(&mut self) {
        let class_id = self.state.class.id.clone();
        let Some(editor) = self.state.editor_mut() else {
            return;
        };
        editor.picker.subjects = Load::Loading;
        let result = self.ctx.schedule.get_schedule(&class_id).await;
        if let Err(err) = &result {
            warn!(class_id = %class_id, "loading schedule failed: {}", err);
        }
        if let Some(editor) = self.state.editor_mut() {
            editor.picker.subjects = result.into();
        }
    }

    /// Repeats the failed load of whatever is on screen.
    pub async fn retry(&mut self) {
        let editor_failed = matches!(
            &self.state.overlay,
            Overlay::EditTeachers(editor) if editor.picker.subjects.is_failed()
        );
        if editor_failed {
            self.load_editor_schedule().await;
        } else if self.state.changes.is_failed() {
            self.load_changes().await;
        } else {
            debug!("nothing to retry");
        }
    }

    pub fn toggle_filter(&mut self) {
        self.state.toggle_filter();
    }

    pub fn open_settings(&mut self) {
        self.state.open_settings();
    }

    pub async fn edit_teachers(&mut self) {
        self.state.open_editor();
        self.load_editor_schedule().await;
    }

    pub fn select_teacher(&mut self, subject: &str, teacher: Option<&str>) -> bool {
        match self.state.editor_mut() {
            Some(editor) if !editor.saving => editor.picker.select(subject, teacher),
            _ => false,
        }
    }

    /// Writes the draft through the backend; the local cache follows only on success.
    pub async fn save_teachers(&mut self) {
        let Some(editor) = self.state.editor_mut() else {
            return;
        };
        if editor.saving {
            return;
        }
        let draft = editor.picker.selections.clone();

        let Some(token) = self.ctx.push.get_stored_token() else {
            editor.error = Some(NotifierError::PermissionDenied.to_string());
            return;
        };
        editor.saving = true;
        editor.error = None;

        let result = self
            .ctx
            .schedule
            .update_preferences(&token, &draft, self.language)
            .await;

        match result {
            Ok(()) => {
                if let Err(err) = self.ctx.store.save_preferences(&draft) {
                    warn!("could not cache preferences: {}", err);
                }
                info!(subjects = draft.len(), "teacher preferences updated");
                self.state.preferences_saved(draft);
            }
            Err(err) => {
                warn!("updating preferences failed: {}", err);
                if let Some(editor) = self.state.editor_mut() {
                    editor.saving = false;
                    editor.error = Some(err.to_string());
                }
            }
        }
    }

    /// Closes whichever overlay is open, discarding any draft.
    pub fn close_overlay(&mut self) {
        self.state.close_overlay();
    }

    pub async fn send_test_notification(&mut self) {
        if !matches!(self.state.overlay, Overlay::Settings { .. }) {
            self.state.open_settings();
        }
        let Some(token) = self.ctx.push.get_stored_token() else {
            self.set_test_outcome(Load::Failed(NotifierError::PermissionDenied.to_string()));
            return;
        };
        self.set_test_outcome(Load::Loading);

        let strings = &self.ctx.strings;
        let title = strings.t(self.language, keys::APP_TITLE);
        let body = strings.t(self.language, keys::TEST_NOTIFICATION);
        let result = self
            .ctx
            .schedule
            .send_test_notification(&token, title, body)
            .await;
        if let Err(err) = &result {
            warn!("test notification failed: {}", err);
        }
        self.set_test_outcome(result.into());
    }

    fn set_test_outcome(&mut self, outcome: Load<bool>) {
        if let Overlay::Settings { test_notification } = &mut self.state.overlay {
            *test_notification = outcome;
        }
    }

    /// Forgets the registration and the device token; onboarding starts over on
    /// the next render.
    pub fn change_class(&mut self) -> Result<(), NotifierError> {
        self.ctx.store.clear()?;
        self.ctx.push.reset();
        info!(class_id = %self.state.class.id, "registration cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakes::{context, register, FakeSchedule};
    use notifier_common::models::{ChangeType, UserRecord};
    use notifier_firebase::testing::FakePushPlatform;
    use std::sync::Arc;

    fn change(teacher: &str, lesson: u32) -> ScheduleChange {
        ScheduleChange {
            date: "12/03".into(),
            teacher: teacher.into(),
            lesson_number: lesson,
            change_type: ChangeType::Cancellation,
            subject: None,
            description: None,
            new_room: None,
        }
    }

    fn prefs(pairs: &[(&str, &str)]) -> TeacherPreferences {
        pairs.iter().copied().collect()
    }

    async fn loaded_home(schedule: Arc<FakeSchedule>) -> (HomeFlow, AppContext) {
        let (ctx, _) = context(schedule, FakePushPlatform::granting(&[]));
        register(&ctx, "tok-1", &prefs(&[("Math", "T1")]));
        let mut flow = HomeFlow::new(ctx.clone(), Language::En, ClassRef::new("10A", "10A"));
        flow.load().await;
        (flow, ctx)
    }

    #[test]
    fn test_filter_keeps_only_chosen_teachers() {
        let mut state = HomeState::new(ClassRef::new("10A", "10A"), prefs(&[("Math", "T1")]));
        state.changes = Load::Ready(vec![change("T1", 2), change("T2", 3)]);

        let mine: Vec<&str> = state
            .visible_changes()
            .into_iter()
            .map(|c| c.teacher.as_str())
            .collect();
        assert_eq!(mine, vec!["T1"]);

        state.toggle_filter();
        assert_eq!(state.visible_changes().len(), 2);
    }

    #[test]
    fn test_editor_is_prefilled_and_cancel_discards_draft() {
        let mut state = HomeState::new(ClassRef::new("10A", "10A"), prefs(&[("Math", "T1")]));
        state.open_editor();
        let editor = state.editor_mut().unwrap();
        assert_eq!(editor.picker.selections.get("Math"), Some("T1"));
        editor.picker.selections.set("Math", None);

        state.close_overlay();
        assert_eq!(state.preferences.get("Math"), Some("T1"));
        assert_eq!(state.overlay, Overlay::None);
    }

    #[tokio::test]
    async fn test_load_adopts_server_preferences() {
        let schedule = Arc::new(FakeSchedule::default());
        FakeSchedule::reply(
            &schedule.user,
            Ok(UserRecord {
                class_id: "10A".into(),
                class_name: "10A".into(),
                language: None,
                preferences: prefs(&[("Math", "T2")]),
            }),
        );
        let (flow, ctx) = loaded_home(schedule.clone()).await;

        assert_eq!(flow.state().preferences.get("Math"), Some("T2"));
        assert_eq!(ctx.store.preferences().get("Math"), Some("T2"));
        assert_eq!(
            schedule.calls(),
            vec!["GET /user/tok-1", "GET /changes/live/10A"]
        );
    }

    #[tokio::test]
    async fn test_user_fetch_failure_is_tolerated() {
        let schedule = Arc::new(FakeSchedule::default());
        FakeSchedule::reply(&schedule.changes, Ok(vec![change("T1", 1)]));
        let (flow, _) = loaded_home(schedule).await;

        assert_eq!(flow.state().preferences.get("Math"), Some("T1"));
        assert_eq!(flow.state().visible_changes().len(), 1);
    }

    #[tokio::test]
    async fn test_changes_failure_then_retry() {
        let schedule = Arc::new(FakeSchedule::default());
        FakeSchedule::reply(&schedule.changes, Err(NotifierError::HttpStatus(502)));
        let (mut flow, _) = loaded_home(schedule.clone()).await;
        assert!(flow.state().changes.is_failed());

        FakeSchedule::reply(&schedule.changes, Ok(vec![change("T1", 4)]));
        flow.retry().await;
        assert_eq!(flow.state().visible_changes().len(), 1);
        assert_eq!(schedule.count("GET /changes/live/10A"), 2);
    }

    #[tokio::test]
    async fn test_filter_toggle_does_not_refetch() {
        let schedule = Arc::new(FakeSchedule::default());
        let (mut flow, _) = loaded_home(schedule.clone()).await;
        let before = schedule.calls().len();

        flow.toggle_filter();
        flow.toggle_filter();
        assert_eq!(schedule.calls().len(), before);
    }

    #[tokio::test]
    async fn test_save_teachers_writes_through() {
        let schedule = Arc::new(FakeSchedule::default());
        let (mut flow, ctx) = loaded_home(schedule.clone()).await;

        flow.edit_teachers().await;
        assert!(flow.select_teacher("Math", Some("T2")));
        assert!(flow.select_teacher("English", Some("T3")));
        flow.save_teachers().await;

        let (token, sent, language) = schedule.updates.lock().unwrap()[0].clone();
        assert_eq!(token, "tok-1");
        assert_eq!(sent, prefs(&[("Math", "T2"), ("English", "T3")]));
        assert_eq!(language, Language::En);

        assert_eq!(flow.state().overlay, Overlay::None);
        assert_eq!(flow.state().preferences, sent);
        assert_eq!(ctx.store.preferences(), sent);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_editor_and_cache() {
        let schedule = Arc::new(FakeSchedule::default());
        FakeSchedule::reply(&schedule.update, Err(NotifierError::HttpStatus(500)));
        let (mut flow, ctx) = loaded_home(schedule.clone()).await;

        flow.edit_teachers().await;
        flow.select_teacher("Math", Some("T2"));
        flow.save_teachers().await;

        let Overlay::EditTeachers(editor) = &flow.state().overlay else {
            panic!("editor should stay open");
        };
        assert!(!editor.saving);
        assert_eq!(editor.error.as_deref(), Some("HTTP error! status: 500"));
        assert_eq!(editor.picker.selections.get("Math"), Some("T2"));
        assert_eq!(flow.state().preferences.get("Math"), Some("T1"));
        assert_eq!(ctx.store.preferences().get("Math"), Some("T1"));
    }

    #[tokio::test]
    async fn test_test_notification_outcome_is_shown_in_settings() {
        let schedule = Arc::new(FakeSchedule::default());
        let (mut flow, _) = loaded_home(schedule.clone()).await;

        flow.open_settings();
        flow.send_test_notification().await;
        assert_eq!(
            flow.state().overlay,
            Overlay::Settings {
                test_notification: Load::Ready(true)
            }
        );
        assert_eq!(schedule.count("POST /test-notification"), 1);
    }

    #[tokio::test]
    async fn test_change_class_clears_everything() {
        let schedule = Arc::new(FakeSchedule::default());
        let (mut flow, ctx) = loaded_home(schedule).await;

        flow.change_class().unwrap();
        assert!(!ctx.store.is_registered());
        assert_eq!(ctx.store.device_token(), None);
        assert_eq!(ctx.push.get_stored_token(), None);
    }
}
