//! Onboarding: pick a class, pick teachers, register the device.
//!
//! [`OnboardingState`] holds the transitions, which are plain synchronous methods.
//! [`OnboardingFlow`] owns a state plus the services and performs the remote calls
//! around those transitions.

use notifier_common::models::{ClassRef, DeviceRegistration, TeacherPreferences};
use notifier_common::{Language, NotifierError};
use tracing::{debug, info, warn};

use crate::context::AppContext;
use crate::load::Load;
use crate::picker::TeacherPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStep {
    SelectClass,
    SelectTeachers,
    Complete,
}

impl OnboardingStep {
    pub const ALL: [OnboardingStep; 3] = [
        OnboardingStep::SelectClass,
        OnboardingStep::SelectTeachers,
        OnboardingStep::Complete,
    ];

    fn index(self) -> usize {
        match self {
            OnboardingStep::SelectClass => 0,
            OnboardingStep::SelectTeachers => 1,
            OnboardingStep::Complete => 2,
        }
    }
}

/// Progress indicator state of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingState {
    pub step: OnboardingStep,
    pub classes: Load<Vec<ClassRef>>,
    pub selected_class: Option<ClassRef>,
    pub picker: TeacherPicker,
    /// A registration round-trip is in flight.
    pub submitting: bool,
    /// Finishing was attempted without a device token.
    pub permission_alert: bool,
    /// Error of the last registration attempt.
    pub error: Option<String>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self {
            step: OnboardingStep::SelectClass,
            classes: Load::Idle,
            selected_class: None,
            picker: TeacherPicker::default(),
            submitting: false,
            permission_alert: false,
            error: None,
        }
    }
}

impl OnboardingState {
    /// Chooses the class with `id`. Unknown or empty ids clear the selection.
    ///
    /// Switching to a different class drops teacher picks made for the old one.
    pub fn select_class(&mut self, id: &str) {
        if self.step != OnboardingStep::SelectClass {
            return;
        }
        let id = id.trim();
        let found = self
            .classes
            .ready()
            .and_then(|classes| classes.iter().find(|c| !id.is_empty() && c.id == id))
            .cloned();

        let changed = match (&self.selected_class, &found) {
            (Some(old), Some(new)) => old.id != new.id,
            _ => true,
        };
        if changed {
            self.picker = TeacherPicker::default();
        }
        self.selected_class = found;
    }

    pub fn can_advance(&self) -> bool {
        self.step == OnboardingStep::SelectClass && self.selected_class.is_some()
    }

    /// Moves to teacher selection. Returns `false` when advancing is not allowed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        self.step = OnboardingStep::SelectTeachers;
        self.picker.subjects = Load::Loading;
        self.permission_alert = false;
        self.error = None;
        true
    }

    /// Returns to class selection, keeping the teacher picks.
    pub fn back(&mut self) -> bool {
        if self.step != OnboardingStep::SelectTeachers || self.submitting {
            return false;
        }
        self.step = OnboardingStep::SelectClass;
        self.permission_alert = false;
        self.error = None;
        true
    }

    pub fn select_teacher(&mut self, subject: &str, teacher: Option<&str>) -> bool {
        if self.step != OnboardingStep::SelectTeachers || self.submitting {
            return false;
        }
        self.picker.select(subject, teacher)
    }

    pub fn can_finish(&self) -> bool {
        self.step == OnboardingStep::SelectTeachers
            && !self.submitting
            && self.selected_class.is_some()
    }

    pub fn begin_submit(&mut self) -> bool {
        if !self.can_finish() {
            return false;
        }
        self.submitting = true;
        self.permission_alert = false;
        self.error = None;
        true
    }

    pub fn permission_missing(&mut self) {
        self.submitting = false;
        self.permission_alert = true;
    }

    pub fn submit_failed(&mut self, error: String) {
        self.submitting = false;
        self.error = Some(error);
    }

    pub fn complete(&mut self) {
        self.submitting = false;
        self.step = OnboardingStep::Complete;
    }

    /// Status of each of the three steps, in order.
    pub fn progress(&self) -> [StepStatus; 3] {
        let current = self.step.index();
        OnboardingStep::ALL.map(|step| match step.index() {
            i if i < current => StepStatus::Completed,
            i if i == current => StepStatus::Active,
            _ => StepStatus::Pending,
        })
    }
}

/// Called once, after the completion screen has been shown for the configured delay.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

pub struct OnboardingFlow {
    ctx: AppContext,
    language: Language,
    state: OnboardingState,
    on_complete: Option<CompletionCallback>,
}

impl OnboardingFlow {
    pub fn new<F>(ctx: AppContext, language: Language, on_complete: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        Self {
            ctx,
            language,
            state: OnboardingState::default(),
            on_complete: Some(Box::new(on_complete)),
        }
    }

    pub fn state(&self) -> &OnboardingState {
        &self.state
    }

    pub async fn load(&mut self) {
        self.load_classes().await;
    }

    async fn load_classes(&mut self) {
        self.state.classes = Load::Loading;
        let result = self.ctx.schedule.get_classes().await;
        if let Err(err) = &result {
            warn!("loading classes failed: {}", err);
        }
        self.state.classes = result.into();
    }

    async fn load_schedule(&mut self) {
        let Some(class) = self.state.selected_class.clone() else {
            return;
        };
        self.state.picker.subjects = Load::Loading;
        let result = self.ctx.schedule.get_schedule(&class.id).await;
        if let Err(err) = &result {
            warn!(class_id = %class.id, "loading schedule failed: {}", err);
        }
        self.state.picker.subjects = result.into();
    }

    /// Repeats whichever load failed on the current step.
    pub async fn retry(&mut self) {
        match self.state.step {
            OnboardingStep::SelectClass if self.state.classes.is_failed() => self.load_classes().await,
            OnboardingStep::SelectTeachers if self.state.picker.subjects.is_failed() => {
                self.load_schedule().await
            }
            _ => debug!("nothing to retry"),
        }
    }

    pub fn select_class(&mut self, id: &str) {
        self.state.select_class(id);
    }

    pub async fn next(&mut self) {
        if self.state.advance() {
            self.load_schedule().await;
        }
    }

    pub fn back(&mut self) {
        self.state.back();
    }

    pub fn select_teacher(&mut self, subject: &str, teacher: Option<&str>) -> bool {
        self.state.select_teacher(subject, teacher)
    }

    /// Runs the registration round-trip.
    ///
    /// Only a successful `POST /register` persists anything; every failure keeps the
    /// user on the teacher step with their selections intact.
    pub async fn finish(&mut self) {
        if !self.state.begin_submit() {
            return;
        }
        let Some(class) = self.state.selected_class.clone() else {
            return;
        };

        let token = match self.ctx.push.get_stored_token() {
            Some(token) => Some(token),
            None => self.ctx.push.request_permission().await,
        };
        let Some(device_token) = token else {
            info!("finishing onboarding needs notification permission");
            self.state.permission_missing();
            return;
        };

        let registration = DeviceRegistration {
            device_token,
            class,
            language: self.language,
            preferences: self.state.picker.selections.clone(),
        };

        match self.ctx.schedule.register(&registration).await {
            Ok(true) => {}
            Ok(false) => {
                warn!(class_id = %registration.class.id, "registration rejected");
                self.state
                    .submit_failed(NotifierError::Rejected("register".into()).to_string());
                return;
            }
            Err(err) => {
                warn!(class_id = %registration.class.id, "registration failed: {}", err);
                self.state.submit_failed(err.to_string());
                return;
            }
        }

        if let Err(err) = self.persist(&registration.class, &registration.preferences) {
            warn!("could not persist registration: {}", err);
            self.state.submit_failed(err.to_string());
            return;
        }

        info!(class_id = %registration.class.id, "onboarding complete");
        self.state.complete();
        self.schedule_completion();
    }

    fn persist(&self, class: &ClassRef, preferences: &TeacherPreferences) -> Result<(), NotifierError> {
        self.ctx.store.save_language(self.language)?;
        self.ctx.store.save_registration(class, preferences)
    }

    fn schedule_completion(&mut self) {
        let Some(callback) = self.on_complete.take() else {
            return;
        };
        let delay = self.ctx.completion_delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        });
    }
}
