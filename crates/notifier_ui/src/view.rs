//! Declarative view models.
//!
//! Every screen is described by plain data with all strings already localized. The
//! builders here are pure functions of flow state, language and string table; the
//! [`render`](crate::render) module turns the result into text.

use notifier_common::models::{ChangeType, ClassRef, ScheduleChange, Subject, TeacherPreferences};
use notifier_i18n::{keys, Language, StringTable, TextDirection};

use crate::home::{FilterMode, HomeState, Overlay, TeacherEditor};
use crate::load::Load;
use crate::onboarding::{OnboardingState, OnboardingStep, StepStatus};
use crate::picker::TeacherPicker;

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub header: Header,
    pub banner: Option<Banner>,
    pub body: Body,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    pub title: String,
    pub language_toggle: String,
    pub language: Language,
    pub direction: TextDirection,
}

/// In-app notice raised by an incoming push message.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Onboarding(OnboardingView),
    Home(HomeView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: String,
    pub enabled: bool,
}

/// One option of a single-choice selector.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A subject with its teacher options; the first option is "no teacher".
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectRow {
    pub subject: String,
    pub choices: Vec<Choice>,
}

/// A panel whose content depends on a remote load.
#[derive(Debug, Clone, PartialEq)]
pub enum Panel<T> {
    Loading { message: String, note: Option<String> },
    Error { message: String, retry: String },
    Ready(T),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStep {
    pub number: usize,
    pub label: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OnboardingView {
    pub progress: Vec<ProgressStep>,
    pub step: StepView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepView {
    SelectClass {
        heading: String,
        placeholder: String,
        classes: Panel<Vec<Choice>>,
        next: Button,
    },
    SelectTeachers {
        heading: String,
        message: String,
        subjects: Panel<Vec<SubjectRow>>,
        back: Button,
        finish: Button,
        /// Blocking "enable notifications" notice.
        alert: Option<String>,
        error: Option<String>,
    },
    Complete {
        heading: String,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub class_name: String,
    pub heading: String,
    pub settings: String,
    pub filter_toggle: String,
    pub content: Panel<ChangeList>,
    pub overlay: Option<OverlayView>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChangeList {
    Empty { heading: String, message: String },
    Changes(Vec<ChangeCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeCard {
    pub change_type: ChangeType,
    pub label: String,
    pub date: String,
    pub teacher: String,
    pub subject: Option<String>,
    /// e.g. "Lesson 3"
    pub lesson: String,
    /// e.g. "Room: 204"
    pub room: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OverlayView {
    Settings {
        title: String,
        edit_teachers: String,
        change_class: String,
        test_notification: String,
        back: String,
        /// Outcome line of the last test notification.
        status: Option<String>,
    },
    EditTeachers {
        title: String,
        subjects: Panel<Vec<SubjectRow>>,
        save: Button,
        cancel: Button,
        error: Option<String>,
    },
}

/// Localized lookups for one language.
#[derive(Clone, Copy)]
struct Tr<'a> {
    strings: &'a StringTable,
    language: Language,
}

impl Tr<'_> {
    fn t(&self, key: &str) -> String {
        self.strings.t(self.language, key).to_string()
    }

    /// "<label>: <detail>"
    fn labeled(&self, key: &str, detail: &str) -> String {
        format!("{}: {}", self.strings.t(self.language, key), detail)
    }
}

/// Maps a load onto a panel, with `error_key` prefixing the failure text.
fn panel<T, U>(tr: Tr<'_>, load: &Load<T>, error_key: &str, ready: impl FnOnce(&T) -> U) -> Panel<U> {
    match load {
        Load::Ready(value) => Panel::Ready(ready(value)),
        Load::Failed(err) => Panel::Error {
            message: tr.labeled(error_key, err),
            retry: tr.t(keys::TRY_AGAIN),
        },
        Load::Idle | Load::Loading => Panel::Loading {
            message: tr.t(keys::LOADING),
            note: None,
        },
    }
}

pub fn header(strings: &StringTable, language: Language) -> Header {
    Header {
        title: strings.t(language, keys::APP_TITLE).to_string(),
        language_toggle: strings.t(language, keys::LANG_TOGGLE).to_string(),
        language,
        direction: language.direction(),
    }
}

/// Banner for a push message; the title falls back to the localized "Notification".
pub fn banner(strings: &StringTable, language: Language, title: &str, body: &str) -> Banner {
    let title = if title.trim().is_empty() {
        strings.t(language, keys::NOTIFICATION).to_string()
    } else {
        title.to_string()
    };
    Banner {
        title,
        body: body.to_string(),
    }
}

fn subject_rows(tr: Tr<'_>, subjects: &[Subject], selections: &TeacherPreferences) -> Vec<SubjectRow> {
    subjects
        .iter()
        .map(|subject| {
            let chosen = selections.get(&subject.name);
            let mut choices = vec![Choice {
                value: String::new(),
                label: tr.t(keys::NO_TEACHER),
                selected: chosen.is_none(),
            }];
            choices.extend(subject.teachers.iter().map(|teacher| Choice {
                value: teacher.clone(),
                label: teacher.clone(),
                selected: chosen == Some(teacher.as_str()),
            }));
            SubjectRow {
                subject: subject.name.clone(),
                choices,
            }
        })
        .collect()
}

fn picker_panel(tr: Tr<'_>, picker: &TeacherPicker) -> Panel<Vec<SubjectRow>> {
    panel(tr, &picker.subjects, keys::ERROR_LOADING_SCHEDULE, |subjects| {
        subject_rows(tr, subjects, &picker.selections)
    })
}

fn class_choices(classes: &[ClassRef], selected: Option<&ClassRef>) -> Vec<Choice> {
    classes
        .iter()
        .map(|class| Choice {
            value: class.id.clone(),
            label: class.name.clone(),
            selected: selected.is_some_and(|s| s.id == class.id),
        })
        .collect()
}

pub fn onboarding_view(state: &OnboardingState, strings: &StringTable, language: Language) -> OnboardingView {
    let tr = Tr { strings, language };
    let labels = [keys::STEP1, keys::STEP2, keys::STEP3];
    let progress = state
        .progress()
        .iter()
        .zip(labels)
        .enumerate()
        .map(|(i, (status, key))| ProgressStep {
            number: i + 1,
            label: tr.t(key),
            status: *status,
        })
        .collect();

    let step = match state.step {
        OnboardingStep::SelectClass => StepView::SelectClass {
            heading: tr.t(keys::SELECT_CLASS),
            placeholder: tr.t(keys::SELECT_CLASS_PLACEHOLDER),
            classes: panel(tr, &state.classes, keys::ERROR_LOADING_CLASSES, |classes| {
                class_choices(classes, state.selected_class.as_ref())
            }),
            next: Button {
                label: tr.t(keys::NEXT),
                enabled: state.can_advance(),
            },
        },
        OnboardingStep::SelectTeachers => StepView::SelectTeachers {
            heading: tr.t(keys::SELECT_TEACHERS),
            message: tr.t(keys::SELECT_TEACHERS_MESSAGE),
            subjects: picker_panel(tr, &state.picker),
            back: Button {
                label: tr.t(keys::BACK),
                enabled: !state.submitting,
            },
            finish: Button {
                label: if state.submitting {
                    tr.t(keys::LOADING)
                } else {
                    tr.t(keys::FINISH)
                },
                enabled: state.can_finish(),
            },
            alert: state
                .permission_alert
                .then(|| tr.t(keys::NOTIFICATION_PERMISSION)),
            error: state
                .error
                .as_deref()
                .map(|err| tr.labeled(keys::ERROR_REGISTERING, err)),
        },
        OnboardingStep::Complete => StepView::Complete {
            heading: tr.t(keys::WELCOME),
            message: tr.t(keys::WELCOME_MESSAGE),
        },
    };

    OnboardingView { progress, step }
}

fn change_card(tr: Tr<'_>, change: &ScheduleChange) -> ChangeCard {
    ChangeCard {
        change_type: change.change_type,
        label: tr.t(change.change_type.label_key()),
        date: change.date.clone(),
        teacher: change.teacher.clone(),
        subject: change.subject.clone().filter(|s| !s.is_empty()),
        lesson: format!("{} {}", tr.t(keys::LESSON), change.lesson_number),
        room: change
            .new_room
            .as_deref()
            .filter(|room| !room.is_empty())
            .map(|room| tr.labeled(keys::ROOM, room)),
        description: change.description.clone().filter(|d| !d.is_empty()),
    }
}

fn change_list(tr: Tr<'_>, state: &HomeState) -> ChangeList {
    let visible = state.visible_changes();
    if visible.is_empty() {
        let message = match state.filter {
            FilterMode::Mine => tr.t(keys::NO_RELEVANT_CHANGES),
            FilterMode::All => tr.t(keys::NO_CHANGES_MESSAGE),
        };
        return ChangeList::Empty {
            heading: tr.t(keys::NO_CHANGES),
            message,
        };
    }
    ChangeList::Changes(visible.into_iter().map(|c| change_card(tr, c)).collect())
}

fn editor_view(tr: Tr<'_>, editor: &TeacherEditor) -> OverlayView {
    OverlayView::EditTeachers {
        title: tr.t(keys::EDIT_TEACHERS),
        subjects: picker_panel(tr, &editor.picker),
        save: Button {
            label: if editor.saving {
                tr.t(keys::SAVING)
            } else {
                tr.t(keys::SAVE)
            },
            enabled: !editor.saving && editor.picker.subjects.ready().is_some(),
        },
        cancel: Button {
            label: tr.t(keys::CANCEL),
            enabled: !editor.saving,
        },
        error: editor.error.as_deref().map(|err| tr.labeled(keys::ERROR, err)),
    }
}

fn settings_view(tr: Tr<'_>, test_notification: &Load<bool>) -> OverlayView {
    let status = match test_notification {
        Load::Idle => None,
        Load::Loading => Some(tr.t(keys::LOADING)),
        Load::Ready(true) => Some(tr.t(keys::TEST_NOTIFICATION_SENT)),
        Load::Ready(false) => Some(tr.labeled(keys::ERROR, &tr.t(keys::TEST_NOTIFICATION))),
        Load::Failed(err) => Some(tr.labeled(keys::ERROR, err)),
    };
    OverlayView::Settings {
        title: tr.t(keys::SETTINGS),
        edit_teachers: tr.t(keys::EDIT_TEACHERS),
        change_class: tr.t(keys::CHANGE_CLASS),
        test_notification: tr.t(keys::TEST_NOTIFICATION),
        back: tr.t(keys::BACK),
        status,
    }
}

pub fn home_view(state: &HomeState, strings: &StringTable, language: Language) -> HomeView {
    let tr = Tr { strings, language };

    let content = match &state.changes {
        Load::Idle | Load::Loading => Panel::Loading {
            message: tr.t(keys::LOADING_CHANGES),
            note: Some(tr.t(keys::LOADING_CHANGES_NOTE)),
        },
        Load::Failed(err) => Panel::Error {
            message: tr.labeled(keys::ERROR, err),
            retry: tr.t(keys::TRY_AGAIN),
        },
        Load::Ready(_) => Panel::Ready(change_list(tr, state)),
    };

    let filter_toggle = match state.filter {
        FilterMode::Mine => tr.t(keys::VIEW_ALL_CHANGES),
        FilterMode::All => tr.t(keys::VIEW_MY_CHANGES),
    };

    let overlay = match &state.overlay {
        Overlay::None => None,
        Overlay::Settings { test_notification } => Some(settings_view(tr, test_notification)),
        Overlay::EditTeachers(editor) => Some(editor_view(tr, editor)),
    };

    HomeView {
        class_name: state.class.name.clone(),
        heading: tr.t(keys::RECENT_CHANGES),
        settings: tr.t(keys::SETTINGS),
        filter_toggle,
        content,
        overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(teacher: &str, change_type: ChangeType, room: Option<&str>) -> ScheduleChange {
        ScheduleChange {
            date: "12/03".into(),
            teacher: teacher.into(),
            lesson_number: 3,
            change_type,
            subject: Some("Math".into()),
            description: Some(String::new()),
            new_room: room.map(String::from),
        }
    }

    fn home(changes: Load<Vec<ScheduleChange>>) -> HomeState {
        let prefs: TeacherPreferences = [("Math", "T1")].into_iter().collect();
        let mut state = HomeState::new(ClassRef::new("10A", "10A"), prefs);
        state.changes = changes;
        state
    }

    #[test]
    fn test_header_direction_follows_language() {
        let strings = StringTable::builtin();
        assert_eq!(header(&strings, Language::He).direction, TextDirection::Rtl);
        let en = header(&strings, Language::En);
        assert_eq!(en.direction, TextDirection::Ltr);
        assert_eq!(en.title, "Schedule Notifications");
    }

    #[test]
    fn test_banner_default_title_is_localized() {
        let strings = StringTable::builtin();
        assert_eq!(banner(&strings, Language::En, "", "x").title, "Notification");
        assert_eq!(banner(&strings, Language::En, "Moved", "x").title, "Moved");
    }

    #[test]
    fn test_empty_state_message_depends_on_filter() {
        let strings = StringTable::builtin();
        let mut state = home(Load::Ready(vec![change("T9", ChangeType::Cancellation, None)]));

        let Panel::Ready(ChangeList::Empty { message, .. }) =
            home_view(&state, &strings, Language::En).content
        else {
            panic!("expected empty state");
        };
        assert_eq!(message, "No relevant changes for your selected teachers");

        state.changes = Load::Ready(Vec::new());
        state.toggle_filter();
        let Panel::Ready(ChangeList::Empty { message, .. }) =
            home_view(&state, &strings, Language::En).content
        else {
            panic!("expected empty state");
        };
        assert_eq!(message, "There are currently no changes to your schedule");
    }

    #[test]
    fn test_change_card_labels() {
        let strings = StringTable::builtin();
        let state = home(Load::Ready(vec![change("T1", ChangeType::RoomChange, Some("204"))]));

        let Panel::Ready(ChangeList::Changes(cards)) = home_view(&state, &strings, Language::En).content
        else {
            panic!("expected changes");
        };
        assert_eq!(cards[0].label, "Room Change");
        assert_eq!(cards[0].lesson, "Lesson 3");
        assert_eq!(cards[0].room.as_deref(), Some("Room: 204"));
        assert_eq!(cards[0].description, None);
    }

    #[test]
    fn test_loading_changes_shows_note() {
        let strings = StringTable::builtin();
        let view = home_view(&home(Load::Loading), &strings, Language::En);
        assert_eq!(
            view.content,
            Panel::Loading {
                message: "Loading changes from website...".into(),
                note: Some("This may take 20-30 seconds".into()),
            }
        );
        assert_eq!(view.filter_toggle, "View All Changes");
    }

    #[test]
    fn test_subject_rows_mark_no_teacher_when_unset() {
        let strings = StringTable::builtin();
        let tr = Tr {
            strings: &strings,
            language: Language::En,
        };
        let prefs: TeacherPreferences = [("Math", "T2")].into_iter().collect();
        let rows = subject_rows(
            tr,
            &[Subject::new("Math", &["T1", "T2"]), Subject::new("Art", &["T5"])],
            &prefs,
        );

        let selected: Vec<_> = rows
            .iter()
            .map(|r| r.choices.iter().find(|c| c.selected).map(|c| c.label.clone()))
            .collect();
        assert_eq!(
            selected,
            vec![Some("T2".to_string()), Some("I don't learn this subject".to_string())]
        );
    }
}
