use notifier_common::models::PushPayload;

/// A user action, as produced by whatever input surface the host has.
///
/// Actions that make no sense for the active flow are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ToggleLanguage,
    DismissBanner,
    /// Rebuilds the active flow from persisted state.
    Refresh,
    Retry,

    // Onboarding
    SelectClass(String),
    Next,
    Finish,

    // Shared: onboarding teacher step and the edit-teachers overlay
    SelectTeacher {
        subject: String,
        teacher: Option<String>,
    },
    /// Onboarding: previous step. Home: close the open overlay.
    Back,

    // Home
    ToggleFilter,
    OpenSettings,
    EditTeachers,
    Save,
    Cancel,
    ChangeClass,
    TestNotification,
}

/// Something that happened outside the command stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The onboarding completion delay elapsed.
    OnboardingCompleted,
    /// A push message arrived while the client was in the foreground.
    PushReceived(PushPayload),
}
