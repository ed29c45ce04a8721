//! Lookup keys of the bundled string tables.

// Header
pub const APP_TITLE: &str = "appTitle";
pub const LANG_TOGGLE: &str = "langToggle";

// Onboarding
pub const WELCOME: &str = "welcome";
pub const WELCOME_MESSAGE: &str = "welcomeMessage";
pub const SELECT_CLASS: &str = "selectClass";
pub const SELECT_CLASS_PLACEHOLDER: &str = "selectClassPlaceholder";
pub const SELECT_TEACHERS: &str = "selectTeachers";
pub const SELECT_TEACHERS_MESSAGE: &str = "selectTeachersMessage";
pub const NO_TEACHER: &str = "noTeacher";
pub const NEXT: &str = "next";
pub const BACK: &str = "back";
pub const FINISH: &str = "finish";
pub const LOADING: &str = "loading";

// Home
pub const RECENT_CHANGES: &str = "recentChanges";
pub const VIEW_ALL_CHANGES: &str = "viewAllChanges";
pub const VIEW_MY_CHANGES: &str = "viewMyChanges";
pub const NO_RELEVANT_CHANGES: &str = "noRelevantChanges";
pub const LOADING_CHANGES: &str = "loadingChanges";
pub const LOADING_CHANGES_NOTE: &str = "loadingChangesNote";
pub const NO_CHANGES: &str = "noChanges";
pub const NO_CHANGES_MESSAGE: &str = "noChangesMessage";
pub const SETTINGS: &str = "settings";

// Change types
pub const CANCELLATION: &str = "cancellation";
pub const ROOM_CHANGE: &str = "roomChange";
pub const LESSON: &str = "lesson";
pub const ROOM: &str = "room";

// Settings
pub const CHANGE_CLASS: &str = "changeClass";
pub const EDIT_TEACHERS: &str = "editTeachers";
pub const SAVE: &str = "save";
pub const SAVING: &str = "saving";
pub const CANCEL: &str = "cancel";
pub const TEST_NOTIFICATION: &str = "testNotification";
pub const TEST_NOTIFICATION_SENT: &str = "testNotificationSent";

// Notifications
pub const NOTIFICATION: &str = "notification";
pub const NOTIFICATION_PERMISSION: &str = "notificationPermission";

// Errors
pub const ERROR: &str = "error";
pub const ERROR_LOADING_CLASSES: &str = "errorLoadingClasses";
pub const ERROR_LOADING_SCHEDULE: &str = "errorLoadingSchedule";
pub const ERROR_REGISTERING: &str = "errorRegistering";
pub const TRY_AGAIN: &str = "tryAgain";

// Progress steps
pub const STEP1: &str = "step1";
pub const STEP2: &str = "step2";
pub const STEP3: &str = "step3";

/// Every key above.
pub const ALL: &[&str] = &[
    APP_TITLE,
    LANG_TOGGLE,
    WELCOME,
    WELCOME_MESSAGE,
    SELECT_CLASS,
    SELECT_CLASS_PLACEHOLDER,
    SELECT_TEACHERS,
    SELECT_TEACHERS_MESSAGE,
    NO_TEACHER,
    NEXT,
    BACK,
    FINISH,
    LOADING,
    RECENT_CHANGES,
    VIEW_ALL_CHANGES,
    VIEW_MY_CHANGES,
    NO_RELEVANT_CHANGES,
    LOADING_CHANGES,
    LOADING_CHANGES_NOTE,
    NO_CHANGES,
    NO_CHANGES_MESSAGE,
    SETTINGS,
    CANCELLATION,
    ROOM_CHANGE,
    LESSON,
    ROOM,
    CHANGE_CLASS,
    EDIT_TEACHERS,
    SAVE,
    SAVING,
    CANCEL,
    TEST_NOTIFICATION,
    TEST_NOTIFICATION_SENT,
    NOTIFICATION,
    NOTIFICATION_PERMISSION,
    ERROR,
    ERROR_LOADING_CLASSES,
    ERROR_LOADING_SCHEDULE,
    ERROR_REGISTERING,
    TRY_AGAIN,
    STEP1,
    STEP2,
    STEP3,
];
