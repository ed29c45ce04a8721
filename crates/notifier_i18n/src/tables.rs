use crate::keys::*;
use crate::Language;

pub(crate) fn entries(language: Language) -> &'static [(&'static str, &'static str)] {
    match language {
        Language::He => HE,
        Language::En => EN,
    }
}

const HE: &[(&str, &str)] = &[
    (APP_TITLE, "התראות מערכת שעות"),
    (LANG_TOGGLE, "English"),
    (WELCOME, "ברוכים הבאים"),
    (WELCOME_MESSAGE, "קבל התראות על שינויים במערכת השעות שלך"),
    (SELECT_CLASS, "בחר את הכיתה שלך"),
    (SELECT_CLASS_PLACEHOLDER, "בחר כיתה..."),
    (SELECT_TEACHERS, "בחר את המורים שלך"),
    (
        SELECT_TEACHERS_MESSAGE,
        "בחר את המורה שלך בכל מקצוע. תקבל התראות רק על שינויים במקצועות שבחרת.",
    ),
    (NO_TEACHER, "לא לומד מקצוע זה"),
    (NEXT, "הבא"),
    (BACK, "חזור"),
    (FINISH, "סיים"),
    (LOADING, "טוען..."),
    (RECENT_CHANGES, "שינויים אחרונים"),
    (VIEW_ALL_CHANGES, "צפה בכל השינויים"),
    (VIEW_MY_CHANGES, "השינויים שלי"),
    (NO_RELEVANT_CHANGES, "אין שינויים רלוונטיים עבור המורים שבחרת"),
    (LOADING_CHANGES, "טוען שינויים מהאתר..."),
    (LOADING_CHANGES_NOTE, "זה עשוי לקחת 20-30 שניות"),
    (NO_CHANGES, "אין שינויים במערכת"),
    (NO_CHANGES_MESSAGE, "כרגע אין שינויים במערכת השעות שלך"),
    (SETTINGS, "הגדרות"),
    (CANCELLATION, "ביטול שיעור"),
    (ROOM_CHANGE, "שינוי חדר"),
    (LESSON, "שיעור"),
    (ROOM, "חדר"),
    (CHANGE_CLASS, "שנה כיתה"),
    (EDIT_TEACHERS, "ערוך מורים"),
    (SAVE, "שמור"),
    (SAVING, "שומר..."),
    (CANCEL, "ביטול"),
    (TEST_NOTIFICATION, "שלח התראת בדיקה"),
    (TEST_NOTIFICATION_SENT, "התראת בדיקה נשלחה"),
    (NOTIFICATION, "התראה"),
    (
        NOTIFICATION_PERMISSION,
        "אנא אפשר התראות כדי לקבל עדכונים על שינויים במערכת",
    ),
    (ERROR, "שגיאה"),
    (ERROR_LOADING_CLASSES, "שגיאה בטעינת רשימת הכיתות"),
    (ERROR_LOADING_SCHEDULE, "שגיאה בטעינת המערכת"),
    (ERROR_REGISTERING, "שגיאה ברישום"),
    (TRY_AGAIN, "נסה שוב"),
    (STEP1, "כיתה"),
    (STEP2, "מורים"),
    (STEP3, "סיום"),
];

const EN: &[(&str, &str)] = &[
    (APP_TITLE, "Schedule Notifications"),
    (LANG_TOGGLE, "עברית"),
    (WELCOME, "Welcome"),
    (
        WELCOME_MESSAGE,
        "Get notified about changes to your class schedule",
    ),
    (SELECT_CLASS, "Select Your Class"),
    (SELECT_CLASS_PLACEHOLDER, "Choose a class..."),
    (SELECT_TEACHERS, "Select Your Teachers"),
    (
        SELECT_TEACHERS_MESSAGE,
        "Choose your teacher for each subject. You'll only receive notifications for subjects you select.",
    ),
    (NO_TEACHER, "I don't learn this subject"),
    (NEXT, "Next"),
    (BACK, "Back"),
    (FINISH, "Finish"),
    (LOADING, "Loading..."),
    (RECENT_CHANGES, "Recent Changes"),
    (VIEW_ALL_CHANGES, "View All Changes"),
    (VIEW_MY_CHANGES, "My Changes"),
    (
        NO_RELEVANT_CHANGES,
        "No relevant changes for your selected teachers",
    ),
    (LOADING_CHANGES, "Loading changes from website..."),
    (LOADING_CHANGES_NOTE, "This may take 20-30 seconds"),
    (NO_CHANGES, "No Schedule Changes"),
    (
        NO_CHANGES_MESSAGE,
        "There are currently no changes to your schedule",
    ),
    (SETTINGS, "Settings"),
    (CANCELLATION, "Class Cancelled"),
    (ROOM_CHANGE, "Room Change"),
    (LESSON, "Lesson"),
    (ROOM, "Room"),
    (CHANGE_CLASS, "Change Class"),
    (EDIT_TEACHERS, "Edit Teachers"),
    (SAVE, "Save"),
    (SAVING, "Saving..."),
    (CANCEL, "Cancel"),
    (TEST_NOTIFICATION, "Send Test Notification"),
    (TEST_NOTIFICATION_SENT, "Test notification sent"),
    (NOTIFICATION, "Notification"),
    (
        NOTIFICATION_PERMISSION,
        "Please enable notifications to receive updates about schedule changes",
    ),
    (ERROR, "Error"),
    (ERROR_LOADING_CLASSES, "Error loading class list"),
    (ERROR_LOADING_SCHEDULE, "Error loading schedule"),
    (ERROR_REGISTERING, "Error registering"),
    (TRY_AGAIN, "Try Again"),
    (STEP1, "Class"),
    (STEP2, "Teachers"),
    (STEP3, "Done"),
];
