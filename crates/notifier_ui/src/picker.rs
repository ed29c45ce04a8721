//! Per-subject teacher selection, shared by onboarding and the edit-teachers overlay.

use notifier_common::models::{Subject, TeacherPreferences};

use crate::load::Load;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherPicker {
    pub subjects: Load<Vec<Subject>>,
    pub selections: TeacherPreferences,
}

impl TeacherPicker {
    pub fn new(selections: TeacherPreferences) -> Self {
        Self {
            subjects: Load::Idle,
            selections,
        }
    }

    /// Picks `teacher` for `subject`, or clears the subject when `teacher` is `None`
    /// or blank.
    ///
    /// A teacher can only be picked once the subject list is loaded, and only one the
    /// subject actually offers. Returns whether the selection changed hands.
    pub fn select(&mut self, subject: &str, teacher: Option<&str>) -> bool {
        let teacher = teacher.map(str::trim).filter(|t| !t.is_empty());
        if let Some(teacher) = teacher {
            let offered = self.subjects.ready().is_some_and(|subjects| {
                subjects
                    .iter()
                    .any(|s| s.name == subject && s.teachers.iter().any(|t| t == teacher))
            });
            if !offered {
                return false;
            }
        }
        self.selections.set(subject, teacher);
        true
    }
}
