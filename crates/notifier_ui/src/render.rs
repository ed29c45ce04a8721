//! Plain-text rendering of view models.
//!
//! Output is line oriented so a terminal host can print it as is and tests can
//! compare it verbatim.

use std::fmt::{self, Display, Formatter};

use crate::onboarding::StepStatus;
use crate::view::{
    Banner, Body, Button, ChangeCard, ChangeList, Choice, Header, HomeView, OnboardingView,
    OverlayView, Panel, ProgressStep, Screen, StepView, SubjectRow,
};

/// Renders `screen` to text.
pub fn render(screen: &Screen) -> String {
    screen.to_string()
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.header.fmt(f)?;
        if let Some(banner) = &self.banner {
            banner.fmt(f)?;
        }
        match &self.body {
            Body::Onboarding(view) => view.fmt(f),
            Body::Home(view) => view.fmt(f),
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "== {} ==  [{}]  ({})",
            self.title,
            self.language_toggle,
            self.direction.as_str()
        )
    }
}

impl Display for Banner {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            writeln!(f, "(!) {}", self.title)
        } else {
            writeln!(f, "(!) {}: {}", self.title, self.body)
        }
    }
}

impl Display for Button {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.enabled {
            write!(f, "[{}]", self.label)
        } else {
            write!(f, "[{}] (disabled)", self.label)
        }
    }
}

impl Display for Choice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mark = if self.selected { 'x' } else { ' ' };
        write!(f, "({}) {}", mark, self.label)
    }
}

impl Display for ProgressStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.status {
            StepStatus::Completed => write!(f, "+{} {}", self.number, self.label),
            StepStatus::Active => write!(f, "[{} {}]", self.number, self.label),
            StepStatus::Pending => write!(f, "{} {}", self.number, self.label),
        }
    }
}

impl Display for SubjectRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "  {}:", self.subject)?;
        for (i, choice) in self.choices.iter().enumerate() {
            let sep = if i == 0 { " " } else { " | " };
            write!(f, "{}{}", sep, choice)?;
        }
        writeln!(f)
    }
}

fn write_panel<T>(
    f: &mut Formatter<'_>,
    panel: &Panel<T>,
    ready: impl FnOnce(&mut Formatter<'_>, &T) -> fmt::Result,
) -> fmt::Result {
    match panel {
        Panel::Loading { message, note } => {
            writeln!(f, "  {}", message)?;
            if let Some(note) = note {
                writeln!(f, "  {}", note)?;
            }
            Ok(())
        }
        Panel::Error { message, retry } => writeln!(f, "  {}  [{}]", message, retry),
        Panel::Ready(value) => ready(f, value),
    }
}

fn write_subjects(f: &mut Formatter<'_>, rows: &[SubjectRow]) -> fmt::Result {
    rows.iter().try_for_each(|row| row.fmt(f))
}

impl Display for OnboardingView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let progress: Vec<String> = self.progress.iter().map(ToString::to_string).collect();
        writeln!(f, "{}", progress.join("  >  "))?;
        writeln!(f)?;

        match &self.step {
            StepView::SelectClass {
                heading,
                placeholder,
                classes,
                next,
            } => {
                writeln!(f, "{}", heading)?;
                write_panel(f, classes, |f, choices| {
                    if !choices.iter().any(|c| c.selected) {
                        writeln!(f, "  {}", placeholder)?;
                    }
                    choices.iter().try_for_each(|c| writeln!(f, "  {}", c))
                })?;
                writeln!(f, "{}", next)
            }
            StepView::SelectTeachers {
                heading,
                message,
                subjects,
                back,
                finish,
                alert,
                error,
            } => {
                writeln!(f, "{}", heading)?;
                writeln!(f, "{}", message)?;
                write_panel(f, subjects, |f, rows| write_subjects(f, rows))?;
                if let Some(alert) = alert {
                    writeln!(f, "! {}", alert)?;
                }
                if let Some(error) = error {
                    writeln!(f, "! {}", error)?;
                }
                writeln!(f, "{} {}", back, finish)
            }
            StepView::Complete { heading, message } => {
                writeln!(f, "+ {}", heading)?;
                writeln!(f, "{}", message)
            }
        }
    }
}

impl Display for ChangeCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} | {}", self.label, self.date)?;
        match &self.subject {
            Some(subject) => writeln!(f, "  {} ({}) - {}", self.teacher, subject, self.lesson)?,
            None => writeln!(f, "  {} - {}", self.teacher, self.lesson)?,
        }
        if let Some(room) = &self.room {
            writeln!(f, "  {}", room)?;
        }
        if let Some(description) = &self.description {
            writeln!(f, "  {}", description)?;
        }
        Ok(())
    }
}

impl Display for OverlayView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            OverlayView::Settings {
                title,
                edit_teachers,
                change_class,
                test_notification,
                back,
                status,
            } => {
                writeln!(f, "--- {} ---", title)?;
                writeln!(f, "[{}] [{}] [{}] [{}]", edit_teachers, change_class, test_notification, back)?;
                if let Some(status) = status {
                    writeln!(f, "  {}", status)?;
                }
                Ok(())
            }
            OverlayView::EditTeachers {
                title,
                subjects,
                save,
                cancel,
                error,
            } => {
                writeln!(f, "--- {} ---", title)?;
                write_panel(f, subjects, |f, rows| write_subjects(f, rows))?;
                if let Some(error) = error {
                    writeln!(f, "! {}", error)?;
                }
                writeln!(f, "{} {}", cancel, save)
            }
        }
    }
}

impl Display for HomeView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - {}", self.class_name, self.heading)?;
        writeln!(f, "[{}] [{}]", self.settings, self.filter_toggle)?;
        writeln!(f)?;

        write_panel(f, &self.content, |f, list| match list {
            ChangeList::Empty { heading, message } => {
                writeln!(f, "  {}", heading)?;
                writeln!(f, "  {}", message)
            }
            ChangeList::Changes(cards) => cards.iter().try_for_each(|card| card.fmt(f)),
        })?;

        if let Some(overlay) = &self.overlay {
            writeln!(f)?;
            overlay.fmt(f)?;
        }
        Ok(())
    }
}
