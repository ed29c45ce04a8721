// --- File: crates/services/notifier_client/src/commands.rs ---
//! Line-oriented input for the terminal host.
//!
//! Each line typed on stdin maps to one [`Input`]. Besides the UI commands the host
//! understands `push`, which simulates a foreground push message.

use notifier_common::models::{PushNotification, PushPayload};
use notifier_ui::Command;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Push(PushPayload),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command: {0} (type `help`)")]
    Unknown(String),

    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    #[error("Expected <subject>=<teacher>, got: {0}")]
    InvalidTeacher(String),

    #[error("Invalid push payload: {0}")]
    InvalidPayload(String),
}

pub const HELP: &str = "\
commands:
  lang                      toggle Hebrew / English
  dismiss                   hide the notification banner
  refresh | retry           reload the current screen
  class <id>                pick a class (onboarding)
  next | back               move between onboarding steps
  teacher <subject>=<name>  pick a teacher, leave the name empty to clear
  finish                    complete onboarding
  filter                    switch between my changes and all changes
  settings | edit           open settings / edit teachers
  save | cancel             save or close the open panel
  test                      send a test notification
  change-class              forget the registration and start over
  push <title> | <body>     simulate a push message (or push {json})
  quit";

/// Parses one input line. Blank lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<Input>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(Some(Input::Help)),
        "quit" | "exit" => return Ok(Some(Input::Quit)),
        "push" => return parse_push(rest).map(|payload| Some(Input::Push(payload))),
        "lang" => Command::ToggleLanguage,
        "dismiss" => Command::DismissBanner,
        "refresh" => Command::Refresh,
        "retry" => Command::Retry,
        "class" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument("class"));
            }
            Command::SelectClass(rest.to_string())
        }
        "next" => Command::Next,
        "back" => Command::Back,
        "finish" => Command::Finish,
        "teacher" => parse_teacher(rest)?,
        "filter" => Command::ToggleFilter,
        "settings" => Command::OpenSettings,
        "edit" => Command::EditTeachers,
        "save" => Command::Save,
        "cancel" => Command::Cancel,
        "change-class" => Command::ChangeClass,
        "test" => Command::TestNotification,
        _ => return Err(ParseError::Unknown(word.to_string())),
    };

    Ok(Some(Input::Command(command)))
}

fn parse_teacher(rest: &str) -> Result<Command, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingArgument("teacher"));
    }

    let (subject, teacher) = match rest.split_once('=') {
        Some((subject, teacher)) => (subject.trim(), teacher.trim()),
        None => (rest, ""),
    };
    if subject.is_empty() {
        return Err(ParseError::InvalidTeacher(rest.to_string()));
    }

    Ok(Command::SelectTeacher {
        subject: subject.to_string(),
        teacher: (!teacher.is_empty()).then(|| teacher.to_string()),
    })
}

fn parse_push(rest: &str) -> Result<PushPayload, ParseError> {
    if rest.starts_with('{') {
        return serde_json::from_str(rest).map_err(|e| ParseError::InvalidPayload(e.to_string()));
    }

    let (title, body) = match rest.split_once('|') {
        Some((title, body)) => (title.trim(), body.trim()),
        None => (rest, ""),
    };

    Ok(PushPayload {
        notification: Some(PushNotification {
            title: title.to_string(),
            body: body.to_string(),
        }),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(line: &str) -> Command {
        match parse_line(line) {
            Ok(Some(Input::Command(command))) => command,
            other => panic!("expected a command for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn test_words_are_case_insensitive() {
        assert_eq!(command("LANG"), Command::ToggleLanguage);
        assert_eq!(command(" Change-Class "), Command::ChangeClass);
        assert_eq!(parse_line("exit"), Ok(Some(Input::Quit)));
    }

    #[test]
    fn test_class_keeps_the_identifier_verbatim() {
        assert_eq!(command("class 10/2"), Command::SelectClass("10/2".into()));
        assert_eq!(parse_line("class"), Err(ParseError::MissingArgument("class")));
    }

    #[test]
    fn test_teacher_with_and_without_a_name() {
        assert_eq!(
            command("teacher Math = Cohen"),
            Command::SelectTeacher { subject: "Math".into(), teacher: Some("Cohen".into()) }
        );
        assert_eq!(
            command("teacher Math="),
            Command::SelectTeacher { subject: "Math".into(), teacher: None }
        );
        assert_eq!(
            command("teacher History"),
            Command::SelectTeacher { subject: "History".into(), teacher: None }
        );
        assert_eq!(parse_line("teacher =Cohen"), Err(ParseError::InvalidTeacher("=Cohen".into())));
    }

    #[test]
    fn test_push_with_title_and_body() {
        let Ok(Some(Input::Push(payload))) = parse_line("push Room Change | Math moved to 204") else {
            panic!("expected a push");
        };
        let notification = payload.notification.expect("notification");
        assert_eq!(notification.title, "Room Change");
        assert_eq!(notification.body, "Math moved to 204");
    }

    #[test]
    fn test_push_accepts_raw_json() {
        let Ok(Some(Input::Push(payload))) = parse_line(r#"push {"data": {"kind": "cancel"}}"#) else {
            panic!("expected a push");
        };
        assert!(payload.notification.is_none());
        assert_eq!(payload.data.get("kind").map(String::as_str), Some("cancel"));

        assert!(matches!(parse_line("push {oops"), Err(ParseError::InvalidPayload(_))));
    }

    #[test]
    fn test_unknown_words_are_reported() {
        assert_eq!(parse_line("dance now"), Err(ParseError::Unknown("dance".into())));
    }
}
