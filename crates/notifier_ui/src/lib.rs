// --- File: crates/notifier_ui/src/lib.rs ---

//! View core of the schedule notifier client.
//!
//! The [`ViewController`] owns at most one active flow, either onboarding or home.
//! Flows keep their own state ([`OnboardingState`], [`HomeState`]) and talk to the
//! services in [`AppContext`]. Screens are described by the view models in [`view`]
//! and turned into text by [`render`].
//!
//! The host feeds the controller two kinds of input: [`Command`]s from the user and
//! [`AppEvent`]s from the background (onboarding completion timer, push messages).

pub mod command;
pub mod context;
pub mod controller;
pub mod home;
pub mod load;
pub mod onboarding;
pub mod picker;
pub mod render;
pub mod view;

#[cfg(test)]
mod fakes;

pub use command::{AppEvent, Command};
pub use context::AppContext;
pub use controller::{ActiveView, ViewController};
pub use home::{FilterMode, HomeFlow, HomeState};
pub use load::Load;
pub use onboarding::{OnboardingFlow, OnboardingState, OnboardingStep};
pub use render::render;
pub use view::Screen;
