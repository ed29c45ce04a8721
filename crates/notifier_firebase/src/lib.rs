// --- File: crates/notifier_firebase/src/lib.rs ---

//! Push messaging for the schedule notifier client.
//!
//! - [`PushRegistrationService`]: device token lifecycle and foreground delivery
//! - [`background`]: pure handlers for messages received in the background
//! - [`ConsolePlatform`]: a [`PushPlatform`](notifier_common::services::PushPlatform)
//!   for terminal hosts

pub mod background;
pub mod console;
pub mod error;
pub mod service;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use console::ConsolePlatform;
pub use error::PushError;
pub use service::{MessageCallback, PushRegistrationService};
