// --- File: crates/notifier_api/src/lib.rs ---

//! REST client for the schedule notifier backend.
//!
//! [`ApiClient`] implements [`notifier_common::services::ScheduleService`], which is
//! the only way the view layer reaches the backend.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
