// --- File: crates/notifier_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Data structures and models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{push_error, NotifierError};

// Re-export HTTP utilities for easier access
pub use http::client::create_client;

// Re-export logging utilities for easier access
pub use logging::{init_file, init_with_level, parse_level};

// Re-export the language type so downstream crates need only one import path
pub use notifier_i18n::Language;

// This crate provides common functionality that can be used across the client.
// It includes shared models, service traits, error handling, logging and HTTP utilities.
