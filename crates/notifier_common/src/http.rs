// --- File: crates/notifier_common/src/http.rs ---
//! HTTP utilities shared by the crates that talk to remote services.

// Include the client module
pub mod client;
