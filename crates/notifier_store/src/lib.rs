//! Persisted client-local state for the schedule notifier client.
//!
//! The client keeps a handful of values across sessions: whether onboarding
//! finished, the chosen class, the cached teacher preferences, the push device
//! token and the UI language. They live in a flat string key-value store
//! ([`KeyValueStore`](notifier_common::services::KeyValueStore)) which is read and
//! written synchronously.
//!
//! - [`JsonFileStore`]: one JSON file, rewritten atomically on every change
//! - [`MemoryStore`]: process-local, for tests
//! - [`PreferenceStore`]: typed accessors over either of them
//!
//! # Example
//!
//! ```rust,no_run
//! use notifier_store::{JsonFileStore, PreferenceStore};
//! use std::sync::Arc;
//!
//! let raw = Arc::new(JsonFileStore::open("notifier-prefs.json").unwrap());
//! let prefs = PreferenceStore::new(raw);
//! if !prefs.is_registered() {
//!     println!("onboarding needed");
//! }
//! ```

pub mod error;
pub mod factory;
pub mod file;
pub mod keys;
pub mod memory;
pub mod preferences;

pub use error::StoreError;
pub use factory::open_store;
pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use preferences::PreferenceStore;
