//! On-device storage for LeyText.
//!
//! Provides:
//! - Key-value backends (memory, JSON files, SQLite)
//! - The word list persistence adapter, with legacy payload normalization
//! - The word store service that serializes and persists every mutation
//! - Settings persistence and application state wiring
//! - Logging setup for host applications

pub mod backend;
pub mod codec;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod settings;
pub mod state;
pub mod store;

pub use backend::{FileStore, KeyValueStore, MemoryStore, SqliteStore};
pub use error::{Result, StorageError, StoreError};
pub use persistence::{PersistenceAdapter, ScopedJsonAdapter};
pub use settings::{SettingsStore, SETTINGS_KEY};
pub use state::AppState;
pub use store::{Snapshot, WordStore};
