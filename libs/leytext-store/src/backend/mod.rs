//! Key-value storage backends.
//!
//! A backend maps string keys to string values, the way on-device app storage
//! does. Everything above it stores JSON under a single key.

pub mod file;
pub mod memory;
pub mod sqlite;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use crate::error::StorageError;
use std::future::Future;
use std::path::PathBuf;

type Result<T> = std::result::Result<T, StorageError>;

/// Async string key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` if never written.
    fn get_item(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Replace the value under `key` in a single write.
    fn set_item(&self, key: &str, value: String) -> impl Future<Output = Result<()>> + Send;

    fn remove_item(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Keys become file names, so they are limited to a safe alphabet.
pub fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}

/// Directory for on-device data, falling back to the current directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("leytext")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_key("words").is_ok());
        assert!(validate_key("words.backup-1").is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        assert!(validate_key("").is_err());
        assert!(validate_key("../words").is_err());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key(".hidden").is_err());
    }

    #[test]
    fn data_dir_is_scoped() {
        assert!(default_data_dir().ends_with("leytext"));
    }
}
