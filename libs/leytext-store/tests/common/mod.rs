//! Common test utilities and fixtures for integration tests.
//!
//! This module provides:
//! - Word draft fixtures
//! - A backend whose writes can be made to fail or stall
//! - Store constructors over each backend

#![allow(dead_code)]

pub mod fixtures;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use leytext_store::{
    KeyValueStore, MemoryStore, ScopedJsonAdapter, StorageError, WordStore,
};

pub type MemoryWordStore = WordStore<ScopedJsonAdapter<MemoryStore>>;

/// Install logging once; repeated calls are ignored.
pub fn init_logging() {
    let _ = leytext_store::logging::init();
}

/// In-memory backend with switchable write failures and a write delay.
#[derive(Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: AtomicBool,
    fail_reads: AtomicBool,
    write_delay_ms: AtomicUsize,
    writes: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn delay_writes(&self, delay: Duration) {
        self.write_delay_ms
            .store(delay.as_millis() as usize, Ordering::SeqCst);
    }

    /// Successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    fn io_error() -> StorageError {
        StorageError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"))
    }
}

impl KeyValueStore for FlakyStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(Self::io_error());
        }
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let delay = self.write_delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay as u64)).await;
        }
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(Self::io_error());
        }
        self.inner.set_item(key, value).await?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key).await
    }
}

/// Word store over a fresh in-memory backend.
pub async fn memory_store() -> MemoryWordStore {
    init_logging();
    WordStore::open(ScopedJsonAdapter::new(Arc::new(MemoryStore::new()), "words")).await
}

/// Word store over a flaky backend, returning the backend for control.
pub async fn flaky_store() -> (WordStore<ScopedJsonAdapter<FlakyStore>>, Arc<FlakyStore>) {
    init_logging();
    let backend = Arc::new(FlakyStore::new());
    let store = WordStore::open(ScopedJsonAdapter::new(Arc::clone(&backend), "words")).await;
    (store, backend)
}
