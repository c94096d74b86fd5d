//! Keyed record storage contracts and in-process adapters.
//!
//! A record is one raw JSON document stored under a string key. The browser adapter maps keys to
//! `window.localStorage` entries; the memory adapter backs tests and headless builds.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    future::Future,
    pin::Pin,
    rc::Rc,
};

use serde::Serialize;

/// Object-safe boxed future used by [`RecordStore`] async methods.
pub type RecordStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for whole-document records (JSON stored as text per key).
pub trait RecordStore {
    /// Loads the raw JSON text stored under `key`, or `None` when the key is absent.
    fn load_record<'a>(
        &'a self,
        key: &'a str,
    ) -> RecordStoreFuture<'a, Result<Option<String>, String>>;

    /// Replaces the record stored under `key` with `raw_json`.
    fn save_record<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> RecordStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Record store that never holds anything and accepts every write.
pub struct NoopRecordStore;

impl RecordStore for NoopRecordStore {
    fn load_record<'a>(
        &'a self,
        _key: &'a str,
    ) -> RecordStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_record<'a>(
        &'a self,
        _key: &'a str,
        _raw_json: &'a str,
    ) -> RecordStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory record store keyed by string.
///
/// Clones share the same backing map, so a test can hand one clone to the runtime and inspect
/// writes through another.
pub struct MemoryRecordStore {
    records: Rc<RefCell<HashMap<String, String>>>,
    fail_reads: Rc<Cell<bool>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryRecordStore {
    /// Creates a store pre-seeded with one raw record.
    pub fn with_record(key: &str, raw_json: &str) -> Self {
        let store = Self::default();
        store
            .records
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        store
    }

    /// Returns the raw text currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    /// Makes subsequent loads fail as if the storage area were unavailable.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Makes subsequent saves fail as if the storage quota were exhausted.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_record<'a>(
        &'a self,
        key: &'a str,
    ) -> RecordStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move {
            if self.fail_reads.get() {
                return Err("memory record store read failure".to_string());
            }
            Ok(self.raw(key))
        })
    }

    fn save_record<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> RecordStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if self.fail_writes.get() {
                return Err("memory record store write failure".to_string());
            }
            self.records
                .borrow_mut()
                .insert(key.to_string(), raw_json.to_string());
            Ok(())
        })
    }
}

/// Serializes and saves a typed record through a [`RecordStore`] implementation.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub async fn save_record_with<S: RecordStore + ?Sized, T: Serialize + ?Sized>(
    store: &S,
    key: &str,
    value: &T,
) -> Result<(), String> {
    let raw = serde_json::to_string(value).map_err(|e| e.to_string())?;
    store.save_record(key, &raw).await
}
