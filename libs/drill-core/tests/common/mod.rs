//! Shared test doubles and fixtures for drill-core integration tests.
//!
//! - `SharedStorage` lets two progress stores see the same backing map,
//!   standing in for a persisted store across process restarts
//! - `FailingStorage` refuses every operation
//! - `FlakyStorage` works for a fixed number of operations, then fails

#![allow(dead_code)]

pub mod fixtures;

use drill_core::{StorageAdapter, StorageError};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Storage adapter whose contents outlive any one progress store.
#[derive(Debug, Clone, Default)]
pub struct SharedStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SharedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }
}

impl StorageAdapter for SharedStorage {
    fn name(&self) -> &'static str {
        "shared"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Storage adapter that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStorage;

impl StorageAdapter for FailingStorage {
    fn name(&self) -> &'static str {
        "failing"
    }

    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }

    fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("quota exceeded".into()))
    }
}

/// Storage adapter that serves `healthy_ops` operations, then fails forever.
#[derive(Debug)]
pub struct FlakyStorage {
    entries: HashMap<String, String>,
    ops: AtomicUsize,
    healthy_ops: usize,
}

impl FlakyStorage {
    pub fn new(healthy_ops: usize) -> Self {
        Self {
            entries: HashMap::new(),
            ops: AtomicUsize::new(0),
            healthy_ops,
        }
    }

    fn check(&self) -> Result<(), StorageError> {
        if self.ops.fetch_add(1, Ordering::SeqCst) < self.healthy_ops {
            Ok(())
        } else {
            Err(StorageError::Unavailable("connection lost".into()))
        }
    }
}

impl StorageAdapter for FlakyStorage {
    fn name(&self) -> &'static str {
        "flaky"
    }

    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check()?;
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.check()?;
        self.entries.remove(key);
        Ok(())
    }
}
