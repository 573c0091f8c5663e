//! In-memory platform for tests.
//!
//! Deterministic: time starts at a fixed instant, sleeps resolve
//! immediately, storage is a shared hash map so assertions can inspect
//! what services persisted.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::{future::Future, pin::Pin};

use crate::ports::outbound::PlatformPort;

/// Mock platform with inspectable in-memory storage.
#[derive(Clone, Default)]
pub struct MockPlatform {
    store: Arc<RwLock<HashMap<String, String>>>,
    now_millis: Arc<RwLock<u64>>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a storage key (e.g. a persisted token).
    pub fn with_stored(self, key: &str, value: &str) -> Self {
        self.storage_save(key, value);
        self
    }

    /// Advance the mock clock.
    pub fn advance_millis(&self, ms: u64) {
        if let Ok(mut now) = self.now_millis.write() {
            *now += ms;
        }
    }
}

impl PlatformPort for MockPlatform {
    fn now_unix_secs(&self) -> u64 {
        self.now_millis() / 1000
    }

    fn now_millis(&self) -> u64 {
        self.now_millis.read().map(|g| *g).unwrap_or(0)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        Box::pin(std::future::ready(()))
    }

    #[cfg(target_arch = "wasm32")]
    fn sleep_ms(&self, _ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(std::future::ready(()))
    }

    fn storage_save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.store.write() {
            guard.insert(key.to_string(), value.to_string());
        }
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.store.read().ok().and_then(|g| g.get(key).cloned())
    }

    fn storage_remove(&self, key: &str) {
        if let Ok(mut guard) = self.store.write() {
            guard.remove(key);
        }
    }

    fn log_info(&self, _msg: &str) {}
    fn log_error(&self, _msg: &str) {}
    fn log_debug(&self, _msg: &str) {}
    fn log_warn(&self, _msg: &str) {}
}
