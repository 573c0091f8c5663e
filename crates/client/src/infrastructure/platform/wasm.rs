//! WASM platform implementations
//!
//! Browser-backed implementations of the platform abstraction traits:
//! `Date.now()` for time, `gloo-timers` for sleep, `localStorage` for
//! persistence, `console` via tracing-wasm for logging.

use std::{future::Future, pin::Pin};

use crate::ports::outbound::platform::{SleepProvider, StorageProvider, TimeProvider};
use crate::ports::outbound::PlatformPort;

/// WASM time provider using js Date
#[derive(Clone, Default)]
pub struct WasmTimeProvider;

impl TimeProvider for WasmTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        (js_sys::Date::now() / 1000.0) as u64
    }

    fn now_millis(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// WASM sleep provider using gloo timers
#[derive(Clone, Default)]
pub struct WasmSleepProvider;

impl SleepProvider for WasmSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(ms as u32).await;
        })
    }
}

/// WASM storage provider over `window.localStorage`
#[derive(Clone, Default)]
pub struct WasmStorageProvider;

impl WasmStorageProvider {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageProvider for WasmStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            if storage.set_item(key, value).is_err() {
                tracing::warn!("localStorage.setItem failed for key {}", key);
            }
        }
    }

    fn load(&self, key: &str) -> Option<String> {
        Self::local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Aggregated browser platform implementing the unified `PlatformPort`.
#[derive(Clone, Default)]
pub struct WasmPlatform {
    time: WasmTimeProvider,
    sleep: WasmSleepProvider,
    storage: WasmStorageProvider,
}

impl PlatformPort for WasmPlatform {
    fn now_unix_secs(&self) -> u64 {
        self.time.now_unix_secs()
    }

    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        self.sleep.sleep_ms(ms)
    }

    fn storage_save(&self, key: &str, value: &str) {
        self.storage.save(key, value);
    }

    fn storage_load(&self, key: &str) -> Option<String> {
        self.storage.load(key)
    }

    fn storage_remove(&self, key: &str) {
        self.storage.remove(key);
    }

    fn log_info(&self, msg: &str) {
        tracing::info!("{}", msg);
    }

    fn log_error(&self, msg: &str) {
        tracing::error!("{}", msg);
    }

    fn log_debug(&self, msg: &str) {
        tracing::debug!("{}", msg);
    }

    fn log_warn(&self, msg: &str) {
        tracing::warn!("{}", msg);
    }
}

/// Create the browser platform aggregate.
pub fn create_platform() -> WasmPlatform {
    WasmPlatform::default()
}
