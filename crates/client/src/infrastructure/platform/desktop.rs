//! Desktop platform implementations
//!
//! Provides platform-specific implementations for desktop using the
//! standard library and native crates.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};
use std::{future::Future, pin::Pin};

use directories::ProjectDirs;

use crate::ports::outbound::platform::{SleepProvider, StorageProvider, TimeProvider};
use crate::ports::outbound::PlatformPort;

/// Desktop time provider using std::time
#[derive(Clone, Default)]
pub struct DesktopTimeProvider;

impl TimeProvider for DesktopTimeProvider {
    fn now_unix_secs(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Desktop sleep provider backed by tokio's timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
        Box::pin(tokio::time::sleep(std::time::Duration::from_millis(ms)))
    }
}

/// Desktop storage provider with file-based persistence
///
/// Stores key-value pairs in a JSON file under the platform config dir
/// (e.g. `~/.config/gotogether/web/storage.json` on Linux).
#[derive(Clone)]
pub struct DesktopStorageProvider {
    /// Path to the storage file
    storage_path: PathBuf,
    /// In-memory cache of stored values
    cache: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for DesktopStorageProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DesktopStorageProvider {
    /// Create a new desktop storage provider
    ///
    /// Loads existing data from the storage file if it exists.
    pub fn new() -> Self {
        let storage_path = if let Some(dirs) = ProjectDirs::from("io", "gotogether", "web") {
            dirs.config_dir().join("storage.json")
        } else {
            // Fallback to current directory if project dirs unavailable
            PathBuf::from("gotogether_storage.json")
        };

        let cache = if storage_path.exists() {
            match fs::read_to_string(&storage_path) {
                Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                    Ok(map) => map,
                    Err(e) => {
                        tracing::warn!("Failed to parse storage file: {}", e);
                        HashMap::new()
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read storage file: {}", e);
                    HashMap::new()
                }
            }
        } else {
            HashMap::new()
        };

        tracing::debug!("Desktop storage initialized at: {:?}", storage_path);

        Self {
            storage_path,
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Persist the cache to disk
    fn persist(&self) {
        if let Some(parent) = self.storage_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::error!("Failed to create storage directory: {}", e);
                return;
            }
        }

        let snapshot = match self.cache.read() {
            Ok(guard) => guard.clone(),
            Err(_) => {
                tracing::error!("Storage cache lock poisoned, skipping persist");
                return;
            }
        };

        match serde_json::to_string_pretty(&snapshot) {
            Ok(data) => {
                if let Err(e) = fs::write(&self.storage_path, data) {
                    tracing::error!("Failed to write storage file: {}", e);
                }
            }
            Err(e) => tracing::error!("Failed to serialize storage: {}", e),
        }
    }
}

impl StorageProvider for DesktopStorageProvider {
    fn save(&self, key: &str, value: &str) {
        if let Ok(mut guard) = self.cache.write() {
            guard.insert(key.to_string(), value.to_string());
        }
        self.persist();
    }

    fn load(&self, key: &str) -> Option<String> {
        self.cache.read().ok().and_then(|g| g.get(key).cloned())
    }

    fn remove(&self, key: &str) {
        if let Ok(mut guard) = self.cache.write() {
            guard.remove(key);
        }
        self.persist();
    }
}

/// Aggregated desktop platform implementing the unified `PlatformPort`.
#[derive(Clone)]
pub struct DesktopPlatform {
    time: DesktopTimeProvider,
    sleep: DesktopSleepProvider,
    storage: DesktopStorageProvider,
}

impl PlatformPort for DesktopPlatform {
    fn now_unix_secs(&self) -> u64 {
        self.time.now_unix_secs()
    }

    fn now_millis(&self) -> u64 {
        self.time.now_millis()
    }

    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + Send + 'static>> {
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

/// Create the desktop platform aggregate.
pub fn create_platform() -> DesktopPlatform {
    DesktopPlatform {
        time: DesktopTimeProvider,
        sleep: DesktopSleepProvider,
        storage: DesktopStorageProvider::new(),
    }
}
