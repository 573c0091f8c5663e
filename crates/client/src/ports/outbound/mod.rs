//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must
//! implement, allowing application services to interact with the remote
//! API and the host platform without depending on concrete implementations.

pub mod api_port;
pub mod platform;
pub mod platform_port;

pub use api_port::{ApiError, RawApiPort};
pub use platform::{storage_keys, SleepProvider, StorageProvider, TimeProvider};
pub use platform_port::PlatformPort;
