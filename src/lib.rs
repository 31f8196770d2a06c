// NovaNest - Care-home energy & comfort backend
// Exposes the store, aggregator and API for the server, the CLI, and tests

pub mod config;
pub mod error;
pub mod models;
pub mod store;
pub mod summary;

// HTTP layer only builds with the server feature
#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::{Error, Result};
pub use models::{Alert, AlertCategory, Device, DeviceStatus, Resident, Role};
pub use store::{FacilityRepository, FacilityStore};
pub use summary::{calculate_summary, round_cents, summarize, Summary, DEFAULT_RATE_PER_KWH};

#[cfg(feature = "server")]
pub use api::{app, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
