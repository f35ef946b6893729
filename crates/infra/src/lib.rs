//! # Stagelink Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - HTTP client implementations (user directory, asset uploads)
//! - The in-memory session cache
//! - Configuration loading
//! - Telemetry (tracing subscriber) setup
//!
//! ## Architecture
//! - Implements traits defined in `stagelink-core`
//! - Contains all "impure" code (I/O, network)

pub mod api;
pub mod cache;
pub mod config;
pub mod telemetry;

// Re-export commonly used items
pub use api::{ApiClientConfig, ApiError, AssetUploadClient, UserDirectoryClient};
pub use cache::InMemorySessionCache;
pub use config::{ApiConfig, Config};
