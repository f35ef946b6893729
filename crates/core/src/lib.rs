//! # Stagelink Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The talent profile manager and its state invariants
//! - Port/adapter interfaces (traits) for the user-directory API,
//!   session cache, and asset uploads
//! - Projection and legacy-migration functions
//!
//! ## Architecture Principles
//! - Only depends on `stagelink-domain`
//! - No HTTP or storage code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod profile;

// Re-export specific items to avoid ambiguity
pub use profile::manager::{ProfileState, TalentProfileManager, UploadSlot, UploadedAssets};
pub use profile::migration::{profiles_from_raw, resolve_active_id};
pub use profile::ports::{AssetUploadApi, SessionCache, UserDirectoryApi};
pub use profile::projection::project;
pub use profile::wire::{SavePayload, SaveResponse, UploadedAsset};
