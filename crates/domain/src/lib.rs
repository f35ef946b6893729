//! # Stagelink Domain
//!
//! Business domain types and models for Stagelink.
//!
//! This crate contains:
//! - Talent profile and flat user record types
//! - Domain error types and Result definitions
//! - The declared talent-profile field set
//! - Normalization utilities for loosely typed wire data
//!
//! ## Architecture
//! - No dependencies on other Stagelink crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod normalize;
pub mod types;

// Re-export commonly used items
pub use constants::{is_profile_field, SESSION_CACHE_KEY, TALENT_PROFILE_FIELDS};
pub use errors::{Result, StagelinkError};
pub use types::{AccountFields, FlatUser, TalentFields, TalentProfile};
