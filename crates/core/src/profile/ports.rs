//! Port interfaces for talent profile management
//!
//! These traits define the boundaries between core business logic
//! and infrastructure implementations for profile operations.

use async_trait::async_trait;
use serde_json::Value;
use stagelink_domain::Result;

use super::wire::{SavePayload, SaveResponse, UploadedAsset};

/// Trait for the remote user-directory API
#[async_trait]
pub trait UserDirectoryApi: Send + Sync {
    /// Fetch the authenticated user's raw record
    async fn fetch_me(&self) -> Result<Value>;

    /// Send the full profile list plus flat record as a single update
    async fn update_profile(&self, payload: &SavePayload) -> Result<SaveResponse>;
}

/// Trait for the session-scoped cache of the last-fetched user object.
///
/// Stands in for the browser's session storage; injected so tests can
/// substitute an in-memory stub.
pub trait SessionCache: Send + Sync {
    /// Read a cached JSON value by key
    fn get(&self, key: &str) -> Option<Value>;

    /// Store a JSON value under a key, replacing any previous value
    fn put(&self, key: &str, value: Value);
}

/// Trait for the external asset-upload collaborator
#[async_trait]
pub trait AssetUploadApi: Send + Sync {
    /// Upload raw bytes; returns the public URL and storage key
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadedAsset>;
}
