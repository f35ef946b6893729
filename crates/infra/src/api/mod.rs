//! HTTP adapters for the user-directory and asset-upload APIs

pub mod client;
pub mod errors;
pub mod upload;

pub use client::{ApiClientConfig, UserDirectoryClient};
pub use errors::{ApiError, ApiErrorCategory};
pub use upload::AssetUploadClient;
