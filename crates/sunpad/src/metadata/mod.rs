//! Off-chain metadata upload

pub mod pinata;

use async_trait::async_trait;

use crate::core::{TokenMetadataJson, UploadError};

pub use pinata::PinataUploader;

/// Content-addressed storage for token metadata documents
#[async_trait]
pub trait MetadataUploader: Send + Sync {
    /// Pin `metadata` and return its content identifier
    async fn upload(&self, metadata: &TokenMetadataJson) -> Result<String, UploadError>;
}
