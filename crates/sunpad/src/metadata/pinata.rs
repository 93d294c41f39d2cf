//! Pinata JSON pinning client

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{TokenMetadataJson, UploadError};

use super::MetadataUploader;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PinRequest<'a> {
    pinata_content: &'a TokenMetadataJson,
    pinata_metadata: PinMetadata,
}

#[derive(Debug, Serialize)]
struct PinMetadata {
    name: String,
}

#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// Uploads metadata through Pinata's `pinJSONToIPFS` endpoint
pub struct PinataUploader {
    client: reqwest::Client,
    endpoint: String,
    jwt: Option<String>,
}

impl PinataUploader {
    pub fn new(endpoint: &str, jwt: Option<String>, timeout: Duration) -> Result<Self, UploadError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            jwt,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn pin_request(metadata: &TokenMetadataJson) -> PinRequest<'_> {
    PinRequest {
        pinata_content: metadata,
        pinata_metadata: PinMetadata {
            name: format!("{}-metadata.json", metadata.symbol),
        },
    }
}

fn parse_pin_response(body: &str) -> Result<String, UploadError> {
    let response: PinResponse = serde_json::from_str(body)
        .map_err(|e| UploadError::MalformedResponse(format!("{}: {}", e, body)))?;

    if response.ipfs_hash.trim().is_empty() {
        return Err(UploadError::MissingContentId);
    }
    Ok(response.ipfs_hash)
}

#[async_trait]
impl MetadataUploader for PinataUploader {
    async fn upload(&self, metadata: &TokenMetadataJson) -> Result<String, UploadError> {
        let jwt = self.jwt.as_deref().ok_or(UploadError::MissingCredentials)?;

        debug!(endpoint = %self.endpoint, symbol = %metadata.symbol, "Pinning metadata");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(jwt)
            .json(&pin_request(metadata))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "Pinning service rejected upload");
            return Err(UploadError::Http {
                status: status.as_u16(),
                body,
            });
        }

        parse_pin_response(&body)
    }
}
