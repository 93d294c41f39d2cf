// Metadata upload command

use anyhow::{Context, Result};
use clap::Args;
use sunpad::{gateway_uri, LaunchpadConfig, MetadataUploader, PinataUploader, TokenRequest};

use super::utils::{info, success};

#[derive(Args)]
pub struct UploadMetadataCmd {
    /// Token name
    #[arg(long)]
    name: String,

    /// Token symbol
    #[arg(long)]
    symbol: String,

    /// Token description
    #[arg(long)]
    description: String,

    /// Image URL
    #[arg(long)]
    image: String,
}

impl UploadMetadataCmd {
    fn to_request(&self) -> Result<TokenRequest> {
        let request = TokenRequest {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            image: self.image.clone(),
            description: self.description.clone(),
            initial_supply: 0,
        };
        request
            .validate_fields()
            .context("Invalid token metadata")?;
        Ok(request)
    }
}

pub async fn execute(cmd: UploadMetadataCmd, config: &LaunchpadConfig) -> Result<()> {
    let request = cmd.to_request()?;

    let uploader = PinataUploader::new(
        &config.pinning.endpoint,
        config.pinning.jwt.clone(),
        config.pinning_timeout(),
    )?;

    info(&format!("Pinning metadata to {}...", uploader.endpoint()));
    let cid = uploader
        .upload(&request.metadata_json())
        .await
        .context("Metadata upload failed")?;

    success(&format!("Metadata pinned! CID: {}", cid));
    info(&format!("URI: {}", gateway_uri(&config.pinning.gateway_base, &cid)));

    Ok(())
}
