use serde::{Deserialize, Serialize};
use spl_token_metadata_interface::state::TokenMetadata;

use crate::{
    core::{decimal_scale, ValidationError},
    prelude::*,
};

/// User input for one token creation attempt
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRequest {
    pub name: String,
    pub symbol: String,
    pub image: String,
    pub description: String,
    /// Supply in whole tokens
    pub initial_supply: u64,
}

/// A request that passed validation, bound to the wallet that will own it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub owner: Pubkey,
    /// Initial supply scaled to base units
    pub raw_amount: u64,
}

impl TokenRequest {
    /// Check the request against a connected wallet and decimal precision
    pub fn validate(
        &self,
        wallet: Option<Pubkey>,
        decimals: u8,
    ) -> Result<ValidatedRequest, ValidationError> {
        let owner = wallet.ok_or(ValidationError::WalletNotConnected)?;

        self.validate_fields()?;

        if self.initial_supply == 0 {
            return Err(ValidationError::NonPositiveSupply);
        }

        let raw_amount = decimal_scale(decimals)
            .and_then(|scale| self.initial_supply.checked_mul(scale))
            .ok_or(ValidationError::SupplyOverflow {
                supply: self.initial_supply,
                decimals,
            })?;

        Ok(ValidatedRequest { owner, raw_amount })
    }

    /// Reject blank text fields, in form order
    pub fn validate_fields(&self) -> Result<(), ValidationError> {
        let fields = [
            ("name", &self.name),
            ("symbol", &self.symbol),
            ("description", &self.description),
            ("image", &self.image),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(ValidationError::EmptyField(*field)),
            None => Ok(()),
        }
    }

    /// JSON document pinned to IPFS for this token
    pub fn metadata_json(&self) -> TokenMetadataJson {
        TokenMetadataJson {
            name: self.name.trim().to_string(),
            symbol: self.symbol.trim().to_string(),
            description: self.description.trim().to_string(),
            image: self.image.trim().to_string(),
        }
    }
}

/// Off-chain metadata document referenced by the on-chain `uri`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadataJson {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
}

/// Metadata written into the mint account at creation time
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRecord {
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub additional_metadata: Vec<(String, String)>,
}

impl MetadataRecord {
    pub fn new(mint: Pubkey, request: &TokenRequest, uri: String) -> Self {
        Self {
            mint,
            name: request.name.trim().to_string(),
            symbol: request.symbol.trim().to_string(),
            uri,
            additional_metadata: Vec::new(),
        }
    }

    /// Token-2022 metadata extension value for this record
    pub fn to_token_metadata(&self) -> TokenMetadata {
        TokenMetadata {
            mint: self.mint,
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            uri: self.uri.clone(),
            additional_metadata: self.additional_metadata.clone(),
            ..Default::default()
        }
    }
}

/// Result of a fully successful create-token flow
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedToken {
    pub mint: Pubkey,
    pub associated_account: Pubkey,
    pub uri: String,
    pub decimals: u8,
    pub raw_amount: u64,
    pub mint_signature: Signature,
    pub supply_signature: Signature,
}
