//! Error taxonomy for the create-token flow

use thiserror::Error;

use crate::prelude::*;

/// Rejected user input. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Connect a wallet first")]
    WalletNotConnected,

    #[error("Token {0} is required")]
    EmptyField(&'static str),

    #[error("Initial supply must be greater than zero")]
    NonPositiveSupply,

    #[error("Initial supply is not a whole number: {0}")]
    InvalidSupply(String),

    #[error("Initial supply {supply} overflows at {decimals} decimals")]
    SupplyOverflow { supply: u64, decimals: u8 },

    #[error("A token creation is already in progress")]
    Busy,
}

/// Pinning service failure. Aborts the flow before any on-chain effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Pinning service returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Pinning request failed: {0}")]
    Transport(String),

    #[error("Malformed pinning response: {0}")]
    MalformedResponse(String),

    #[error("Pinning service returned an empty content identifier")]
    MissingContentId,

    #[error("No pinning credentials configured")]
    MissingCredentials,
}

impl From<reqwest::Error> for UploadError {
    fn from(err: reqwest::Error) -> Self {
        UploadError::Transport(err.to_string())
    }
}

/// Building, signing or submitting a transaction failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransactionError {
    #[error("Failed to build transaction: {0}")]
    Build(String),

    #[error("Failed to fetch blockhash: {0}")]
    Blockhash(String),

    #[error("Signing rejected: {0}")]
    Signing(String),

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Wallet is not connected")]
    WalletNotConnected,
}

impl From<solana_sdk::program_error::ProgramError> for TransactionError {
    fn from(err: solana_sdk::program_error::ProgramError) -> Self {
        TransactionError::Build(err.to_string())
    }
}

impl From<solana_sdk::signer::SignerError> for TransactionError {
    fn from(err: solana_sdk::signer::SignerError) -> Self {
        TransactionError::Signing(err.to_string())
    }
}

impl From<solana_client::client_error::ClientError> for TransactionError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        TransactionError::Submission(err.to_string())
    }
}

/// Terminal failure of one create-token attempt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowFailure {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Metadata upload failed: {0}")]
    Upload(#[from] UploadError),

    #[error("Mint transaction for {mint} failed: {source}")]
    MintTransaction {
        mint: Pubkey,
        #[source]
        source: TransactionError,
    },

    #[error("Mint {mint} was created but the initial supply was not minted: {source}")]
    SupplyNotMinted {
        mint: Pubkey,
        mint_signature: Signature,
        #[source]
        source: TransactionError,
    },
}

impl FlowFailure {
    /// Mint address that exists on-chain despite the failure
    pub fn mint_created(&self) -> Option<Pubkey> {
        match self {
            FlowFailure::SupplyNotMinted { mint, .. } => Some(*mint),
            _ => None,
        }
    }

    /// Whether the failure happened before anything touched the network
    pub fn is_local(&self) -> bool {
        matches!(self, FlowFailure::Validation(_))
    }
}

/// Configuration file errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

impl From<validator::ValidationErrors> for ConfigError {
    fn from(err: validator::ValidationErrors) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

pub type SdkResult<T> = Result<T, TransactionError>;
