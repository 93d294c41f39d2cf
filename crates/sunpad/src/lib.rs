//! SunPad
//!
//! Launch SPL Token-2022 mints from a Solana wallet. Provides:
//! - Metadata upload to an IPFS pinning service
//! - Mint transaction construction (metadata pointer + on-chain metadata)
//! - Initial supply minting into the owner's associated token account
//! - A create-token flow that sequences the above as an explicit state machine

pub mod client;
pub mod config;
pub mod core;
pub mod flow;
pub mod form;
pub mod instructions;
pub mod metadata;
pub mod prelude;

pub use client::{Connection, KeypairWallet, RpcConnection, Wallet};
pub use config::LaunchpadConfig;
pub use crate::core::*;
pub use flow::{FlowState, TokenLaunchpad};
pub use form::TokenForm;
pub use metadata::{MetadataUploader, PinataUploader};
