//! External collaborators of the create-token flow
//!
//! The flow only talks to the cluster and the wallet through these traits, so a
//! browser wallet, a local keypair or an in-memory test double can stand behind
//! them interchangeably.

pub mod connection;
pub mod wallet;

use async_trait::async_trait;

use crate::{core::SdkResult, prelude::*};

pub use connection::RpcConnection;
pub use wallet::KeypairWallet;

/// Cluster access used while building and submitting transactions
#[async_trait]
pub trait Connection: Send + Sync {
    /// Lamports an account of `data_len` bytes needs to be rent exempt
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> SdkResult<u64>;

    /// Most recent blockhash to attach before signing
    async fn latest_blockhash(&self) -> SdkResult<Hash>;

    /// Submit a fully signed transaction and wait for confirmation
    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature>;
}

/// The user's wallet
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Connected public key, `None` when disconnected
    fn pubkey(&self) -> Option<Pubkey>;

    /// Add the wallet signature to `transaction` and submit it through `connection`.
    ///
    /// The transaction must already carry its blockhash and any extra signatures.
    async fn send_transaction(
        &self,
        transaction: Transaction,
        connection: &dyn Connection,
    ) -> SdkResult<Signature>;
}
