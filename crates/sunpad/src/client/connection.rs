use std::time::Duration;

use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use tracing::debug;

use crate::{
    core::{SdkResult, TransactionError},
    prelude::*,
};

use super::Connection;

/// JSON-RPC connection to a Solana cluster
pub struct RpcConnection {
    rpc: RpcClient,
}

impl RpcConnection {
    pub fn new(url: &str, commitment: CommitmentConfig, timeout: Duration) -> Self {
        Self {
            rpc: RpcClient::new_with_timeout_and_commitment(url.to_string(), timeout, commitment),
        }
    }

    /// Get the RPC endpoint URL
    pub fn url(&self) -> String {
        self.rpc.url()
    }
}

#[async_trait]
impl Connection for RpcConnection {
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> SdkResult<u64> {
        let lamports = self
            .rpc
            .get_minimum_balance_for_rent_exemption(data_len)
            .await
            .map_err(|e| TransactionError::Build(format!("rent query failed: {}", e)))?;
        debug!(data_len, lamports, "Fetched rent exemption minimum");
        Ok(lamports)
    }

    async fn latest_blockhash(&self) -> SdkResult<Hash> {
        self.rpc
            .get_latest_blockhash()
            .await
            .map_err(|e| TransactionError::Blockhash(e.to_string()))
    }

    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature> {
        let signature = self.rpc.send_and_confirm_transaction(transaction).await?;
        debug!(%signature, "Transaction confirmed");
        Ok(signature)
    }
}
