use async_trait::async_trait;
use solana_sdk::signature::read_keypair_file;
use tracing::debug;

use crate::{
    core::{SdkResult, TransactionError},
    prelude::*,
};

use super::{Connection, Wallet};

/// Wallet backed by a local keypair file
pub struct KeypairWallet {
    keypair: Keypair,
}

impl KeypairWallet {
    pub fn new(keypair: Keypair) -> Self {
        Self { keypair }
    }

    /// Load a keypair from a file path, expanding ~ if needed
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let expanded_path = expand_home(path, std::env::var("HOME").ok().as_deref())?;
        let keypair = read_keypair_file(&expanded_path).map_err(|e| {
            anyhow::anyhow!("Failed to load keypair from {}: {}", expanded_path, e)
        })?;
        Ok(Self::new(keypair))
    }
}

fn expand_home(path: &str, home: Option<&str>) -> anyhow::Result<String> {
    if path.starts_with('~') {
        let home = home.ok_or_else(|| anyhow::anyhow!("HOME environment variable not set"))?;
        Ok(path.replacen('~', home, 1))
    } else {
        Ok(path.to_string())
    }
}

#[async_trait]
impl Wallet for KeypairWallet {
    fn pubkey(&self) -> Option<Pubkey> {
        Some(self.keypair.pubkey())
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        connection: &dyn Connection,
    ) -> SdkResult<Signature> {
        let blockhash = transaction.message.recent_blockhash;
        transaction.try_partial_sign(&[&self.keypair], blockhash)?;

        if !transaction.is_signed() {
            return Err(TransactionError::Signing(
                "transaction is missing required signatures".to_string(),
            ));
        }

        debug!(
            signers = transaction.signatures.len(),
            "Wallet signed transaction"
        );
        connection.send_transaction(&transaction).await
    }
}
