//! In-memory collaborators for driving the create-token flow

#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use solana_sdk::{
    hash::Hash,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};
use sunpad::{
    core::{SdkResult, TokenMetadataJson, TokenRequest, TransactionError, UploadError},
    Connection, MetadataUploader, TokenLaunchpad, Wallet,
};
use tokio::sync::Notify;

pub const GATEWAY: &str = "https://gateway.pinata.cloud";
pub const RENT_LAMPORTS: u64 = 4_000_000;

pub fn sun_token() -> TokenRequest {
    TokenRequest {
        name: "SunToken".to_string(),
        symbol: "SUN".to_string(),
        image: "https://x/y.png".to_string(),
        description: "demo".to_string(),
        initial_supply: 1000,
    }
}

/// Records rent queries and submitted transactions
#[derive(Default)]
pub struct MockConnection {
    pub rent_queries: Mutex<Vec<usize>>,
    pub submitted: Mutex<Vec<Transaction>>,
}

impl MockConnection {
    pub fn submitted(&self) -> Vec<Transaction> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn rent_queries(&self) -> Vec<usize> {
        self.rent_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connection for MockConnection {
    async fn minimum_balance_for_rent_exemption(&self, data_len: usize) -> SdkResult<u64> {
        self.rent_queries.lock().unwrap().push(data_len);
        Ok(RENT_LAMPORTS)
    }

    async fn latest_blockhash(&self) -> SdkResult<Hash> {
        Ok(Hash::new_unique())
    }

    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature> {
        transaction
            .verify()
            .map_err(|e| TransactionError::Submission(e.to_string()))?;
        self.submitted.lock().unwrap().push(transaction.clone());
        Ok(transaction.signatures[0])
    }
}

/// Keypair wallet that can be disconnected or told to reject the nth request
pub struct MockWallet {
    keypair: Option<Keypair>,
    reject_call: Option<usize>,
    pub calls: AtomicUsize,
}

impl MockWallet {
    pub fn connected() -> Self {
        Self {
            keypair: Some(Keypair::new()),
            reject_call: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn disconnected() -> Self {
        Self {
            keypair: None,
            reject_call: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Reject the `call`-th signing request (1-based)
    pub fn rejecting(call: usize) -> Self {
        Self {
            reject_call: Some(call),
            ..Self::connected()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Wallet for MockWallet {
    fn pubkey(&self) -> Option<Pubkey> {
        self.keypair.as_ref().map(|keypair| keypair.pubkey())
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        connection: &dyn Connection,
    ) -> SdkResult<Signature> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let keypair = self
            .keypair
            .as_ref()
            .ok_or(TransactionError::WalletNotConnected)?;
        if self.reject_call == Some(call) {
            return Err(TransactionError::Signing("User rejected the request".to_string()));
        }

        let blockhash = transaction.message.recent_blockhash;
        transaction.try_partial_sign(&[keypair], blockhash)?;
        connection.send_transaction(&transaction).await
    }
}

/// Uploader returning a scripted result, optionally held until released
pub struct MockUploader {
    result: Result<String, UploadError>,
    gate: Option<Arc<Notify>>,
    pub calls: AtomicUsize,
}

impl MockUploader {
    pub fn returning(cid: &str) -> Self {
        Self {
            result: Ok(cid.to_string()),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: UploadError) -> Self {
        Self {
            result: Err(error),
            gate: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn gated(cid: &str, gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::returning(cid)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MetadataUploader for MockUploader {
    async fn upload(&self, _metadata: &TokenMetadataJson) -> Result<String, UploadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.result.clone()
    }
}

pub struct Harness {
    pub connection: Arc<MockConnection>,
    pub wallet: Arc<MockWallet>,
    pub uploader: Arc<MockUploader>,
    pub launchpad: TokenLaunchpad,
}

impl Harness {
    pub fn new(wallet: MockWallet, uploader: MockUploader) -> Self {
        let connection = Arc::new(MockConnection::default());
        let wallet = Arc::new(wallet);
        let uploader = Arc::new(uploader);
        let launchpad = TokenLaunchpad::new(
            connection.clone(),
            wallet.clone(),
            uploader.clone(),
            GATEWAY,
        );
        Self {
            connection,
            wallet,
            uploader,
            launchpad,
        }
    }

    pub fn owner(&self) -> Pubkey {
        self.wallet.pubkey().expect("wallet connected")
    }
}
