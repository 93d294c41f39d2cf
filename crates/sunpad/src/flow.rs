//! Create-token flow
//!
//! One submission walks `Idle → Validating → UploadingMetadata →
//! SubmittingMintTx → SubmittingSupplyTx → Success`. Any step can end in
//! `Failed`. A failure after the mint transaction landed ends in
//! `SupplyFailed` instead, because the mint exists on-chain and only the
//! initial supply is missing. The two transactions are not atomic and nothing
//! is rolled back.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::{
    client::{Connection, RpcConnection, Wallet},
    config::LaunchpadConfig,
    core::{
        gateway_uri, token_program_id, CreatedToken, FlowFailure, MetadataRecord, SdkResult,
        TokenRequest, TransactionError, UploadError, ValidationError,
    },
    instructions::{MintTransactionBuilder, SupplyTransactionBuilder},
    metadata::{MetadataUploader, PinataUploader},
    prelude::*,
};

/// Observable progress of the current (or last) submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    Validating,
    UploadingMetadata,
    SubmittingMintTx {
        mint: Pubkey,
    },
    SubmittingSupplyTx {
        mint: Pubkey,
        mint_signature: Signature,
    },
    Success(CreatedToken),
    /// Mint created, initial supply not minted
    SupplyFailed {
        mint: Pubkey,
        mint_signature: Signature,
        error: TransactionError,
    },
    Failed(FlowFailure),
}

impl FlowState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FlowState::Success(_) | FlowState::SupplyFailed { .. } | FlowState::Failed(_)
        )
    }

    /// Whether a submission is in flight
    pub fn is_busy(&self) -> bool {
        !self.is_terminal() && *self != FlowState::Idle
    }

    fn from_outcome(outcome: &Result<CreatedToken, FlowFailure>) -> Self {
        match outcome {
            Ok(token) => FlowState::Success(token.clone()),
            Err(FlowFailure::SupplyNotMinted {
                mint,
                mint_signature,
                source,
            }) => FlowState::SupplyFailed {
                mint: *mint,
                mint_signature: *mint_signature,
                error: source.clone(),
            },
            Err(failure) => FlowState::Failed(failure.clone()),
        }
    }
}

/// Clears the busy flag when the submission ends, however it ends
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Sequences metadata upload, mint creation and supply minting for a wallet
pub struct TokenLaunchpad {
    connection: Arc<dyn Connection>,
    wallet: Arc<dyn Wallet>,
    uploader: Arc<dyn MetadataUploader>,
    gateway_base: String,
    mint_builder: MintTransactionBuilder,
    supply_builder: SupplyTransactionBuilder,
    busy: AtomicBool,
    state: watch::Sender<FlowState>,
}

impl TokenLaunchpad {
    pub fn new(
        connection: Arc<dyn Connection>,
        wallet: Arc<dyn Wallet>,
        uploader: Arc<dyn MetadataUploader>,
        gateway_base: impl Into<String>,
    ) -> Self {
        let (state, _) = watch::channel(FlowState::Idle);
        Self {
            connection,
            wallet,
            uploader,
            gateway_base: gateway_base.into(),
            mint_builder: MintTransactionBuilder::default(),
            supply_builder: SupplyTransactionBuilder::default(),
            busy: AtomicBool::new(false),
            state,
        }
    }

    /// Wire an RPC connection and Pinata uploader from configuration
    pub fn from_config(
        config: &LaunchpadConfig,
        wallet: Arc<dyn Wallet>,
    ) -> Result<Self, UploadError> {
        let commitment = config.commitment().unwrap_or_default();
        let connection = Arc::new(RpcConnection::new(
            &config.rpc.url,
            commitment,
            config.rpc_timeout(),
        ));
        let uploader = Arc::new(PinataUploader::new(
            &config.pinning.endpoint,
            config.pinning.jwt.clone(),
            config.pinning_timeout(),
        )?);

        Ok(Self::new(connection, wallet, uploader, &config.pinning.gateway_base)
            .with_decimals(config.token.decimals))
    }

    /// Decimal precision of minted tokens
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.mint_builder = MintTransactionBuilder::new(token_program_id(), decimals);
        self.supply_builder = SupplyTransactionBuilder::new(token_program_id(), decimals);
        self
    }

    pub fn decimals(&self) -> u8 {
        self.mint_builder.decimals()
    }

    pub fn subscribe(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> FlowState {
        self.state.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Return to `Idle` after a terminal state has been shown. No-op while busy.
    pub fn reset(&self) {
        if !self.is_busy() {
            self.state.send_replace(FlowState::Idle);
        }
    }

    /// Record input rejected before it could become a `TokenRequest`
    pub fn reject(&self, error: ValidationError) -> FlowFailure {
        let failure = FlowFailure::Validation(error);
        if let Some(_guard) = self.try_begin() {
            self.transition(FlowState::Validating);
            warn!(%failure, "Token request rejected");
            self.transition(FlowState::Failed(failure.clone()));
        }
        failure
    }

    /// Run one create-token attempt to a terminal state.
    ///
    /// Each call generates a fresh mint keypair; retrying after a failure
    /// creates a new mint and abandons any previous one.
    pub async fn create_token(&self, request: &TokenRequest) -> Result<CreatedToken, FlowFailure> {
        let Some(_guard) = self.try_begin() else {
            warn!("Submission rejected, another one is in flight");
            return Err(ValidationError::Busy.into());
        };

        self.transition(FlowState::Validating);
        let outcome = self.run(request).await;

        match &outcome {
            Ok(token) => info!(mint = %token.mint, "Token created"),
            Err(FlowFailure::SupplyNotMinted { mint, source, .. }) => {
                error!(%mint, %source, "Mint created but initial supply was not minted")
            }
            Err(failure) => warn!(%failure, "Token creation failed"),
        }
        self.transition(FlowState::from_outcome(&outcome));
        outcome
    }

    async fn run(&self, request: &TokenRequest) -> Result<CreatedToken, FlowFailure> {
        let validated = request.validate(self.wallet.pubkey(), self.decimals())?;

        self.transition(FlowState::UploadingMetadata);
        let cid = self.uploader.upload(&request.metadata_json()).await?;
        let cid = cid.trim();
        if cid.is_empty() {
            return Err(UploadError::MissingContentId.into());
        }
        let uri = gateway_uri(&self.gateway_base, cid);
        info!(%cid, %uri, "Metadata pinned");

        let mint_keypair = Keypair::new();
        let mint = mint_keypair.pubkey();
        let record = MetadataRecord::new(mint, request, uri.clone());

        self.transition(FlowState::SubmittingMintTx { mint });
        let mint_signature = self
            .submit_mint(validated.owner, &mint_keypair, &record)
            .await
            .map_err(|source| FlowFailure::MintTransaction { mint, source })?;

        self.transition(FlowState::SubmittingSupplyTx {
            mint,
            mint_signature,
        });
        let (associated_account, raw_amount, supply_signature) = self
            .submit_supply(mint, validated.owner, request.initial_supply)
            .await
            .map_err(|source| FlowFailure::SupplyNotMinted {
                mint,
                mint_signature,
                source,
            })?;

        Ok(CreatedToken {
            mint,
            associated_account,
            uri,
            decimals: self.decimals(),
            raw_amount,
            mint_signature,
            supply_signature,
        })
    }

    async fn submit_mint(
        &self,
        owner: Pubkey,
        mint_keypair: &Keypair,
        record: &MetadataRecord,
    ) -> SdkResult<Signature> {
        let built = self
            .mint_builder
            .build(self.connection.as_ref(), owner, mint_keypair, record)
            .await?;

        let mut transaction = built.transaction;
        let blockhash = self.connection.latest_blockhash().await?;
        transaction.message.recent_blockhash = blockhash;
        transaction.try_partial_sign(&[mint_keypair], blockhash)?;

        self.wallet
            .send_transaction(transaction, self.connection.as_ref())
            .await
    }

    async fn submit_supply(
        &self,
        mint: Pubkey,
        owner: Pubkey,
        initial_supply: u64,
    ) -> SdkResult<(Pubkey, u64, Signature)> {
        let built = self.supply_builder.build(mint, owner, initial_supply)?;

        let mut transaction = built.transaction;
        transaction.message.recent_blockhash = self.connection.latest_blockhash().await?;

        let signature = self
            .wallet
            .send_transaction(transaction, self.connection.as_ref())
            .await?;
        Ok((built.associated_account, built.raw_amount, signature))
    }

    fn try_begin(&self) -> Option<BusyGuard<'_>> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(&self.busy))
    }

    fn transition(&self, next: FlowState) {
        info!(state = ?next, "Flow state");
        self.state.send_replace(next);
    }
}
