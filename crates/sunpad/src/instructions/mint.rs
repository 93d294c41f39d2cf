use spl_token_2022::{
    extension::{metadata_pointer, ExtensionType},
    state::Mint,
};
use tracing::debug;

use crate::{
    client::Connection,
    core::{token_program_id, MetadataRecord, SdkResult, TransactionError, DEFAULT_DECIMALS},
    prelude::*,
};

/// Account layout of a mint carrying a metadata pointer and inline metadata
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MintAccountSize {
    /// Bytes allocated by `create_account` (mint + metadata pointer extension)
    pub mint_len: usize,
    /// TLV bytes the metadata initialize instruction reallocates into the account
    pub metadata_len: usize,
}

impl MintAccountSize {
    pub fn for_metadata(metadata: &MetadataRecord) -> SdkResult<Self> {
        let mint_len =
            ExtensionType::try_calculate_account_len::<Mint>(&[ExtensionType::MetadataPointer])?;
        let metadata_len = metadata.to_token_metadata().tlv_size_of()?;
        Ok(Self {
            mint_len,
            metadata_len,
        })
    }

    /// Size the rent-exempt balance has to cover once metadata is written
    pub fn rent_len(&self) -> usize {
        self.mint_len + self.metadata_len
    }
}

/// Unsigned transaction creating the mint, ready for a blockhash
#[derive(Clone, Debug)]
pub struct MintTransaction {
    pub transaction: Transaction,
    pub mint: Pubkey,
    pub size: MintAccountSize,
    pub lamports: u64,
}

/// Builds the transaction that creates a Token-2022 mint with on-chain metadata
pub struct MintTransactionBuilder {
    token_program_id: Pubkey,
    decimals: u8,
}

impl Default for MintTransactionBuilder {
    fn default() -> Self {
        Self::new(token_program_id(), DEFAULT_DECIMALS)
    }
}

impl MintTransactionBuilder {
    pub fn new(token_program_id: Pubkey, decimals: u8) -> Self {
        Self {
            token_program_id,
            decimals,
        }
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Instructions in submission order: create account, metadata pointer,
    /// mint initialization, metadata write.
    ///
    /// The payer becomes mint authority, metadata pointer authority and
    /// metadata update authority. The pointer targets the mint itself.
    pub fn instructions(
        &self,
        payer: Pubkey,
        metadata: &MetadataRecord,
        size: MintAccountSize,
        lamports: u64,
    ) -> SdkResult<Vec<Instruction>> {
        let mint = metadata.mint;
        let program_id = &self.token_program_id;

        let create_account = solana_sdk::system_instruction::create_account(
            &payer,
            &mint,
            lamports,
            size.mint_len as u64,
            program_id,
        );

        let init_pointer =
            metadata_pointer::instruction::initialize(program_id, &mint, Some(payer), Some(mint))?;

        let init_mint = spl_token_2022::instruction::initialize_mint(
            program_id,
            &mint,
            &payer,
            None,
            self.decimals,
        )?;

        let init_metadata = spl_token_metadata_interface::instruction::initialize(
            program_id,
            &mint,
            &payer,
            &mint,
            &payer,
            metadata.name.clone(),
            metadata.symbol.clone(),
            metadata.uri.clone(),
        );

        Ok(vec![create_account, init_pointer, init_mint, init_metadata])
    }

    /// Size the account, query its rent-exempt balance and assemble the transaction.
    ///
    /// The returned transaction has no blockhash and no signatures; the mint
    /// keypair and the payer both have to sign it before submission.
    pub async fn build(
        &self,
        connection: &dyn Connection,
        payer: Pubkey,
        mint: &Keypair,
        metadata: &MetadataRecord,
    ) -> SdkResult<MintTransaction> {
        if mint.pubkey() != metadata.mint {
            return Err(TransactionError::Build(format!(
                "metadata targets {} but the new mint is {}",
                metadata.mint,
                mint.pubkey()
            )));
        }

        let size = MintAccountSize::for_metadata(metadata)?;
        let lamports = connection
            .minimum_balance_for_rent_exemption(size.rent_len())
            .await?;
        debug!(
            mint_len = size.mint_len,
            metadata_len = size.metadata_len,
            lamports,
            "Sized mint account"
        );

        let instructions = self.instructions(payer, metadata, size, lamports)?;
        let transaction = Transaction::new_with_payer(&instructions, Some(&payer));

        Ok(MintTransaction {
            transaction,
            mint: metadata.mint,
            size,
            lamports,
        })
    }
}
