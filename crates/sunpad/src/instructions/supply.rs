use spl_associated_token_account::{
    get_associated_token_address_with_program_id, instruction::create_associated_token_account,
};

use crate::{
    core::{decimal_scale, token_program_id, SdkResult, TransactionError, DEFAULT_DECIMALS},
    prelude::*,
};

/// Unsigned transaction minting the initial supply, ready for a blockhash
#[derive(Clone, Debug)]
pub struct SupplyTransaction {
    pub transaction: Transaction,
    pub associated_account: Pubkey,
    /// Amount in base units passed to `mint_to`
    pub raw_amount: u64,
}

/// Builds the transaction that funds the owner's associated token account
pub struct SupplyTransactionBuilder {
    token_program_id: Pubkey,
    decimals: u8,
}

impl Default for SupplyTransactionBuilder {
    fn default() -> Self {
        Self::new(token_program_id(), DEFAULT_DECIMALS)
    }
}

impl SupplyTransactionBuilder {
    pub fn new(token_program_id: Pubkey, decimals: u8) -> Self {
        Self {
            token_program_id,
            decimals,
        }
    }

    /// Associated token account of `owner` for `mint` under the configured token program
    pub fn associated_account(&self, mint: &Pubkey, owner: &Pubkey) -> Pubkey {
        get_associated_token_address_with_program_id(owner, mint, &self.token_program_id)
    }

    /// Scale a whole-token supply to base units
    pub fn raw_amount(&self, initial_supply: u64) -> SdkResult<u64> {
        if initial_supply == 0 {
            return Err(TransactionError::Build(
                "initial supply must be greater than zero".to_string(),
            ));
        }
        decimal_scale(self.decimals)
            .and_then(|scale| initial_supply.checked_mul(scale))
            .ok_or_else(|| {
                TransactionError::Build(format!(
                    "initial supply {} overflows at {} decimals",
                    initial_supply, self.decimals
                ))
            })
    }

    /// Create the owner's associated account, then mint into it.
    ///
    /// `owner` pays for the associated account and signs as mint authority.
    pub fn build(
        &self,
        mint: Pubkey,
        owner: Pubkey,
        initial_supply: u64,
    ) -> SdkResult<SupplyTransaction> {
        let raw_amount = self.raw_amount(initial_supply)?;
        let associated_account = self.associated_account(&mint, &owner);

        let create_ata =
            create_associated_token_account(&owner, &owner, &mint, &self.token_program_id);
        let mint_to = spl_token_2022::instruction::mint_to(
            &self.token_program_id,
            &mint,
            &associated_account,
            &owner,
            &[],
            raw_amount,
        )?;

        let transaction = Transaction::new_with_payer(&[create_ata, mint_to], Some(&owner));

        Ok(SupplyTransaction {
            transaction,
            associated_account,
            raw_amount,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supply_scaled_by_decimals() {
        let builder = SupplyTransactionBuilder::default();
        assert_eq!(builder.raw_amount(1000).unwrap(), 1_000_000_000_000);
        assert_eq!(builder.raw_amount(1).unwrap(), 1_000_000_000);

        let six = SupplyTransactionBuilder::new(token_program_id(), 6);
        assert_eq!(six.raw_amount(1000).unwrap(), 1_000_000_000);
    }

    #[test]
    fn test_zero_supply_fails() {
        let builder = SupplyTransactionBuilder::default();
        let result = builder.build(Pubkey::new_unique(), Pubkey::new_unique(), 0);
        assert!(matches!(result, Err(TransactionError::Build(_))));
    }

    #[test]
    fn test_associated_account_is_deterministic() {
        let builder = SupplyTransactionBuilder::default();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let first = builder.associated_account(&mint, &owner);
        assert_eq!(first, builder.associated_account(&mint, &owner));
        assert_ne!(first, builder.associated_account(&mint, &Pubkey::new_unique()));

        // The token program is part of the derivation
        let other = SupplyTransactionBuilder::new(Pubkey::new_unique(), DEFAULT_DECIMALS);
        assert_ne!(first, other.associated_account(&mint, &owner));
    }

    #[test]
    fn test_build_creates_account_then_mints() {
        let builder = SupplyTransactionBuilder::default();
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();

        let supply = builder.build(mint, owner, 1000).unwrap();
        let message = &supply.transaction.message;

        assert_eq!(message.instructions.len(), 2);
        assert_eq!(message.account_keys[0], owner);
        assert_eq!(
            message.account_keys[message.instructions[0].program_id_index as usize],
            spl_associated_token_account::id()
        );

        let mint_to = &message.instructions[1];
        assert_eq!(
            message.account_keys[mint_to.program_id_index as usize],
            token_program_id()
        );
        // MintTo: tag 7 followed by the little-endian amount
        assert_eq!(mint_to.data[0], 7);
        assert_eq!(
            u64::from_le_bytes(mint_to.data[1..9].try_into().unwrap()),
            1_000_000_000_000
        );
        assert_eq!(
            message.account_keys[mint_to.accounts[1] as usize],
            supply.associated_account
        );
    }
}
