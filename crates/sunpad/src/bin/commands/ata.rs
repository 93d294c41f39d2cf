// Associated token account derivation

use anyhow::Result;
use clap::Args;
use sunpad::instructions::SupplyTransactionBuilder;

use super::utils::{info, parse_pubkey};

#[derive(Args)]
pub struct DeriveAtaCmd {
    /// Token mint address
    #[arg(long)]
    mint: String,

    /// Owner wallet address
    #[arg(long)]
    owner: String,
}

pub fn execute(cmd: DeriveAtaCmd) -> Result<()> {
    let mint = parse_pubkey(&cmd.mint)?;
    let owner = parse_pubkey(&cmd.owner)?;

    let ata = SupplyTransactionBuilder::default().associated_account(&mint, &owner);
    info(&format!("Associated token account: {}", ata));

    Ok(())
}
