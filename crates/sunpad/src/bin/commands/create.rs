// Create-token command

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use sunpad::{
    form::{render, TokenForm},
    KeypairWallet, LaunchpadConfig, TokenLaunchpad, Wallet,
};

use super::utils::{info, status, success, warn};

#[derive(Args)]
pub struct CreateCmd {
    /// Token name
    #[arg(long, default_value = "")]
    name: String,

    /// Token symbol
    #[arg(long, default_value = "")]
    symbol: String,

    /// Token description
    #[arg(long, default_value = "")]
    description: String,

    /// Image URL
    #[arg(long, default_value = "")]
    image: String,

    /// Initial supply in whole tokens
    #[arg(long, default_value = "")]
    supply: String,
}

pub async fn execute(cmd: CreateCmd, config: &LaunchpadConfig, wallet_path: &str) -> Result<()> {
    let wallet = Arc::new(KeypairWallet::from_file(wallet_path)?);
    if let Some(pubkey) = wallet.pubkey() {
        info(&format!("Wallet: {}", pubkey));
    }
    info(&format!("RPC: {}", config.rpc.url));

    let launchpad = TokenLaunchpad::from_config(config, wallet)?;
    let form = TokenForm {
        name: cmd.name,
        symbol: cmd.symbol,
        description: cmd.description,
        image: cmd.image,
        initial_supply: cmd.supply,
    };

    // Stream progress while the flow runs
    let mut progress = launchpad.subscribe();
    let printer = tokio::spawn(async move {
        while progress.changed().await.is_ok() {
            let state = progress.borrow_and_update().clone();
            if !state.is_terminal() {
                status(&render(&state));
            }
        }
    });

    let outcome = form.submit(&launchpad).await;
    printer.abort();
    status(&render(&launchpad.state()));

    match outcome {
        Ok(token) => {
            success(&format!("Mint: {}", token.mint));
            success(&format!("Token account: {}", token.associated_account));
            info(&format!("Metadata URI: {}", token.uri));
            info(&format!(
                "Minted {} base units ({} decimals)",
                token.raw_amount, token.decimals
            ));
            info(&format!(
                "Mint tx: {}",
                config.explorer_link("tx", &token.mint_signature.to_string())
            ));
            info(&format!(
                "Supply tx: {}",
                config.explorer_link("tx", &token.supply_signature.to_string())
            ));
            info(&format!(
                "Explorer: {}",
                config.explorer_link("address", &token.mint.to_string())
            ));
            Ok(())
        }
        Err(failure) => {
            if let Some(mint) = failure.mint_created() {
                warn(&format!(
                    "Mint already exists: {}",
                    config.explorer_link("address", &mint.to_string())
                ));
            }
            Err(failure.into())
        }
    }
}
