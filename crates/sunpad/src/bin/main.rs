// CLI tool for SunPad
//
// Creates SPL Token-2022 mints with on-chain metadata and mints an initial
// supply into the wallet's associated token account.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sunpad::LaunchpadConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sunpad")]
#[command(about = "SunPad Token-2022 launchpad", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "sunpad.toml")]
    config: String,

    /// RPC URL to connect to (overrides config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Path to wallet keypair file
    #[arg(long, default_value = "~/.config/solana/id.json")]
    wallet: String,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a token mint with metadata and mint the initial supply
    Create(commands::create::CreateCmd),

    /// Pin token metadata to IPFS without creating a mint
    UploadMetadata(commands::metadata::UploadMetadataCmd),

    /// Print the Token-2022 associated token account for a mint and owner
    DeriveAta(commands::ata::DeriveAtaCmd),

    /// Print the effective configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = LaunchpadConfig::load(&cli.config)?;
    if let Some(rpc_url) = cli.rpc_url {
        config.rpc.url = rpc_url;
    }
    if let Some(log_level) = cli.log_level {
        config.logging.level = log_level;
    }
    config.check()?;

    init_logging(&config);

    match cli.command {
        Commands::Create(cmd) => commands::create::execute(cmd, &config, &cli.wallet).await,
        Commands::UploadMetadata(cmd) => commands::metadata::execute(cmd, &config).await,
        Commands::DeriveAta(cmd) => commands::ata::execute(cmd),
        Commands::Config => {
            println!("{}", toml::to_string_pretty(&config.redacted())?);
            Ok(())
        }
    }
}

fn init_logging(config: &LaunchpadConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("sunpad={}", config.logging.level).into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
