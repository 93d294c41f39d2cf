//! Launchpad configuration
//!
//! Loaded from a TOML file when present, otherwise defaults targeting devnet.
//! Secrets are read from the environment so the file can be committed.

use std::{path::Path, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use solana_sdk::commitment_config::{CommitmentConfig, CommitmentLevel};
use validator::Validate;

use crate::core::{
    ConfigError, DEFAULT_DECIMALS, DEFAULT_EXPLORER_URL, DEFAULT_GATEWAY_BASE,
    DEFAULT_PINNING_ENDPOINT, DEFAULT_RPC_URL, MAX_DECIMALS, PINATA_JWT_ENV,
};

/// Environment variable overriding `rpc.url`
pub const RPC_URL_ENV: &str = "SUNPAD_RPC_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LaunchpadConfig {
    #[validate]
    pub rpc: RpcConfig,
    #[validate]
    pub pinning: PinningConfig,
    #[validate]
    pub token: TokenConfig,
    pub logging: LoggingConfig,
    #[validate]
    pub explorer: ExplorerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RpcConfig {
    #[validate(url)]
    pub url: String,
    pub commitment: String,
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PinningConfig {
    #[validate(url)]
    pub endpoint: String,
    #[validate(url)]
    pub gateway_base: String,
    /// Bearer token; prefer the `PINATA_JWT` environment variable
    pub jwt: Option<String>,
    #[validate(range(min = 1, max = 300))]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TokenConfig {
    #[validate(range(max = 19))]
    pub decimals: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ExplorerConfig {
    #[validate(url)]
    pub base_url: String,
    pub cluster: String,
}

impl Default for RpcConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_string(),
            commitment: "confirmed".to_string(),
            timeout_secs: 60,
        }
    }
}

impl Default for PinningConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_PINNING_ENDPOINT.to_string(),
            gateway_base: DEFAULT_GATEWAY_BASE.to_string(),
            jwt: None,
            timeout_secs: 30,
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_DECIMALS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_EXPLORER_URL.to_string(),
            cluster: "devnet".to_string(),
        }
    }
}

impl LaunchpadConfig {
    /// Load from `path` if it exists, otherwise start from defaults.
    /// Environment overrides are applied in both cases.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let mut config = if Path::new(path).exists() {
            Self::from_toml(&std::fs::read_to_string(path).map_err(|source| {
                ConfigError::Read {
                    path: path.to_string(),
                    source,
                }
            })?)?
        } else {
            Self::default()
        };

        config.apply_overrides(
            std::env::var(PINATA_JWT_ENV).ok(),
            std::env::var(RPC_URL_ENV).ok(),
        );
        config.check()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Apply environment-sourced values over file values
    pub fn apply_overrides(&mut self, jwt: Option<String>, rpc_url: Option<String>) {
        if let Some(jwt) = jwt.filter(|jwt| !jwt.trim().is_empty()) {
            self.pinning.jwt = Some(jwt);
        }
        if let Some(url) = rpc_url.filter(|url| !url.trim().is_empty()) {
            self.rpc.url = url;
        }
    }

    /// Validate field ranges and formats
    pub fn check(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.commitment()?;
        if self.token.decimals > MAX_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "token.decimals must be at most {}",
                MAX_DECIMALS
            )));
        }
        Ok(())
    }

    pub fn commitment(&self) -> Result<CommitmentConfig, ConfigError> {
        let commitment = CommitmentLevel::from_str(&self.rpc.commitment).map_err(|_| {
            ConfigError::Invalid(format!("unknown commitment {}", self.rpc.commitment))
        })?;
        Ok(CommitmentConfig { commitment })
    }

    pub fn rpc_timeout(&self) -> Duration {
        Duration::from_secs(self.rpc.timeout_secs)
    }

    pub fn pinning_timeout(&self) -> Duration {
        Duration::from_secs(self.pinning.timeout_secs)
    }

    /// Explorer link for an address or transaction signature
    pub fn explorer_link(&self, kind: &str, id: &str) -> String {
        let base = self.explorer.base_url.trim_end_matches('/');
        match self.explorer.cluster.as_str() {
            "" | "mainnet-beta" => format!("{}/{}/{}", base, kind, id),
            cluster => format!("{}/{}/{}?cluster={}", base, kind, id, cluster),
        }
    }

    /// Copy safe to print
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        if config.pinning.jwt.is_some() {
            config.pinning.jwt = Some("<redacted>".to_string());
        }
        config
    }
}
