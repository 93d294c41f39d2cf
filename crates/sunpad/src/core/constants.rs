use crate::prelude::*;

/// Decimal precision used for newly created mints unless configured otherwise
pub const DEFAULT_DECIMALS: u8 = 9;

/// Largest decimal precision whose scale factor still fits in a u64
pub const MAX_DECIMALS: u8 = 19;

/// Default cluster endpoint
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

/// Pinata JSON pinning endpoint
pub const DEFAULT_PINNING_ENDPOINT: &str = "https://api.pinata.cloud/pinning/pinJSONToIPFS";

/// Gateway used to build metadata URIs from content identifiers
pub const DEFAULT_GATEWAY_BASE: &str = "https://gateway.pinata.cloud";

/// Environment variable holding the pinning service JWT
pub const PINATA_JWT_ENV: &str = "PINATA_JWT";

/// Default explorer for printed links
pub const DEFAULT_EXPLORER_URL: &str = "https://explorer.solana.com";

/// Token-2022 program id
pub fn token_program_id() -> Pubkey {
    spl_token_2022::id()
}

/// Scale factor for a decimal precision, `None` when it overflows u64
pub fn decimal_scale(decimals: u8) -> Option<u64> {
    10u64.checked_pow(decimals as u32)
}

/// Build the gateway URI for a content identifier
pub fn gateway_uri(gateway_base: &str, cid: &str) -> String {
    format!("{}/ipfs/{}", gateway_base.trim_end_matches('/'), cid)
}
