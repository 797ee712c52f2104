pub const SEED_PLATFORM_CONFIG: &[u8] = b"platform_config";
pub const SEED_MARKET: &[u8] = b"market";
pub const SEED_STAKE: &[u8] = b"stake";
pub const SEED_VAULT: &[u8] = b"vault";

/// Operator fee taken from the total pool at settlement (2%).
pub const FEE_BPS: u128 = 200;
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Fixed-point scale for odds: 1.0 == ODDS_SCALE.
pub const ODDS_SCALE: u128 = 1_000_000_000_000_000_000;
pub const ODDS_DISPLAY_DECIMALS: u32 = 2;
