use anchor_lang::prelude::*;

#[account]
pub struct PlatformConfig {
    pub admin: Pubkey,              // 32
    pub collateral_mint: Pubkey,    // 32 (SPL mint every market stakes in)
    pub total_markets: u64,         // 8
    pub bump: u8,                   // 1
}

impl PlatformConfig {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;
}
