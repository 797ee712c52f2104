use anchor_lang::prelude::*;
use crate::state::market::Outcome;

#[event]
pub struct PlatformInitialized {
    pub admin: Pubkey,
    pub collateral_mint: Pubkey,
}

#[event]
pub struct MarketCreated {
    pub market_id: u64,
    pub authority: Pubkey,
    pub betting_end: i64,
    pub virtual_pool_a: u64,
    pub virtual_pool_draw: u64,
    pub virtual_pool_b: u64,
}

/// One record per accepted stake. Together with the signature of the
/// transaction that logged it, this is enough to rebuild bet history
/// without replaying market state.
#[event]
pub struct StakePlaced {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub outcome: Outcome,
    pub amount: u64,
    pub outcome_total: u64,
    /// Fixed-point odds for `outcome` quoted just before this stake landed.
    pub odds: u128,
    pub slot: u64,
    pub timestamp: i64,
}

#[event]
pub struct MarketSettled {
    pub market_id: u64,
    pub winning_outcome: Outcome,
    pub fee: u64,
    pub net_pool: u64,
}

#[event]
pub struct Claimed {
    pub market_id: u64,
    pub bettor: Pubkey,
    pub payout: u64,
}
