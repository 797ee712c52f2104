use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;

#[cfg(test)]
mod test_utils;

use instructions::*;

declare_id!("FXbBvhCwEqtxVqAZNWrTNUMdEufR2LmWPRWAwcKFKivH");

#[program]
pub mod matchup_pool {
    use super::*;

    pub fn init_platform(ctx: Context<InitPlatform>) -> Result<()> {
        instructions::admin::init_platform::process_init_platform(ctx)
    }

    pub fn create_market(ctx: Context<CreateMarket>, market_id: u64, params: CreateMarketParams) -> Result<()> {
        instructions::admin::create_market::process_create_market(ctx, market_id, params)
    }

    /// `outcome`: 0 = team A, 1 = draw, 2 = team B.
    pub fn place_stake(ctx: Context<PlaceStake>, market_id: u64, outcome: u8, amount: u64) -> Result<()> {
        instructions::betting::place_stake::process_place_stake(ctx, market_id, outcome, amount)
    }

    pub fn settle(ctx: Context<Settle>, winning_outcome: u8) -> Result<()> {
        instructions::settlement::settle::process_settle(ctx, winning_outcome)
    }

    pub fn claim(ctx: Context<Claim>) -> Result<()> {
        instructions::betting::claim::process_claim(ctx)
    }

    pub fn get_odds(ctx: Context<ReadMarket>) -> Result<OddsQuote> {
        instructions::views::get_odds::process_get_odds(ctx)
    }

    pub fn get_state(ctx: Context<ReadMarket>) -> Result<MarketSnapshot> {
        instructions::views::get_state::process_get_state(ctx)
    }

    pub fn get_claimable(ctx: Context<GetClaimable>, bettor: Pubkey) -> Result<u64> {
        instructions::views::get_claimable::process_get_claimable(ctx, bettor)
    }
}
