use anchor_lang::prelude::*;
use crate::constants::{SEED_MARKET, SEED_STAKE};
use crate::state::{Market, Stake};

#[derive(Accounts)]
#[instruction(bettor: Pubkey)]
pub struct GetClaimable<'info> {
    #[account(
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        seeds = [SEED_STAKE, market.key().as_ref(), bettor.as_ref()],
        bump = stake.bump,
    )]
    pub stake: Option<Account<'info, Stake>>,
}

/// What `claim` would pay `bettor` right now; 0 if it would be rejected.
pub fn process_get_claimable(ctx: Context<GetClaimable>, _bettor: Pubkey) -> Result<u64> {
    let stake = ctx.accounts.stake.as_deref();
    Ok(ctx.accounts.market.preview_claim(stake))
}
