use anchor_lang::prelude::*;
use anchor_spl::token::{Token, Mint, TokenAccount};
use crate::constants::{SEED_MARKET, SEED_PLATFORM_CONFIG, SEED_VAULT};
use crate::state::{PlatformConfig, Market};
use crate::events::MarketCreated;
use crate::errors::PoolError;

#[derive(Accounts)]
#[instruction(market_id: u64)] // market_id is passed as instruction arg to derive seeds
pub struct CreateMarket<'info> {
    #[account(
        init,
        seeds = [SEED_MARKET, market_id.to_le_bytes().as_ref()],
        bump,
        payer = authority,
        space = Market::LEN
    )]
    pub market: Account<'info, Market>,

    #[account(
        init,
        seeds = [SEED_VAULT, market.key().as_ref()],
        bump,
        payer = authority,
        token::mint = collateral_mint,
        token::authority = market,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [SEED_PLATFORM_CONFIG],
        bump = platform_config.bump,
        has_one = collateral_mint,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    /// Becomes the market's settlement authority and fee recipient.
    #[account(mut)]
    pub authority: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateMarketParams {
    pub betting_end: i64,
    pub virtual_pool_a: u64,
    pub virtual_pool_draw: u64,
    pub virtual_pool_b: u64,
}

pub fn process_create_market(
    ctx: Context<CreateMarket>,
    market_id: u64,
    params: CreateMarketParams,
) -> Result<()> {
    let platform = &mut ctx.accounts.platform_config;
    let market = &mut ctx.accounts.market;
    let clock = Clock::get()?;

    // Ids are sequential so clients can derive the next market PDA from the counter.
    require!(market_id == platform.total_markets, PoolError::MarketIdMismatch);

    market.initialize(
        market_id,
        ctx.accounts.authority.key(),
        ctx.accounts.vault.key(),
        params.betting_end,
        [params.virtual_pool_a, params.virtual_pool_draw, params.virtual_pool_b],
        clock.unix_timestamp,
        ctx.bumps.market,
    )?;

    platform.total_markets = platform.total_markets.checked_add(1).ok_or(PoolError::MathOverflow)?;

    msg!("Market {} open until {}", market_id, market.betting_end);

    emit!(MarketCreated {
        market_id,
        authority: market.authority,
        betting_end: market.betting_end,
        virtual_pool_a: market.virtual_pool_a,
        virtual_pool_draw: market.virtual_pool_draw,
        virtual_pool_b: market.virtual_pool_b,
    });

    Ok(())
}
