use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, Mint, TokenAccount, Transfer};
use crate::constants::{SEED_MARKET, SEED_PLATFORM_CONFIG, SEED_STAKE, SEED_VAULT};
use crate::state::{PlatformConfig, Market, Stake};
use crate::events::StakePlaced;
use crate::errors::PoolError;

#[derive(Accounts)]
#[instruction(market_id: u64)]
pub struct PlaceStake<'info> {
    #[account(
        mut,
        seeds = [SEED_MARKET, market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Box<Account<'info, Market>>,

    #[account(
        mut,
        seeds = [SEED_VAULT, market.key().as_ref()],
        bump,
        token::mint = collateral_mint,
        constraint = vault.key() == market.vault @ PoolError::InvalidMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        seeds = [SEED_STAKE, market.key().as_ref(), bettor.key().as_ref()],
        bump,
        payer = bettor,
        space = Stake::LEN
    )]
    pub stake: Account<'info, Stake>,

    #[account(
        mut,
        token::mint = collateral_mint,
        token::authority = bettor,
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    #[account(
        seeds = [SEED_PLATFORM_CONFIG],
        bump = platform_config.bump,
        has_one = collateral_mint,
    )]
    pub platform_config: Account<'info, PlatformConfig>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_place_stake(
    ctx: Context<PlaceStake>,
    market_id: u64,
    outcome: u8,
    amount: u64,
) -> Result<()> {
    let market = &mut ctx.accounts.market;
    let stake = &mut ctx.accounts.stake;
    let clock = Clock::get()?;

    let receipt = market.record_stake(stake, outcome, amount, clock.unix_timestamp)?;

    stake.market = market.key();
    stake.bettor = ctx.accounts.bettor.key();
    stake.bump = ctx.bumps.stake;

    // Bettor -> Vault
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.bettor_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.bettor.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(StakePlaced {
        market_id,
        bettor: ctx.accounts.bettor.key(),
        outcome: receipt.outcome,
        amount,
        outcome_total: receipt.outcome_total,
        odds: receipt.odds_before,
        slot: clock.slot,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
