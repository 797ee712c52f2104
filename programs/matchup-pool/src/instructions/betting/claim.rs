use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::{SEED_MARKET, SEED_STAKE, SEED_VAULT};
use crate::state::{Market, Stake};
use crate::events::Claimed;
use crate::errors::PoolError;

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(
        seeds = [SEED_MARKET, market.market_id.to_le_bytes().as_ref()],
        bump = market.bump,
    )]
    pub market: Account<'info, Market>,

    #[account(
        mut,
        seeds = [SEED_VAULT, market.key().as_ref()],
        bump,
        constraint = vault.key() == market.vault @ PoolError::InvalidMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// None for a bettor that never staked in this market.
    #[account(
        mut,
        seeds = [SEED_STAKE, market.key().as_ref(), bettor.key().as_ref()],
        bump = stake.bump,
    )]
    pub stake: Option<Account<'info, Stake>>,

    #[account(
        mut,
        constraint = bettor_token_account.mint == vault.mint @ PoolError::InvalidMint,
    )]
    pub bettor_token_account: Account<'info, TokenAccount>,

    pub bettor: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

pub fn process_claim(ctx: Context<Claim>) -> Result<()> {
    let market = &ctx.accounts.market;
    let stake = ctx.accounts.stake.as_mut().ok_or(PoolError::NoStake)?;

    // Stake is consumed before any funds leave the vault.
    let payout = market.consume_claim(stake)?;

    if payout > 0 {
        let market_id_bytes = market.market_id.to_le_bytes();
        let seeds = &[
            SEED_MARKET,
            market_id_bytes.as_ref(),
            &[market.bump],
        ];
        let signer = &[&seeds[..]];

        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.vault.to_account_info(),
                    to: ctx.accounts.bettor_token_account.to_account_info(),
                    authority: market.to_account_info(),
                },
                signer,
            ),
            payout,
        )?;
    }

    emit!(Claimed {
        market_id: market.market_id,
        bettor: ctx.accounts.bettor.key(),
        payout,
    });

    Ok(())
}
